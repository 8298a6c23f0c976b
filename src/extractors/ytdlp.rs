//! Wrapper around the yt-dlp binary, which performs the actual network
//! interaction, site parsing, and media URL extraction.

use crate::config::Config;
use anyhow::{Context, Result};
use serde_json::Value;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Which TikTok API surface yt-dlp should talk to. One variant is compiled
/// into the runner; this is not a user-facing switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStrategy {
    /// Mobile app API. Richer payloads, less stable.
    App,
    /// Web API, yt-dlp's default surface.
    Web,
}

impl ApiStrategy {
    /// Value for `--extractor-args`, when the strategy needs one.
    pub fn extractor_args(self) -> Option<&'static str> {
        match self {
            ApiStrategy::App => Some("tiktok:api_hostname=api22-normal-c-useast2a.tiktokv.com"),
            ApiStrategy::Web => None,
        }
    }
}

/// Argument vector for one metadata dump. The URL always comes last.
pub fn build_args(strategy: ApiStrategy, user_agent: &str, url: &str) -> Vec<String> {
    let mut args = vec![
        "--dump-single-json".to_string(),
        "--no-warnings".to_string(),
        "--no-playlist".to_string(),
        "--user-agent".to_string(),
        user_agent.to_string(),
    ];

    if let Some(extractor_args) = strategy.extractor_args() {
        args.push("--extractor-args".to_string());
        args.push(extractor_args.to_string());
    }

    args.push(url.to_string());
    args
}

/// Run yt-dlp against `url` and return the metadata document it prints.
/// The document is passed through as-is; no field is interpreted here.
pub async fn dump_metadata(config: &Config, strategy: ApiStrategy, url: &str) -> Result<Value> {
    let bin = config.resolve_ytdlp()?;
    let args = build_args(strategy, &config.user_agent, url);

    debug!(bin = %bin.display(), "invoking yt-dlp");

    let output = Command::new(&bin)
        .args(&args)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("Failed to run {}", bin.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("yt-dlp exited with {}: {}", output.status, stderr.trim());
    }

    serde_json::from_slice(&output.stdout).context("yt-dlp produced invalid JSON")
}
