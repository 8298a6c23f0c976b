use crate::config::Config;
use crate::core::{Extraction, Extractor};
use crate::extractors::ytdlp::{self, ApiStrategy};
use crate::utils::{extract_username, extract_video_id};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

pub struct TikTokExtractor {
    client: reqwest::Client,
    config: Config,
    strategy: ApiStrategy,
}

impl TikTokExtractor {
    pub fn new(config: Config, strategy: ApiStrategy) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            strategy,
        }
    }

    fn is_share_link(url: &Url) -> bool {
        matches!(url.host_str(), Some("vm.tiktok.com" | "vt.tiktok.com"))
    }

    /// Follow a vm/vt share link to the canonical video URL.
    async fn resolve_share_link(&self, url: &Url) -> Result<Url> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to resolve share link: {}", url))?;

        Ok(response.url().clone())
    }
}

#[async_trait]
impl Extractor for TikTokExtractor {
    fn name(&self) -> &'static str {
        "TikTok"
    }

    fn suitable(&self, url: &Url) -> bool {
        match url.host_str() {
            Some(host) => host == "tiktok.com" || host.ends_with(".tiktok.com"),
            None => false,
        }
    }

    async fn extract(&self, url: &Url) -> Result<Extraction> {
        let resolved = if Self::is_share_link(url) {
            let full = self.resolve_share_link(url).await?;
            debug!(resolved = %full, "resolved share link");
            full
        } else {
            url.clone()
        };

        let username = extract_username(resolved.as_str());
        let video_id = extract_video_id(resolved.as_str());
        debug!(
            username = username.as_deref(),
            video_id = video_id.as_deref(),
            "canonical URL parsed"
        );

        let raw = ytdlp::dump_metadata(&self.config, self.strategy, resolved.as_str()).await?;
        Ok(Extraction::from(raw))
    }
}
