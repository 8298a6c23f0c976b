use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::core::ExtractorEngine;
use crate::error::RunError;
use crate::extractors::{ApiStrategy, TikTokExtractor};

/// API surface handed to the extractor. Compiled in, not a CLI switch.
const STRATEGY: ApiStrategy = ApiStrategy::Web;

#[derive(Parser)]
#[command(name = "ttgrab")]
#[command(about = "TikTok metadata extractor with machine-readable JSON output")]
#[command(version)]
pub struct Cli {
    /// Video, photo post, or share-link URL
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// One run: validate the URL, extract once, print one JSON line.
    /// Nothing is written to stdout on any failure path.
    pub async fn run(&self) -> Result<(), RunError> {
        let url = match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => return Err(RunError::MissingInput),
        };

        let config = Config::load()?;

        let mut engine = ExtractorEngine::new();
        engine.register_extractor(Box::new(TikTokExtractor::new(config, STRATEGY)));

        info!(%url, "extracting metadata");
        let extraction = engine.extract(url).await?;

        let line = extraction.to_json_line()?;
        println!("{line}");

        Ok(())
    }
}
