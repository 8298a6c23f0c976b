use crate::core::Extraction;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

#[async_trait]
pub trait Extractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn suitable(&self, url: &Url) -> bool;
    async fn extract(&self, url: &Url) -> Result<Extraction>;
}

pub struct ExtractorEngine {
    pub extractors: Vec<Box<dyn Extractor>>,
}

impl ExtractorEngine {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    pub fn register_extractor(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.push(extractor);
    }

    pub async fn extract(&self, url: &str) -> Result<Extraction> {
        let parsed_url = Url::parse(url)?;

        for extractor in &self.extractors {
            if extractor.suitable(&parsed_url) {
                debug!(extractor = extractor.name(), url = %parsed_url, "dispatching");
                return extractor.extract(&parsed_url).await;
            }
        }

        anyhow::bail!("No suitable extractor found for URL: {}", url);
    }
}

impl Default for ExtractorEngine {
    fn default() -> Self {
        Self::new()
    }
}
