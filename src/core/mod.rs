pub mod extraction;
pub mod extractor;

pub use extraction::Extraction;
pub use extractor::{Extractor, ExtractorEngine};
