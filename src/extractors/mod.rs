pub mod tiktok;
pub mod ytdlp;

pub use tiktok::TikTokExtractor;
pub use ytdlp::ApiStrategy;
