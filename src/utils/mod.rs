use regex::Regex;
use std::sync::LazyLock;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:video|photo)/(\d+)").unwrap());

/// Extract the numeric ID from a canonical TikTok URL.
///
/// Matches both video and photo posts:
/// - `https://www.tiktok.com/@user/video/1234567890123456789`
/// - `https://www.tiktok.com/@user/photo/1234567890123456789`
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(url)
        .map(|captures| captures[1].to_string())
}

/// Extract the username from a TikTok profile or post URL
/// (the segment after `@`, up to the next path separator).
pub fn extract_username(url: &str) -> Option<String> {
    let rest = url.split_once('@')?.1;
    let name = rest.split(['/', '?']).next()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
