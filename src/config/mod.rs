use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name or path of the yt-dlp binary.
    pub ytdlp_bin: String,
    /// User agent for both the redirect resolver and yt-dlp itself.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ytdlp_bin: "yt-dlp".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

impl Config {
    /// Load configuration: TOML file named by `TTGRAB_CONFIG` if set,
    /// otherwise defaults, then per-field environment overrides
    /// (`YTDLP_BIN`, `TTGRAB_USER_AGENT`).
    pub fn load() -> Result<Self> {
        let mut config = match env::var_os("TTGRAB_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(bin) = env::var("YTDLP_BIN") {
            if !bin.is_empty() {
                config.ytdlp_bin = bin;
            }
        }
        if let Ok(agent) = env::var("TTGRAB_USER_AGENT") {
            if !agent.is_empty() {
                config.user_agent = agent;
            }
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Locate the yt-dlp binary, failing before any spawn attempt when the
    /// tool is not installed.
    pub fn resolve_ytdlp(&self) -> Result<PathBuf> {
        which::which(&self.ytdlp_bin)
            .with_context(|| format!("{} not found on PATH", self.ytdlp_bin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ytdlp_bin, "yt-dlp");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "ytdlp_bin = \"/opt/yt-dlp/yt-dlp\"").unwrap();
        drop(file);

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.ytdlp_bin, "/opt/yt-dlp/yt-dlp");
        // Unset fields keep their defaults
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_env_overrides() {
        env::remove_var("TTGRAB_CONFIG");
        env::set_var("YTDLP_BIN", "yt-dlp-nightly");
        env::set_var("TTGRAB_USER_AGENT", "test-agent/1.0");

        let config = Config::load().unwrap();

        env::remove_var("YTDLP_BIN");
        env::remove_var("TTGRAB_USER_AGENT");

        assert_eq!(config.ytdlp_bin, "yt-dlp-nightly");
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/ttgrab.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
