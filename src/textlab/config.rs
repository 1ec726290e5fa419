//! # Configuration
//!
//! Settings live in `config.json` inside the textlab home directory:
//! `$TEXTLAB_HOME` when set, otherwise the OS config directory (via the
//! `directories` crate). A missing file means defaults. Configuration is the only
//! thing textlab ever writes to disk; session text is never persisted.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `grapheme-mode` | `segmented` | `segmented` or `codepoints` (degraded counting) |
//! | `default-flags` | `g` | Regex flags used when `replace` gets no `--flags` |
//! | `highlight-marker` | `mark` | HTML element wrapping highlighted matches |
//! | `profile-url` | `https://example.com/users/` | Prefix for `@mention` links |
//! | `tag-url` | `https://example.com/tags/` | Prefix for `#hashtag` links |
//! | `pad-char` | ` ` | Fill used by `pad` when none is given |
//! | `bench-max-size` | `1000000` | Upper bound for the `bench` size |

use crate::commands::analyze::GraphemeMode;
use crate::commands::linkify::LinkTargets;
use crate::commands::replace::RegexFlags;
use crate::error::{Result, TextlabError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FLAGS: &str = "g";
const DEFAULT_MARKER: &str = "mark";
const DEFAULT_PAD_CHAR: &str = " ";
const DEFAULT_BENCH_MAX: usize = 1_000_000;

pub const KEYS: &[&str] = &[
    "grapheme-mode",
    "default-flags",
    "highlight-marker",
    "profile-url",
    "tag-url",
    "pad-char",
    "bench-max-size",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextlabConfig {
    #[serde(default)]
    pub grapheme_mode: GraphemeMode,

    #[serde(default = "default_flags")]
    pub default_flags: String,

    #[serde(default = "default_marker")]
    pub highlight_marker: String,

    #[serde(default)]
    pub links: LinkTargets,

    #[serde(default = "default_pad_char")]
    pub pad_char: String,

    #[serde(default = "default_bench_max")]
    pub bench_max_size: usize,
}

fn default_flags() -> String {
    DEFAULT_FLAGS.to_string()
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_pad_char() -> String {
    DEFAULT_PAD_CHAR.to_string()
}

fn default_bench_max() -> usize {
    DEFAULT_BENCH_MAX
}

impl Default for TextlabConfig {
    fn default() -> Self {
        Self {
            grapheme_mode: GraphemeMode::default(),
            default_flags: default_flags(),
            highlight_marker: default_marker(),
            links: LinkTargets::default(),
            pad_char: default_pad_char(),
            bench_max_size: DEFAULT_BENCH_MAX,
        }
    }
}

impl TextlabConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TextlabConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "grapheme-mode" => self.grapheme_mode.to_string(),
            "default-flags" => self.default_flags.clone(),
            "highlight-marker" => self.highlight_marker.clone(),
            "profile-url" => self.links.profile_url.clone(),
            "tag-url" => self.links.tag_url.clone(),
            "pad-char" => self.pad_char.clone(),
            "bench-max-size" => self.bench_max_size.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Validates and sets a key. Nothing changes when validation fails.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "grapheme-mode" => {
                self.grapheme_mode = value.parse().map_err(TextlabError::Config)?;
            }
            "default-flags" => {
                RegexFlags::parse(value)
                    .map_err(|e| TextlabError::Config(format!("default-flags: {}", e)))?;
                self.default_flags = value.to_string();
            }
            "highlight-marker" => {
                if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Err(TextlabError::Config(
                        "highlight-marker must be a plain element name".to_string(),
                    ));
                }
                self.highlight_marker = value.to_string();
            }
            "profile-url" => self.links.profile_url = value.to_string(),
            "tag-url" => self.links.tag_url = value.to_string(),
            "pad-char" => {
                if value.is_empty() {
                    return Err(TextlabError::Config("pad-char cannot be empty".to_string()));
                }
                self.pad_char = value.to_string();
            }
            "bench-max-size" => {
                self.bench_max_size = value.parse().map_err(|_| {
                    TextlabError::Config(format!("bench-max-size must be a number, got {}", value))
                })?;
            }
            other => {
                return Err(TextlabError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|v| (key.to_string(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TextlabConfig::default();
        assert_eq!(config.grapheme_mode, GraphemeMode::Segmented);
        assert_eq!(config.default_flags, "g");
        assert_eq!(config.highlight_marker, "mark");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = tempdir().unwrap();
        let config = TextlabConfig::load(temp.path()).unwrap();
        assert_eq!(config, TextlabConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested");

        let mut config = TextlabConfig::default();
        config.set("grapheme-mode", "codepoints").unwrap();
        config.set("tag-url", "/t/").unwrap();
        config.save(&dir).unwrap();

        let loaded = TextlabConfig::load(&dir).unwrap();
        assert_eq!(loaded.grapheme_mode, GraphemeMode::CodePoints);
        assert_eq!(loaded.links.tag_url, "/t/");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"pad_char": "."}"#).unwrap();

        let config = TextlabConfig::load(temp.path()).unwrap();
        assert_eq!(config.pad_char, ".");
        assert_eq!(config.default_flags, "g");
        assert_eq!(config.links, LinkTargets::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{oops").unwrap();
        assert!(matches!(
            TextlabConfig::load(temp.path()),
            Err(TextlabError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = TextlabConfig::default();
        assert!(config.set("grapheme-mode", "bytes").is_err());
        assert!(config.set("default-flags", "gz").is_err());
        assert!(config.set("highlight-marker", "<b>").is_err());
        assert!(config.set("pad-char", "").is_err());
        assert!(config.set("bench-max-size", "lots").is_err());
        assert!(config.set("no-such-key", "x").is_err());
        assert_eq!(config, TextlabConfig::default());
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let config = TextlabConfig::default();
        let all = config.list_all();
        assert_eq!(all.len(), KEYS.len());
        assert!(all.contains(&("bench-max-size".to_string(), "1000000".to_string())));
    }
}
