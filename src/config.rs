use std::path::PathBuf;

use crate::event::NoticeDurations;

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    /// Remote archive endpoint; no remote copies are made when unset
    pub archive_url: Option<String>,
    pub notice_durations: NoticeDurations,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = NoticeDurations::default();
        let duration = |key: &str, default: u64| {
            lookup(key)
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        };

        Self {
            bind_addr: lookup("CHICAGO_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            data_dir: lookup("CHICAGO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            archive_url: lookup("CHICAGO_ARCHIVE_URL").filter(|url| !url.trim().is_empty()),
            notice_durations: NoticeDurations {
                info_ms: duration("CHICAGO_NOTICE_INFO_MS", defaults.info_ms),
                warning_ms: duration("CHICAGO_NOTICE_WARNING_MS", defaults.warning_ms),
                celebration_ms: duration("CHICAGO_NOTICE_CELEBRATION_MS", defaults.celebration_ms),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);

        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert!(config.archive_url.is_none());
        assert_eq!(config.notice_durations, NoticeDurations::default());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("CHICAGO_BIND_ADDR", "127.0.0.1:8080"),
            ("CHICAGO_DATA_DIR", "/var/lib/chicago"),
            ("CHICAGO_ARCHIVE_URL", "https://example.com/archive"),
            ("CHICAGO_NOTICE_WARNING_MS", "1500"),
        ]);

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/chicago"));
        assert_eq!(
            config.archive_url.as_deref(),
            Some("https://example.com/archive")
        );
        assert_eq!(config.notice_durations.warning_ms, 1500);
        assert_eq!(config.notice_durations.info_ms, 3000);
    }

    #[test]
    fn test_unparseable_duration_falls_back_to_default() {
        let config = config(&[("CHICAGO_NOTICE_INFO_MS", "soon"), ("CHICAGO_ARCHIVE_URL", " ")]);

        assert_eq!(config.notice_durations.info_ms, 3000);
        assert!(config.archive_url.is_none());
    }
}
