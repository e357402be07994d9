//! Persisted best-score record
//!
//! A single non-negative integer in LocalStorage: read once at startup,
//! overwritten only when a run ends with a strictly greater score.

use crate::platform::storage;

/// LocalStorage key
const STORAGE_KEY: &str = "coin_dash_best";

/// The best score across all runs and sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    /// Load the persisted best, defaulting to 0 when absent or unparseable
    pub fn load() -> Self {
        let value = parse_best(storage::get(STORAGE_KEY));
        log::info!("Loaded best score: {value}");
        Self { value }
    }

    /// Compare-and-store for a finished run. Returns true when the score
    /// is a new best (and has been persisted).
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        storage::set(STORAGE_KEY, &self.value.to_string());
        log::info!("New best score: {score}");
        true
    }
}

fn parse_best(raw: Option<String>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_zero() {
        assert_eq!(parse_best(None), 0);
        assert_eq!(parse_best(Some("garbage".into())), 0);
        assert_eq!(parse_best(Some("".into())), 0);
        assert_eq!(parse_best(Some("-5".into())), 0);
        assert_eq!(parse_best(Some("127".into())), 127);
        assert_eq!(parse_best(Some(" 42 ".into())), 42);
    }

    #[test]
    fn test_record_only_on_strict_improvement() {
        let mut best = BestScore { value: 50 };

        assert!(best.record(80));
        assert_eq!(best.value, 80);

        // A later lower (or equal) run leaves the record alone
        assert!(!best.record(30));
        assert!(!best.record(80));
        assert_eq!(best.value, 80);
    }
}
