//! Session configuration.

use std::path::PathBuf;

/// Session configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Append one JSON record per dispatched line to this file
    pub trace_path: Option<PathBuf>,
    /// Stop at the first failing line instead of skipping it
    pub strict: bool,
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `GRID_DRAW_TRACE_PATH`: trace file (blank means unset)
    /// - `GRID_DRAW_STRICT`: `1` or `true` enables strict mode
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`], reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let trace_path = lookup("GRID_DRAW_TRACE_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        let strict = lookup("GRID_DRAW_STRICT")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        Self { trace_path, strict }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(SessionConfig::from_lookup(lookup_in(&[])), SessionConfig::default());
    }

    #[test]
    fn reads_trace_path_and_strict() {
        let cfg = SessionConfig::from_lookup(lookup_in(&[
            ("GRID_DRAW_TRACE_PATH", " /tmp/trace.jsonl "),
            ("GRID_DRAW_STRICT", "TRUE"),
        ]));
        assert_eq!(cfg.trace_path, Some(PathBuf::from("/tmp/trace.jsonl")));
        assert!(cfg.strict);
    }

    #[test]
    fn blank_trace_path_is_unset() {
        let cfg = SessionConfig::from_lookup(lookup_in(&[
            ("GRID_DRAW_TRACE_PATH", "   "),
            ("GRID_DRAW_STRICT", "no"),
        ]));
        assert_eq!(cfg.trace_path, None);
        assert!(!cfg.strict);
    }
}
