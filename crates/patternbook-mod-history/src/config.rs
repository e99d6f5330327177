/// Configuration for the history system.

/// Maximum number of snapshots kept per history before the oldest
/// are dropped.
const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Configuration for an `InMemoryHistory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max snapshots stored. Always at least 1.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HistoryConfig {
    /// Creates a config with the given depth, sanitized.
    pub fn with_max_depth(max_depth: usize) -> Self {
        let mut config = Self { max_depth };
        config.sanitize();
        config
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        self.max_depth = self.max_depth.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_depth, 10_000);
    }

    #[test]
    fn test_zero_depth_sanitized() {
        let config = HistoryConfig::with_max_depth(0);
        assert_eq!(config.max_depth, 1);
    }

    #[test]
    fn test_with_max_depth_keeps_valid_value() {
        assert_eq!(HistoryConfig::with_max_depth(42).max_depth, 42);
    }
}
