//! Dashboard configuration.
//!
//! Everything here is built with `Default` and passed down explicitly;
//! nothing is read from the environment.

use std::path::{Path, PathBuf};

/// Fallback report locations, checked in this order when no file is opened.
pub const DEFAULT_FALLBACK_PATHS: [&str; 2] = ["data/report.ods", "data/report.csv"];

/// Where the loader looks for a report when the user has not picked one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub fallback_paths: Vec<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            fallback_paths: DEFAULT_FALLBACK_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl SourceConfig {
    /// Default fallback paths resolved against `base_dir` instead of the
    /// working directory.
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            fallback_paths: DEFAULT_FALLBACK_PATHS
                .iter()
                .map(|p| base_dir.join(p))
                .collect(),
        }
    }
}

/// Top-level settings for the dashboard window.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub source: SourceConfig,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Height of a single chart in the central panel
    pub chart_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            window_title: "Traffic & Sales Report".to_string(),
            inner_size: [1400.0, 800.0],
            min_inner_size: [1000.0, 600.0],
            chart_height: 320.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback_order() {
        let config = SourceConfig::default();
        assert_eq!(
            config.fallback_paths,
            vec![
                PathBuf::from("data/report.ods"),
                PathBuf::from("data/report.csv")
            ]
        );
    }

    #[test]
    fn test_base_dir_keeps_order() {
        let config = SourceConfig::with_base_dir(Path::new("/srv/reports"));
        assert_eq!(
            config.fallback_paths[0],
            PathBuf::from("/srv/reports/data/report.ods")
        );
        assert_eq!(
            config.fallback_paths[1],
            PathBuf::from("/srv/reports/data/report.csv")
        );
    }
}
