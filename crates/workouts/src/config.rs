//! Driver configuration read from the environment.

use std::{env, path::PathBuf, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("Unknown report format: {other} (expected text or json)"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding an array of packages. The sample session is used when absent.
    pub packages_path: Option<PathBuf>,
    pub format: ReportFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            env::var("WORKOUT_PACKAGES").ok(),
            env::var("REPORT_FORMAT").ok(),
        )
    }

    fn from_vars(packages: Option<String>, format: Option<String>) -> anyhow::Result<Self> {
        let packages_path = packages.filter(|p| !p.is_empty()).map(PathBuf::from);
        let format = match format {
            Some(f) => f.parse()?,
            None => ReportFormat::default(),
        };
        Ok(Self {
            packages_path,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert!(config.packages_path.is_none());
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!(" text ".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_empty_path_means_sample() {
        let config = Config::from_vars(Some(String::new()), Some("json".to_string())).unwrap();
        assert!(config.packages_path.is_none());
        assert_eq!(config.format, ReportFormat::Json);
    }
}
