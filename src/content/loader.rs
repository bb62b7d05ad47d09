use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::content::types::{Metric, Portfolio};

/// Errors that can occur when loading portfolio content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Content validation failed: {message}")]
    ValidationError { message: String },
}

impl Portfolio {
    /// Loads content from a TOML file and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let portfolio: Portfolio =
            toml::from_str(&content).map_err(|e| ContentError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        portfolio.validate()?;
        tracing::info!(path = %path.display(), "loaded portfolio content");
        Ok(portfolio)
    }

    /// Loads from `path` when given, otherwise returns the built-in portfolio.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Validates the content.
    ///
    /// Checks:
    /// - Every counted metric has a finite, non-negative value
    /// - The contact prompt is not blank
    pub fn validate(&self) -> Result<(), ContentError> {
        let counted = self.hero.metrics.iter().chain(self.pipeline.metrics.iter());
        for metric in counted {
            validate_metric(metric)?;
        }

        if self.contact.prompt.trim().is_empty() {
            return Err(ContentError::ValidationError {
                message: "Contact prompt must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_metric(metric: &Metric) -> Result<(), ContentError> {
    if !metric.value.is_finite() || metric.value < 0.0 {
        return Err(ContentError::ValidationError {
            message: format!(
                "Metric '{}' must be a finite, non-negative number (got {})",
                metric.label, metric.value
            ),
        });
    }
    Ok(())
}
