//! Configuration types for checking Corner diagrams.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every section and field is optional and falls back to its
//! default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`ParserConfig`] - Parser diagnostics such as token tracing.
//! - [`AnalysisConfig`] - Analyzer policy and whether warnings block a check.
//!
//! # Example
//!
//! ```
//! # use corner::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(!config.parser().trace_tokens());
//! assert!(config.analysis().analyzer().exempt_entry_point);
//! ```

use serde::Deserialize;

use corner_parser::AnalyzerConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// `[parser]` section.
    #[serde(default)]
    parser: ParserConfig,

    /// `[analysis]` section.
    #[serde(default)]
    analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn new(parser: ParserConfig, analysis: AnalysisConfig) -> Self {
        Self { parser, analysis }
    }

    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    pub fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }

    /// Override token tracing, e.g. from a command-line flag.
    pub fn with_trace_tokens(mut self, enabled: bool) -> Self {
        self.parser.trace_tokens = enabled;
        self
    }

    /// Override whether warnings block a check.
    pub fn with_warnings_as_errors(mut self, enabled: bool) -> Self {
        self.analysis.warnings_as_errors = enabled;
        self
    }
}

/// Parser settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Log every accepted token at `trace` level.
    #[serde(default)]
    trace_tokens: bool,
}

impl ParserConfig {
    pub fn new(trace_tokens: bool) -> Self {
        Self { trace_tokens }
    }

    pub fn trace_tokens(&self) -> bool {
        self.trace_tokens
    }
}

/// Semantic analysis settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisConfig {
    /// Analyzer policy switches, read from the same table.
    #[serde(flatten)]
    analyzer: AnalyzerConfig,

    /// Treat warnings as errors when deciding whether a check failed.
    #[serde(default)]
    warnings_as_errors: bool,
}

impl AnalysisConfig {
    pub fn new(analyzer: AnalyzerConfig, warnings_as_errors: bool) -> Self {
        Self {
            analyzer,
            warnings_as_errors,
        }
    }

    pub fn analyzer(&self) -> &AnalyzerConfig {
        &self.analyzer
    }

    pub fn warnings_as_errors(&self) -> bool {
        self.warnings_as_errors
    }
}
