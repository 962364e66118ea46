//! Corner - a small language for describing node and edge diagrams.
//!
//! This crate is the entry point for applications: [`Corner`] owns the
//! configuration and runs the parser and the semantic analyzer from
//! [`corner_parser`] on each input string.

pub mod config;

mod error;

pub use corner_parser::{
    AnalysisResult, AnalyzerConfig, Diagnostic, Diagram, EdgeAttribute, EdgeDecl, Node,
    NodeAttribute, SemanticError, SemanticWarning, Span, Spanned, error as diagnostics,
};

pub use error::CornerError;

use log::{debug, info, trace};

use corner_parser::{Analyzer, Parser};

use config::AppConfig;

/// Parses and checks Corner diagrams.
///
/// Each call to [`parse`](Self::parse) creates a fresh lexer and parser, so a
/// single `Corner` can process any number of inputs.
///
/// # Examples
///
/// ```
/// use corner::{Corner, SemanticWarning, config::AppConfig};
///
/// let source = "node app { calls db { } } node db { } node cache { }";
///
/// let corner = Corner::new(AppConfig::default());
/// let result = corner.check(source).expect("diagram has no errors");
/// assert_eq!(result.warnings, vec![SemanticWarning::unreachable_node("cache")]);
///
/// // Warnings can be made blocking
/// let strict = Corner::new(AppConfig::default().with_warnings_as_errors(true));
/// assert!(strict.check(source).is_err());
/// ```
#[derive(Debug, Default)]
pub struct Corner {
    config: AppConfig,
}

impl Corner {
    /// Create a new instance with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source code into a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`CornerError::Parse`] with the first syntax error.
    pub fn parse(&self, source: &str) -> Result<Diagram, CornerError> {
        info!(bytes = source.len(); "Parsing diagram");

        let diagram = Parser::new(source)
            .with_token_trace(self.config.parser().trace_tokens())
            .parse()
            .map_err(|err| CornerError::new_parse_error(err, source))?;

        debug!(
            nodes = diagram.node_count(),
            edges = diagram.edge_count();
            "Diagram parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Run semantic analysis on a parsed diagram. Never fails.
    pub fn analyze(&self, diagram: &Diagram) -> AnalysisResult {
        let analyzer = Analyzer::new(*self.config.analysis().analyzer());
        analyzer.analyze(diagram)
    }

    /// Parse and analyze `source`, failing when the findings block it.
    ///
    /// Errors always block; warnings block when
    /// [`warnings_as_errors`](config::AnalysisConfig::warnings_as_errors) is
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`CornerError::Parse`] for syntax errors and
    /// [`CornerError::Check`] with every diagnostic otherwise.
    pub fn check(&self, source: &str) -> Result<AnalysisResult, CornerError> {
        let diagram = self.parse(source)?;
        let result = self.analyze(&diagram);

        info!(
            nodes = diagram.node_count(),
            edges = diagram.edge_count(),
            errors = result.errors.len(),
            warnings = result.warnings.len();
            "Diagram checked"
        );

        result
            .check(self.config.analysis().warnings_as_errors())
            .map_err(|err| CornerError::new_check_error(err, source))?;

        Ok(result)
    }
}
