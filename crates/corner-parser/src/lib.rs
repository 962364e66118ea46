//! # Corner Parser
//!
//! Front end for the Corner diagram language: a lazy tokenizer, a
//! recursive-descent parser producing an owned AST, and a semantic analyzer
//! reporting structural defects.
//!
//! ## Usage
//!
//! ```
//! # use corner_parser::{parse, analyze, ParseError, SemanticWarning};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         node api {
//!             color: blue
//!             calls db { label: "reads" }
//!         }
//!         node db { }
//!         node cache { }
//!     "#;
//!
//!     let diagram = parse(source)?;
//!     let result = analyze(&diagram);
//!
//!     assert!(result.errors.is_empty());
//!     assert_eq!(result.warnings, vec![SemanticWarning::unreachable_node("cache")]);
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
mod position;
mod span;
pub mod tokens;

pub use analyzer::{AnalysisResult, Analyzer, AnalyzerConfig, SemanticError, SemanticWarning};
pub use ast::{Diagram, EdgeAttribute, EdgeDecl, Node, NodeAttribute};
pub use error::{CheckError, Diagnostic, ParseError};
pub use lexer::Lexer;
pub use parser::{MAX_NESTING_DEPTH, Parser};
pub use position::Position;
pub use span::{Span, Spanned};
pub use tokens::{PositionAware, PositionedToken, Token};

/// Parse source text into a [`Diagram`].
///
/// Stops at the first syntax error. Empty or whitespace-only input yields a
/// diagram with no children.
///
/// ```
/// # use corner_parser::{parse, Node};
/// let diagram = parse("node A { calls B { } }").unwrap();
/// assert_eq!(diagram.children, vec![Node::new("A").with_edge("B")]);
/// ```
pub fn parse(source: &str) -> Result<Diagram, ParseError> {
    Parser::new(source).parse()
}

/// Analyze a diagram with the default [`AnalyzerConfig`].
pub fn analyze(diagram: &Diagram) -> AnalysisResult {
    Analyzer::default().analyze(diagram)
}

/// Analyze a diagram with explicit policy switches.
pub fn analyze_with(diagram: &Diagram, config: &AnalyzerConfig) -> AnalysisResult {
    Analyzer::new(*config).analyze(diagram)
}
