//! Semantic analysis of a parsed diagram.
//!
//! The analyzer walks a completed [`Diagram`] without modifying it and
//! reports structural defects:
//!
//! - **Empty diagram**: no top-level node declarations.
//! - **Duplicate node ids**: an id declared more than once at any depth.
//! - **Dangling edges**: an edge whose target no node declares.
//! - **Unreachable nodes** (warning): a declared id that no edge targets,
//!   except the entry point, which is the first node declared.
//!
//! Declarations are collected in a first pass and references checked in a
//! second one, so an edge may point at a node declared further down.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    ast::{Diagram, EdgeAttribute, EdgeDecl, Node, NodeAttribute},
    error::{CheckError, Diagnostic, DiagnosticCollector, ErrorCode},
    span::{Span, Spanned},
};

/// Visitor trait for read-only traversal of a [`Diagram`].
///
/// Default implementations recurse in pre-order (a node's id, attributes
/// and edges before its nested nodes), so implementors override only the
/// methods they care about.
pub trait Visitor {
    fn visit_diagram(&mut self, diagram: &Diagram) {
        self.visit_nodes(&diagram.children);
    }

    fn visit_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.visit_node(node);
        }
    }

    fn visit_node(&mut self, node: &Node) {
        self.visit_node_id(&node.id);
        for attribute in &node.attributes {
            self.visit_node_attribute(attribute);
        }
        for edge in &node.edges {
            self.visit_edge(edge);
        }
        self.visit_nodes(&node.children);
    }

    /// Visit the declaration of a node id
    fn visit_node_id(&mut self, _id: &Spanned<String>) {}

    fn visit_node_attribute(&mut self, _attribute: &NodeAttribute) {}

    fn visit_edge(&mut self, edge: &EdgeDecl) {
        self.visit_edge_target(edge, &edge.to);
        for attribute in &edge.attributes {
            self.visit_edge_attribute(attribute);
        }
    }

    /// Visit the id an edge points at
    fn visit_edge_target(&mut self, _edge: &EdgeDecl, _target: &Spanned<String>) {}

    fn visit_edge_attribute(&mut self, _attribute: &EdgeAttribute) {}
}

/// Structural defects that make a diagram unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error("diagram contains no nodes")]
    EmptyDiagram,

    #[error("node `{id}` is declared more than once")]
    DuplicateNodeId {
        /// The repeated declaration.
        id: Spanned<String>,
        /// The first declaration of the same id.
        first: Spanned<String>,
    },

    #[error("edge from `{from}` targets undeclared node `{to}`")]
    DanglingEdge {
        from: Spanned<String>,
        to: Spanned<String>,
    },
}

impl SemanticError {
    pub fn duplicate_node_id(id: impl Into<Spanned<String>>) -> Self {
        let id = id.into();
        Self::DuplicateNodeId {
            first: id.clone(),
            id,
        }
    }

    pub fn dangling_edge(from: impl Into<Spanned<String>>, to: impl Into<Spanned<String>>) -> Self {
        Self::DanglingEdge {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyDiagram => ErrorCode::E202,
            Self::DuplicateNodeId { .. } => ErrorCode::E200,
            Self::DanglingEdge { .. } => ErrorCode::E201,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string()).with_code(self.code());
        match self {
            Self::EmptyDiagram => diag.with_help("declare at least one node, e.g. `node main { }`"),
            Self::DuplicateNodeId { id, first } => diag
                .with_label(id.span(), "duplicate declaration")
                .with_secondary_label(first.span(), "first declared here")
                .with_help("node ids must be unique across the diagram, nested nodes included"),
            Self::DanglingEdge { from, to } => diag
                .with_label(to.span(), "not declared anywhere")
                .with_secondary_label(from.span(), "edge declared in this node"),
        }
    }
}

/// Advisory findings that do not block a check by default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticWarning {
    #[error("node `{id}` is unreachable")]
    UnreachableNode { id: Spanned<String> },
}

impl SemanticWarning {
    pub fn unreachable_node(id: impl Into<Spanned<String>>) -> Self {
        Self::UnreachableNode { id: id.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnreachableNode { .. } => ErrorCode::E203,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::UnreachableNode { id } => Diagnostic::warning(self.to_string())
                .with_code(self.code())
                .with_label(id.span(), "no edge points at this node")
                .with_help("add an edge targeting it or remove the node"),
        }
    }
}

/// Everything the analyzer found, errors first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub errors: Vec<SemanticError>,
    pub warnings: Vec<SemanticWarning>,
}

impl AnalysisResult {
    /// `true` when no errors were found. Warnings do not count.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// `true` when nothing at all was found.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors then warnings, as renderable diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors
            .iter()
            .map(SemanticError::to_diagnostic)
            .chain(self.warnings.iter().map(SemanticWarning::to_diagnostic))
            .collect()
    }

    /// Decide whether the findings block the diagram.
    ///
    /// Returns the warnings when nothing blocks, otherwise every diagnostic
    /// as a [`CheckError`]. With `warnings_as_errors`, warnings block too.
    pub fn check(&self, warnings_as_errors: bool) -> Result<Vec<Diagnostic>, CheckError> {
        let mut collector = DiagnosticCollector::new();
        for diagnostic in self.diagnostics() {
            if warnings_as_errors {
                collector.emit(diagnostic.into_error());
            } else {
                collector.emit(diagnostic);
            }
        }
        collector.finish()
    }
}

/// Policy switches for the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Never report the first declared node as unreachable.
    pub exempt_entry_point: bool,
    /// Report unreachable nodes at all.
    pub report_unreachable: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exempt_entry_point: true,
            report_unreachable: true,
        }
    }
}

/// Runs the analysis passes over a diagram.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `diagram`. Never fails; findings are returned as data.
    pub fn analyze(&self, diagram: &Diagram) -> AnalysisResult {
        let mut result = AnalysisResult::default();

        if diagram.is_empty() {
            result.errors.push(SemanticError::EmptyDiagram);
            debug!(errors = result.errors.len(); "Analyzed empty diagram");
            return result;
        }

        let mut declarations = DeclarationCollector::default();
        declarations.visit_diagram(diagram);

        let mut references = ReferenceChecker::new(&declarations.declared);
        references.visit_diagram(diagram);

        if self.config.report_unreachable {
            result.warnings = self.unreachable(&declarations.declared, &references.referenced);
        }
        result.errors.extend(declarations.duplicates);
        result.errors.extend(references.dangling);

        debug!(
            declared = declarations.declared.len(),
            errors = result.errors.len(),
            warnings = result.warnings.len();
            "Analyzed diagram"
        );
        result
    }

    fn unreachable(
        &self,
        declared: &IndexMap<String, Span>,
        referenced: &HashSet<&str>,
    ) -> Vec<SemanticWarning> {
        let skip = usize::from(self.config.exempt_entry_point);
        declared
            .iter()
            .skip(skip)
            .filter(|(id, _)| !referenced.contains(id.as_str()))
            .map(|(id, span)| SemanticWarning::unreachable_node(Spanned::new(id.clone(), *span)))
            .collect()
    }
}

/// First pass: record every declared id, reporting repeats.
#[derive(Debug, Default)]
struct DeclarationCollector {
    /// Declared ids in declaration order, with the span of the first one.
    declared: IndexMap<String, Span>,
    duplicates: Vec<SemanticError>,
}

impl Visitor for DeclarationCollector {
    fn visit_node_id(&mut self, id: &Spanned<String>) {
        match self.declared.get(id.as_str()) {
            Some(first) => self.duplicates.push(SemanticError::DuplicateNodeId {
                id: id.clone(),
                first: Spanned::new(id.inner().clone(), *first),
            }),
            None => {
                self.declared.insert(id.inner().clone(), id.span());
            }
        }
    }
}

/// Second pass: record edge targets, reporting the undeclared ones.
#[derive(Debug)]
struct ReferenceChecker<'d> {
    declared: &'d IndexMap<String, Span>,
    referenced: HashSet<&'d str>,
    dangling: Vec<SemanticError>,
}

impl<'d> ReferenceChecker<'d> {
    fn new(declared: &'d IndexMap<String, Span>) -> Self {
        Self {
            declared,
            referenced: HashSet::new(),
            dangling: Vec::new(),
        }
    }
}

impl Visitor for ReferenceChecker<'_> {
    fn visit_edge_target(&mut self, edge: &EdgeDecl, target: &Spanned<String>) {
        let declared = self.declared;
        match declared.get_key_value(target.as_str()) {
            Some((id, _)) => {
                self.referenced.insert(id.as_str());
            }
            None => self.dangling.push(SemanticError::DanglingEdge {
                from: edge.from.clone(),
                to: target.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn analyze_source(source: &str) -> AnalysisResult {
        let diagram = Parser::new(source).parse().expect("source should parse");
        Analyzer::default().analyze(&diagram)
    }

    #[test]
    fn test_empty_diagram() {
        let result = analyze_source("");
        assert_eq!(result.errors, vec![SemanticError::EmptyDiagram]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_ids() {
        let result = analyze_source("node A {} node A {} node B {}");
        assert_eq!(result.errors, vec![SemanticError::duplicate_node_id("A")]);
    }

    #[test]
    fn test_duplicate_reports_both_locations() {
        let result = analyze_source("node A {}\nnode A {}");
        match &result.errors[0] {
            SemanticError::DuplicateNodeId { id, first } => {
                assert_eq!(first.span(), Span::new(5..6));
                assert_eq!(id.span(), Span::new(15..16));
            }
            other => panic!("Expected DuplicateNodeId, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_edge() {
        let result = analyze_source("node A {\n    calls B {}\n}");
        assert_eq!(result.errors, vec![SemanticError::dangling_edge("A", "B")]);
    }

    #[test]
    fn test_duplicates_before_dangling_edges() {
        let source = r#"
            node A {
                calls B {}
            }

            node B {
                calls C {}
            }

            node A {
                calls D {}
            }
        "#;
        assert_eq!(
            analyze_source(source).errors,
            vec![
                SemanticError::duplicate_node_id("A"),
                SemanticError::dangling_edge("B", "C"),
                SemanticError::dangling_edge("A", "D"),
            ]
        );
    }

    #[test]
    fn test_no_errors() {
        let result = analyze_source("node A {\n    calls B {}\n}\n\nnode B {}");
        assert!(result.is_clean());
    }

    #[test]
    fn test_forward_reference_is_not_dangling() {
        let result = analyze_source("node A { calls B {} } node B { calls A {} }");
        assert!(result.is_clean());
    }

    #[test]
    fn test_nested_nodes_are_declared() {
        let source = "node outer { calls inner {} node inner { calls outer {} } }";
        assert!(analyze_source(source).is_clean());
    }

    #[test]
    fn test_nested_duplicate_is_reported() {
        let source = "node A { node B {} } node B {}";
        assert_eq!(
            analyze_source(source).errors,
            vec![SemanticError::duplicate_node_id("B")]
        );
    }

    #[test]
    fn test_dangling_edges_in_pre_order() {
        let source = "node A { node B { calls Y {} } calls X {} } node C { calls Z {} }";
        assert_eq!(
            analyze_source(source).errors,
            vec![
                SemanticError::dangling_edge("A", "X"),
                SemanticError::dangling_edge("B", "Y"),
                SemanticError::dangling_edge("C", "Z"),
            ]
        );
    }

    #[test]
    fn test_unreachable_node() {
        let result = analyze_source("node A { calls B {} } node B {} node C {}");
        assert!(result.is_ok());
        assert_eq!(
            result.warnings,
            vec![SemanticWarning::unreachable_node("C")]
        );
    }

    #[test]
    fn test_unreachable_in_declaration_order() {
        let result = analyze_source("node A {} node D {} node B { node C {} }");
        assert_eq!(
            result.warnings,
            vec![
                SemanticWarning::unreachable_node("D"),
                SemanticWarning::unreachable_node("B"),
                SemanticWarning::unreachable_node("C"),
            ]
        );
    }

    #[test]
    fn test_entry_point_exemption_can_be_disabled() {
        let diagram = Parser::new("node A { calls B {} } node B {}").parse().unwrap();
        let analyzer = Analyzer::new(AnalyzerConfig {
            exempt_entry_point: false,
            ..AnalyzerConfig::default()
        });
        assert_eq!(
            analyzer.analyze(&diagram).warnings,
            vec![SemanticWarning::unreachable_node("A")]
        );
    }

    #[test]
    fn test_unreachable_reporting_can_be_disabled() {
        let diagram = Parser::new("node A {} node B {}").parse().unwrap();
        let analyzer = Analyzer::new(AnalyzerConfig {
            report_unreachable: false,
            ..AnalyzerConfig::default()
        });
        assert!(analyzer.analyze(&diagram).is_clean());
    }

    #[test]
    fn test_analysis_does_not_depend_on_parsing() {
        let diagram = Diagram::new(vec![
            Node::new("A").with_edge("B"),
            Node::new("B").with_child(Node::new("C")),
        ]);
        let result = Analyzer::default().analyze(&diagram);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings, vec![SemanticWarning::unreachable_node("C")]);
    }

    #[test]
    fn test_diagnostics_codes_and_order() {
        let result = analyze_source("node A { calls X {} } node A {} node B {}");
        let codes: Vec<_> = result.diagnostics().iter().map(|d| d.code()).collect();
        assert_eq!(
            codes,
            vec![Some(ErrorCode::E200), Some(ErrorCode::E201), Some(ErrorCode::E203)]
        );
    }

    #[test]
    fn test_check_passes_with_warnings() {
        let result = analyze_source("node A {} node B {}");
        let warnings = result.check(false).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].severity().is_warning());
    }

    #[test]
    fn test_check_fails_on_warnings_when_denied() {
        let result = analyze_source("node A {} node B {}");
        let err = result.check(true).unwrap_err();
        assert_eq!(err.error_count(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E203));
    }

    #[test]
    fn test_check_fails_on_errors() {
        let err = analyze_source("").check(false).unwrap_err();
        assert_eq!(err.to_string(), "error[E202]: diagram contains no nodes");
    }

    #[test]
    fn test_analyzer_config_deserializes_partially() {
        use serde::de::{value::Error, value::MapDeserializer};

        let fields = MapDeserializer::<_, Error>::new(std::iter::once(("report_unreachable", false)));
        let config = AnalyzerConfig::deserialize(fields).expect("valid config");
        assert!(config.exempt_entry_point);
        assert!(!config.report_unreachable);
    }
}
