//! Error and diagnostic system for the Corner front end.
//!
//! Two kinds of failure exist:
//! - [`ParseError`]: the first syntax error, which halts parsing.
//! - [`CheckError`]: every diagnostic of a check that found at least one
//!   error, produced by a [`DiagnosticCollector`].
//!
//! Both are rendered through the [`Diagnostic`] type, which carries an
//! [`ErrorCode`], a [`Severity`], labeled spans and optional help text.

mod check_error;
mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use parse_error::Result;

pub use check_error::CheckError;
pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::{Label, LabelStyle};
pub use parse_error::ParseError;
pub use severity::Severity;
