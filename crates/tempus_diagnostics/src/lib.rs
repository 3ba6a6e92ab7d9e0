//! Diagnostic creation, severity management, and terminal rendering.
//!
//! This crate provides structured [`Diagnostic`] messages with severity
//! levels and category-prefixed codes. Diagnostics are anchored to circuit
//! nodes by name rather than to source locations, since the analyzer
//! operates on in-memory graphs with no source text. The thread-safe
//! [`DiagnosticSink`] accumulates diagnostics during graph construction and
//! analysis, and [`TerminalRenderer`] formats them for terminal output.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
