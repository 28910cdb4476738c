//! regex-lens: visualize regular expression matches returned by a matching service.
//!
//! The core turns an unordered set of match spans into a position-sorted
//! [`MatchReport`] and a [`Projection`] of the text into highlighted and plain
//! segments. Everything around it (reading input, calling the service,
//! rendering) is thin glue.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod escape;
pub mod input;
pub mod projector;
pub mod render;
pub mod report;
pub mod service;
pub mod session;
pub mod span;

pub use error::LensError;
pub use escape::{Escaper, MarkupEscaper, VerbatimEscaper};
pub use projector::{Projection, Segment, project};
pub use report::MatchReport;
pub use span::MatchSpan;
