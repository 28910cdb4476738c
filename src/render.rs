//! Renderers for projections and match reports
//!
//! `html` produces markup from segments escaped with the markup escaper,
//! `terminal` produces ratatui lines for the interactive viewer.

pub mod html;
pub mod terminal;

/// Shown instead of the highlighted view when there is no text
pub const NO_TEXT_PLACEHOLDER: &str = "No text to visualize.";

/// Heading for the results list
pub fn match_count_label(count: usize) -> String {
    format!("Matches found: {}", count)
}
