//! One debug run: read the text, query the service, build the views

use crate::cli::Settings;
use crate::error::LensError;
use crate::escape::Escaper;
use crate::input::TextReader;
use crate::projector::{Projection, misaligned_spans, project};
use crate::report::MatchReport;
use crate::service::{DebugRequest, MatchClient};
use crate::span::MatchSpan;

/// Report and projection built from one service response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visualization {
    pub report: MatchReport,
    pub projection: Projection,
}

/// Read the text and build a request, rejecting an empty pattern or text
/// before anything is sent.
pub fn prepare(pattern: &str, settings: &Settings) -> Result<DebugRequest, LensError> {
    let text = TextReader::read(&settings.source)?;
    let request = settings.request(pattern, &text);
    if !request.is_complete() {
        return Err(LensError::MissingInput);
    }
    Ok(request)
}

/// Send the request to the configured endpoint
pub async fn fetch(request: &DebugRequest, settings: &Settings) -> Result<Vec<MatchSpan>, LensError> {
    let client = MatchClient::new(settings.url.clone(), settings.timeout)?;
    let matches = client.debug(request).await?;
    log::debug!("Service returned {} matches", matches.len());
    Ok(matches)
}

/// Sort the matches and project them over `text`
pub fn visualize<E: Escaper + ?Sized>(
    text: &str,
    raw_matches: &[MatchSpan],
    escaper: &E,
) -> Visualization {
    let report = MatchReport::build(raw_matches);

    let misaligned = misaligned_spans(text, &report.spans);
    if !misaligned.is_empty() {
        log::debug!(
            "{} of {} matches disagree with their offsets; showing matched text as returned",
            misaligned.len(),
            report.count
        );
    }

    let projection = project(text, &report.spans, escaper);
    Visualization { report, projection }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
