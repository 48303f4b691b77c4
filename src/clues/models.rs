use std::fmt;
use thiserror::Error;

/// Qualitative certainty of a location guess. Declaration order is ascending,
/// so the derived `Ord` is the ranking order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfidenceTier::Low => "low",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::High => "high",
            ConfidenceTier::VeryHigh => "very high",
        };
        write!(f, "{label}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationGuess {
    pub location: String,
    pub region: Option<String>,
    pub confidence: ConfidenceTier,
    pub reasoning: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Landmark {
    pub name: String,
    pub score: f32,
}

/// The fused signals from every successfully annotated view, deduplicated.
#[derive(Clone, Debug, Default)]
pub struct SignalSet {
    /// Language codes inferred from the OCR locales.
    pub languages: Vec<String>,
    /// Landmark detections, keeping the best score seen per name.
    pub landmarks: Vec<Landmark>,
    /// Lowercased label and object terms.
    pub labels: Vec<String>,
    /// Logo names, as reported.
    pub logos: Vec<String>,
    /// Raw OCR fragments that survived the provenance filter.
    pub text_fragments: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ClueError {
    #[error("missing provider credentials: the `{0}` environment variable is not set")]
    MissingCredentials(&'static str),
    #[error("failed to capture the current view: {0}")]
    ImageCapture(String),
    #[error("every recognition request failed")]
    AllSignalsFailed,
}
