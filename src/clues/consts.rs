use crate::providers::models::{Feature, FeatureKind};

/// Headings at which the vantage point is captured. Three views cover the
/// full horizon, which makes small street signage far more likely to land in
/// frame than the single forward-facing capture did.
pub const CAPTURE_HEADINGS: [f64; 3] = [0.0, 120.0, 240.0];
pub const CAPTURE_PITCH: f64 = 0.0;
pub const CAPTURE_FOV: f64 = 90.0;
pub const CAPTURE_WIDTH: u32 = 640;
pub const CAPTURE_HEIGHT: u32 = 480;

pub const REQUESTED_FEATURES: [Feature; 5] = [
    Feature {
        r#type: FeatureKind::TextDetection,
        max_results: 10,
    },
    Feature {
        r#type: FeatureKind::LabelDetection,
        max_results: 10,
    },
    Feature {
        r#type: FeatureKind::LandmarkDetection,
        max_results: 5,
    },
    Feature {
        r#type: FeatureKind::LogoDetection,
        max_results: 5,
    },
    Feature {
        r#type: FeatureKind::ObjectLocalization,
        max_results: 10,
    },
];

pub const LANDMARK_SCORE_FLOOR: f32 = 0.5;
pub const LABEL_SCORE_FLOOR: f32 = 0.7;
pub const LOGO_SCORE_FLOOR: f32 = 0.6;

/// How many of a language's candidate countries make it into the guess pool.
pub const MAX_GUESSES_PER_LANGUAGE: usize = 3;
pub const MAX_RANKED_GUESSES: usize = 4;
pub const MAX_TEXT_FRAGMENTS_IN_CLUE: usize = 3;
pub const MAX_LABELS_IN_SUMMARY: usize = 4;

pub const INSUFFICIENT_SIGNAL_CLUE: &str = "I could not pick up any strong signals from this \
    view. Look for road signs, license plates, architectural styles, and the vegetation: they \
    usually give the region away.";
