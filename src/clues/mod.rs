use crate::clues::consts::{
    CAPTURE_FOV, CAPTURE_HEADINGS, CAPTURE_HEIGHT, CAPTURE_PITCH, CAPTURE_WIDTH,
    REQUESTED_FEATURES,
};
use crate::clues::models::ClueError;
use crate::map::models::LatLng;
use crate::providers::imagery::ImageryProvider;
use crate::providers::models::{ProviderError, ViewSpec};
use crate::providers::recognition::RecognitionProvider;
use futures_util::future::join_all;

pub mod consts;
pub mod engine;
pub mod filter;
pub mod models;
pub mod ruleset;
#[cfg(test)]
mod tests;

/// Captures the vantage point, annotates every view, and renders a clue.
///
/// Capture failures abort the whole request. Recognition failures are
/// tolerated per view and only fatal when no view at all could be analyzed.
pub async fn infer(
    imagery: &dyn ImageryProvider,
    recognition: &dyn RecognitionProvider,
    vantage: LatLng,
) -> Result<String, ClueError> {
    let mut images = Vec::with_capacity(CAPTURE_HEADINGS.len());
    for heading in CAPTURE_HEADINGS {
        let view = ViewSpec {
            location: vantage,
            heading,
            pitch: CAPTURE_PITCH,
            fov: CAPTURE_FOV,
            width: CAPTURE_WIDTH,
            height: CAPTURE_HEIGHT,
        };
        let image = imagery.render_view(&view).await.map_err(|err| match err {
            ProviderError::MissingCredentials(var) => ClueError::MissingCredentials(var),
            other => ClueError::ImageCapture(other.to_string()),
        })?;
        images.push(image);
    }

    let requests = images
        .iter()
        .map(|image| recognition.annotate(image, &REQUESTED_FEATURES));
    let mut views = Vec::with_capacity(images.len());
    for result in join_all(requests).await {
        match result {
            Ok(annotations) => views.push(annotations),
            Err(ProviderError::MissingCredentials(var)) => {
                return Err(ClueError::MissingCredentials(var));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Recognition failed for one of the captured views.");
            }
        }
    }
    if views.is_empty() {
        return Err(ClueError::AllSignalsFailed);
    }

    let signals = engine::extract_signals(&views);
    let guesses = engine::rank(engine::generate_guesses(&signals));
    tracing::info!(
        guesses = guesses.len(),
        languages = signals.languages.len(),
        landmarks = signals.landmarks.len(),
        "Inferred a clue from the captured views."
    );
    Ok(engine::render_clue(&guesses, &signals))
}
