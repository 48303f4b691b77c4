use crate::clues::consts::{
    INSUFFICIENT_SIGNAL_CLUE, LABEL_SCORE_FLOOR, LANDMARK_SCORE_FLOOR, LOGO_SCORE_FLOOR,
    MAX_LABELS_IN_SUMMARY, MAX_RANKED_GUESSES, MAX_TEXT_FRAGMENTS_IN_CLUE,
};
use crate::clues::filter;
use crate::clues::models::{ConfidenceTier, Landmark, LocationGuess, SignalSet};
use crate::clues::ruleset::RULESET;
use crate::providers::models::ViewAnnotations;
use std::collections::HashSet;

/// Fuses the annotations of every successfully analyzed view into one
/// deduplicated signal set.
pub fn extract_signals(views: &[ViewAnnotations]) -> SignalSet {
    let mut signals = SignalSet::default();
    let mut seen_fragments = HashSet::new();

    for view in views {
        // The first text annotation is the provider's aggregate of the whole
        // frame; the individual fragments follow it.
        for text in view.text_annotations.iter().skip(1) {
            if let Some(locale) = &text.locale {
                let code = primary_language_subtag(locale);
                if !code.is_empty() && !signals.languages.iter().any(|lang| lang == &code) {
                    signals.languages.push(code);
                }
            }
            if filter::is_provenance_artifact(&text.description) {
                continue;
            }
            let fragment = text.description.trim().to_string();
            if seen_fragments.insert(fragment.to_lowercase()) {
                signals.text_fragments.push(fragment);
            }
        }

        for landmark in &view.landmark_annotations {
            match signals
                .landmarks
                .iter_mut()
                .find(|known| known.name == landmark.description)
            {
                Some(known) => known.score = known.score.max(landmark.score),
                None => signals.landmarks.push(Landmark {
                    name: landmark.description.clone(),
                    score: landmark.score,
                }),
            }
        }

        let label_terms = view
            .label_annotations
            .iter()
            .filter(|label| label.score >= LABEL_SCORE_FLOOR)
            .map(|label| label.description.to_lowercase());
        let object_terms = view
            .localized_object_annotations
            .iter()
            .filter(|object| object.score >= LABEL_SCORE_FLOOR)
            .map(|object| object.name.to_lowercase());
        for term in label_terms.chain(object_terms) {
            if !signals.labels.contains(&term) {
                signals.labels.push(term);
            }
        }

        for logo in &view.logo_annotations {
            if logo.score >= LOGO_SCORE_FLOOR && !signals.logos.contains(&logo.description) {
                signals.logos.push(logo.description.clone());
            }
        }
    }

    signals
}

/// Runs every heuristic over the signal set. Landmark guesses come first so
/// that ranking's first-occurrence dedup prefers them.
pub fn generate_guesses(signals: &SignalSet) -> Vec<LocationGuess> {
    let mut guesses = Vec::new();

    for landmark in &signals.landmarks {
        if landmark.score >= LANDMARK_SCORE_FLOOR {
            guesses.push(LocationGuess {
                location: landmark.name.clone(),
                region: None,
                confidence: ConfidenceTier::VeryHigh,
                reasoning: format!("The view matches the landmark \"{}\".", landmark.name),
            });
        }
    }

    for rule in RULESET {
        if rule.matcher.matches(signals) {
            for candidate in rule.candidates.iter().take(rule.max_candidates) {
                guesses.push(LocationGuess {
                    location: candidate.location.to_string(),
                    region: candidate.region.map(str::to_string),
                    confidence: rule.confidence,
                    reasoning: rule.reasoning.to_string(),
                });
            }
        }
    }

    guesses
}

/// Dedupes by (location, region) keeping the first occurrence, orders by
/// confidence tier descending, and truncates to the display cap. The sort is
/// stable, so within a tier the heuristic order above is preserved.
pub fn rank(mut guesses: Vec<LocationGuess>) -> Vec<LocationGuess> {
    let mut seen = HashSet::new();
    guesses.retain(|guess| seen.insert((guess.location.clone(), guess.region.clone())));
    guesses.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    guesses.truncate(MAX_RANKED_GUESSES);
    guesses
}

/// Formats the ranked guesses and supporting observations into the clue text.
/// Falls back to reporting raw observations when no guess was produced, and
/// to a fixed message when there was nothing to observe at all. Never returns
/// an empty string.
pub fn render_clue(guesses: &[LocationGuess], signals: &SignalSet) -> String {
    let mut lines = Vec::new();

    if guesses.is_empty() {
        if signals.text_fragments.is_empty() && signals.labels.is_empty() {
            return INSUFFICIENT_SIGNAL_CLUE.to_string();
        }
        lines.push(
            "I could not match this place against anything I know, but here is what I can see."
                .to_string(),
        );
    } else {
        lines.push("My best guesses for this location:".to_string());
        for (index, guess) in guesses.iter().enumerate() {
            let target = match &guess.region {
                Some(region) => format!("{} ({})", guess.location, region),
                None => guess.location.clone(),
            };
            lines.push(format!(
                "{}. {target} [{} confidence]: {}",
                index + 1,
                guess.confidence,
                guess.reasoning
            ));
        }
    }

    if !signals.text_fragments.is_empty() {
        let sample = signals
            .text_fragments
            .iter()
            .take(MAX_TEXT_FRAGMENTS_IN_CLUE)
            .map(|fragment| format!("\"{fragment}\""))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Text spotted nearby: {sample}."));
    }

    if !signals.labels.is_empty() {
        let summary = signals
            .labels
            .iter()
            .take(MAX_LABELS_IN_SUMMARY)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Around you: {summary}."));
    }

    lines.join("\n")
}

fn primary_language_subtag(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
