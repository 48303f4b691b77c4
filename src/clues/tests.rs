use crate::clues::consts::{INSUFFICIENT_SIGNAL_CLUE, MAX_RANKED_GUESSES};
use crate::clues::engine::{extract_signals, generate_guesses, rank, render_clue};
use crate::clues::filter::is_provenance_artifact;
use crate::clues::models::{ConfidenceTier, LocationGuess, SignalSet};
use crate::http::tests::{test_server_with, StubImagery, StubRecognition};
use crate::providers::models::{EntityAnnotation, TextAnnotation, ViewAnnotations};
use serde_json::Value;

fn text(description: &str, locale: Option<&str>) -> TextAnnotation {
    TextAnnotation {
        description: description.to_string(),
        locale: locale.map(str::to_string),
    }
}

fn entity(description: &str, score: f32) -> EntityAnnotation {
    EntityAnnotation {
        description: description.to_string(),
        score,
    }
}

#[test]
fn test_provenance_filter_strips_watermarks_and_years() {
    assert!(is_provenance_artifact("© 2023 Google"));
    assert!(is_provenance_artifact("Google"));
    assert!(is_provenance_artifact("Street View"));
    assert!(is_provenance_artifact("Image capture: May 2019"));
    assert!(is_provenance_artifact("2019"));
    assert!(is_provenance_artifact("Maps"));
    assert!(is_provenance_artifact("   "));
}

#[test]
fn test_provenance_filter_keeps_genuine_short_tokens() {
    assert!(!is_provenance_artifact("Oslo"));
    assert!(!is_provenance_artifact("Lisboa"));
    assert!(!is_provenance_artifact("Rua Augusta"));
    // Not in the bare-year range the provider stamps on imagery.
    assert!(!is_provenance_artifact("1884"));
}

#[test]
fn test_signals_are_fused_and_deduplicated_across_views() {
    let first_view = ViewAnnotations {
        text_annotations: vec![
            text("Bäckerei 2019", None),
            text("Bäckerei", Some("de")),
            text("2019", None),
        ],
        label_annotations: vec![entity("palm tree", 0.9), entity("sky", 0.5)],
        landmark_annotations: vec![entity("Brandenburg Gate", 0.6)],
        ..Default::default()
    };
    let second_view = ViewAnnotations {
        text_annotations: vec![text("Bäckerei", None), text("bäckerei", Some("de"))],
        landmark_annotations: vec![entity("Brandenburg Gate", 0.8)],
        logo_annotations: vec![entity("Renault", 0.9), entity("Faded", 0.2)],
        ..Default::default()
    };

    let signals = extract_signals(&[first_view, second_view]);

    assert_eq!(signals.languages, vec!["de"]);
    assert_eq!(signals.text_fragments, vec!["Bäckerei"]);
    assert_eq!(signals.labels, vec!["palm tree"]);
    assert_eq!(signals.logos, vec!["Renault"]);
    assert_eq!(signals.landmarks.len(), 1);
    assert_eq!(signals.landmarks[0].name, "Brandenburg Gate");
    assert_eq!(signals.landmarks[0].score, 0.8);
}

#[test]
fn test_a_language_contributes_a_capped_number_of_countries() {
    let signals = SignalSet {
        languages: vec!["ru".to_string()],
        ..Default::default()
    };

    let guesses = generate_guesses(&signals);

    let locations: Vec<&str> = guesses.iter().map(|g| g.location.as_str()).collect();
    assert_eq!(locations, vec!["Russia", "Belarus", "Kazakhstan"]);
    assert!(guesses
        .iter()
        .all(|g| g.confidence == ConfidenceTier::VeryHigh));
}

#[test]
fn test_low_scoring_landmarks_are_ignored() {
    let faint = SignalSet {
        landmarks: vec![crate::clues::models::Landmark {
            name: "Eiffel Tower".to_string(),
            score: 0.4,
        }],
        ..Default::default()
    };
    assert!(generate_guesses(&faint).is_empty());

    let clear = SignalSet {
        landmarks: vec![crate::clues::models::Landmark {
            name: "Eiffel Tower".to_string(),
            score: 0.6,
        }],
        ..Default::default()
    };
    let guesses = generate_guesses(&clear);
    assert_eq!(guesses.len(), 1);
    assert_eq!(guesses[0].location, "Eiffel Tower");
    assert_eq!(guesses[0].confidence, ConfidenceTier::VeryHigh);
}

#[test]
fn test_country_names_in_street_text_are_picked_up() {
    let signals = SignalSet {
        text_fragments: vec!["Willkommen in Deutschland".to_string()],
        ..Default::default()
    };

    let guesses = generate_guesses(&signals);

    assert_eq!(guesses.len(), 1);
    assert_eq!(guesses[0].location, "Germany");
    assert_eq!(guesses[0].confidence, ConfidenceTier::High);
}

#[test]
fn test_an_environment_group_contributes_one_guess() {
    let signals = SignalSet {
        labels: vec!["palm tree".to_string(), "tropical beach".to_string()],
        ..Default::default()
    };

    let guesses = generate_guesses(&signals);

    assert_eq!(guesses.len(), 1);
    assert_eq!(guesses[0].location, "a tropical region");
    assert_eq!(guesses[0].confidence, ConfidenceTier::Medium);
}

#[test]
fn test_ranking_orders_by_tier_dedupes_and_truncates() {
    let guess = |location: &str, region: Option<&str>, confidence| LocationGuess {
        location: location.to_string(),
        region: region.map(str::to_string),
        confidence,
        reasoning: String::new(),
    };
    let guesses = vec![
        guess("Germany", None, ConfidenceTier::Medium),
        guess("Eiffel Tower", None, ConfidenceTier::VeryHigh),
        guess("Germany", None, ConfidenceTier::High),
        guess("Canada", Some("Quebec"), ConfidenceTier::High),
        guess("Canada", None, ConfidenceTier::Medium),
        guess("a tropical region", None, ConfidenceTier::Medium),
        guess("Europe", None, ConfidenceTier::Medium),
    ];

    let ranked = rank(guesses);

    assert_eq!(ranked.len(), MAX_RANKED_GUESSES);
    // The duplicate keeps its first (medium) tier; (Canada, Quebec) and
    // (Canada, None) are distinct identities.
    assert_eq!(ranked[0].location, "Eiffel Tower");
    assert_eq!(ranked[1].location, "Canada");
    assert_eq!(ranked[1].region.as_deref(), Some("Quebec"));
    assert_eq!(ranked[2].location, "Germany");
    assert_eq!(ranked[2].confidence, ConfidenceTier::Medium);
    assert_eq!(ranked[3].location, "Canada");
    assert_eq!(ranked[3].region, None);
}

#[test]
fn test_rendering_with_no_signals_falls_back_to_the_fixed_message() {
    let clue = render_clue(&[], &SignalSet::default());
    assert_eq!(clue, INSUFFICIENT_SIGNAL_CLUE);
}

#[test]
fn test_watermark_only_text_yields_the_fallback_clue() {
    // The spec scenario: nothing but provider watermarks in the OCR output.
    let view = ViewAnnotations {
        text_annotations: vec![
            text("© 2023 Google\n2019", None),
            text("© 2023 Google", None),
            text("2019", None),
            text("Google", None),
        ],
        ..Default::default()
    };

    let signals = extract_signals(&[view]);
    let guesses = rank(generate_guesses(&signals));
    let clue = render_clue(&guesses, &signals);

    assert_eq!(clue, INSUFFICIENT_SIGNAL_CLUE);
}

#[test]
fn test_rendering_lists_guesses_text_and_surroundings() {
    let view = ViewAnnotations {
        text_annotations: vec![
            text("aggregate", None),
            text("Ristorante Roma", Some("it")),
        ],
        label_annotations: vec![entity("cobblestone", 0.9)],
        ..Default::default()
    };

    let signals = extract_signals(&[view]);
    let guesses = rank(generate_guesses(&signals));
    let clue = render_clue(&guesses, &signals);

    assert!(clue.contains("My best guesses"));
    assert!(clue.contains("Italy"));
    assert!(clue.contains("very high confidence"));
    assert!(clue.contains("\"Ristorante Roma\""));
    assert!(clue.contains("cobblestone"));
}

fn russian_street_view() -> ViewAnnotations {
    ViewAnnotations {
        text_annotations: vec![
            text("улица Ленина", None),
            text("улица", Some("ru")),
            text("Ленина", Some("ru")),
        ],
        ..Default::default()
    }
}

async fn started_game(server: &axum_test::TestServer) -> String {
    let response = server.post("/games").await;
    let body: Value = response.json();
    let game_id = body["gameId"].as_str().expect("No game id.").to_string();
    server.post(&format!("/games/{game_id}/start")).await;
    game_id
}

#[tokio::test]
async fn test_a_clue_is_served_once_per_round() {
    let server = test_server_with(
        StubImagery::resolving(),
        StubRecognition {
            annotations: Some(russian_street_view()),
        },
    );
    let game_id = started_game(&server).await;

    let response = server.post(&format!("/games/{game_id}/clue")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(false));
    let clue = body["clue"].as_str().expect("No clue text.");
    assert!(clue.contains("Russia"));

    let response = server.get(&format!("/games/{game_id}")).await;
    let body: Value = response.json();
    assert_eq!(body["state"]["clueUsed"], Value::Bool(true));

    let response = server.post(&format!("/games/{game_id}/clue")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "clueAlreadyUsed");
}

#[tokio::test]
async fn test_a_clue_cannot_be_requested_outside_a_round() {
    let server = test_server_with(
        StubImagery::resolving(),
        StubRecognition {
            annotations: Some(russian_street_view()),
        },
    );
    let response = server.post("/games").await;
    let body: Value = response.json();
    let game_id = body["gameId"].as_str().unwrap().to_string();

    let response = server.post(&format!("/games/{game_id}/clue")).await;

    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "roundNotActive");
}

#[tokio::test]
async fn test_a_failed_clue_keeps_the_allowance() {
    // Every recognition request fails.
    let server = test_server_with(StubImagery::resolving(), StubRecognition::default());
    let game_id = started_game(&server).await;

    let response = server.post(&format!("/games/{game_id}/clue")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "clueUnavailable");

    let response = server.get(&format!("/games/{game_id}")).await;
    let body: Value = response.json();
    assert_eq!(body["state"]["clueUsed"], Value::Bool(false));
    assert_eq!(body["state"]["clueRequested"], Value::Bool(false));

    // Retrying is allowed and fails the same way, not with `clueAlreadyUsed`.
    let response = server.post(&format!("/games/{game_id}/clue")).await;
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "clueUnavailable");
}

#[tokio::test]
async fn test_a_capture_failure_fails_only_the_clue_request() {
    let server = test_server_with(
        StubImagery {
            panorama: Some(crate::http::tests::STUB_PANORAMA),
            fail_render: true,
        },
        StubRecognition {
            annotations: Some(russian_street_view()),
        },
    );
    let game_id = started_game(&server).await;

    let response = server.post(&format!("/games/{game_id}/clue")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "imageCaptureFailed");

    // Round and score state are untouched.
    let response = server.get(&format!("/games/{game_id}")).await;
    let body: Value = response.json();
    assert_eq!(body["state"]["clueUsed"], Value::Bool(false));
    assert_eq!(body["state"]["isTimerRunning"], Value::Bool(true));
    assert_eq!(body["state"]["rounds"], Value::Array(vec![]));
}
