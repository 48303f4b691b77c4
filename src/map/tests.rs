use crate::map::consts::MAX_LOCATION_RESOLUTION_ATTEMPTS;
use crate::map::models::LatLng;
use crate::map::sampler::{self, LocationResolutionError, REGIONS};
use crate::map::scoring::points_for;
use crate::map::distance_km;
use crate::providers::env::GOOGLE_MAPS_API_KEY;
use crate::providers::imagery::ImageryProvider;
use crate::providers::models::{ProviderError, ViewSpec};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

const PARIS: LatLng = LatLng {
    lat: 48.8566,
    lng: 2.3522,
};
const BERLIN: LatLng = LatLng {
    lat: 52.52,
    lng: 13.405,
};

#[test]
fn test_distance_to_self_is_zero() {
    assert_eq!(distance_km(PARIS, PARIS), 0);
}

#[test]
fn test_distance_is_symmetric() {
    assert_eq!(distance_km(PARIS, BERLIN), distance_km(BERLIN, PARIS));
}

#[test]
fn test_distance_paris_berlin_is_plausible() {
    let distance = distance_km(PARIS, BERLIN);
    assert!((850..=900).contains(&distance), "got {distance} km");
}

#[test]
fn test_short_distances_round_up_to_one_km() {
    // Roughly 55 meters apart.
    let a = LatLng { lat: 0.0, lng: 0.0 };
    let b = LatLng {
        lat: 0.0005,
        lng: 0.0,
    };
    assert_eq!(distance_km(a, b), 1);
}

#[test]
fn test_points_bracket_values() {
    assert_eq!(points_for(0), 0);
    assert_eq!(points_for(1), 10_000);
    assert_eq!(points_for(2), 10_000);
    assert_eq!(points_for(3), 7_000);
    assert_eq!(points_for(5), 7_000);
    assert_eq!(points_for(50), 4_000);
    assert_eq!(points_for(200), 3_000);
    assert_eq!(points_for(800), 1_000);
    assert_eq!(points_for(1300), 500);
    assert_eq!(points_for(3200), 100);
    assert_eq!(points_for(3201), 50);
    assert_eq!(points_for(6000), 25);
    assert_eq!(points_for(6001), 0);
    assert_eq!(points_for(20_015), 0);
}

#[test]
fn test_points_never_increase_with_distance() {
    for distance in 2..=7000 {
        assert!(
            points_for(distance) <= points_for(distance - 1),
            "points increased between {} and {} km",
            distance - 1,
            distance
        );
    }
}

#[test]
fn test_sampled_candidates_stay_inside_the_region_boxes() {
    for _ in 0..500 {
        let candidate = sampler::sample_candidate();
        let in_some_box = REGIONS.iter().any(|region| {
            candidate.lat >= region.min_lat
                && candidate.lat <= region.max_lat
                && candidate.lng >= region.min_lng
                && candidate.lng <= region.max_lng
        });
        assert!(
            in_some_box,
            "candidate {}, {} is outside every region",
            candidate.lat, candidate.lng
        );
    }
}

struct CountingImagery {
    calls: AtomicUsize,
    outcome: LookupOutcome,
}

enum LookupOutcome {
    Hit(LatLng),
    Miss,
    NoCredentials,
}

impl CountingImagery {
    fn new(outcome: LookupOutcome) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome,
        }
    }
}

#[async_trait]
impl ImageryProvider for CountingImagery {
    async fn find_nearby_panorama(
        &self,
        _candidate: LatLng,
        _radius_meters: u32,
    ) -> Result<Option<LatLng>, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match self.outcome {
            LookupOutcome::Hit(location) => Ok(Some(location)),
            LookupOutcome::Miss => Ok(None),
            LookupOutcome::NoCredentials => {
                Err(ProviderError::MissingCredentials(GOOGLE_MAPS_API_KEY))
            }
        }
    }

    async fn render_view(&self, _view: &ViewSpec) -> Result<Vec<u8>, ProviderError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_resolution_returns_the_first_hit() {
    let imagery = CountingImagery::new(LookupOutcome::Hit(PARIS));

    let resolved = sampler::resolve_valid_location(&imagery).await.unwrap();

    assert_eq!(resolved, PARIS);
    assert_eq!(imagery.calls.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn test_resolution_gives_up_after_the_attempt_cap() {
    let imagery = CountingImagery::new(LookupOutcome::Miss);

    let result = sampler::resolve_valid_location(&imagery).await;

    assert!(matches!(
        result,
        Err(LocationResolutionError::AttemptsExhausted(attempts))
            if attempts == MAX_LOCATION_RESOLUTION_ATTEMPTS
    ));
    assert_eq!(
        imagery.calls.load(Ordering::Relaxed),
        MAX_LOCATION_RESOLUTION_ATTEMPTS
    );
}

#[tokio::test]
async fn test_resolution_surfaces_missing_credentials_without_retrying() {
    let imagery = CountingImagery::new(LookupOutcome::NoCredentials);

    let result = sampler::resolve_valid_location(&imagery).await;

    assert!(matches!(
        result,
        Err(LocationResolutionError::MissingCredentials(_))
    ));
    assert_eq!(imagery.calls.load(Ordering::Relaxed), 1);
}
