use crate::map::consts::{MAX_LOCATION_RESOLUTION_ATTEMPTS, PANORAMA_SEARCH_RADIUS_METERS};
use crate::map::models::LatLng;
use crate::providers::imagery::ImageryProvider;
use crate::providers::models::ProviderError;
use rand::Rng;
use thiserror::Error;

/// A named bounding box with a draw weight. Weights across `REGIONS` sum
/// to 1.0.
pub struct Region {
    pub name: &'static str,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    pub weight: f64,
}

/// Skewed towards the parts of the world with dense street-level coverage,
/// with a low-weight whole-world box as the long tail.
pub const REGIONS: [Region; 7] = [
    Region {
        name: "North America",
        min_lat: 25.0,
        max_lat: 60.0,
        min_lng: -130.0,
        max_lng: -60.0,
        weight: 0.25,
    },
    Region {
        name: "Europe",
        min_lat: 35.0,
        max_lat: 70.0,
        min_lng: -10.0,
        max_lng: 40.0,
        weight: 0.25,
    },
    Region {
        name: "East Asia",
        min_lat: 20.0,
        max_lat: 50.0,
        min_lng: 100.0,
        max_lng: 145.0,
        weight: 0.15,
    },
    Region {
        name: "Oceania",
        min_lat: -45.0,
        max_lat: -10.0,
        min_lng: 110.0,
        max_lng: 180.0,
        weight: 0.1,
    },
    Region {
        name: "South America",
        min_lat: -55.0,
        max_lat: 15.0,
        min_lng: -80.0,
        max_lng: -35.0,
        weight: 0.1,
    },
    Region {
        name: "Southeast Asia",
        min_lat: -10.0,
        max_lat: 25.0,
        min_lng: 95.0,
        max_lng: 140.0,
        weight: 0.1,
    },
    Region {
        name: "global fallback",
        min_lat: -60.0,
        max_lat: 70.0,
        min_lng: -180.0,
        max_lng: 180.0,
        weight: 0.05,
    },
];

#[derive(Debug, Error)]
pub enum LocationResolutionError {
    #[error("missing provider credentials: the `{0}` environment variable is not set")]
    MissingCredentials(&'static str),
    #[error("no panorama could be resolved after {0} attempts")]
    AttemptsExhausted(usize),
}

pub fn sample_candidate() -> LatLng {
    let mut rng = rand::thread_rng();
    let draw: f64 = rng.gen();
    let mut cumulative_weight = 0.0;
    let mut selected = &REGIONS[REGIONS.len() - 1];
    for region in &REGIONS {
        cumulative_weight += region.weight;
        if draw <= cumulative_weight {
            selected = region;
            break;
        }
    }
    LatLng {
        lat: rng.gen_range(selected.min_lat..selected.max_lat),
        lng: rng.gen_range(selected.min_lng..selected.max_lng),
    }
}

/// Draws candidates until one resolves to an actual panorama. The retry
/// budget is capped so a provider outage or a dry region mix fails loudly
/// instead of looping forever.
pub async fn resolve_valid_location(
    imagery: &dyn ImageryProvider,
) -> Result<LatLng, LocationResolutionError> {
    for attempt in 1..=MAX_LOCATION_RESOLUTION_ATTEMPTS {
        let candidate = sample_candidate();
        match imagery
            .find_nearby_panorama(candidate, PANORAMA_SEARCH_RADIUS_METERS)
            .await
        {
            Ok(Some(location)) => return Ok(location),
            Ok(None) => {
                tracing::info!(
                    attempt,
                    lat = candidate.lat,
                    lng = candidate.lng,
                    "No panorama near the candidate, redrawing."
                );
            }
            Err(ProviderError::MissingCredentials(var)) => {
                return Err(LocationResolutionError::MissingCredentials(var));
            }
            Err(err) => {
                tracing::warn!(attempt, error = %err, "Panorama lookup failed, redrawing.");
            }
        }
    }
    Err(LocationResolutionError::AttemptsExhausted(
        MAX_LOCATION_RESOLUTION_ATTEMPTS,
    ))
}
