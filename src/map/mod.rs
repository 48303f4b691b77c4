use consts::EARTH_RADIUS_KM;
use models::LatLng;

pub mod consts;
pub mod models;
pub mod sampler;
pub mod scoring;
#[cfg(test)]
mod tests;

/// Great-circle distance between two points in whole kilometers, rounded up.
/// A guess 100 meters off therefore reports as 1 km; only an exact match
/// reports as 0.
pub fn distance_km(a: LatLng, b: LatLng) -> u64 {
    let phi_1 = a.lat.to_radians();
    let phi_2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (h.sqrt().atan2((1.0 - h).sqrt()));
    (EARTH_RADIUS_KM * c).ceil() as u64
}
