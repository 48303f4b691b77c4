pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Search radius handed to the panorama metadata lookup. The candidate
/// coordinates are drawn blindly from large bounding boxes, so the radius has
/// to be generous for the lookup to hit anything at all.
pub const PANORAMA_SEARCH_RADIUS_METERS: u32 = 100_000;

pub const MAX_LOCATION_RESOLUTION_ATTEMPTS: usize = 10;
