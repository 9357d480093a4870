use crate::models::{Location, Profile};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance in kilometers between two locations
#[inline]
pub fn location_distance(from: &Location, to: &Location) -> f64 {
    haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Fill in the candidate's pairwise distance from both profiles' coordinates
///
/// An explicit `distance` on the candidate always wins. When either side has
/// no location the candidate is left untouched and scoring falls back to a
/// distance of 0.
pub fn resolve_distance(user: &Profile, candidate: &mut Profile) {
    if candidate.distance.is_some() {
        return;
    }

    if let (Some(from), Some(to)) = (user.location.as_ref(), candidate.location.as_ref()) {
        candidate.distance = Some(location_distance(from, to));
    }
}
