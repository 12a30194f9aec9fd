use log::debug;
use serde::{Deserialize, Serialize};

use crate::records::PollingPlace;

/// Mean Earth radius in kilometers, as used by the haversine evaluator.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A coordinate pair in decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]. The
/// evaluator does not validate this; non-finite inputs propagate NaN and
/// validation belongs to the boundary that produced the point.
#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Discriminator for the two kinds of geo-tagged records served by the
/// collaborating fetches.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Center,
    Table,
}

/// A geo-tagged record, as consumed by the nearest-match resolver.
///
/// Voting centers and table markers arrive as two separately-typed lists;
/// once tagged with a kind they are treated uniformly.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct LocatedRecord {
    pub id: String,
    pub name: String,
    pub kind: LocationKind,
    #[serde(flatten)]
    pub location: GeoPoint,
}

impl LocatedRecord {
    pub fn center(id: &str, name: &str, location: GeoPoint) -> LocatedRecord {
        LocatedRecord {
            id: id.to_string(),
            name: name.to_string(),
            kind: LocationKind::Center,
            location,
        }
    }

    pub fn table(id: &str, name: &str, location: GeoPoint) -> LocatedRecord {
        LocatedRecord {
            id: id.to_string(),
            name: name.to_string(),
            kind: LocationKind::Table,
            location,
        }
    }
}

impl From<&PollingPlace> for LocatedRecord {
    fn from(place: &PollingPlace) -> LocatedRecord {
        LocatedRecord::center(&place.id, &place.name, place.location)
    }
}

/// Great-circle distance between two points in kilometers, using the
/// haversine formula.
///
/// Returns 0 for identical points and is symmetric up to floating-point
/// rounding.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Returns the record closest to `reference`, scanning linearly.
///
/// Ties are broken by the first occurrence in input order, so the result is
/// deterministic for a fixed input. `None` when the reference point is
/// unavailable (e.g. the geolocation permission was denied), when the
/// candidate list is empty, or when no candidate has a finite distance.
///
/// The scan is O(n) and recomputed on every call; the expected record
/// counts are in the tens, so no caching or spatial index is warranted.
pub fn find_nearest<'a>(
    reference: Option<GeoPoint>,
    candidates: &'a [LocatedRecord],
) -> Option<&'a LocatedRecord> {
    let reference = reference?;
    let mut best: Option<(&LocatedRecord, f64)> = None;
    for record in candidates {
        let d = distance_km(reference, record.location);
        if !d.is_finite() {
            // Malformed coordinates in the input data; skip the record.
            debug!("find_nearest: skipping record {} (non-finite distance)", record.id);
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((record, d)),
        }
    }
    best.map(|(record, _)| record)
}
