use std::str::FromStr;

use crate::error::ValidationError;
use crate::query;

/// Geographic bounding box in WGS84 degrees.
///
/// Coordinates are kept exactly as the caller supplied them: the box is
/// not normalized and ordering is deliberately not enforced, so a caller
/// may send `south > north` and simply get an empty result from storage.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }
}

impl FromStr for BoundingBox {
    type Err = ValidationError;

    /// Parses the combined `"s,w,n,e"` form used by the listing endpoint.
    ///
    /// Exactly four comma separated fields, each a finite number. Empty
    /// fields (`"1,,3,4"`) fail the numeric check, not the shape check.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let &[south, west, north, east] = fields.as_slice() else {
            return Err(ValidationError::MalformedBbox);
        };
        Ok(Self {
            south: query::required_number(Some(south), "bbox.s")?,
            west: query::required_number(Some(west), "bbox.w")?,
            north: query::required_number(Some(north), "bbox.n")?,
            east: query::required_number(Some(east), "bbox.e")?,
        })
    }
}
