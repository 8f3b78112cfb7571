//! Validated query parameters for the two clinic endpoints.
//!
//! All parsing works on optional raw strings so HTTP handlers can hand
//! over whatever the query string contained and let this module decide
//! between defaults and rejection.

use std::ops::RangeInclusive;

use crate::error::ValidationError;
use crate::geo::BoundingBox;

/// Rounding precision accepted by the clustering endpoint, in decimal
/// digits of latitude/longitude.
pub const PRECISION_RANGE: RangeInclusive<i64> = 0..=6;
pub const DEFAULT_PRECISION: i64 = 2;

/// Row cap for the clustering endpoint.
pub const CLUSTER_LIMIT_RANGE: RangeInclusive<i64> = 50..=10_000;
pub const DEFAULT_CLUSTER_LIMIT: i64 = 1_200;

/// Row cap for the listing endpoint.
pub const LIST_LIMIT_RANGE: RangeInclusive<i64> = 50..=5_000;
pub const DEFAULT_LIST_LIMIT: i64 = 800;

/// Parses a required finite number.
///
/// Missing values, empty strings and anything that does not parse as a
/// finite `f64` (including `NaN` and infinities, which Rust's float
/// parser would otherwise happily accept) are rejected with the
/// parameter name in the message.
pub fn required_number(value: Option<&str>, name: &str) -> Result<f64, ValidationError> {
    let raw = value.ok_or_else(|| ValidationError::InvalidNumber(name.to_owned()))?;
    let number: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(name.to_owned()))?;
    if !number.is_finite() {
        return Err(ValidationError::InvalidNumber(name.to_owned()));
    }
    Ok(number)
}

/// Parses an optional integer and clamps it into `range`.
///
/// A missing value falls back to `default`. A present value must be a
/// finite number with no fractional part: `"2.0"` is accepted as `2`,
/// `"3.5"` and `"abc"` are rejected. Out of range values are clamped,
/// never rejected.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn integer_clamped(
    value: Option<&str>,
    name: &str,
    default: i64,
    range: RangeInclusive<i64>,
) -> Result<i64, ValidationError> {
    let Some(raw) = value else {
        return Ok(default.clamp(*range.start(), *range.end()));
    };
    let number: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(name.to_owned()))?;
    if !number.is_finite() {
        return Err(ValidationError::InvalidNumber(name.to_owned()));
    }
    if number.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger(name.to_owned()));
    }
    let clamped = number.clamp(*range.start() as f64, *range.end() as f64);
    Ok(clamped as i64)
}

/// Validated input for the clustering endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterQuery {
    pub bbox: BoundingBox,
    pub precision: i64,
    pub limit: i64,
}

impl ClusterQuery {
    /// Builds a query from the raw `s`, `w`, `n`, `e`, `precision` and
    /// `limit` query string values.
    pub fn parse(
        south: Option<&str>,
        west: Option<&str>,
        north: Option<&str>,
        east: Option<&str>,
        precision: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            bbox: BoundingBox::new(
                required_number(south, "s")?,
                required_number(west, "w")?,
                required_number(north, "n")?,
                required_number(east, "e")?,
            ),
            precision: integer_clamped(precision, "precision", DEFAULT_PRECISION, PRECISION_RANGE)?,
            limit: integer_clamped(limit, "limit", DEFAULT_CLUSTER_LIMIT, CLUSTER_LIMIT_RANGE)?,
        })
    }
}

/// Validated input for the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListQuery {
    pub bbox: BoundingBox,
    pub limit: i64,
}

impl ListQuery {
    /// Builds a query from the raw `bbox` and `limit` query string values.
    pub fn parse(bbox: Option<&str>, limit: Option<&str>) -> Result<Self, ValidationError> {
        let bbox = bbox.ok_or(ValidationError::MalformedBbox)?.parse()?;
        Ok(Self {
            bbox,
            limit: integer_clamped(limit, "limit", DEFAULT_LIST_LIMIT, LIST_LIMIT_RANGE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CLUSTER_LIMIT_RANGE, ClusterQuery, DEFAULT_CLUSTER_LIMIT, DEFAULT_LIST_LIMIT,
        DEFAULT_PRECISION, LIST_LIMIT_RANGE, ListQuery, PRECISION_RANGE, integer_clamped,
        required_number,
    };
    use crate::error::ValidationError;
    use crate::geo::BoundingBox;

    #[test]
    fn should_parse_plain_and_signed_numbers() {
        assert_eq!(required_number(Some("19.43"), "s").unwrap(), 19.43);
        assert_eq!(required_number(Some("-99.13"), "w").unwrap(), -99.13);
        assert_eq!(required_number(Some("0"), "n").unwrap(), 0.0);
    }

    #[test]
    fn should_reject_missing_number() {
        let err = required_number(None, "s").unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("s".into()));
        assert_eq!(err.to_string(), "invalid parameter: s");
    }

    #[test]
    fn should_reject_garbage_number() {
        let err = required_number(Some("abc"), "w").unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("w".into()));
    }

    #[test]
    fn should_reject_empty_number() {
        let err = required_number(Some(""), "n").unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("n".into()));
    }

    #[test]
    fn should_reject_nan_and_infinity() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let err = required_number(Some(raw), "e").unwrap_err();
            assert_eq!(err, ValidationError::InvalidNumber("e".into()), "{raw}");
        }
    }

    #[test]
    fn should_default_when_integer_is_missing() {
        let got = integer_clamped(None, "precision", DEFAULT_PRECISION, PRECISION_RANGE).unwrap();
        assert_eq!(got, 2);
    }

    #[test]
    fn should_clamp_integer_below_range() {
        let got = integer_clamped(Some("-1"), "precision", DEFAULT_PRECISION, PRECISION_RANGE)
            .unwrap();
        assert_eq!(got, 0);
    }

    #[test]
    fn should_clamp_integer_above_range() {
        let got =
            integer_clamped(Some("9"), "precision", DEFAULT_PRECISION, PRECISION_RANGE).unwrap();
        assert_eq!(got, 6);
    }

    #[test]
    fn should_accept_integer_valued_decimal() {
        let got =
            integer_clamped(Some("2.0"), "precision", DEFAULT_PRECISION, PRECISION_RANGE).unwrap();
        assert_eq!(got, 2);
    }

    #[test]
    fn should_reject_fractional_integer() {
        let err = integer_clamped(Some("3.5"), "precision", DEFAULT_PRECISION, PRECISION_RANGE)
            .unwrap_err();
        assert_eq!(err, ValidationError::NotAnInteger("precision".into()));
        assert_eq!(err.to_string(), "parameter precision must be an integer");
    }

    #[test]
    fn should_reject_non_numeric_integer() {
        let err = integer_clamped(Some("many"), "limit", DEFAULT_CLUSTER_LIMIT, CLUSTER_LIMIT_RANGE)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("limit".into()));
    }

    #[test]
    fn should_reject_infinite_integer() {
        let err = integer_clamped(Some("inf"), "limit", DEFAULT_CLUSTER_LIMIT, CLUSTER_LIMIT_RANGE)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("limit".into()));
    }

    #[test]
    fn should_clamp_cluster_limit_to_its_range() {
        let low = integer_clamped(Some("1"), "limit", DEFAULT_CLUSTER_LIMIT, CLUSTER_LIMIT_RANGE)
            .unwrap();
        let high =
            integer_clamped(Some("50000"), "limit", DEFAULT_CLUSTER_LIMIT, CLUSTER_LIMIT_RANGE)
                .unwrap();
        assert_eq!(low, 50);
        assert_eq!(high, 10_000);
    }

    #[test]
    fn should_build_cluster_query_with_defaults() {
        let query = ClusterQuery::parse(
            Some("19.2"),
            Some("-99.3"),
            Some("19.6"),
            Some("-98.9"),
            None,
            None,
        )
        .unwrap();
        assert_eq!(query.bbox, BoundingBox::new(19.2, -99.3, 19.6, -98.9));
        assert_eq!(query.precision, DEFAULT_PRECISION);
        assert_eq!(query.limit, DEFAULT_CLUSTER_LIMIT);
    }

    #[test]
    fn should_name_the_offending_corner() {
        let err = ClusterQuery::parse(
            Some("19.2"),
            Some("-99.3"),
            Some("19.6"),
            None,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("e".into()));
    }

    #[test]
    fn should_build_list_query_with_defaults() {
        let query = ListQuery::parse(Some("19.2,-99.3,19.6,-98.9"), None).unwrap();
        assert_eq!(query.bbox, BoundingBox::new(19.2, -99.3, 19.6, -98.9));
        assert_eq!(query.limit, DEFAULT_LIST_LIMIT);
    }

    #[test]
    fn should_clamp_list_limit_to_its_range() {
        let query = ListQuery::parse(Some("1,2,3,4"), Some("50000")).unwrap();
        assert_eq!(query.limit, 5_000);
        let query = ListQuery::parse(Some("1,2,3,4"), Some("10")).unwrap();
        assert_eq!(query.limit, 50);
        assert!(LIST_LIMIT_RANGE.contains(&query.limit));
    }

    #[test]
    fn should_reject_missing_bbox() {
        let err = ListQuery::parse(None, None).unwrap_err();
        assert_eq!(err, ValidationError::MalformedBbox);
        assert_eq!(err.to_string(), "bbox must be provided as \"s,w,n,e\"");
    }

    #[test]
    fn should_reject_malformed_bbox() {
        let err = ListQuery::parse(Some("1,2,3"), None).unwrap_err();
        assert_eq!(err, ValidationError::MalformedBbox);
    }
}
