//! `geo` URIs (RFC 5870).
//!
//! # Grammar
//!
//! ```text
//! geo-URI = "geo:" lat "," lon ["," alt] [";crs=" crs] [";u=" unc] *(";" param)
//! ```
//!
//! `crs` and `u` may each appear once, in that order, before any other
//! parameter.

use once_cell::sync::Lazy;

use crate::constants::GEO_DEFAULT_CRS;
use crate::error::ValidationError;
use crate::grammar::{NUM, PNUM};
use crate::params::Parameters;
use crate::pattern::{Fields, Pattern};
use crate::typed::{TypedString, typed_string_impls};
use crate::uri::{UriGrammar, UriRecord};

static GEO_URI: Lazy<Pattern> = Lazy::new(|| {
    let path = format!(
        r"(?P<lat>-?\d{{1,2}}(?:\.\d+)?),(?P<lon>-?\d{{1,3}}(?:\.\d+)?)(?:,(?P<alt>{NUM}))?(?:;crs=(?-i:(?P<crs>{GEO_DEFAULT_CRS})))?(?:;u=(?P<unc>{PNUM}))?(?:;(?P<params>.*?))?"
    );
    UriGrammar::new()
        .scheme("geo")
        .authority(None)
        .path(Some(&path))
        .fragment(None)
        .build()
        .expect("geo URI grammar compiles")
});

/// A point geometry, shaped like a `GeoJSON` `Point`.
///
/// Coordinates are `[lon, lat]` or `[lon, lat, alt]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    /// Always `"Point"`
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub geometry_type: &'static str,
    /// Longitude, latitude and optional altitude
    pub coordinates: Vec<f64>,
}

/// A `geo` URI.
///
/// # Examples
///
/// ```
/// use typed_strings::{GeoUri, TypedString};
///
/// let geo = GeoUri::parse("geo:48.2010,16.3695,183").unwrap();
/// assert_eq!(geo.lat(), "48.2010");
/// assert_eq!(geo.lon(), "16.3695");
/// assert_eq!(geo.alt(), Some("183"));
/// assert_eq!(geo.crs(), "wsg84");
/// assert_eq!(geo.unc(), None);
///
/// let point = geo.point();
/// assert_eq!(point.coordinates, vec![16.3695, 48.2010, 183.0]);
/// ```
#[derive(Debug, Clone)]
pub struct GeoUri {
    uri: UriRecord,
    lat: String,
    lon: String,
    alt: Option<String>,
    crs: String,
    unc: Option<String>,
    params: Parameters,
    point: Point,
    normalized: String,
}

impl GeoUri {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.uri
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub fn lat(&self) -> &str {
        &self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub fn lon(&self) -> &str {
        &self.lon
    }

    /// Altitude in meters, if given.
    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    /// Coordinate reference system; `wsg84` unless stated otherwise.
    #[must_use]
    pub fn crs(&self) -> &str {
        &self.crs
    }

    /// Uncertainty in meters, if given.
    #[must_use]
    pub fn unc(&self) -> Option<&str> {
        self.unc.as_deref()
    }

    /// Parameters after `crs` and `u`.
    #[must_use]
    pub const fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns the location as a point geometry.
    #[must_use]
    pub const fn point(&self) -> &Point {
        &self.point
    }

    fn coordinate(input: &str, value: &str) -> Result<f64, ValidationError> {
        value.parse().map_err(|_| {
            ValidationError::content(input).with_detail(format!("'{value}' is not a number"))
        })
    }
}

impl TypedString for GeoUri {
    fn pattern() -> &'static Pattern {
        &GEO_URI
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(&mut fields);
        let lat = fields.require("lat", input)?;
        let lon = fields.require("lon", input)?;
        let alt = fields.take("alt");
        let crs = fields.take("crs").unwrap_or_else(|| {
            tracing::trace!(input, "defaulting geo crs");
            GEO_DEFAULT_CRS.to_string()
        });
        let unc = fields.take("unc");

        let params = match fields.take("params") {
            Some(segment) => Parameters::parse(&segment, ';')
                .map_err(|e| ValidationError::content(input).with_detail(e.to_string()))?,
            None => Parameters::new(),
        };
        if params.contains("crs") || params.contains("u") {
            return Err(ValidationError::content(input).with_detail(
                "'crs' and 'u' can only appear once, in that order, and before other parameters",
            ));
        }

        let mut coordinates = vec![
            Self::coordinate(input, &lon)?,
            Self::coordinate(input, &lat)?,
        ];
        if let Some(alt) = &alt {
            coordinates.push(Self::coordinate(input, alt)?);
        }
        let point = Point {
            geometry_type: "Point",
            coordinates,
        };

        let normalized = uri.to_string();
        Ok(Self {
            uri,
            lat,
            lon,
            alt,
            crs,
            unc,
            params,
            point,
            normalized,
        })
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(GeoUri);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_with_altitude() {
        let geo = GeoUri::parse("geo:48.2010,16.3695,183").unwrap();
        assert_eq!(geo.lat(), "48.2010");
        assert_eq!(geo.lon(), "16.3695");
        assert_eq!(geo.alt(), Some("183"));
        assert_eq!(geo.crs(), "wsg84");
        assert_eq!(geo.unc(), None);
        assert!(geo.params().is_empty());
        assert_eq!(geo.point().geometry_type, "Point");
        assert_eq!(geo.point().coordinates.len(), 3);
    }

    #[test]
    fn crs_uncertainty_and_params() {
        let geo = GeoUri::parse("geo:48.198634,16.371648;crs=wsg84;u=40;foo=bar").unwrap();
        assert_eq!(geo.crs(), "wsg84");
        assert_eq!(geo.unc(), Some("40"));
        assert_eq!(geo.params().get("foo"), Some("bar"));
        assert_eq!(geo.point().coordinates.len(), 2);
    }

    #[test]
    fn repeated_crs_or_u_is_a_content_error() {
        let err = GeoUri::parse("geo:48,16;crs=wsg84;u=1;crs=wsg84;u=1").unwrap_err();
        assert!(err.is_content());

        let err = GeoUri::parse("geo:48,16;u=1;u=2").unwrap_err();
        assert!(err.is_content());
    }

    #[test]
    fn crs_after_u_is_a_content_error() {
        let err = GeoUri::parse("geo:48,16;u=1;crs=wsg84").unwrap_err();
        assert!(err.is_content());
    }

    #[test]
    fn crs_after_other_params_is_a_content_error() {
        let err = GeoUri::parse("geo:48,16;foo=bar;crs=wsg84").unwrap_err();
        assert!(err.is_content());
    }

    #[test]
    fn crs_value_is_case_sensitive() {
        let err = GeoUri::parse("geo:48,16;crs=WSG84").unwrap_err();
        assert!(err.is_content());
    }

    #[test]
    fn bad_coordinates_are_format_errors() {
        assert!(GeoUri::parse("geo:481,16").unwrap_err().is_format());
        assert!(GeoUri::parse("geo:48").unwrap_err().is_format());
        assert!(GeoUri::parse("geo://48,16").unwrap_err().is_format());
        assert!(GeoUri::parse("geo:48,16#here").unwrap_err().is_format());
    }

    #[test]
    fn scheme_case_is_folded() {
        let geo = GeoUri::parse("GEO:-33.5,151.25").unwrap();
        assert_eq!(geo.as_str(), "geo:-33.5,151.25");
        assert_eq!(geo.point().coordinates, vec![151.25, -33.5]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn point_serializes_as_geojson() {
        let geo = GeoUri::parse("geo:1.5,2.5").unwrap();
        let json = serde_json::to_value(geo.point()).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Point", "coordinates": [2.5, 1.5]}));
    }
}
