use foundation::{LatLng, LatLngBounds};
use geo::BoundingRect;
use geo_types::Geometry;
use wkt::TryFromWkt;

use crate::error::FormatError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Line,
    Area,
    Collection,
}

impl GeometryKind {
    pub fn of(geometry: &Geometry<f64>) -> Self {
        match geometry {
            Geometry::Point(_) | Geometry::MultiPoint(_) => GeometryKind::Point,
            Geometry::Line(_) | Geometry::LineString(_) | Geometry::MultiLineString(_) => {
                GeometryKind::Line
            }
            Geometry::Polygon(_)
            | Geometry::MultiPolygon(_)
            | Geometry::Rect(_)
            | Geometry::Triangle(_) => GeometryKind::Area,
            Geometry::GeometryCollection(_) => GeometryKind::Collection,
        }
    }
}

/// A street shape decoded once at fetch time.
///
/// Coordinates follow WKT axis order: x is longitude, y is latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGeometry {
    pub kind: GeometryKind,
    pub geometry: Geometry<f64>,
    pub bounds: LatLngBounds,
    /// GeoJSON form handed to the map canvas.
    pub geojson: geojson::Geometry,
}

impl ParsedGeometry {
    pub fn is_point(&self) -> bool {
        self.kind == GeometryKind::Point
    }

    pub fn geojson_string(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string(&self.geojson)?)
    }
}

pub fn parse_wkt(text: &str) -> Result<ParsedGeometry, FormatError> {
    let geometry = Geometry::<f64>::try_from_wkt_str(text.trim())
        .map_err(|e| FormatError::Geometry(e.to_string()))?;

    let rect = geometry
        .bounding_rect()
        .ok_or(FormatError::EmptyGeometry)?;
    let bounds = LatLngBounds::from_corners(
        LatLng::new(rect.min().y, rect.min().x),
        LatLng::new(rect.max().y, rect.max().x),
    );

    let geojson = geojson::Geometry::new(geojson::Value::from(&geometry));

    Ok(ParsedGeometry {
        kind: GeometryKind::of(&geometry),
        geometry,
        bounds,
        geojson,
    })
}
