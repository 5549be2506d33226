/// A geographic point in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Axis-aligned lat/lng box described by its north-east and south-west corners.
///
/// `LatLngBounds::inverted()` is the seed for unions: its north-east corner sits
/// at the minimum extremes and its south-west corner at the maximum, so the
/// first expansion always replaces both.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatLngBounds {
    pub north_east: LatLng,
    pub south_west: LatLng,
}

impl LatLngBounds {
    pub fn new(north_east: LatLng, south_west: LatLng) -> Self {
        LatLngBounds {
            north_east,
            south_west,
        }
    }

    /// Builds bounds from two arbitrary corners.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        LatLngBounds {
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
        }
    }

    pub const fn inverted() -> Self {
        LatLngBounds {
            north_east: LatLng::new(-90.0, -180.0),
            south_west: LatLng::new(90.0, 180.0),
        }
    }

    /// `false` while no bounds have been merged into an inverted seed.
    pub fn is_valid(&self) -> bool {
        self.north_east.lat >= self.south_west.lat && self.north_east.lng >= self.south_west.lng
    }

    pub fn expand(&mut self, other: &LatLngBounds) {
        if other.north_east.lat > self.north_east.lat {
            self.north_east.lat = other.north_east.lat;
        }
        if other.north_east.lng > self.north_east.lng {
            self.north_east.lng = other.north_east.lng;
        }
        if other.south_west.lat < self.south_west.lat {
            self.south_west.lat = other.south_west.lat;
        }
        if other.south_west.lng < self.south_west.lng {
            self.south_west.lng = other.south_west.lng;
        }
    }

    /// Union of every item, or `None` when the iterator is empty.
    pub fn union_all<'a>(items: impl IntoIterator<Item = &'a LatLngBounds>) -> Option<Self> {
        let mut out = LatLngBounds::inverted();
        for b in items {
            out.expand(b);
        }
        out.is_valid().then_some(out)
    }

    pub fn contains(&self, other: &LatLngBounds) -> bool {
        other.north_east.lat <= self.north_east.lat
            && other.north_east.lng <= self.north_east.lng
            && other.south_west.lat >= self.south_west.lat
            && other.south_west.lng >= self.south_west.lng
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north_east.lat + self.south_west.lat) * 0.5,
            (self.north_east.lng + self.south_west.lng) * 0.5,
        )
    }
}
