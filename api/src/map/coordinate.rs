use std::fmt;

use super::error::MapError;

/// Highest zoom level any of the built-in tile sources serves.
pub const MAX_ZOOM: u8 = 19;

/// A validated WGS84 position. Out-of-range input is rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, MapError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(MapError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(MapError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(MapError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Builds a coordinate from a literal known to be in range.
    pub(crate) const fn from_literal(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Center and zoom of a map surface. Replaced wholesale, never patched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Coordinate,
    zoom: u8,
}

impl Viewport {
    pub const DEFAULT_CENTER: Coordinate = Coordinate::from_literal(46.49, -81.01);
    pub const DEFAULT_ZOOM: u8 = 6;

    pub fn new(center: Coordinate, zoom: u8) -> Result<Self, MapError> {
        if zoom > MAX_ZOOM {
            return Err(MapError::ZoomOutOfRange { zoom, max: MAX_ZOOM });
        }
        Ok(Self { center, zoom })
    }

    pub(crate) const fn from_literal(center: Coordinate, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// Validates raw construction parameters in one step.
    pub fn from_parts(lat: f64, lng: f64, zoom: u8) -> Result<Self, MapError> {
        Self::new(Coordinate::new(lat, lng)?, zoom)
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Identity of the surface built for this viewport. Any change in latitude,
    /// longitude or zoom yields a different key.
    /// Adding 0.0 folds -0.0 into 0.0 so both spell the same key.
    pub fn key(&self) -> ViewportKey {
        let (lat, lng) = (self.center.lat + 0.0, self.center.lng + 0.0);
        ViewportKey(format!("{lat}-{lng}-{}", self.zoom))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Self::DEFAULT_CENTER,
            zoom: Self::DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewportKey(String);

impl ViewportKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
