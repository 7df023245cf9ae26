use std::fmt;

/// Errors raised while configuring or driving a map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NonFiniteCoordinate,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
    ZoomOutOfRange { zoom: u8, max: u8 },
    MalformedUrlTemplate { layer: String, missing: &'static str },
    OpacityOutOfRange { layer: String, opacity: f32 },
    MissingAttribution(String),
    ImageryBelowBase(String),
    DuplicateZIndex { layer: String, z_index: i32 },
    DuplicateLayer(String),
    UnknownLayer(String),
    BaseRequired(String),
    StaleSurface { requested: u64, current: Option<u64> },
    NotReady,
    LibraryUnavailable(String),
}

impl MapError {
    /// Configuration errors come from bad construction input; the rest are
    /// misuse of a live surface.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::NonFiniteCoordinate
                | Self::LatitudeOutOfRange(_)
                | Self::LongitudeOutOfRange(_)
                | Self::ZoomOutOfRange { .. }
                | Self::MalformedUrlTemplate { .. }
                | Self::OpacityOutOfRange { .. }
                | Self::MissingAttribution(_)
                | Self::ImageryBelowBase(_)
                | Self::DuplicateZIndex { .. }
                | Self::DuplicateLayer(_)
        )
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate => write!(f, "coordinates must be finite numbers"),
            Self::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} is outside [-90, 90]")
            }
            Self::LongitudeOutOfRange(lng) => {
                write!(f, "longitude {lng} is outside [-180, 180]")
            }
            Self::ZoomOutOfRange { zoom, max } => {
                write!(f, "zoom {zoom} is outside [0, {max}]")
            }
            Self::MalformedUrlTemplate { layer, missing } => {
                write!(f, "tile layer '{layer}' url template is missing {missing}")
            }
            Self::OpacityOutOfRange { layer, opacity } => {
                write!(f, "tile layer '{layer}' opacity {opacity} is outside [0, 1]")
            }
            Self::MissingAttribution(layer) => {
                write!(f, "base layer '{layer}' requires an attribution")
            }
            Self::ImageryBelowBase(layer) => {
                write!(f, "imagery layer '{layer}' must stack above every base layer")
            }
            Self::DuplicateZIndex { layer, z_index } => {
                write!(f, "imagery layer '{layer}' reuses z-index {z_index}")
            }
            Self::DuplicateLayer(name) => write!(f, "layer '{name}' is registered twice"),
            Self::UnknownLayer(name) => write!(f, "no layer named '{name}'"),
            Self::BaseRequired(name) => {
                write!(f, "base layer '{name}' cannot be hidden; select another base instead")
            }
            Self::StaleSurface { requested, current } => match current {
                Some(current) => write!(
                    f,
                    "surface #{requested} was destroyed; current surface is #{current}"
                ),
                None => write!(f, "surface #{requested} was destroyed; no surface is mounted"),
            },
            Self::NotReady => write!(f, "map surface is not ready"),
            Self::LibraryUnavailable(reason) => {
                write!(f, "map rendering library failed to load: {reason}")
            }
        }
    }
}

impl std::error::Error for MapError {}
