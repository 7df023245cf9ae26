//! Map overlay composition: tile sources, demo risk markers, layer toggles,
//! and the mount lifecycle of the interactive surface.

pub mod coordinate;
pub mod error;
pub mod layers;
pub mod risk;
pub mod tiles;
pub mod viewport;

pub use coordinate::{Coordinate, Viewport, ViewportKey, MAX_ZOOM};
pub use error::MapError;
pub use layers::{LayerContent, LayerControl, LayerEntry, LayerRole, RISK_OVERLAY_LAYER};
pub use risk::{
    classify_region, derive_risk_points, risk_markers, MarkerStyle, Region, RiskMarker, RiskPoint,
    SeverityBucket,
};
pub use tiles::{TileLayerKind, TileLayerSpec, TileSourceRegistry};
pub use viewport::{MapViewport, MountPhase, Rendered, SurfacePlan, SurfaceSize};

/// A demo section of the landing page and the view it opens on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionPreset {
    pub id: &'static str,
    pub title: &'static str,
    pub viewport: Viewport,
}

impl RegionPreset {
    pub fn all() -> [RegionPreset; 2] {
        [
            RegionPreset {
                id: "ontario",
                title: "Northern Ontario Nickel Belt",
                viewport: Viewport::default(),
            },
            RegionPreset {
                id: "nwt",
                title: "NWT Lithium",
                viewport: Viewport::from_literal(Coordinate::from_literal(62.45, -114.38), 5),
            },
        ]
    }

    pub fn find(id: &str) -> Option<RegionPreset> {
        Self::all().into_iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }
}
