use serde::Serialize;
use utoipa::ToSchema;

use crate::map::risk::TOOLTIP_OFFSET;
use crate::map::{
    Coordinate, LayerContent, LayerEntry, LayerRole, RegionPreset, RiskMarker, SurfacePlan,
    SurfaceSize, TileLayerKind, TileLayerSpec,
};

#[derive(Serialize, ToSchema)]
pub struct HealthPayload {
    pub status: &'static str,
    pub version: &'static str,
    /// Demo regions the page can show.
    pub regions: usize,
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct CoordinateInfo {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinate> for CoordinateInfo {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: c.lat(),
            lng: c.lng(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SizeInfo {
    pub width: u32,
    pub height: u32,
}

impl From<SurfaceSize> for SizeInfo {
    fn from(s: SurfaceSize) -> Self {
        Self {
            width: s.width,
            height: s.height,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct TileLayerPayload {
    pub name: String,
    /// `base` or `imagery`.
    pub kind: &'static str,
    pub url_template: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subdomains: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    pub opacity: f32,
    pub z_index: i32,
    pub tile_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_native_zoom: Option<u8>,
    pub default_visible: bool,
}

impl From<&TileLayerSpec> for TileLayerPayload {
    fn from(spec: &TileLayerSpec) -> Self {
        Self {
            name: spec.name().to_string(),
            kind: match spec.kind() {
                TileLayerKind::Base => "base",
                TileLayerKind::Imagery => "imagery",
            },
            url_template: spec.url_template().to_string(),
            subdomains: spec.subdomains().to_vec(),
            attribution: spec.attribution().map(str::to_string),
            opacity: spec.opacity(),
            z_index: spec.z_index(),
            tile_size: spec.tile_size(),
            max_native_zoom: spec.max_native_zoom(),
            default_visible: spec.default_visible(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct TileLayerListPayload {
    pub count: usize,
    pub layers: Vec<TileLayerPayload>,
}

#[derive(Serialize, ToSchema)]
pub struct MarkerStylePayload {
    pub bucket: &'static str,
    pub stroke_color: &'static str,
    pub fill_color: &'static str,
    pub stroke_weight: f64,
    pub fill_opacity: f64,
    pub radius: f64,
}

#[derive(Serialize, ToSchema)]
pub struct RiskMarkerPayload {
    pub position: CoordinateInfo,
    pub label: &'static str,
    pub severity_weight: f64,
    pub style: MarkerStylePayload,
    pub tooltip_offset: [i32; 2],
}

impl From<&RiskMarker> for RiskMarkerPayload {
    fn from(m: &RiskMarker) -> Self {
        Self {
            position: m.point.position.into(),
            label: m.point.label,
            severity_weight: m.point.severity_weight,
            style: MarkerStylePayload {
                bucket: m.style.bucket.as_str(),
                stroke_color: m.style.stroke_color,
                fill_color: m.style.fill_color,
                stroke_weight: m.style.stroke_weight,
                fill_opacity: m.style.fill_opacity,
                radius: m.style.radius,
            },
            tooltip_offset: [TOOLTIP_OFFSET.0, TOOLTIP_OFFSET.1],
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct RiskPayload {
    pub center: CoordinateInfo,
    pub region: &'static str,
    pub markers: Vec<RiskMarkerPayload>,
}

#[derive(Serialize, ToSchema)]
pub struct LayerEntryPayload {
    pub name: String,
    /// `base` entries are mutually exclusive; `overlay` entries are not.
    pub role: &'static str,
    pub default_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiles: Option<TileLayerPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<RiskMarkerPayload>>,
}

impl From<&LayerEntry> for LayerEntryPayload {
    fn from(entry: &LayerEntry) -> Self {
        let (tiles, markers) = match &entry.content {
            LayerContent::Tiles(spec) => (Some(spec.into()), None),
            LayerContent::Markers(markers) => (None, Some(markers.iter().map(Into::into).collect())),
        };
        Self {
            name: entry.name.clone(),
            role: match entry.role {
                LayerRole::Base => "base",
                LayerRole::Overlay => "overlay",
            },
            default_visible: entry.default_visible,
            tiles,
            markers,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MapPlanPayload {
    /// Changes whenever center or zoom changes; clients rebuild the map on change.
    pub key: String,
    pub center: CoordinateInfo,
    pub zoom: u8,
    pub region: &'static str,
    pub placeholder: SizeInfo,
    pub scroll_wheel_zoom: bool,
    pub visible_by_default: Vec<String>,
    pub layers: Vec<LayerEntryPayload>,
}

impl From<&SurfacePlan> for MapPlanPayload {
    fn from(plan: &SurfacePlan) -> Self {
        Self {
            key: plan.key.to_string(),
            center: plan.viewport.center().into(),
            zoom: plan.viewport.zoom(),
            region: plan.region.as_str(),
            placeholder: plan.size.into(),
            scroll_wheel_zoom: plan.options.scroll_wheel_zoom,
            visible_by_default: plan
                .layers
                .visible_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            layers: plan.layers.entries().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct RegionPayload {
    pub id: &'static str,
    pub title: &'static str,
    pub center: CoordinateInfo,
    pub zoom: u8,
    pub region: &'static str,
}

impl From<&RegionPreset> for RegionPayload {
    fn from(p: &RegionPreset) -> Self {
        let center = p.viewport.center();
        Self {
            id: p.id,
            title: p.title,
            center: center.into(),
            zoom: p.viewport.zoom(),
            region: crate::map::classify_region(center).as_str(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct RegionListPayload {
    pub count: usize,
    pub regions: Vec<RegionPayload>,
}
