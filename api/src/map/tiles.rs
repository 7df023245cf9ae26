use std::collections::HashSet;

use super::error::MapError;

pub const OSM_LAYER: &str = "OpenStreetMap";
pub const S2_TRUE_COLOR_LAYER: &str = "Sentinel-2 True Color";
pub const S2_ALT_VIEW_LAYER: &str = "Sentinel-2 Alt View";

const OSM_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

// NASA GIBS WMTS, Web Mercator, Level 9 tile matrix.
const GIBS_S2_TRUE_URL: &str = "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/\
    Sentinel-2%20L2A%20True%20Color/default/default/GoogleMapsCompatible_Level9/{z}/{y}/{x}.jpg";
const GIBS_S2_ALT_URL: &str = "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/\
    Sentinel-2%20L1C%20True%20Color/default/default/GoogleMapsCompatible_Level9/{z}/{y}/{x}.jpg";
const GIBS_ATTRIBUTION: &str = "Imagery: NASA GIBS / ESA Copernicus Sentinel-2";
const GIBS_MAX_NATIVE_ZOOM: u8 = 9;

pub const DEFAULT_TILE_SIZE: u32 = 256;

const PLACEHOLDERS: [&str; 3] = ["{z}", "{x}", "{y}"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileLayerKind {
    /// Reference cartography drawn beneath everything else.
    Base,
    /// Satellite imagery stacked over the base layer.
    Imagery,
}

/// A raster tile source. Fields are fixed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerSpec {
    name: String,
    kind: TileLayerKind,
    url_template: String,
    subdomains: Vec<String>,
    attribution: Option<String>,
    opacity: f32,
    z_index: i32,
    tile_size: u32,
    max_native_zoom: Option<u8>,
    default_visible: bool,
}

impl TileLayerSpec {
    pub fn new(name: impl Into<String>, kind: TileLayerKind, url_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            url_template: url_template.into(),
            subdomains: Vec::new(),
            attribution: None,
            opacity: 1.0,
            z_index: 1,
            tile_size: DEFAULT_TILE_SIZE,
            max_native_zoom: None,
            default_visible: kind == TileLayerKind::Base,
        }
    }

    pub fn with_subdomains(mut self, subdomains: &[&str]) -> Self {
        self.subdomains = subdomains.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_max_native_zoom(mut self, zoom: u8) -> Self {
        self.max_native_zoom = Some(zoom);
        self
    }

    pub fn visible_by_default(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TileLayerKind {
        self.kind
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }

    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn max_native_zoom(&self) -> Option<u8> {
        self.max_native_zoom
    }

    pub fn default_visible(&self) -> bool {
        self.default_visible
    }

    /// Checks the parts of a layer that cannot be trusted once sources stop
    /// being compile-time literals.
    pub fn validate(&self) -> Result<(), MapError> {
        if let Some(missing) = PLACEHOLDERS
            .iter()
            .copied()
            .find(|p| !self.url_template.contains(p))
        {
            return Err(MapError::MalformedUrlTemplate {
                layer: self.name.clone(),
                missing,
            });
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(MapError::OpacityOutOfRange {
                layer: self.name.clone(),
                opacity: self.opacity,
            });
        }
        if self.kind == TileLayerKind::Base && self.attribution.is_none() {
            return Err(MapError::MissingAttribution(self.name.clone()));
        }
        Ok(())
    }
}

/// Ordered set of tile sources: base layers first, then imagery.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSourceRegistry {
    layers: Vec<TileLayerSpec>,
}

impl TileSourceRegistry {
    /// OpenStreetMap base plus the two Sentinel-2 GIBS overlays.
    pub fn builtin() -> Self {
        Self {
            layers: vec![
                TileLayerSpec::new(OSM_LAYER, TileLayerKind::Base, OSM_URL)
                    .with_subdomains(&["a", "b", "c"])
                    .with_attribution(OSM_ATTRIBUTION),
                TileLayerSpec::new(S2_TRUE_COLOR_LAYER, TileLayerKind::Imagery, GIBS_S2_TRUE_URL)
                    .with_attribution(GIBS_ATTRIBUTION)
                    .with_opacity(0.75)
                    .with_z_index(600)
                    .with_max_native_zoom(GIBS_MAX_NATIVE_ZOOM)
                    .visible_by_default(true),
                TileLayerSpec::new(S2_ALT_VIEW_LAYER, TileLayerKind::Imagery, GIBS_S2_ALT_URL)
                    .with_attribution(GIBS_ATTRIBUTION)
                    .with_opacity(0.6)
                    .with_z_index(590)
                    .with_max_native_zoom(GIBS_MAX_NATIVE_ZOOM)
                    .visible_by_default(false),
            ],
        }
    }

    /// Builds a registry from caller-supplied sources, rejecting malformed
    /// templates, duplicate names, and imagery that would not stack cleanly.
    pub fn from_specs(specs: Vec<TileLayerSpec>) -> Result<Self, MapError> {
        let mut names = HashSet::new();
        for spec in &specs {
            spec.validate()?;
            if !names.insert(spec.name()) {
                return Err(MapError::DuplicateLayer(spec.name().to_string()));
            }
        }

        let top_base = specs
            .iter()
            .filter(|s| s.kind() == TileLayerKind::Base)
            .map(TileLayerSpec::z_index)
            .max();
        let mut imagery_z = HashSet::new();
        for spec in specs.iter().filter(|s| s.kind() == TileLayerKind::Imagery) {
            if top_base.is_some_and(|base| spec.z_index() <= base) {
                return Err(MapError::ImageryBelowBase(spec.name().to_string()));
            }
            if !imagery_z.insert(spec.z_index()) {
                return Err(MapError::DuplicateZIndex {
                    layer: spec.name().to_string(),
                    z_index: spec.z_index(),
                });
            }
        }

        let mut layers = specs;
        // Stable: keeps caller order within each kind.
        layers.sort_by_key(|s| s.kind() != TileLayerKind::Base);
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[TileLayerSpec] {
        &self.layers
    }

    pub fn base_layers(&self) -> impl Iterator<Item = &TileLayerSpec> {
        self.layers.iter().filter(|s| s.kind() == TileLayerKind::Base)
    }

    pub fn imagery_layers(&self) -> impl Iterator<Item = &TileLayerSpec> {
        self.layers.iter().filter(|s| s.kind() == TileLayerKind::Imagery)
    }

    pub fn get(&self, name: &str) -> Option<&TileLayerSpec> {
        self.layers.iter().find(|s| s.name() == name)
    }
}

impl Default for TileSourceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_well_formed() {
        let builtin = TileSourceRegistry::builtin();
        let rebuilt = TileSourceRegistry::from_specs(builtin.layers().to_vec()).unwrap();
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn builtin_order_and_defaults() {
        let registry = TileSourceRegistry::builtin();
        let names: Vec<_> = registry.layers().iter().map(|s| s.name()).collect();
        assert_eq!(names, [OSM_LAYER, S2_TRUE_COLOR_LAYER, S2_ALT_VIEW_LAYER]);

        let base = registry.get(OSM_LAYER).unwrap();
        assert!(base.attribution().is_some());
        assert!(base.default_visible());
        assert!(registry.get(S2_TRUE_COLOR_LAYER).unwrap().default_visible());
        assert!(!registry.get(S2_ALT_VIEW_LAYER).unwrap().default_visible());
    }

    #[test]
    fn imagery_stacks_above_base() {
        let registry = TileSourceRegistry::builtin();
        let base_top = registry.base_layers().map(|s| s.z_index()).max().unwrap();
        assert!(registry.imagery_layers().all(|s| s.z_index() > base_top));
        assert_eq!(registry.get(S2_TRUE_COLOR_LAYER).unwrap().z_index(), 600);
        assert_eq!(registry.get(S2_ALT_VIEW_LAYER).unwrap().z_index(), 590);
    }

    #[test]
    fn rejects_template_without_placeholder() {
        let spec = TileLayerSpec::new("broken", TileLayerKind::Imagery, "https://tiles/{z}/{x}.png")
            .with_z_index(10);
        assert_eq!(
            TileSourceRegistry::from_specs(vec![spec]),
            Err(MapError::MalformedUrlTemplate {
                layer: "broken".into(),
                missing: "{y}",
            })
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let a = TileLayerSpec::new("dup", TileLayerKind::Imagery, "t/{z}/{x}/{y}").with_z_index(5);
        let b = TileLayerSpec::new("dup", TileLayerKind::Imagery, "u/{z}/{x}/{y}").with_z_index(6);
        assert_eq!(
            TileSourceRegistry::from_specs(vec![a, b]),
            Err(MapError::DuplicateLayer("dup".into()))
        );
    }

    #[test]
    fn rejects_base_without_attribution() {
        let base = TileLayerSpec::new("plain", TileLayerKind::Base, "t/{z}/{x}/{y}");
        assert_eq!(
            TileSourceRegistry::from_specs(vec![base]),
            Err(MapError::MissingAttribution("plain".into()))
        );
    }

    #[test]
    fn rejects_imagery_under_base() {
        let base = TileLayerSpec::new("base", TileLayerKind::Base, "b/{z}/{x}/{y}")
            .with_attribution("x")
            .with_z_index(100);
        let img = TileLayerSpec::new("img", TileLayerKind::Imagery, "i/{z}/{x}/{y}").with_z_index(50);
        assert_eq!(
            TileSourceRegistry::from_specs(vec![base, img]),
            Err(MapError::ImageryBelowBase("img".into()))
        );
    }

    #[test]
    fn rejects_bad_opacity() {
        let img = TileLayerSpec::new("img", TileLayerKind::Imagery, "i/{z}/{x}/{y}").with_opacity(1.5);
        assert!(matches!(
            TileSourceRegistry::from_specs(vec![img]),
            Err(MapError::OpacityOutOfRange { .. })
        ));
    }
}
