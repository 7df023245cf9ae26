//! Mount lifecycle for the interactive map surface.
//!
//! A surface is only built once the host reports client-side interactivity
//! and the rendering library has loaded. Until then callers get a placeholder
//! of the same size. A new viewport always destroys the current surface and
//! builds a fresh one; surfaces are never repositioned in place.

use super::coordinate::{Viewport, ViewportKey};
use super::error::MapError;
use super::layers::LayerControl;
use super::risk::{classify_region, risk_markers, Region};
use super::tiles::TileSourceRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub scroll_wheel_zoom: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            scroll_wheel_zoom: true,
        }
    }
}

/// The browser-side map library. Loading happens at most once per viewport
/// and may fail, in which case the viewport stays in `Mounting`.
pub trait RenderLibrary {
    fn load(&mut self) -> Result<(), MapError>;
}

/// A library that is linked in and always available.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledLibrary;

impl RenderLibrary for BundledLibrary {
    fn load(&mut self) -> Result<(), MapError> {
        Ok(())
    }
}

/// Everything a surface needs, derived from a viewport without mounting
/// anything. Safe to compute during non-interactive rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfacePlan {
    pub key: ViewportKey,
    pub viewport: Viewport,
    pub region: Region,
    pub size: SurfaceSize,
    pub options: SurfaceOptions,
    pub layers: LayerControl,
}

impl SurfacePlan {
    pub fn new(
        viewport: Viewport,
        registry: &TileSourceRegistry,
        size: SurfaceSize,
    ) -> Result<Self, MapError> {
        let center = viewport.center();
        Ok(Self {
            key: viewport.key(),
            viewport,
            region: classify_region(center),
            size,
            options: SurfaceOptions::default(),
            layers: LayerControl::compose(registry, risk_markers(center))?,
        })
    }
}

/// A mounted map instance. Owns its toggle state for its whole lifetime.
#[derive(Debug)]
pub struct Surface {
    instance: u64,
    plan: SurfacePlan,
}

impl Surface {
    pub fn instance(&self) -> u64 {
        self.instance
    }

    pub fn key(&self) -> &ViewportKey {
        &self.plan.key
    }

    pub fn plan(&self) -> &SurfacePlan {
        &self.plan
    }

    pub fn layers(&self) -> &LayerControl {
        &self.plan.layers
    }

    pub fn toggle(&mut self, name: &str) -> Result<bool, MapError> {
        self.plan.layers.toggle(name)
    }

    pub fn select_base(&mut self, name: &str) -> Result<(), MapError> {
        self.plan.layers.select_base(name)
    }
}

#[derive(Debug)]
pub enum MountState {
    Unmounted,
    Mounting,
    Ready(Surface),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPhase {
    Unmounted,
    Mounting,
    Ready,
}

/// What the host should draw right now.
#[derive(Debug)]
pub enum Rendered<'a> {
    Placeholder(SurfaceSize),
    Surface(&'a Surface),
}

pub struct MapViewport<L = BundledLibrary> {
    viewport: Viewport,
    registry: TileSourceRegistry,
    size: SurfaceSize,
    library: L,
    state: MountState,
    next_instance: u64,
}

impl MapViewport<BundledLibrary> {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_library(viewport, BundledLibrary)
    }
}

impl Default for MapViewport<BundledLibrary> {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl<L: RenderLibrary> MapViewport<L> {
    pub fn with_library(viewport: Viewport, library: L) -> Self {
        Self {
            viewport,
            registry: TileSourceRegistry::builtin(),
            size: SurfaceSize::default(),
            library,
            state: MountState::Unmounted,
            next_instance: 1,
        }
    }

    pub fn with_size(mut self, size: SurfaceSize) -> Self {
        self.size = size;
        self
    }

    pub fn phase(&self) -> MountPhase {
        match self.state {
            MountState::Unmounted => MountPhase::Unmounted,
            MountState::Mounting => MountPhase::Mounting,
            MountState::Ready(_) => MountPhase::Ready,
        }
    }

    pub fn plan(&self) -> Result<SurfacePlan, MapError> {
        SurfacePlan::new(self.viewport, &self.registry, self.size)
    }

    /// Called by the host once browser APIs exist. Moves to `Mounting`, loads
    /// the library, and on success builds the first surface. A failed load
    /// leaves the viewport in `Mounting`; later calls do nothing.
    pub fn on_client_ready(&mut self) -> MountPhase {
        if !matches!(self.state, MountState::Unmounted) {
            return self.phase();
        }
        self.state = MountState::Mounting;
        log::debug!("map {}: mounting", self.viewport.key());

        if let Err(err) = self.library.load() {
            log::warn!("map {}: staying inert, {err}", self.viewport.key());
            return self.phase();
        }
        match self.build_surface() {
            Ok(surface) => self.state = MountState::Ready(surface),
            Err(err) => log::warn!("map {}: cannot build surface, {err}", self.viewport.key()),
        }
        self.phase()
    }

    fn build_surface(&mut self) -> Result<Surface, MapError> {
        let plan = self.plan()?;
        let instance = self.next_instance;
        self.next_instance += 1;
        log::debug!("map {}: surface #{instance} ready", plan.key);
        Ok(Surface { instance, plan })
    }

    /// Replaces the viewport. A different key tears down the mounted surface
    /// and builds a new one before returning. Returns whether a re-key happened.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<bool, MapError> {
        if viewport.key() == self.viewport.key() {
            return Ok(false);
        }
        let previous = std::mem::replace(&mut self.viewport, viewport);

        if let MountState::Ready(old) = &self.state {
            log::debug!(
                "map {}: destroying surface #{} for re-key to {}",
                previous.key(),
                old.instance(),
                viewport.key()
            );
            match self.build_surface() {
                Ok(surface) => self.state = MountState::Ready(surface),
                Err(err) => {
                    self.viewport = previous;
                    return Err(err);
                }
            }
        }
        Ok(true)
    }

    pub fn render(&self) -> Rendered<'_> {
        match &self.state {
            MountState::Ready(surface) => Rendered::Surface(surface),
            MountState::Unmounted | MountState::Mounting => Rendered::Placeholder(self.size),
        }
    }

    pub fn surface(&self) -> Option<&Surface> {
        match &self.state {
            MountState::Ready(surface) => Some(surface),
            _ => None,
        }
    }

    fn surface_for(&mut self, instance: u64) -> Result<&mut Surface, MapError> {
        let current = self.surface().map(Surface::instance);
        match (&mut self.state, current) {
            (MountState::Ready(surface), Some(id)) if id == instance => Ok(surface),
            (_, Some(id)) => Err(MapError::StaleSurface {
                requested: instance,
                current: Some(id),
            }),
            (_, None) if instance < self.next_instance => Err(MapError::StaleSurface {
                requested: instance,
                current: None,
            }),
            (_, None) => Err(MapError::NotReady),
        }
    }

    /// Toggles a layer on a specific surface. Toggles aimed at a destroyed
    /// surface are refused.
    pub fn toggle(&mut self, instance: u64, name: &str) -> Result<bool, MapError> {
        self.surface_for(instance)?.toggle(name)
    }

    pub fn select_base(&mut self, instance: u64, name: &str) -> Result<(), MapError> {
        self.surface_for(instance)?.select_base(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::coordinate::Coordinate;
    use crate::map::layers::RISK_OVERLAY_LAYER;
    use crate::map::tiles::{OSM_LAYER, S2_ALT_VIEW_LAYER, S2_TRUE_COLOR_LAYER};

    struct BrokenLibrary {
        attempts: usize,
    }

    impl RenderLibrary for BrokenLibrary {
        fn load(&mut self) -> Result<(), MapError> {
            self.attempts += 1;
            Err(MapError::LibraryUnavailable("chunk failed to load".into()))
        }
    }

    fn ontario() -> Viewport {
        Viewport::from_parts(46.49, -81.01, 6).unwrap()
    }

    fn nwt() -> Viewport {
        Viewport::from_parts(62.45, -114.38, 6).unwrap()
    }

    fn ready(viewport: Viewport) -> MapViewport {
        let mut map = MapViewport::new(viewport);
        assert_eq!(map.on_client_ready(), MountPhase::Ready);
        map
    }

    #[test]
    fn placeholder_until_client_ready() {
        let map = MapViewport::new(ontario()).with_size(SurfaceSize { width: 640, height: 400 });
        assert_eq!(map.phase(), MountPhase::Unmounted);
        assert!(map.surface().is_none());
        match map.render() {
            Rendered::Placeholder(size) => assert_eq!(size, SurfaceSize { width: 640, height: 400 }),
            Rendered::Surface(_) => panic!("surface built before client confirmation"),
        }
    }

    #[test]
    fn mounts_with_default_layers() {
        let map = ready(ontario());
        let surface = map.surface().unwrap();
        assert_eq!(surface.plan().region, Region::Default);
        assert_eq!(
            surface.layers().visible_names(),
            [OSM_LAYER, S2_TRUE_COLOR_LAYER, RISK_OVERLAY_LAYER]
        );
        assert!(!surface.layers().is_visible(S2_ALT_VIEW_LAYER).unwrap());
    }

    #[test]
    fn library_failure_stays_mounting() {
        let size = SurfaceSize { width: 640, height: 400 };
        let mut map =
            MapViewport::with_library(ontario(), BrokenLibrary { attempts: 0 }).with_size(size);
        assert_eq!(map.on_client_ready(), MountPhase::Mounting);
        assert_eq!(map.on_client_ready(), MountPhase::Mounting);
        assert_eq!(map.library.attempts, 1);
        match map.render() {
            Rendered::Placeholder(rendered) => assert_eq!(rendered, size),
            Rendered::Surface(_) => panic!("surface built without a loaded library"),
        }
        assert_eq!(map.toggle(1, RISK_OVERLAY_LAYER), Err(MapError::NotReady));
    }

    #[test]
    fn rekey_recreates_surface_and_resets_toggles() {
        let mut map = ready(ontario());
        let first = map.surface().unwrap().instance();
        map.toggle(first, RISK_OVERLAY_LAYER).unwrap();
        map.toggle(first, S2_ALT_VIEW_LAYER).unwrap();

        assert!(map.set_viewport(nwt()).unwrap());

        let surface = map.surface().unwrap();
        assert_ne!(surface.instance(), first);
        assert_eq!(surface.key(), &nwt().key());
        assert_eq!(surface.plan().region, Region::Northern);
        assert_eq!(
            surface.layers().visible_names(),
            [OSM_LAYER, S2_TRUE_COLOR_LAYER, RISK_OVERLAY_LAYER]
        );
    }

    #[test]
    fn toggle_on_destroyed_surface_is_refused() {
        let mut map = ready(ontario());
        let first = map.surface().unwrap().instance();
        map.set_viewport(nwt()).unwrap();
        let second = map.surface().unwrap().instance();

        assert_eq!(
            map.toggle(first, RISK_OVERLAY_LAYER),
            Err(MapError::StaleSurface {
                requested: first,
                current: Some(second),
            })
        );
        assert!(map.surface().unwrap().layers().is_visible(RISK_OVERLAY_LAYER).unwrap());
    }

    #[test]
    fn toggle_on_current_surface_flips_visibility() {
        let mut map = ready(ontario());
        let id = map.surface().unwrap().instance();
        assert_eq!(map.toggle(id, S2_ALT_VIEW_LAYER), Ok(true));
        assert_eq!(map.toggle(id, S2_ALT_VIEW_LAYER), Ok(false));
        assert_eq!(
            map.toggle(id + 1, S2_ALT_VIEW_LAYER),
            Err(MapError::StaleSurface {
                requested: id + 1,
                current: Some(id),
            })
        );
    }

    #[test]
    fn same_key_keeps_surface() {
        let mut map = ready(ontario());
        let first = map.surface().unwrap().instance();
        map.toggle(first, S2_ALT_VIEW_LAYER).unwrap();

        assert!(!map.set_viewport(ontario()).unwrap());
        assert_eq!(map.surface().unwrap().instance(), first);
        assert!(map.surface().unwrap().layers().is_visible(S2_ALT_VIEW_LAYER).unwrap());
    }

    #[test]
    fn signed_zero_center_does_not_rekey() {
        let mut map = ready(Viewport::from_parts(0.0, 10.0, 3).unwrap());
        let first = map.surface().unwrap().instance();
        assert!(!map.set_viewport(Viewport::from_parts(-0.0, 10.0, 3).unwrap()).unwrap());
        assert_eq!(map.surface().unwrap().instance(), first);
    }

    #[test]
    fn zoom_change_alone_rekeys() {
        let mut map = ready(ontario());
        let first = map.surface().unwrap().instance();
        let zoomed = Viewport::new(ontario().center(), 7).unwrap();
        assert!(map.set_viewport(zoomed).unwrap());
        assert_ne!(map.surface().unwrap().instance(), first);
    }

    #[test]
    fn viewport_change_before_mount_is_used_on_mount() {
        let mut map = MapViewport::new(ontario());
        assert!(map.set_viewport(nwt()).unwrap());
        map.on_client_ready();
        assert_eq!(map.surface().unwrap().plan().region, Region::Northern);
    }

    #[test]
    fn select_base_through_viewport() {
        let mut map = ready(ontario());
        let id = map.surface().unwrap().instance();
        map.select_base(id, OSM_LAYER).unwrap();
        assert!(map.surface().unwrap().layers().is_visible(OSM_LAYER).unwrap());
    }

    #[test]
    fn instances_are_independent() {
        let mut a = ready(ontario());
        let b = ready(ontario());
        let id = a.surface().unwrap().instance();
        a.toggle(id, RISK_OVERLAY_LAYER).unwrap();
        assert!(b.surface().unwrap().layers().is_visible(RISK_OVERLAY_LAYER).unwrap());
    }

    #[test]
    fn plan_available_without_mount() {
        let map = MapViewport::new(Viewport::new(Coordinate::new(63.0, -113.0).unwrap(), 5).unwrap());
        let plan = map.plan().unwrap();
        assert_eq!(plan.region, Region::Northern);
        assert_eq!(map.phase(), MountPhase::Unmounted);
    }
}
