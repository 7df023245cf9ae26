use std::collections::HashSet;

use super::error::MapError;
use super::risk::RiskMarker;
use super::tiles::{TileLayerKind, TileLayerSpec, TileSourceRegistry};

pub const RISK_OVERLAY_LAYER: &str = "Risk overlay";

/// Base entries behave like radio buttons; overlays like checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    Base,
    Overlay,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayerContent {
    Tiles(TileLayerSpec),
    Markers(Vec<RiskMarker>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerEntry {
    pub name: String,
    pub role: LayerRole,
    pub default_visible: bool,
    pub content: LayerContent,
}

impl LayerEntry {
    pub fn tiles(spec: TileLayerSpec) -> Self {
        let role = match spec.kind() {
            TileLayerKind::Base => LayerRole::Base,
            TileLayerKind::Imagery => LayerRole::Overlay,
        };
        Self {
            name: spec.name().to_string(),
            role,
            default_visible: spec.default_visible(),
            content: LayerContent::Tiles(spec),
        }
    }

    pub fn markers(name: impl Into<String>, markers: Vec<RiskMarker>, default_visible: bool) -> Self {
        Self {
            name: name.into(),
            role: LayerRole::Overlay,
            default_visible,
            content: LayerContent::Markers(markers),
        }
    }
}

/// Named, independently toggleable layers with per-entry visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerControl {
    entries: Vec<LayerEntry>,
    visible: Vec<bool>,
}

impl LayerControl {
    pub fn new(entries: Vec<LayerEntry>) -> Result<Self, MapError> {
        let mut names = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name.as_str()) {
                return Err(MapError::DuplicateLayer(entry.name.clone()));
            }
        }
        let visible = Self::initial_visibility(&entries);
        Ok(Self { entries, visible })
    }

    /// Tile registry entries in order, then the risk marker overlay.
    pub fn compose(registry: &TileSourceRegistry, markers: Vec<RiskMarker>) -> Result<Self, MapError> {
        let mut entries: Vec<LayerEntry> = registry
            .layers()
            .iter()
            .cloned()
            .map(LayerEntry::tiles)
            .collect();
        entries.push(LayerEntry::markers(RISK_OVERLAY_LAYER, markers, true));
        Self::new(entries)
    }

    // At most one base entry starts selected: the first one marked visible.
    fn initial_visibility(entries: &[LayerEntry]) -> Vec<bool> {
        let mut base_taken = false;
        entries
            .iter()
            .map(|entry| match entry.role {
                LayerRole::Overlay => entry.default_visible,
                LayerRole::Base if entry.default_visible && !base_taken => {
                    base_taken = true;
                    true
                }
                LayerRole::Base => false,
            })
            .collect()
    }

    pub fn entries(&self) -> &[LayerEntry] {
        &self.entries
    }

    fn index_of(&self, name: &str) -> Result<usize, MapError> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| MapError::UnknownLayer(name.to_string()))
    }

    pub fn is_visible(&self, name: &str) -> Result<bool, MapError> {
        Ok(self.visible[self.index_of(name)?])
    }

    /// Flips an overlay. On a base entry this selects it, since a base layer
    /// cannot be switched off directly. Returns the entry's new visibility.
    pub fn toggle(&mut self, name: &str) -> Result<bool, MapError> {
        let idx = self.index_of(name)?;
        match self.entries[idx].role {
            LayerRole::Overlay => {
                self.visible[idx] = !self.visible[idx];
                Ok(self.visible[idx])
            }
            LayerRole::Base => {
                self.select_base_at(idx);
                Ok(true)
            }
        }
    }

    /// Exactly one base entry stays visible, so hiding a base is refused.
    pub fn set_visible(&mut self, name: &str, visible: bool) -> Result<(), MapError> {
        let idx = self.index_of(name)?;
        match self.entries[idx].role {
            LayerRole::Overlay => self.visible[idx] = visible,
            LayerRole::Base if visible => self.select_base_at(idx),
            LayerRole::Base => return Err(MapError::BaseRequired(name.to_string())),
        }
        Ok(())
    }

    /// Shows `name` and hides every other base entry. Overlays are untouched.
    pub fn select_base(&mut self, name: &str) -> Result<(), MapError> {
        let idx = self.index_of(name)?;
        if self.entries[idx].role != LayerRole::Base {
            return Err(MapError::UnknownLayer(name.to_string()));
        }
        self.select_base_at(idx);
        Ok(())
    }

    fn select_base_at(&mut self, idx: usize) {
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.role == LayerRole::Base {
                self.visible[i] = i == idx;
            }
        }
    }

    pub fn visible_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .zip(&self.visible)
            .filter(|(_, on)| **on)
            .map(|(e, _)| e.name.as_str())
            .collect()
    }

    pub fn reset(&mut self) {
        self.visible = Self::initial_visibility(&self.entries);
    }
}
