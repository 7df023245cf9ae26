use std::env;

use crate::map::SurfaceSize;

pub(crate) const API_PREFIX: &str = "/api/v1";

#[derive(Clone)]
pub(crate) struct Config {
    pub host: String,
    pub port: u16,
    pub surface: SurfaceSize,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("API_HOST").unwrap_or(defaults.host),
            port: env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            surface: SurfaceSize {
                width: positive_var("MAP_SURFACE_WIDTH").unwrap_or(defaults.surface.width),
                height: positive_var("MAP_SURFACE_HEIGHT").unwrap_or(defaults.surface.height),
            },
        }
    }
}

fn positive_var(key: &str) -> Option<u32> {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&s| s > 0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            surface: SurfaceSize::default(),
        }
    }
}
