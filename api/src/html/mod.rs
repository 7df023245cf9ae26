//! Embedded demo page, bundled into the binary as `&'static str`.

pub mod map_page;
