//! Map overlay composition for the LYTHOS siting-intelligence demo.

pub mod map;
