//! Vessel boundaries applied after integration.

pub mod floor;
pub mod walls;
