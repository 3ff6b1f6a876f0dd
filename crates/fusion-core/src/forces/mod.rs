//! Per-particle velocity contributions, one module per effect.
//!
//! Each function is pure apart from the injected random source and returns
//! the new velocity or the delta to add, leaving integration to the solver.

pub mod medium;
pub mod swirl;
pub mod tension;
