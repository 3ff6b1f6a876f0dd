//! Particle "liquid fill" engine for the fusion quiz visualization.
//!
//! The crate is platform-free: the simulation, renderer and animation driver
//! only talk to the outside world through the [`render::Surface`] and
//! [`driver::FrameScheduler`] traits.

pub mod answers;
pub mod color;
pub mod config;
pub mod constraints;
pub mod driver;
pub mod error;
pub mod fill;
pub mod forces;
pub mod math;
pub mod particle;
pub mod render;
pub mod settle;
pub mod solver;
pub mod spawn;
pub mod stats;
pub mod tables;

pub use answers::{AnswerSet, Dimension, Friction, Motivation, Rhythm};
pub use config::FusionConfig;
pub use error::{FusionError, Result};
pub use solver::{Simulation, SimulationState};
