//! Quality indicators for multi-objective solution sets.
//!
//! # Core Traits
//!
//! - [`QualityIndicator`]: Named scalar measure with an explicit direction
//! - [`Objectives`]: Read access to a solution's objective vector
//! - [`VolumeAlgorithm`]: Pluggable exact hypervolume computation
//!
//! # Key Types
//!
//! - [`Hypervolume`]: The hypervolume indicator (`"HV"`, higher is better)
//! - [`ReferenceFront`]: Immutable reference boundary, explicit or derived
//!   from a single point
//!
//! # Volume Strategies
//!
//! - [`Wfg`]: Exclusive-contribution recursion (default)
//! - [`Hso`]: Slicing on one objective at a time
//!
//! All objectives are **minimized**.

pub mod dominance;
mod hso;
mod hypervolume;
mod reference;
mod types;
mod wfg;

pub use hso::Hso;
pub use hypervolume::{Hypervolume, VolumeAlgorithm};
pub use reference::ReferenceFront;
pub use types::{Objectives, QualityIndicator};
pub use wfg::Wfg;
