//! Volatility-surface reference data and batched gathering.
//!
//! This module provides:
//! - [`SurfaceEntry`]: one underlier's quoted surface nodes
//! - [`SurfaceNodes`]: a provider's answer for a set of keys, in the
//!   provider's own canonical order
//! - [`VolatilityProvider`]: the read-only reference-data interface
//! - [`VolSurfaceMap`]: HashMap-backed in-memory provider
//! - [`BatchedVolSurface`]: per-instrument aligned surface rows

mod batched;
mod map;
mod nodes;
mod traits;

pub use batched::BatchedVolSurface;
pub use map::VolSurfaceMap;
pub use nodes::{SurfaceEntry, SurfaceNodes};
pub use traits::VolatilityProvider;
