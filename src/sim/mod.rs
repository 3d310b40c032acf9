//! Deterministic simulation module
//!
//! All engine logic lives here. This module must be pure and deterministic:
//! - Step-driven only; the whole engine advances inside [`tick`]
//! - Seeded RNG only
//! - Stable iteration order (spawn order) for pairwise collision
//! - No rendering or platform dependencies

pub mod collision;
pub mod ease;
pub mod spline;
pub mod state;
pub mod tick;
pub mod wobble;

pub use collision::{bounce_walls, resolve_pair, resolve_pairs};
pub use spline::{CurvePath, CurveSegment, cardinal};
pub use state::{Blob, BlobState, ScenePhase, SceneState};
pub use tick::tick;
pub use wobble::{BoundaryPoint, Wobble};
