//! Shared data models for the cinecam framing engine.
//!
//! This crate provides Serde-serializable types for:
//! - Scene data (star, celestial bodies, named places)
//! - Camera views and canvas dimensions
//! - Candidate kinds and view type preferences
//! - Journey keyframes for camera travel sequences

pub mod camera;
pub mod candidate_kind;
pub mod journey;
pub mod scene;

// Re-export common types
pub use camera::{CameraView, CanvasSize, WorldPoint};
pub use candidate_kind::{CandidateKind, CandidateKindParseError, ViewType};
pub use journey::{JourneyKeyframe, JourneyPhase};
pub use scene::{BodyType, CelestialBody, Place, Scene, Star};
