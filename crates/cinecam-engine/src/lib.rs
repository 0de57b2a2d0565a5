#![deny(unreachable_patterns)]
//! Cinematic camera placement for 2D celestial scenes.
//!
//! This crate provides:
//! - World (AU) to screen (px) projection at a fixed scale
//! - Context gathering around a target body or place
//! - A fixed palette of candidate camera placements
//! - Multi-term composition scoring with injectable weights
//! - Deterministic best-candidate selection
//! - Phased camera journeys between two scene objects
//!
//! # Architecture
//!
//! ```text
//! CameraDirector::generate_view(target_id)
//!     │
//!     ├─► target::resolve_target        (body | place → orbit, radius)
//!     ├─► context::gather_context       (bodies within range)
//!     ├─► candidates::generate_candidates
//!     ├─► scoring::CompositionScorer    (per candidate)
//!     └─► selector::select_best
//!
//! CameraDirector::generate_journey_keyframes(from_id, to_id, count)
//!     └─► journey::interpolate_journey  (lerp + zoom envelope)
//! ```
//!
//! Everything is synchronous and allocation-light; no call mutates shared state.

pub mod candidates;
pub mod config;
pub mod context;
pub mod director;
pub mod error;
pub mod journey;
pub mod metrics;
pub mod projection;
pub mod scoring;
pub mod selector;
pub mod target;

pub use candidates::{base_zoom, generate_candidates, CameraCandidate, CandidateOptions};
pub use config::{EngineConfig, ScoringWeights};
pub use context::{gather_context, ViewContext};
pub use director::{CameraDirector, RankedCandidate, ViewOptions};
pub use error::{CameraError, CameraResult};
pub use journey::{generate_journey_camera, interpolate_journey};
pub use projection::{Projection, ScreenPoint, KM_PER_AU, MIN_ZOOM, PIXELS_PER_AU};
pub use scoring::{
    score_fill_factor, CompositionScorer, ScoreBreakdown, ScoreContext, DISQUALIFIED_SCORE,
};
pub use selector::{select_best, ScoredCandidate};
pub use target::{resolve_target, ResolvedTarget, SceneObject};

// Shared models, re-exported for callers that only depend on the engine
pub use cinecam_models::{
    BodyType, CameraView, CandidateKind, CanvasSize, CelestialBody, JourneyKeyframe, JourneyPhase,
    Place, Scene, Star, ViewType, WorldPoint,
};
