//! View orchestration: the public entry point for framing and journeys.
//!
//! ```text
//! target id
//!     │
//!     ▼
//! Resolve (bodies, then places) ──► NotFound: log, None
//!     │
//!     ▼
//! Gather context (bodies within range)
//!     │
//!     ▼
//! Generate candidates (fixed palette)
//!     │
//!     ▼
//! Score each candidate (composition scorer)
//!     │
//!     ▼
//! Select best (score desc, generation order asc)
//! ```

use cinecam_models::{CameraView, CanvasSize, JourneyKeyframe, Scene, ViewType};
use tracing::{debug, info, warn};

use crate::candidates::{generate_candidates, CandidateOptions};
use crate::config::EngineConfig;
use crate::context::gather_context;
use crate::error::{CameraError, CameraResult};
use crate::journey::interpolate_journey;
use crate::metrics;
use crate::scoring::{CompositionScorer, ScoreBreakdown, ScoreContext, DISQUALIFIED_SCORE};
use crate::selector::{rank, select_best, ScoredCandidate};
use crate::target::resolve_target;

/// Options for a framing request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOptions {
    /// Requested view style.
    pub view_type: ViewType,
    /// Canvas to frame for; the configured default when `None`.
    pub canvas: Option<CanvasSize>,
}

impl ViewOptions {
    /// Builder: Set view type.
    pub fn with_view_type(mut self, view_type: ViewType) -> Self {
        self.view_type = view_type;
        self
    }

    /// Builder: Set canvas size.
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Some(CanvasSize::new(width, height));
        self
    }
}

/// A scored candidate together with its per-term breakdown.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub scored: ScoredCandidate,
    pub breakdown: ScoreBreakdown,
}

/// Camera director for one scene snapshot.
///
/// Holds no mutable state; every call is a pure function of the scene and
/// the configuration, so a director can be shared across threads.
pub struct CameraDirector<'s> {
    scene: &'s Scene,
    config: EngineConfig,
    scorer: CompositionScorer,
}

impl<'s> CameraDirector<'s> {
    /// Create a director with the default configuration.
    pub fn new(scene: &'s Scene) -> Self {
        Self::with_config(scene, EngineConfig::default())
    }

    /// Create a director with an explicit configuration.
    pub fn with_config(scene: &'s Scene, config: EngineConfig) -> Self {
        let scorer = CompositionScorer::new(config.weights);
        Self {
            scene,
            config,
            scorer,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frame `target_id`, returning `None` (and logging) when it cannot be framed.
    pub fn generate_view(&self, target_id: &str, options: &ViewOptions) -> Option<CameraView> {
        match self.try_generate_view(target_id, options) {
            Ok(view) => Some(view),
            Err(e) => {
                warn!(target_id, error = %e, "[FRAMING] Cannot generate view");
                metrics::record_view_failure(e.reason());
                None
            }
        }
    }

    /// Frame `target_id`, surfacing resolution and canvas errors.
    pub fn try_generate_view(
        &self,
        target_id: &str,
        options: &ViewOptions,
    ) -> CameraResult<CameraView> {
        let ranked = self.rank_candidates(target_id, options)?;
        let disqualified = ranked.iter().filter(|r| r.breakdown.disqualified).count();

        let pool: Vec<ScoredCandidate> = match options.view_type {
            ViewType::Auto => ranked.iter().map(|r| r.scored).collect(),
            ViewType::Prefer(kind) => {
                let preferred: Vec<ScoredCandidate> = ranked
                    .iter()
                    .filter(|r| r.scored.candidate.kind == kind)
                    .filter(|r| r.scored.score > DISQUALIFIED_SCORE)
                    .map(|r| r.scored)
                    .collect();
                if preferred.is_empty() {
                    debug!(
                        target_id,
                        kind = %kind,
                        "[FRAMING] Preferred kind not generated or off-frame, using full palette"
                    );
                    ranked.iter().map(|r| r.scored).collect()
                } else {
                    preferred
                }
            }
        };

        let best = select_best(pool)
            .ok_or_else(|| CameraError::NoCandidates(target_id.to_string()))?;
        let kind = best.candidate.kind;

        info!(
            target_id,
            kind = %kind,
            score = best.score,
            zoom = best.candidate.zoom,
            disqualified,
            "[FRAMING] View selected"
        );
        metrics::record_view(kind, best.score, disqualified);

        Ok(CameraView {
            x: best.candidate.x,
            y: best.candidate.y,
            zoom: best.candidate.zoom,
            score: Some(best.score),
            kind: Some(kind),
        })
    }

    /// Score every candidate for `target_id`, best first.
    pub fn rank_candidates(
        &self,
        target_id: &str,
        options: &ViewOptions,
    ) -> CameraResult<Vec<RankedCandidate>> {
        let canvas = options.canvas.unwrap_or(self.config.default_canvas);
        if !canvas.is_valid() {
            return Err(CameraError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }

        let target = resolve_target(self.scene, target_id)?;
        let context = gather_context(self.scene, &target, self.config.context_range_au);
        let candidate_options = CandidateOptions {
            reference_frame_px: self.config.reference_frame_px,
        };
        let candidates = generate_candidates(&target, &context, &candidate_options);

        debug!(
            target_id,
            orbit_au = target.orbit_au,
            radius_km = target.radius_km,
            context_bodies = context.bodies.len(),
            candidates = candidates.len(),
            "[FRAMING] Scoring candidates"
        );

        let score_ctx = ScoreContext {
            star: context.star,
            bodies: &context.bodies,
            canvas,
        };

        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| {
                let breakdown = self.scorer.breakdown(&candidate, &target, &score_ctx);
                let score = breakdown.total();
                debug!(
                    kind = %candidate.kind,
                    score,
                    zoom = candidate.zoom,
                    disqualified = breakdown.disqualified,
                    "[FRAMING] Candidate scored"
                );
                RankedCandidate {
                    scored: ScoredCandidate::new(candidate, score, index),
                    breakdown,
                }
            })
            .collect();

        ranked.sort_by(|a, b| rank(&a.scored, &b.scored));

        Ok(ranked)
    }

    /// Keyframes for a journey between two scene objects; empty (and logged)
    /// when either endpoint is unknown.
    pub fn generate_journey_keyframes(
        &self,
        from_id: &str,
        to_id: &str,
        count: usize,
    ) -> Vec<JourneyKeyframe> {
        match self.try_generate_journey_keyframes(from_id, to_id, count) {
            Ok(keyframes) => keyframes,
            Err(e) => {
                warn!(from_id, to_id, error = %e, "[JOURNEY] Cannot generate keyframes");
                Vec::new()
            }
        }
    }

    /// Journey keyframes using the configured keyframe count.
    pub fn generate_default_journey(&self, from_id: &str, to_id: &str) -> Vec<JourneyKeyframe> {
        self.generate_journey_keyframes(from_id, to_id, self.config.journey_keyframes)
    }

    /// Keyframes for a journey, surfacing unknown endpoints.
    pub fn try_generate_journey_keyframes(
        &self,
        from_id: &str,
        to_id: &str,
        count: usize,
    ) -> CameraResult<Vec<JourneyKeyframe>> {
        let from = resolve_target(self.scene, from_id)
            .map_err(|_| CameraError::endpoint_not_found(from_id))?;
        let to = resolve_target(self.scene, to_id)
            .map_err(|_| CameraError::endpoint_not_found(to_id))?;

        let keyframes = interpolate_journey(from.position(), to.position(), count);

        debug!(
            from_id,
            to_id,
            distance_au = from.position().distance_to(&to.position()),
            keyframes = keyframes.len(),
            "[JOURNEY] Keyframes generated"
        );
        metrics::record_journey(keyframes.len());

        Ok(keyframes)
    }
}
