//! Configuration for the camera placement engine.

use cinecam_models::CanvasSize;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CameraError, CameraResult};
use crate::projection::REFERENCE_FRAME_PX;

/// Weights for the composition score terms.
///
/// Passed into the scorer by value, so alternate profiles can be used side by
/// side without shared state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Added once when the target passes the visibility gate.
    pub visibility: f64,

    /// Weight of the fill-factor bell curve (0-1).
    pub fill_factor: f64,

    /// Points per context body in frame.
    pub context_object: f64,

    /// Maximum number of context bodies counted.
    pub context_cap: usize,

    /// Weight of the rule-of-thirds bell curve (0-1).
    pub rule_of_thirds: f64,

    /// Weight of the depth separation term (0-1).
    pub depth: f64,

    /// Points per cluttered pair (negative).
    pub clutter: f64,

    /// Flat bonus when the star is on screen.
    pub star_visible: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            visibility: 100.0,
            fill_factor: 50.0,
            context_object: 10.0,
            context_cap: 5,
            rule_of_thirds: 20.0,
            depth: 15.0,
            clutter: -25.0,
            star_visible: 20.0,
        }
    }
}

impl ScoringWeights {
    /// Profile favouring wide shots with neighbours and the star in view.
    pub fn establishing() -> Self {
        Self {
            fill_factor: 25.0,
            context_object: 15.0,
            star_visible: 40.0,
            ..Default::default()
        }
    }

    /// Profile favouring tight, uncluttered framing of the target.
    pub fn close_up() -> Self {
        Self {
            fill_factor: 80.0,
            context_object: 5.0,
            clutter: -40.0,
            star_visible: 0.0,
            ..Default::default()
        }
    }

    /// Builder: Set fill factor weight.
    pub fn with_fill_factor(mut self, weight: f64) -> Self {
        self.fill_factor = weight;
        self
    }

    /// Builder: Set context weight and cap.
    pub fn with_context(mut self, per_object: f64, cap: usize) -> Self {
        self.context_object = per_object;
        self.context_cap = cap;
        self
    }

    /// Builder: Set rule-of-thirds weight.
    pub fn with_rule_of_thirds(mut self, weight: f64) -> Self {
        self.rule_of_thirds = weight;
        self
    }

    /// Builder: Set clutter penalty per pair.
    pub fn with_clutter(mut self, penalty: f64) -> Self {
        self.clutter = penalty;
        self
    }

    /// Builder: Set star-visible bonus.
    pub fn with_star_bonus(mut self, bonus: f64) -> Self {
        self.star_visible = bonus;
        self
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Radius (AU) around the target within which bodies count as context.
    pub context_range_au: f64,

    /// Canvas used when a request does not supply one.
    pub default_canvas: CanvasSize,

    /// Reference frame (px) the candidate zoom levels are calibrated against.
    pub reference_frame_px: f64,

    /// Composition score weights.
    pub weights: ScoringWeights,

    /// Keyframe count for journeys when the caller does not pick one.
    pub journey_keyframes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            context_range_au: 5.0,
            default_canvas: CanvasSize::default(),
            reference_frame_px: REFERENCE_FRAME_PX,
            weights: ScoringWeights::default(),
            journey_keyframes: 4,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables, falling back to defaults.
    ///
    /// A combination that fails [`validate`](Self::validate) is logged and
    /// replaced by the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse_f64 = |key: &str| parse_value::<f64>(key, lookup(key));
        let config = Self {
            context_range_au: parse_f64("CINECAM_CONTEXT_RANGE_AU")
                .unwrap_or(defaults.context_range_au),
            default_canvas: CanvasSize::new(
                parse_f64("CINECAM_CANVAS_WIDTH").unwrap_or(defaults.default_canvas.width),
                parse_f64("CINECAM_CANVAS_HEIGHT").unwrap_or(defaults.default_canvas.height),
            ),
            journey_keyframes: parse_value(
                "CINECAM_JOURNEY_KEYFRAMES",
                lookup("CINECAM_JOURNEY_KEYFRAMES"),
            )
            .unwrap_or(defaults.journey_keyframes),
            ..defaults.clone()
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(error = %e, "Invalid environment configuration, using defaults");
                defaults
            }
        }
    }

    /// Parse config from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> CameraResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that ranges and frame sizes are usable.
    pub fn validate(&self) -> CameraResult<()> {
        if !(self.context_range_au.is_finite() && self.context_range_au > 0.0) {
            return Err(CameraError::invalid_config(format!(
                "context_range_au must be positive, got {}",
                self.context_range_au
            )));
        }
        if !self.default_canvas.is_valid() {
            return Err(CameraError::invalid_config(format!(
                "default_canvas must be positive, got {}x{}",
                self.default_canvas.width, self.default_canvas.height
            )));
        }
        if !(self.reference_frame_px.is_finite() && self.reference_frame_px > 0.0) {
            return Err(CameraError::invalid_config(format!(
                "reference_frame_px must be positive, got {}",
                self.reference_frame_px
            )));
        }
        Ok(())
    }

    /// Builder: Set context range.
    pub fn with_context_range(mut self, range_au: f64) -> Self {
        self.context_range_au = range_au;
        self
    }

    /// Builder: Set default canvas.
    pub fn with_default_canvas(mut self, canvas: CanvasSize) -> Self {
        self.default_canvas = canvas;
        self
    }

    /// Builder: Set scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Builder: Set default journey keyframe count.
    pub fn with_journey_keyframes(mut self, count: usize) -> Self {
        self.journey_keyframes = count;
        self
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable environment value");
            None
        }
    }
}
