//! Candidate kinds produced by the camera candidate generator.
//!
//! Every candidate placement carries one of these tags. The kebab-case tag
//! (`thirds-tl`, `over-shoulder`, ...) is the wire representation consumed
//! by the renderer and animation layers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of camera candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateKind {
    /// Centered on the target at base zoom.
    Direct,
    /// Target framed in the top-left third.
    #[serde(rename = "thirds-tl")]
    ThirdsTopLeft,
    /// Target framed in the top-right third.
    #[serde(rename = "thirds-tr")]
    ThirdsTopRight,
    /// Target framed in the bottom-left third.
    #[serde(rename = "thirds-bl")]
    ThirdsBottomLeft,
    /// Target framed in the bottom-right third.
    #[serde(rename = "thirds-br")]
    ThirdsBottomRight,
    /// Wide shot halfway between star and target.
    Establishing,
    /// Fitted to the span of nearby bodies.
    Context,
    /// Looking past the nearest inner body towards the target.
    OverShoulder,
    /// Tight shot on the target.
    Close,
    /// Loose shot on the target.
    Medium,
}

impl CandidateKind {
    /// All candidate kinds, in generation order.
    pub const ALL: &'static [CandidateKind] = &[
        CandidateKind::Direct,
        CandidateKind::ThirdsTopLeft,
        CandidateKind::ThirdsTopRight,
        CandidateKind::ThirdsBottomLeft,
        CandidateKind::ThirdsBottomRight,
        CandidateKind::Establishing,
        CandidateKind::Context,
        CandidateKind::OverShoulder,
        CandidateKind::Close,
        CandidateKind::Medium,
    ];

    /// Returns the kind tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::Direct => "direct",
            CandidateKind::ThirdsTopLeft => "thirds-tl",
            CandidateKind::ThirdsTopRight => "thirds-tr",
            CandidateKind::ThirdsBottomLeft => "thirds-bl",
            CandidateKind::ThirdsBottomRight => "thirds-br",
            CandidateKind::Establishing => "establishing",
            CandidateKind::Context => "context",
            CandidateKind::OverShoulder => "over-shoulder",
            CandidateKind::Close => "close",
            CandidateKind::Medium => "medium",
        }
    }

    /// Returns a human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            CandidateKind::Direct => "Target centered at calibrated zoom",
            CandidateKind::ThirdsTopLeft => "Rule of thirds, top-left",
            CandidateKind::ThirdsTopRight => "Rule of thirds, top-right",
            CandidateKind::ThirdsBottomLeft => "Rule of thirds, bottom-left",
            CandidateKind::ThirdsBottomRight => "Rule of thirds, bottom-right",
            CandidateKind::Establishing => "Wide shot between star and target",
            CandidateKind::Context => "Fit to nearby bodies",
            CandidateKind::OverShoulder => "Past the nearest inner body",
            CandidateKind::Close => "Tight framing",
            CandidateKind::Medium => "Loose framing",
        }
    }

    /// Returns true for the four rule-of-thirds corner placements.
    pub fn is_thirds(&self) -> bool {
        matches!(
            self,
            CandidateKind::ThirdsTopLeft
                | CandidateKind::ThirdsTopRight
                | CandidateKind::ThirdsBottomLeft
                | CandidateKind::ThirdsBottomRight
        )
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CandidateKind {
    type Err = CandidateKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "direct" => Ok(CandidateKind::Direct),
            "thirds-tl" => Ok(CandidateKind::ThirdsTopLeft),
            "thirds-tr" => Ok(CandidateKind::ThirdsTopRight),
            "thirds-bl" => Ok(CandidateKind::ThirdsBottomLeft),
            "thirds-br" => Ok(CandidateKind::ThirdsBottomRight),
            "establishing" => Ok(CandidateKind::Establishing),
            "context" => Ok(CandidateKind::Context),
            "over-shoulder" => Ok(CandidateKind::OverShoulder),
            "close" => Ok(CandidateKind::Close),
            "medium" => Ok(CandidateKind::Medium),
            _ => Err(CandidateKindParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown candidate kind: {0}")]
pub struct CandidateKindParseError(String);

/// Requested view style for a framing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    /// Score the full candidate palette and take the best.
    #[default]
    Auto,
    /// Prefer one kind of candidate when it was generated.
    Prefer(CandidateKind),
}

impl FromStr for ViewType {
    type Err = CandidateKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(ViewType::Auto);
        }
        s.parse().map(ViewType::Prefer)
    }
}
