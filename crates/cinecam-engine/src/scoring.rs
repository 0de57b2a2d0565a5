//! Composition scoring for camera candidates.
//!
//! Each candidate gets a weighted sum of independently normalized terms:
//!
//! 1. **Visibility gate**: the target must project inside the canvas shrunk
//!    by a 100px margin, otherwise the candidate scores exactly
//!    [`DISQUALIFIED_SCORE`] and nothing else is evaluated.
//! 2. **Fill factor**: target diameter over the canvas' shorter side, bell
//!    curve centered at 0.5.
//! 3. **Context objects**: nearby bodies in frame (50px slack), capped.
//! 4. **Rule of thirds**: normalized target offset from center, bell curve
//!    centered at 0.12.
//! 5. **Depth separation**: log-ratio of the largest to smallest visible radius.
//! 6. **Clutter**: penalty per pair of visible objects closer than 30px.
//! 7. **Star visible**: flat bonus when the star is on the canvas.
//!
//! Context bodies and the clutter/depth set are projected on the ecliptic
//! line: the camera's vertical offset moves the target on screen but not the
//! other bodies.

use cinecam_models::{CanvasSize, CelestialBody, Star};

use crate::candidates::CameraCandidate;
use crate::config::ScoringWeights;
use crate::projection::{Projection, ScreenPoint};
use crate::target::{body_radius_km, ResolvedTarget};

/// Score of a candidate whose target is off-frame.
pub const DISQUALIFIED_SCORE: f64 = -1000.0;

/// Margin (px) the target must keep from every canvas edge.
pub const VISIBILITY_MARGIN_PX: f64 = 100.0;

/// Slack (px) beyond the canvas edges within which context bodies count.
pub const CONTEXT_MARGIN_PX: f64 = 50.0;

/// Screen distance (px) below which two objects are cluttered.
pub const CLUTTER_DISTANCE_PX: f64 = 30.0;

const FILL_CENTER: f64 = 0.5;
const FILL_WIDTH: f64 = 0.2;
const THIRDS_CENTER: f64 = 0.12;
const THIRDS_WIDTH: f64 = 0.08;

/// Gaussian bell curve peaking at 1.0 when `value == center`.
#[inline]
pub fn score_bell_curve(value: f64, center: f64, width: f64) -> f64 {
    let z = (value - center) / width;
    (-0.5 * z * z).exp()
}

/// Fill-factor score (0-1); optimal at 50% fill.
#[inline]
pub fn score_fill_factor(fill: f64) -> f64 {
    score_bell_curve(fill, FILL_CENTER, FILL_WIDTH)
}

/// Rule-of-thirds score (0-1) for a normalized offset from the canvas center.
#[inline]
pub fn score_rule_of_thirds(offset: f64) -> f64 {
    score_bell_curve(offset, THIRDS_CENTER, THIRDS_WIDTH)
}

/// Depth separation (0-1) from the extreme radii of the visible objects.
pub fn depth_separation(radii_km: &[f64]) -> f64 {
    if radii_km.len() < 2 {
        return 0.0;
    }
    let max = radii_km.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = radii_km.iter().copied().fold(f64::INFINITY, f64::min);
    if min.is_nan() || min <= 0.0 {
        return 0.0;
    }
    ((max / min).log10() / 2.0).clamp(0.0, 1.0)
}

/// Number of point pairs closer than [`CLUTTER_DISTANCE_PX`].
pub fn count_cluttered_pairs(points: &[ScreenPoint]) -> usize {
    points
        .iter()
        .enumerate()
        .map(|(i, a)| {
            points[i + 1..]
                .iter()
                .filter(|b| a.distance_to(b) < CLUTTER_DISTANCE_PX)
                .count()
        })
        .sum()
}

/// Scene data the scorer evaluates a candidate against.
#[derive(Debug, Clone)]
pub struct ScoreContext<'a> {
    /// Star (origin when the scene has none)
    pub star: Star,
    /// Context bodies around the target, target excluded
    pub bodies: &'a [&'a CelestialBody],
    /// Canvas the view will be rendered on
    pub canvas: CanvasSize,
}

/// Per-term composition score, weighted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// True when the target failed the visibility gate
    pub disqualified: bool,
    /// Gate contribution (the visibility weight when passing)
    pub visibility: f64,
    /// Raw fill ratio (target diameter / shorter canvas side)
    pub fill: f64,
    /// Weighted fill term
    pub fill_score: f64,
    /// Context bodies in frame, before capping
    pub context_count: usize,
    /// Weighted context term, capped
    pub context_score: f64,
    /// Normalized target offset from the canvas center
    pub thirds_offset: f64,
    /// Weighted rule-of-thirds term
    pub thirds_score: f64,
    /// Weighted depth separation term
    pub depth_score: f64,
    /// Visible pairs closer than the clutter distance
    pub clutter_pairs: usize,
    /// Clutter penalty (negative)
    pub clutter_score: f64,
    /// True when the star lies inside the canvas
    pub star_visible: bool,
    /// Star bonus when visible
    pub star_score: f64,
}

impl ScoreBreakdown {
    /// Breakdown for a candidate that failed the visibility gate.
    pub fn disqualified() -> Self {
        Self {
            disqualified: true,
            ..Default::default()
        }
    }

    /// Total score; [`DISQUALIFIED_SCORE`] when disqualified.
    pub fn total(&self) -> f64 {
        if self.disqualified {
            return DISQUALIFIED_SCORE;
        }
        self.visibility
            + self.fill_score
            + self.context_score
            + self.thirds_score
            + self.depth_score
            + self.clutter_score
            + self.star_score
    }
}

/// Composition scorer with an injected weight profile.
#[derive(Debug, Clone, Default)]
pub struct CompositionScorer {
    weights: ScoringWeights,
}

impl CompositionScorer {
    /// Create a scorer with the given weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a candidate; higher is better.
    pub fn score(
        &self,
        candidate: &CameraCandidate,
        target: &ResolvedTarget,
        ctx: &ScoreContext<'_>,
    ) -> f64 {
        self.breakdown(candidate, target, ctx).total()
    }

    /// Score a candidate, keeping every term.
    pub fn breakdown(
        &self,
        candidate: &CameraCandidate,
        target: &ResolvedTarget,
        ctx: &ScoreContext<'_>,
    ) -> ScoreBreakdown {
        let w = &self.weights;
        let canvas = ctx.canvas;
        let proj = Projection::new(candidate.center(), candidate.zoom, canvas);

        let target_screen = proj.world_to_screen(target.position());
        if !proj.is_within(target_screen, VISIBILITY_MARGIN_PX) {
            return ScoreBreakdown::disqualified();
        }

        let fill = proj.km_to_pixels(target.radius_km) * 2.0 / canvas.min_dimension();
        let fill_score = score_fill_factor(fill) * w.fill_factor;

        let ecliptic = proj.on_ecliptic();
        let in_frame: Vec<(ScreenPoint, f64)> = ctx
            .bodies
            .iter()
            .map(|b| (ecliptic.world_to_screen(b.position()), body_radius_km(b)))
            .filter(|(p, _)| ecliptic.is_within(*p, -CONTEXT_MARGIN_PX))
            .collect();

        let context_count = in_frame.len();
        let context_score = context_count.min(w.context_cap) as f64 * w.context_object;

        let (cx, cy) = canvas.center();
        let thirds_offset =
            ((target_screen.x - cx) / canvas.width).hypot((target_screen.y - cy) / canvas.height);
        let thirds_score = score_rule_of_thirds(thirds_offset) * w.rule_of_thirds;

        let mut points = Vec::with_capacity(in_frame.len() + 1);
        let mut radii = Vec::with_capacity(in_frame.len() + 1);
        points.push(ecliptic.world_to_screen(target.position()));
        radii.push(target.radius_km);
        for (p, r) in &in_frame {
            points.push(*p);
            radii.push(*r);
        }

        let depth_score = depth_separation(&radii) * w.depth;
        let clutter_pairs = count_cluttered_pairs(&points);
        let clutter_score = clutter_pairs as f64 * w.clutter;

        let star_visible = proj.is_within(proj.world_to_screen(ctx.star.position()), 0.0);
        let star_score = if star_visible { w.star_visible } else { 0.0 };

        ScoreBreakdown {
            disqualified: false,
            visibility: w.visibility,
            fill,
            fill_score,
            context_count,
            context_score,
            thirds_offset,
            thirds_score,
            depth_score,
            clutter_pairs,
            clutter_score,
            star_visible,
            star_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{km_to_au, PIXELS_PER_AU};
    use cinecam_models::{BodyType, CandidateKind};

    fn target(orbit_au: f64, radius_km: f64) -> ResolvedTarget {
        ResolvedTarget {
            id: "target".to_string(),
            orbit_au,
            radius_km,
        }
    }

    /// Zoom at which a target of `radius_km` has `fill` of a 600px side.
    fn zoom_for_fill(radius_km: f64, fill: f64) -> f64 {
        fill * 600.0 / (km_to_au(radius_km) * 2.0 * PIXELS_PER_AU)
    }

    fn ctx<'a>(bodies: &'a [&'a CelestialBody]) -> ScoreContext<'a> {
        ScoreContext {
            star: Star::default(),
            bodies,
            canvas: CanvasSize::new(800.0, 600.0),
        }
    }

    #[test]
    fn test_fill_factor_ordering() {
        assert!((score_fill_factor(0.5) - 1.0).abs() < 1e-12);
        assert!(score_fill_factor(0.5) > score_fill_factor(0.3));
        assert!(score_fill_factor(0.3) > score_fill_factor(0.1));
        assert!((score_fill_factor(0.3) - score_fill_factor(0.7)).abs() < 1e-12);
    }

    #[test]
    fn test_rule_of_thirds_peaks_off_center() {
        assert!(score_rule_of_thirds(0.12) > score_rule_of_thirds(0.0));
        assert!(score_rule_of_thirds(0.12) > score_rule_of_thirds(0.3));
        assert!((score_rule_of_thirds(0.12) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_depth_separation() {
        assert_eq!(depth_separation(&[6371.0]), 0.0);
        assert!((depth_separation(&[100.0, 1000.0]) - 0.5).abs() < 1e-12);
        assert_eq!(depth_separation(&[1.0, 1.0e6]), 1.0);
        assert_eq!(depth_separation(&[500.0, 500.0]), 0.0);
    }

    #[test]
    fn test_cluttered_pairs() {
        let pts = [
            ScreenPoint { x: 0.0, y: 0.0 },
            ScreenPoint { x: 10.0, y: 0.0 },
            ScreenPoint { x: 20.0, y: 0.0 },
            ScreenPoint { x: 200.0, y: 0.0 },
        ];
        // (0,1), (0,2), (1,2)
        assert_eq!(count_cluttered_pairs(&pts), 3);
        assert_eq!(count_cluttered_pairs(&pts[3..]), 0);
    }

    #[test]
    fn test_offscreen_target_disqualified() {
        let scorer = CompositionScorer::default();
        let t = target(5.0, 6371.0);
        let zoom = zoom_for_fill(6371.0, 0.5);
        // 350px right of the camera center on an 800px canvas: x = 750 > 700
        let offset_au = 350.0 / (PIXELS_PER_AU * zoom);
        let candidate = CameraCandidate::new(5.0 - offset_au, 0.0, zoom, CandidateKind::Direct);

        let breakdown = scorer.breakdown(&candidate, &t, &ctx(&[]));
        assert!(breakdown.disqualified);
        assert_eq!(scorer.score(&candidate, &t, &ctx(&[])), DISQUALIFIED_SCORE);
    }

    #[test]
    fn test_vertical_margin_disqualifies() {
        let scorer = CompositionScorer::default();
        let t = target(5.0, 6371.0);
        let zoom = zoom_for_fill(6371.0, 0.5);
        // 250px below center on a 600px canvas: y = 550 > 500
        let offset_au = 250.0 / (PIXELS_PER_AU * zoom);
        let candidate = CameraCandidate::new(5.0, -offset_au, zoom, CandidateKind::Direct);
        assert_eq!(scorer.score(&candidate, &t, &ctx(&[])), DISQUALIFIED_SCORE);
    }

    #[test]
    fn test_centered_target_alone() {
        let scorer = CompositionScorer::default();
        let t = target(5.0, 6371.0);
        let candidate =
            CameraCandidate::new(5.0, 0.0, zoom_for_fill(6371.0, 0.5), CandidateKind::Direct);

        let b = scorer.breakdown(&candidate, &t, &ctx(&[]));
        assert!(!b.disqualified);
        assert!((b.fill - 0.5).abs() < 1e-9);
        assert!((b.fill_score - 50.0).abs() < 1e-6);
        assert_eq!(b.context_count, 0);
        assert_eq!(b.depth_score, 0.0);
        assert_eq!(b.clutter_pairs, 0);
        assert!(!b.star_visible);
        // Dead center: exp(-0.5 * 1.5^2) * 20
        let expected_thirds = (-0.5f64 * 1.5 * 1.5).exp() * 20.0;
        assert!((b.thirds_score - expected_thirds).abs() < 1e-9);
        assert!((b.total() - (100.0 + 50.0 + expected_thirds)).abs() < 1e-6);
    }

    #[test]
    fn test_context_clutter_and_depth() {
        let scorer = CompositionScorer::default();
        let t = target(1.0, 6371.0);
        let near = CelestialBody::new("near", 1.05, 1737.0, BodyType::Moon);
        let close = CelestialBody::new("close", 1.1, 637.1, BodyType::Moon);
        let far = CelestialBody::new("far", 30.0, 24622.0, BodyType::GasGiant);
        let bodies = [&near, &close, &far];

        // zoom 1 -> 100px per AU: near at +5px, close at +10px, far off-screen
        let candidate = CameraCandidate::new(1.0, 0.0, 1.0, CandidateKind::Medium);
        let b = scorer.breakdown(&candidate, &t, &ctx(&bodies));

        assert_eq!(b.context_count, 2);
        assert!((b.context_score - 20.0).abs() < 1e-12);
        assert_eq!(b.clutter_pairs, 3);
        assert!((b.clutter_score + 75.0).abs() < 1e-12);
        // 6371 / 637.1 = 10 -> log10 / 2 = 0.5
        assert!((b.depth_score - 7.5).abs() < 1e-9);
        // star at origin is 100px left of center
        assert!(b.star_visible);
        assert_eq!(b.star_score, 20.0);
    }

    #[test]
    fn test_context_cap() {
        let scorer = CompositionScorer::default();
        let t = target(1.0, 6371.0);
        let owned: Vec<CelestialBody> = (0..8)
            .map(|i| {
                let orbit = 1.0 + 0.5 * (i as f64 + 1.0);
                CelestialBody::new(format!("m{i}"), orbit, 1000.0, BodyType::Moon)
            })
            .collect();
        let bodies: Vec<&CelestialBody> = owned.iter().collect();

        let candidate = CameraCandidate::new(1.0, 0.0, 0.1, CandidateKind::Medium);
        let b = scorer.breakdown(&candidate, &t, &ctx(&bodies));
        assert_eq!(b.context_count, 8);
        assert!((b.context_score - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_offset_does_not_move_context_bodies() {
        let scorer = CompositionScorer::default();
        let t = target(1.0, 6371.0);
        let near = CelestialBody::new("near", 1.05, 1737.0, BodyType::Moon);
        let bodies = [&near];

        let level = CameraCandidate::new(1.0, 0.0, 1.0, CandidateKind::Medium);
        let lifted = CameraCandidate::new(1.0, 0.5, 1.0, CandidateKind::OverShoulder);
        let a = scorer.breakdown(&level, &t, &ctx(&bodies));
        let b = scorer.breakdown(&lifted, &t, &ctx(&bodies));

        assert_eq!(a.clutter_pairs, b.clutter_pairs);
        assert_eq!(a.context_count, b.context_count);
        assert!(a.thirds_offset < b.thirds_offset);
    }

    #[test]
    fn test_weights_are_injected() {
        let t = target(1.0, 6371.0);
        let candidate = CameraCandidate::new(1.0, 0.0, 1.0, CandidateKind::Medium);
        let default = CompositionScorer::default().score(&candidate, &t, &ctx(&[]));
        let no_star = CompositionScorer::new(ScoringWeights::default().with_star_bonus(0.0))
            .score(&candidate, &t, &ctx(&[]));
        assert!((default - no_star - 20.0).abs() < 1e-9);
    }
}
