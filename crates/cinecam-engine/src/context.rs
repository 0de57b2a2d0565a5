//! Context gathering: bodies near the target.

use cinecam_models::{CelestialBody, Scene, Star};

use crate::target::ResolvedTarget;

/// Scene context around one target, derived once per framing request.
#[derive(Debug, Clone)]
pub struct ViewContext<'a> {
    /// Star (origin when the scene has none)
    pub star: Star,
    /// Bodies within range of the target, target excluded, in scene order
    pub bodies: Vec<&'a CelestialBody>,
    /// Target orbit (AU)
    pub target_orbit: f64,
    /// Context bodies orbiting inside the target
    pub inner_bodies: Vec<&'a CelestialBody>,
    /// Context bodies orbiting outside the target
    pub outer_bodies: Vec<&'a CelestialBody>,
}

impl ViewContext<'_> {
    /// The inner body orbiting closest to the target.
    pub fn nearest_inner(&self) -> Option<&CelestialBody> {
        self.inner_bodies
            .iter()
            .copied()
            .max_by(|a, b| a.orbit_au.total_cmp(&b.orbit_au))
    }

    /// Minimum and maximum orbit over the context bodies.
    pub fn orbit_span(&self) -> Option<(f64, f64)> {
        let mut orbits = self.bodies.iter().map(|b| b.orbit_au);
        let first = orbits.next()?;
        Some(orbits.fold((first, first), |(lo, hi), o| (lo.min(o), hi.max(o))))
    }
}

/// Collect bodies with `|orbit - target orbit| <= range_au`, excluding the target.
///
/// Order follows the scene; bodies sharing the target's orbit are context
/// bodies but belong to neither the inner nor the outer list.
pub fn gather_context<'a>(
    scene: &'a Scene,
    target: &ResolvedTarget,
    range_au: f64,
) -> ViewContext<'a> {
    let target_orbit = target.orbit_au;

    let bodies: Vec<&CelestialBody> = scene
        .bodies
        .iter()
        .filter(|b| b.id != target.id)
        .filter(|b| (b.orbit_au - target_orbit).abs() <= range_au)
        .collect();

    let inner_bodies = bodies
        .iter()
        .copied()
        .filter(|b| b.orbit_au < target_orbit)
        .collect();
    let outer_bodies = bodies
        .iter()
        .copied()
        .filter(|b| b.orbit_au > target_orbit)
        .collect();

    ViewContext {
        star: scene.star_or_origin(),
        bodies,
        target_orbit,
        inner_bodies,
        outer_bodies,
    }
}
