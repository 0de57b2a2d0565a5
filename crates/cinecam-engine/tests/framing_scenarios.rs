//! End-to-end framing and journey scenarios.

use cinecam_engine::projection::REFERENCE_FRAME_PX;
use cinecam_engine::scoring::VISIBILITY_MARGIN_PX;
use cinecam_engine::{
    gather_context, generate_candidates, generate_journey_camera, resolve_target,
    score_fill_factor, select_best, BodyType, CameraCandidate, CameraDirector, CandidateKind,
    CandidateOptions, CanvasSize, CelestialBody, CompositionScorer, JourneyPhase, Place,
    Projection, Scene, ScoreContext, ScoredCandidate, Star, ViewOptions, WorldPoint,
    DISQUALIFIED_SCORE,
};
use tracing_subscriber::EnvFilter;

/// Route engine logs through the test harness; set `RUST_LOG=cinecam_engine=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sol() -> Scene {
    Scene::new(
        Some(Star { x: 0.0, y: 0.0 }),
        vec![
            CelestialBody::new("mercury", 0.39, 2440.0, BodyType::Planet),
            CelestialBody::new("venus", 0.72, 6052.0, BodyType::Planet),
            CelestialBody::new("earth", 1.0, 6371.0, BodyType::Planet),
            CelestialBody::new("mars", 1.52, 3390.0, BodyType::Planet),
            CelestialBody::new("ceres", 2.77, 473.0, BodyType::DwarfPlanet),
            CelestialBody::new("jupiter", 5.2, 69911.0, BodyType::GasGiant),
            CelestialBody::new("saturn", 9.54, 58232.0, BodyType::GasGiant),
        ],
        vec![
            Place::linked("lagrange-station", "earth"),
            Place::linked("ceres-mine", "ceres"),
        ],
    )
}

#[test]
fn direct_candidate_always_passes_visibility_gate() {
    let canvases = [
        CanvasSize::new(200.0, 200.0),
        CanvasSize::new(800.0, 600.0),
        CanvasSize::new(1920.0, 1080.0),
        CanvasSize::new(200.0, 1000.0),
    ];
    let scorer = CompositionScorer::default();

    for radius_km in [1.0, 50.0, 473.0, 6371.0, 69911.0, 696_000.0] {
        let scene = Scene::new(
            None,
            vec![
                CelestialBody::new("subject", 5.0, radius_km, BodyType::Planet),
                CelestialBody::new("neighbour", 4.0, 3000.0, BodyType::Planet),
            ],
            vec![],
        );
        let target = resolve_target(&scene, "subject").unwrap();
        let context = gather_context(&scene, &target, 5.0);
        let candidates = generate_candidates(&target, &context, &CandidateOptions::default());
        let direct = candidates
            .iter()
            .find(|c| c.kind == CandidateKind::Direct)
            .unwrap();

        for canvas in canvases {
            let ctx = ScoreContext {
                star: context.star,
                bodies: &context.bodies,
                canvas,
            };
            let breakdown = scorer.breakdown(direct, &target, &ctx);
            assert!(
                !breakdown.disqualified,
                "radius {radius_km} km on {}x{} should keep the target in frame",
                canvas.width,
                canvas.height
            );
        }
    }
}

#[test]
fn disqualified_iff_target_outside_margin() {
    let scene = sol();
    let scorer = CompositionScorer::default();
    let canvas = CanvasSize::new(800.0, 600.0);

    for id in ["mercury", "earth", "ceres", "jupiter", "lagrange-station"] {
        let target = resolve_target(&scene, id).unwrap();
        let context = gather_context(&scene, &target, 5.0);
        let ctx = ScoreContext {
            star: context.star,
            bodies: &context.bodies,
            canvas,
        };

        for candidate in generate_candidates(&target, &context, &CandidateOptions::default()) {
            let proj = Projection::new(candidate.center(), candidate.zoom, canvas);
            let on_screen = proj.world_to_screen(target.position());
            let inside = proj.is_within(on_screen, VISIBILITY_MARGIN_PX);

            let score = scorer.score(&candidate, &target, &ctx);
            assert_eq!(
                score == DISQUALIFIED_SCORE,
                !inside,
                "{id}/{} scored {score}",
                candidate.kind
            );
        }
    }
}

#[test]
fn offscreen_candidate_scores_exactly_sentinel() {
    let scene = sol();
    let target = resolve_target(&scene, "earth").unwrap();
    let context = gather_context(&scene, &target, 5.0);
    let ctx = ScoreContext {
        star: context.star,
        bodies: &context.bodies,
        canvas: CanvasSize::new(800.0, 600.0),
    };
    let scorer = CompositionScorer::default();

    // At zoom 1 the target sits 100px per AU from the camera.
    for (dx, dy) in [(3.5, 0.0), (-3.5, 0.0), (0.0, 2.5), (0.0, -2.5)] {
        let candidate =
            CameraCandidate::new(target.orbit_au - dx, -dy, 1.0, CandidateKind::Medium);
        assert_eq!(scorer.score(&candidate, &target, &ctx), DISQUALIFIED_SCORE);
    }
}

#[test]
fn select_best_returns_maximum_with_earliest_tie() {
    init_tracing();
    let scene = sol();
    let director = CameraDirector::new(&scene);
    let ranked = director
        .rank_candidates("mars", &ViewOptions::default())
        .unwrap();
    let max = ranked
        .iter()
        .map(|r| r.scored.score)
        .fold(f64::NEG_INFINITY, f64::max);

    let best = select_best(ranked.iter().map(|r| r.scored).collect()).unwrap();
    assert_eq!(best.score, max);

    let c = CameraCandidate::new(0.0, 0.0, 1.0, CandidateKind::Direct);
    let tied = vec![
        ScoredCandidate::new(CameraCandidate { kind: CandidateKind::Close, ..c }, 140.0, 8),
        ScoredCandidate::new(CameraCandidate { kind: CandidateKind::ThirdsTopLeft, ..c }, 140.0, 1),
        ScoredCandidate::new(CameraCandidate { kind: CandidateKind::Medium, ..c }, 90.0, 9),
    ];
    assert_eq!(
        select_best(tied).unwrap().candidate.kind,
        CandidateKind::ThirdsTopLeft
    );
}

#[test]
fn fill_factor_peaks_at_half() {
    assert!(score_fill_factor(0.5) > score_fill_factor(0.3));
    assert!(score_fill_factor(0.3) > score_fill_factor(0.1));
    assert!(score_fill_factor(0.5) > score_fill_factor(0.49));
    assert!(score_fill_factor(0.5) > score_fill_factor(0.51));
}

#[test]
fn journey_with_identical_endpoints_uses_unit_base_zoom() {
    let a = WorldPoint::new(2.77, 0.0);
    for i in 0..=20 {
        let progress = i as f64 / 20.0;
        let kf = generate_journey_camera(a, a, progress);
        let expected = match kf.phase {
            JourneyPhase::Departure => 1.5 - progress,
            JourneyPhase::Transit => 0.5,
            JourneyPhase::Arrival => 0.5 + (progress - 0.7) * 3.0,
        };
        assert!((kf.zoom - expected).abs() < 1e-12);
        assert_eq!(kf.x, a.x);
    }
}

#[test]
fn four_keyframes_at_thirds() {
    init_tracing();
    let scene = sol();
    let director = CameraDirector::new(&scene);
    let keyframes = director.generate_journey_keyframes("earth", "ceres-mine", 4);

    assert_eq!(keyframes.len(), 4);
    let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
    for (kf, p) in keyframes.iter().zip(expected) {
        assert!((kf.progress - p).abs() < 1e-12);
    }
    assert!((keyframes[3].x - 2.77).abs() < 1e-12);
}

#[test]
fn candidate_palette_for_orbit_five_target() {
    let scene = Scene::new(
        None,
        vec![CelestialBody::new("target", 5.0, 6371.0, BodyType::Planet)],
        vec![],
    );
    let target = resolve_target(&scene, "target").unwrap();
    let context = gather_context(&scene, &target, 5.0);
    let candidates = generate_candidates(
        &target,
        &context,
        &CandidateOptions {
            reference_frame_px: REFERENCE_FRAME_PX,
        },
    );

    for kind in [
        CandidateKind::Direct,
        CandidateKind::ThirdsTopLeft,
        CandidateKind::ThirdsTopRight,
        CandidateKind::ThirdsBottomLeft,
        CandidateKind::ThirdsBottomRight,
        CandidateKind::Establishing,
        CandidateKind::Close,
        CandidateKind::Medium,
    ] {
        assert!(
            candidates.iter().any(|c| c.kind == kind),
            "missing {kind}"
        );
    }
}

#[test]
fn generate_view_is_deterministic_across_threads() {
    let scene = sol();
    let director = CameraDirector::new(&scene);
    let expected = director.generate_view("jupiter", &ViewOptions::default());
    assert!(expected.is_some());

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| director.generate_view("jupiter", &ViewOptions::default())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn unknown_ids_degrade_gracefully() {
    init_tracing();
    let scene = sol();
    let director = CameraDirector::new(&scene);
    assert!(director.generate_view("vulcan", &ViewOptions::default()).is_none());
    assert!(director.generate_journey_keyframes("vulcan", "earth", 4).is_empty());
    assert!(director.generate_journey_keyframes("earth", "vulcan", 4).is_empty());
}

#[test]
fn scene_from_json_frames_place() {
    init_tracing();
    let scene = Scene::from_json_str(
        r#"{
            "bodies": [
                { "id": "kepler-b", "orbitAU": 0.8, "radiusKm": 9100.0, "type": "planet" },
                { "id": "kepler-c", "orbitAU": 1.9, "type": "moon" }
            ],
            "places": [ { "id": "relay", "linkedTo": "kepler-c" } ]
        }"#,
    )
    .unwrap();
    let director = CameraDirector::new(&scene);

    let view = director.generate_view("relay", &ViewOptions::default()).unwrap();
    assert!(view.zoom.is_finite() && view.zoom >= 0.1);
    assert!(view.score.unwrap() > DISQUALIFIED_SCORE);
}
