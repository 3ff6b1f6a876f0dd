use fusion_core::answers::{AnswerSet, Friction, Motivation, Rhythm};
use fusion_core::color::Rgb;
use fusion_core::config::FusionConfig;
use fusion_core::particle::Layer;
use fusion_core::spawn::{expected_count, initialize, SpawnProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn every_subset() -> Vec<AnswerSet> {
    let mut sets = Vec::new();
    for m in [None, Some(Motivation::Steady)] {
        for r in [None, Some(Rhythm::Momentum)] {
            for f in [None, Some(Friction::Overload)] {
                sets.push(AnswerSet::new(m, r, f));
            }
        }
    }
    sets
}

#[test]
fn test_count_matches_present_dimensions() {
    let config = FusionConfig::default();
    for answers in every_subset() {
        let mut rng = StdRng::seed_from_u64(1);
        let particles = initialize(&answers, &config, &mut rng);
        let expected = answers.motivation.map_or(0, |_| 200)
            + answers.rhythm.map_or(0, |_| 120)
            + answers.friction.map_or(0, |_| 100);
        assert_eq!(particles.count, expected, "{:?}", answers);
        assert_eq!(expected_count(&answers), expected);
        assert_eq!(particles.position.len(), expected);
        assert_eq!(particles.layer.len(), expected);
    }
}

#[test]
fn test_empty_set_spawns_nothing() {
    let mut rng = StdRng::seed_from_u64(1);
    let particles = initialize(&AnswerSet::default(), &FusionConfig::default(), &mut rng);
    assert!(particles.is_empty());
}

#[test]
fn test_alive_only_scenario() {
    let answers = AnswerSet::new(Some(Motivation::Alive), None, None);
    let mut rng = StdRng::seed_from_u64(42);
    let particles = initialize(&answers, &FusionConfig::default(), &mut rng);
    let palette = Motivation::Alive.palette();

    assert_eq!(particles.count, 200);
    for i in 0..particles.count {
        assert_eq!(particles.layer[i], Layer::Motivation);
        assert!(
            palette.particles.contains(&particles.paint[i].rgb),
            "particle {} color {} not in alive palette",
            i,
            particles.paint[i].rgb
        );
        assert_eq!(particles.paint[i].opacity, 1.0);
    }
}

#[test]
fn test_full_set_layers_and_colors() {
    let answers = AnswerSet::new(
        Some(Motivation::Steady),
        Some(Rhythm::Momentum),
        Some(Friction::Overload),
    );
    let mut rng = StdRng::seed_from_u64(7);
    let particles = initialize(&answers, &FusionConfig::default(), &mut rng);

    assert_eq!(particles.count, 420);
    assert_eq!(particles.count_layer(Layer::Motivation), 200);
    assert_eq!(particles.count_layer(Layer::Rhythm), 120);
    assert_eq!(particles.count_layer(Layer::Friction), 100);

    let steady_base = Motivation::Steady.palette().base;
    for i in 0..particles.count {
        match particles.layer[i] {
            Layer::Rhythm => assert_eq!(particles.paint[i].rgb, steady_base),
            Layer::Friction => {
                assert_eq!(particles.paint[i].rgb, Rgb::BLACK);
                assert!((particles.paint[i].opacity - 0.3).abs() < 1e-6);
            }
            Layer::Motivation => {}
        }
    }
}

#[test]
fn test_rhythm_without_motivation_uses_neutral() {
    let answers = AnswerSet::new(None, Some(Rhythm::Discipline), None);
    let mut rng = StdRng::seed_from_u64(7);
    let particles = initialize(&answers, &FusionConfig::default(), &mut rng);
    assert!(particles.paint.iter().all(|p| p.rgb == Rgb::hex(0x9CA9BA)));
}

#[test]
fn test_initial_ranges() {
    let config = FusionConfig::default();
    let answers = AnswerSet::new(
        Some(Motivation::Free),
        Some(Rhythm::Intuition),
        Some(Friction::Tension),
    );
    let flow = Rhythm::Intuition.flow();
    let mut rng = StdRng::seed_from_u64(11);
    let particles = initialize(&answers, &config, &mut rng);

    for i in 0..particles.count {
        let layer = particles.layer[i];
        let profile = SpawnProfile::for_layer(layer);
        let pos = particles.position[i];
        let vel = particles.velocity[i];

        assert!(pos.x >= 0.0 && pos.x <= config.width, "x out of vessel: {}", pos.x);
        assert!(pos.y <= 0.0, "particle {} starts inside the vessel: y={}", i, pos.y);
        assert!(profile.radius.contains(particles.radius[i]));
        assert!(profile.alpha.contains(particles.alpha[i]));
        assert!(vel.y > 0.0, "particles must start falling");

        let max_vy = match layer {
            Layer::Rhythm => 0.8 + flow.drop_speed,
            _ => profile.fall_speed.min + profile.fall_speed.span,
        };
        assert!(vel.y <= max_vy + 1e-5, "{:?} vy={} > {}", layer, vel.y, max_vy);
    }
}

#[test]
fn test_stagger_grows_within_layer() {
    let answers = AnswerSet::new(Some(Motivation::Secure), None, None);
    let mut rng = StdRng::seed_from_u64(5);
    let particles = initialize(&answers, &FusionConfig::default(), &mut rng);
    // Droplet i is offset by 0.5 * i on top of a 300px random pour height.
    for i in 0..particles.count {
        let lowest_allowed = -(300.0 + 0.5 * i as f32) - 0.01;
        let highest_allowed = -(0.5 * i as f32) + 0.01;
        let y = particles.position[i].y;
        assert!(y >= lowest_allowed && y <= highest_allowed, "droplet {} at y={}", i, y);
    }
}

#[test]
fn test_same_seed_same_layout() {
    let answers = AnswerSet::new(Some(Motivation::Light), Some(Rhythm::Curiosity), None);
    let config = FusionConfig::default();
    let a = initialize(&answers, &config, &mut StdRng::seed_from_u64(99));
    let b = initialize(&answers, &config, &mut StdRng::seed_from_u64(99));
    let c = initialize(&answers, &config, &mut StdRng::seed_from_u64(100));
    assert_eq!(a.position, b.position);
    assert_eq!(a.paint, b.paint);
    assert_ne!(a.position, c.position);
}
