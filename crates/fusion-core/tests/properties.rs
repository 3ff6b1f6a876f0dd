//! Property-based checks of the per-frame invariants using proptest.
//!
//! For any subset of answers and any seed:
//! - the fill level stays within [0, max_fill]
//! - no particle sinks below its floor
//! - no particle leaves the vessel horizontally
//! - a run stops only once settled after the minimum run, or at the frame cap

use fusion_core::answers::{AnswerSet, Friction, Motivation, Rhythm};
use fusion_core::config::FusionConfig;
use fusion_core::solver::Simulation;
use fusion_core::spawn::expected_count;
use proptest::prelude::*;

const STEPS: usize = 240;

fn answer_set() -> impl Strategy<Value = AnswerSet> {
    (
        proptest::option::of(0..10usize),
        proptest::option::of(0..10usize),
        proptest::option::of(0..10usize),
    )
        .prop_map(|(m, r, f)| {
            AnswerSet::new(
                m.map(|i| Motivation::ALL[i]),
                r.map(|i| Rhythm::ALL[i]),
                f.map(|i| Friction::ALL[i]),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_particle_count_matches_answers(answers in answer_set(), seed in any::<u64>()) {
        let sim = Simulation::new(answers, FusionConfig::default(), seed);
        prop_assert_eq!(sim.particles().count, expected_count(&answers));
    }

    #[test]
    fn prop_frame_invariants_hold(answers in answer_set(), seed in any::<u64>()) {
        let config = FusionConfig::default();
        let mut sim = Simulation::new(answers, config.clone(), seed);

        for _ in 0..STEPS {
            sim.step();
            let fill = sim.fill_level();
            prop_assert!((0.0..=config.max_fill).contains(&fill), "fill {}", fill);

            let p = sim.particles();
            for i in 0..p.count {
                let pos = p.position[i];
                let floor = config.floor_for(p.radius[i]);
                prop_assert!(pos.y <= floor, "particle {} below floor: {} > {}", i, pos.y, floor);
                prop_assert!(
                    pos.x >= 0.0 && pos.x <= config.width,
                    "particle {} outside vessel: x={}", i, pos.x
                );
            }
        }
    }

    #[test]
    fn prop_run_stops_settled_or_at_cap(answers in answer_set(), seed in any::<u64>()) {
        let config = FusionConfig { max_frames: 400, ..FusionConfig::default() };
        let mut sim = Simulation::new(answers, config.clone(), seed);
        while sim.should_continue() {
            sim.step();
        }
        let state = sim.state();
        if state.frame < config.max_frames {
            prop_assert!(sim.is_settled(), "stopped unsettled at frame {}", state.frame);
            prop_assert!(state.time >= config.min_run_seconds, "stopped early at {}s", state.time);
        } else {
            prop_assert_eq!(state.frame, config.max_frames);
        }
    }
}
