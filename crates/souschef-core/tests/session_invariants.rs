//! Property tests for the session engine.
//!
//! For arbitrary recipes and arbitrary tick/command sequences, the session
//! invariants must hold at every observed state:
//! - at most one session is active,
//! - 0 <= step remaining <= current step duration,
//! - step remaining <= overall remaining <= recipe total,
//! - overall remaining == step remaining + sum of later step durations.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use souschef_core::{CookSettings, Difficulty, Recipe, SessionEngine, Step, StepPayload};

fn recipe_from(minutes: Vec<u64>) -> Recipe {
    let steps = minutes
        .into_iter()
        .map(|m| {
            Step::new(
                "step",
                m,
                StepPayload::Cooking {
                    settings: CookSettings {
                        temperature: 100,
                        speed: 1,
                    },
                },
            )
        })
        .collect();
    Recipe::new("prop dish", Difficulty::Medium, steps)
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
}

fn assert_invariants(engine: &SessionEngine, recipe: &Recipe) {
    let Some(sess) = engine.session() else { return };
    let step = &recipe.steps[sess.current_step_index];
    assert!(sess.step_remaining_secs <= step.duration_secs());
    assert!(sess.overall_remaining_secs >= sess.step_remaining_secs);
    assert!(sess.overall_remaining_secs <= recipe.total_duration_secs());
    assert_eq!(
        sess.overall_remaining_secs,
        sess.step_remaining_secs + recipe.remaining_secs_from(sess.current_step_index + 1)
    );
}

proptest! {
    #[test]
    fn ticks_preserve_invariants(
        minutes in prop::collection::vec(1u64..8, 1..6),
        deltas in prop::collection::vec(0i64..600, 1..40),
    ) {
        let recipe = recipe_from(minutes);
        let mut engine = SessionEngine::new();
        engine.start(&recipe, at(0)).unwrap();

        let mut now = 0;
        for delta in deltas {
            now += delta;
            engine.tick(&recipe, at(now));
            assert_invariants(&engine, &recipe);
        }
    }

    #[test]
    fn mixed_commands_preserve_invariants(
        minutes in prop::collection::vec(1u64..5, 1..5),
        // 0 = tick, 1 = pause, 2 = resume, 3 = stop current step
        commands in prop::collection::vec((0u8..4, 1i64..300), 1..30),
    ) {
        let recipe = recipe_from(minutes);
        let mut engine = SessionEngine::new();
        engine.start(&recipe, at(0)).unwrap();

        let mut now = 0;
        for (cmd, delta) in commands {
            now += delta;
            match cmd {
                0 => { engine.tick(&recipe, at(now)); }
                1 => { engine.pause(at(now)); }
                2 => { engine.resume(at(now)); }
                _ => { engine.stop_current_step(&recipe, at(now)); }
            }
            assert_invariants(&engine, &recipe);

            // Single-session rule: a second start must fail while active.
            if engine.session().is_some() {
                assert!(engine.start(&recipe, at(now)).is_err());
            }
        }
    }

    #[test]
    fn one_big_tick_equals_many_small_ticks(
        minutes in prop::collection::vec(1u64..5, 1..5),
        total in 1i64..2000,
    ) {
        let recipe = recipe_from(minutes.clone());

        let mut coarse = SessionEngine::new();
        coarse.start(&recipe, at(0)).unwrap();
        coarse.tick(&recipe, at(total));

        let mut fine = SessionEngine::new();
        fine.start(&recipe, at(0)).unwrap();
        for now in 1..=total {
            fine.tick(&recipe, at(now));
        }

        assert_eq!(coarse.snapshot(), fine.snapshot());
    }
}
