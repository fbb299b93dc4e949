use lethe_core::models::StrengtheningEvent;
use lethe_core::node::{ContentCategory, ForgettingLifecycleState};
use lethe_decay::{
    calculate_difficulty, calculate_retrievability, get_decay_lifecycle_state, run_decay_cycle,
    strengthen_node, update_stability_on_access,
};
use proptest::prelude::*;
use test_fixtures::{neural_state, node_input, reference_now};

fn arb_category() -> impl Strategy<Value = ContentCategory> {
    prop::sample::select(ContentCategory::ALL.to_vec())
}

fn arb_event() -> impl Strategy<Value = StrengtheningEvent> {
    prop::sample::select(StrengtheningEvent::ALL.to_vec())
}

// ── Forgetting curve ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn recall_at_stability_is_ninety_percent(stability in 0.01f64..1000.0) {
        let r = calculate_retrievability(stability, stability);
        prop_assert!((r - 0.9).abs() < 1e-9);
    }

    #[test]
    fn recall_is_bounded_and_monotone(
        stability in 0.01f64..1000.0,
        days in 0.0f64..5000.0,
        extra in 0.001f64..100.0,
    ) {
        let r = calculate_retrievability(stability, days);
        let later = calculate_retrievability(stability, days + extra);
        prop_assert!((0.0..=1.0).contains(&r));
        prop_assert!(later <= r);
    }
}

// ── Lifecycle ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ladder_never_returns_explicit_states(r in 0.0f64..=1.0, days in 0.0f64..2000.0) {
        let state = get_decay_lifecycle_state(r, days);
        prop_assert!(state.is_decay_state());
    }

    #[test]
    fn states_only_move_down_the_ladder_with_time(
        stability in 0.1f64..400.0,
        days in 0.0f64..1500.0,
        extra in 0.0f64..500.0,
    ) {
        let now = reference_now();
        let early = neural_state(stability, days, ForgettingLifecycleState::Active, now);
        let late = neural_state(stability, days + extra, ForgettingLifecycleState::Active, now);
        let a = lethe_decay::determine_lifecycle(&early, now).state;
        let b = lethe_decay::determine_lifecycle(&late, now).state;
        prop_assert!(a <= b, "{a} then {b}");
    }
}

// ── Stability ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn stability_never_shrinks_or_exceeds_cap(
        stability in 0.01f64..365.0,
        difficulty in 0.0f64..=1.0,
    ) {
        let update = update_stability_on_access(stability, difficulty);
        prop_assert!(update.stability_after >= stability);
        prop_assert!(update.stability_after <= 365.0);
        prop_assert!(update.growth_factor >= 1.25 - 1e-12);
        prop_assert!(update.growth_factor <= 2.5 + 1e-12);
    }
}

// ── Strengthening ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn strengthening_saturates(
        events in prop::collection::vec(arb_event(), 1..200),
        start in 0.0f64..=1.0,
    ) {
        let now = reference_now();
        let mut state = neural_state(3.0, 0.0, ForgettingLifecycleState::Active, now);
        state.strength = start;
        for event in events {
            let outcome = strengthen_node(&state, event, now);
            prop_assert!(outcome.state.strength >= state.strength);
            prop_assert!(outcome.state.strength <= 1.0);
            state = outcome.state;
        }
    }

    #[test]
    fn same_event_deltas_shrink_below_the_cap(
        event in arb_event(),
        n in 2usize..50,
        start in 0.0f64..0.999,
    ) {
        let now = reference_now();
        let mut state = neural_state(3.0, 0.0, ForgettingLifecycleState::Active, now);
        state.strength = start;
        let mut last = f64::INFINITY;
        for _ in 0..n {
            let outcome = strengthen_node(&state, event, now);
            prop_assert!(state.strength < 1.0);
            prop_assert!(outcome.record.delta > 0.0);
            prop_assert!(outcome.record.delta < last);
            last = outcome.record.delta;
            state = outcome.state;
        }
    }
}

// ── Difficulty ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn difficulty_stays_in_bounds(
        category in arb_category(),
        complexity in -1.0f64..2.0,
        avg_days in 0.0f64..100.0,
        edges in 0u32..10_000,
    ) {
        let d = calculate_difficulty(category, complexity, avg_days, edges).calculated;
        prop_assert!((0.05..=0.95).contains(&d));
    }
}

// ── Decay cycle ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_node_is_either_evaluated_or_an_error(
        specs in prop::collection::vec((-1.0f64..50.0, 0.0f64..900.0), 0..60),
    ) {
        let now = reference_now();
        let nodes: Vec<_> = specs
            .iter()
            .enumerate()
            .map(|(i, (stability, days))| {
                node_input(
                    &format!("n{i}"),
                    ContentCategory::General,
                    neural_state(*stability, *days, ForgettingLifecycleState::Active, now),
                )
            })
            .collect();
        let result = run_decay_cycle(&nodes, now);
        prop_assert_eq!(result.evaluated + result.errors.len(), nodes.len());
        prop_assert_eq!(result.updates.len(), result.evaluated);
        let moved: usize = result.transitions.iter().map(|t| t.count).sum();
        prop_assert_eq!(moved, result.updates.iter().filter(|u| u.changed()).count());
    }
}
