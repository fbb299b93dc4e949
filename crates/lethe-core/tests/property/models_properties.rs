use lethe_core::models::ExclusionCheckResult;
use lethe_core::node::ForgettingLifecycleState;
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = ForgettingLifecycleState> {
    prop::sample::select(ForgettingLifecycleState::ALL.to_vec())
}

proptest! {
    #[test]
    fn any_exclusion_is_or_of_flags(
        identity in any::<bool>(),
        pinned in any::<bool>(),
        linked in any::<bool>(),
        restored in any::<bool>(),
        searched in any::<bool>(),
    ) {
        let result = ExclusionCheckResult::new(identity, pinned, linked, restored, searched);
        prop_assert_eq!(
            result.any_exclusion,
            identity || pinned || linked || restored || searched
        );
        let expected = [identity, pinned, linked, restored, searched]
            .iter()
            .filter(|b| **b)
            .count();
        prop_assert_eq!(result.triggered().len(), expected);
    }

    #[test]
    fn lifecycle_state_json_roundtrip(state in arb_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let back: ForgettingLifecycleState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, state);
    }
}
