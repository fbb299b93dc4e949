use chrono::Duration;
use lethe_core::config::{LetheConfig, SectionDecayConfig};
use lethe_core::errors::{ConfigError, LetheError};
use lethe_core::models::{StrengtheningEvent, TrashInitiator};
use lethe_core::node::{ContentCategory, ForgettingLifecycleState as State};
use lethe_core::traits::IDecayEngine;
use lethe_decay::{determine_lifecycle, DecayEngine, NeuralStateOptions};
use test_fixtures::{neural_state, node_input, reference_now, InMemoryNodeStore};

// ── Construction ─────────────────────────────────────────────────────────

#[test]
fn default_engine_uses_global_tables() {
    let engine = DecayEngine::default();
    assert_eq!(engine.config().lifecycle.archive_days, 180.0);
    let names: Vec<&str> = engine.sections().names().collect();
    assert_eq!(names, vec!["default", "playbooks", "signals"]);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = LetheConfig::default();
    config.lifecycle.weak_threshold = 0.7;
    let err = DecayEngine::with_config(config).unwrap_err();
    assert!(matches!(
        err,
        LetheError::InvalidConfig(ConfigError::InvertedThresholds { .. })
    ));
}

#[test]
fn invalid_section_is_rejected_up_front() {
    let mut config = LetheConfig::default();
    config.sections.insert(
        "broken".into(),
        SectionDecayConfig {
            growth_rate: 0.0,
            ..SectionDecayConfig::DEFAULT
        },
    );
    assert!(DecayEngine::with_config(config).is_err());
}

// ── Neural state creation ────────────────────────────────────────────────

#[test]
fn new_state_takes_category_defaults() {
    let engine = DecayEngine::new();
    let now = reference_now();
    let state = engine.create_neural_state(&NeuralStateOptions::new(ContentCategory::Academic, now));
    assert_eq!(state.stability, 1.0);
    assert_eq!(state.difficulty, 0.40);
    assert_eq!(state.strength, 0.5);
    assert_eq!(state.retrievability, 1.0);
    assert_eq!(state.access_count, 1);
    assert_eq!(state.last_accessed, now);
    assert_eq!(state.lifecycle_state, State::Active);
    assert_eq!(state.days_in_dormant, 0.0);
}

#[test]
fn identity_content_starts_with_a_month_of_stability() {
    let engine = DecayEngine::new();
    let state = engine.create_neural_state(&NeuralStateOptions::new(
        ContentCategory::Identity,
        reference_now(),
    ));
    assert_eq!(state.stability, 30.0);
    assert_eq!(state.difficulty, 0.10);
}

#[test]
fn overrides_win_and_are_clamped() {
    let engine = DecayEngine::new();
    let options = NeuralStateOptions::new(ContentCategory::Work, reference_now())
        .with_section(SectionDecayConfig::PLAYBOOKS)
        .with_stability(5.0)
        .with_difficulty(5.0)
        .with_strength(-1.0);
    let state = engine.create_neural_state(&options);
    assert_eq!(state.stability, 5.0);
    assert_eq!(state.difficulty, 0.95);
    assert_eq!(state.strength, 0.0);
}

#[test]
fn non_positive_stability_override_falls_back() {
    let engine = DecayEngine::new();
    let options =
        NeuralStateOptions::new(ContentCategory::Document, reference_now()).with_stability(0.0);
    assert_eq!(engine.create_neural_state(&options).stability, 7.0);
}

#[test]
fn section_presets_seed_stability() {
    let engine = DecayEngine::new();
    let now = reference_now();
    let playbook = engine
        .create_neural_state_in_section(NeuralStateOptions::new(ContentCategory::Work, now), "playbooks")
        .unwrap();
    assert_eq!(playbook.stability, 14.0);
    assert_eq!(playbook.difficulty, 0.30);

    let signal = engine
        .create_neural_state_in_section(NeuralStateOptions::new(ContentCategory::Work, now), "signals")
        .unwrap();
    assert_eq!(signal.stability, 0.5);

    assert!(engine
        .create_neural_state_in_section(NeuralStateOptions::new(ContentCategory::Work, now), "nope")
        .is_err());
}

#[test]
fn default_section_keeps_category_stability() {
    let engine = DecayEngine::new();
    let now = reference_now();
    for category in ContentCategory::ALL {
        let options = NeuralStateOptions::new(category, now);
        let plain = engine.create_neural_state(&options);
        let sectioned = engine
            .create_neural_state_in_section(options, "default")
            .unwrap();
        assert_eq!(sectioned, plain, "{category:?}");
        assert_eq!(
            sectioned.stability,
            category.initial_params().initial_stability_days
        );
    }
}

#[test]
fn configured_section_from_toml() {
    let config = LetheConfig::from_toml(
        r#"
[sections.journal]
initial_stability_days = 2.0
growth_rate = 2.0
active_threshold = 0.55
weak_threshold = 0.15
max_stability_days = 90.0
"#,
    )
    .unwrap();
    let engine = DecayEngine::with_config(config).unwrap();
    let state = engine
        .create_neural_state_in_section(
            NeuralStateOptions::new(ContentCategory::General, reference_now()),
            "journal",
        )
        .unwrap();
    assert_eq!(state.stability, 2.0);

    let update = engine.update_stability(2.0, 0.0, Some("journal")).unwrap();
    assert_eq!(update.stability_after, 4.0);
}

// ── Per-node operations ──────────────────────────────────────────────────

#[test]
fn trait_retrievability_matches_curve() {
    let engine = DecayEngine::new();
    let now = reference_now();
    let state = neural_state(7.0, 7.0, State::Active, now);
    assert!((engine.retrievability(&state, now) - 0.9).abs() < 1e-9);
}

#[test]
fn trait_lifecycle_matches_free_function() {
    let engine = DecayEngine::new();
    let now = reference_now();
    let state = neural_state(1.0, 160.0, State::Dormant, now);
    assert_eq!(
        IDecayEngine::determine_lifecycle(&engine, &state, now),
        determine_lifecycle(&state, now)
    );
}

#[test]
fn section_lifecycle_via_engine() {
    let engine = DecayEngine::new();
    let now = reference_now();
    let state = neural_state(1.0, 5.0, State::Active, now);
    let d = engine.determine_lifecycle_in_section(&state, "signals", now).unwrap();
    assert_eq!(d.state, State::Weak);
    assert!(engine.determine_lifecycle_in_section(&state, "nope", now).is_err());
}

#[test]
fn update_stability_globally_and_per_section() {
    let engine = DecayEngine::new();
    let global = engine.update_stability(7.0, 0.3, None).unwrap();
    assert!((global.stability_after - 14.875).abs() < 1e-9);

    let signals = engine.update_stability(7.0, 0.0, Some("signals")).unwrap();
    assert!((signals.stability_after - 10.5).abs() < 1e-9);
}

#[test]
fn record_access_through_engine() {
    let engine = DecayEngine::new();
    let now = reference_now();
    let state = neural_state(7.0, 30.0, State::Weak, now);
    let (next, update) = engine.record_access(&state, now, None).unwrap();
    assert_eq!(next.lifecycle_state, State::Active);
    assert_eq!(next.access_count, state.access_count + 1);
    assert_eq!(next.stability, update.stability_after);
}

#[test]
fn strengthen_and_difficulty_through_engine() {
    let engine = DecayEngine::new();
    let now = reference_now();
    let state = neural_state(7.0, 0.0, State::Active, now);
    let outcome = engine.strengthen(&state, StrengtheningEvent::DirectRetrieval, now);
    assert!((outcome.state.strength - 0.55).abs() < 1e-12);

    let factors = engine.calculate_difficulty(ContentCategory::Work, 0.0, 5.0, 0);
    assert!((factors.calculated - 0.30).abs() < 1e-9);
}

#[test]
fn deletion_and_trash_through_engine() {
    let engine = DecayEngine::new();
    let now = reference_now();
    let node = node_input(
        "old",
        ContentCategory::General,
        neural_state(1.0, 600.0, State::Archived, now),
    );
    assert!(engine.evaluate_deletion(&node, 365.0, now).is_candidate);

    let record = engine.move_to_trash("old", "deletion candidate", TrashInitiator::System, now);
    let store = InMemoryNodeStore::new();

    assert!(engine.purge_trash(&[record.clone()], &store, now).deleted.is_empty());
    engine.restore_from_trash(&record, &store, now + Duration::days(1)).unwrap();

    let report = engine.purge_trash(&[record], &store, now + Duration::days(30));
    assert_eq!(report.deleted, vec!["old".to_string()]);
}

#[test]
fn config_roundtrips_through_engine() {
    let config = LetheConfig::from_toml("[trash]\nbuffer_days = 7\n").unwrap();
    let engine = DecayEngine::with_config(config).unwrap();
    let now = reference_now();
    let record = engine.move_to_trash("n", "r", TrashInitiator::User, now);
    assert_eq!(record.auto_delete_at, now + Duration::days(7));
}
