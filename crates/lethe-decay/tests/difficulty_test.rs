use lethe_core::config::DifficultyConfig;
use lethe_core::node::ContentCategory;
use lethe_decay::difficulty::difficulty_for_content;
use lethe_decay::{analyze_complexity, calculate_difficulty, calculate_difficulty_with};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn neutral_inputs_keep_the_category_base() {
    // base 0.30 equals the reversion target, so nothing moves.
    let factors = calculate_difficulty(ContentCategory::Work, 0.0, 5.0, 0);
    assert_eq!(factors.base, 0.30);
    assert_eq!(factors.reaccess_penalty, 0.0);
    assert_eq!(factors.connection_bonus, 0.0);
    assert!(approx(factors.calculated, 0.30));
}

#[test]
fn complex_rapidly_reaccessed_content_is_harder() {
    // raw = 0.4 + 1.0 × 0.3 + 0.1 = 0.8 → 0.8 × 0.9 + 0.3 × 0.1 = 0.75
    let factors = calculate_difficulty(ContentCategory::Academic, 1.0, 0.5, 0);
    assert_eq!(factors.reaccess_penalty, 0.1);
    assert!(approx(factors.calculated, 0.75));
}

#[test]
fn penalty_threshold_is_exclusive() {
    let at = calculate_difficulty(ContentCategory::Work, 0.0, 1.0, 0);
    assert_eq!(at.reaccess_penalty, 0.0);
    let below = calculate_difficulty(ContentCategory::Work, 0.0, 0.99, 0);
    assert_eq!(below.reaccess_penalty, 0.1);
}

#[test]
fn connections_ease_retention_up_to_a_cap() {
    let ten = calculate_difficulty(ContentCategory::Work, 0.0, 5.0, 10);
    assert!(approx(ten.connection_bonus, 0.1));

    let many = calculate_difficulty(ContentCategory::Work, 0.0, 5.0, 500);
    assert!(approx(many.connection_bonus, 0.2));
    assert!(many.calculated < ten.calculated);
}

#[test]
fn result_is_clamped_to_lower_bound() {
    // raw = 0.1 − 0.2 = −0.1 → −0.06 after reversion → clamped.
    let factors = calculate_difficulty(ContentCategory::Identity, 0.0, 10.0, 50);
    assert_eq!(factors.calculated, 0.05);
}

#[test]
fn result_is_clamped_to_upper_bound() {
    let params = DifficultyConfig {
        complexity_weight: 1.0,
        mean_reversion_rate: 0.0,
        ..DifficultyConfig::GLOBAL
    };
    let factors = calculate_difficulty_with(ContentCategory::Academic, 1.0, 0.1, 0, &params);
    assert_eq!(factors.calculated, 0.95);
}

#[test]
fn mean_reversion_pulls_toward_target() {
    let params = DifficultyConfig {
        mean_reversion_rate: 1.0,
        ..DifficultyConfig::GLOBAL
    };
    for category in ContentCategory::ALL {
        let factors = calculate_difficulty_with(category, 1.0, 0.1, 0, &params);
        assert!(approx(factors.calculated, 0.3), "{category}");
    }
}

#[test]
fn malformed_signals_are_neutral() {
    let nan = calculate_difficulty(ContentCategory::Work, f64::NAN, f64::NAN, 0);
    assert_eq!(nan.complexity, 0.0);
    assert_eq!(nan.reaccess_penalty, 0.0);

    let over = calculate_difficulty(ContentCategory::Work, 4.0, 5.0, 0);
    assert_eq!(over.complexity, 1.0);
}

#[test]
fn every_category_stays_in_bounds() {
    for category in ContentCategory::ALL {
        for complexity in [0.0, 0.5, 1.0] {
            for avg in [0.1, 2.0, 30.0] {
                for edges in [0, 5, 100] {
                    let d = calculate_difficulty(category, complexity, avg, edges).calculated;
                    assert!((0.05..=0.95).contains(&d), "{category}: {d}");
                }
            }
        }
    }
}

// ── Content complexity ───────────────────────────────────────────────────

#[test]
fn empty_content_has_zero_complexity() {
    assert_eq!(analyze_complexity(""), 0.0);
    assert_eq!(analyze_complexity("   \n\t "), 0.0);
}

#[test]
fn dense_prose_scores_higher_than_chatter() {
    let chatter = "ok. see you. bye.";
    let prose = "Interdisciplinary epistemological considerations fundamentally \
                 complicate straightforward characterizations of institutional \
                 decision-making procedures within heterogeneous organizational \
                 environments, particularly regarding accountability structures";
    let low = analyze_complexity(chatter);
    let high = analyze_complexity(prose);
    assert!(high > low, "{high} <= {low}");
    assert!((0.0..=1.0).contains(&high));
}

#[test]
fn content_difficulty_uses_text_complexity() {
    let plain = difficulty_for_content(
        ContentCategory::Document,
        "",
        5.0,
        0,
        &DifficultyConfig::GLOBAL,
    );
    let dense = difficulty_for_content(
        ContentCategory::Document,
        "Comprehensive architectural documentation describing distributed \
         synchronization guarantees and operational characteristics.",
        5.0,
        0,
        &DifficultyConfig::GLOBAL,
    );
    assert!(dense.calculated > plain.calculated);
    assert!(dense.complexity > 0.0);
}
