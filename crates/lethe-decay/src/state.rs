use chrono::{DateTime, Utc};
use lethe_core::config::{DifficultyConfig, SectionDecayConfig, StrengtheningConfig};
use lethe_core::node::{ContentCategory, ForgettingLifecycleState, NeuralState};

/// Options for promoting a node into decay tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralStateOptions {
    pub content_category: ContentCategory,
    pub created_at: DateTime<Utc>,
    /// Section curve whose initial stability replaces the category's.
    pub section: Option<SectionDecayConfig>,
    pub stability: Option<f64>,
    pub difficulty: Option<f64>,
    pub strength: Option<f64>,
}

impl NeuralStateOptions {
    pub fn new(content_category: ContentCategory, created_at: DateTime<Utc>) -> Self {
        Self {
            content_category,
            created_at,
            section: None,
            stability: None,
            difficulty: None,
            strength: None,
        }
    }

    pub fn with_section(mut self, section: SectionDecayConfig) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_stability(mut self, stability: f64) -> Self {
        self.stability = Some(stability);
        self
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }
}

/// Initial neural state with explicit parameters.
///
/// Promotion counts as the first access. Overrides win over the section,
/// which wins over the category table. Out-of-range overrides are clamped.
pub fn create_neural_state_with(
    options: &NeuralStateOptions,
    difficulty_params: &DifficultyConfig,
    strengthening: &StrengtheningConfig,
) -> NeuralState {
    let params = options.content_category.initial_params();

    let stability = options
        .stability
        .filter(|s| s.is_finite() && *s > 0.0)
        .or_else(|| options.section.and_then(|s| s.initial_stability_days))
        .unwrap_or(params.initial_stability_days);

    let difficulty =
        difficulty_params.clamp(options.difficulty.unwrap_or(params.base_difficulty));

    let strength = options
        .strength
        .filter(|s| s.is_finite())
        .unwrap_or(strengthening.initial_strength)
        .clamp(0.0, strengthening.max_strength);

    NeuralState {
        stability,
        retrievability: 1.0,
        strength,
        difficulty,
        last_accessed: options.created_at,
        access_count: 1,
        lifecycle_state: ForgettingLifecycleState::Active,
        days_in_dormant: 0.0,
    }
}

/// Initial neural state under the global tables.
pub fn create_neural_state(options: &NeuralStateOptions) -> NeuralState {
    create_neural_state_with(
        options,
        &DifficultyConfig::GLOBAL,
        &StrengtheningConfig::GLOBAL,
    )
}
