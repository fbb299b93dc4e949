//! Shape validators for persisted payloads.
//!
//! These return booleans so callers can branch without error handling.
//! [`check_neural_state`] exposes the first violation as text for callers
//! that need to report it.

use crate::config::{DifficultyConfig, SectionDecayConfig};
use crate::node::{NeuralState, NodeDecayInput};

/// First invariant `state` violates, if any.
pub fn check_neural_state(state: &NeuralState, difficulty: &DifficultyConfig) -> Result<(), String> {
    if !(state.stability.is_finite() && state.stability > 0.0) {
        return Err(format!("stability must be positive, got {}", state.stability));
    }
    if !(0.0..=1.0).contains(&state.retrievability) {
        return Err(format!(
            "retrievability must be within [0, 1], got {}",
            state.retrievability
        ));
    }
    if !(0.0..=1.0).contains(&state.strength) {
        return Err(format!("strength must be within [0, 1], got {}", state.strength));
    }
    if !(difficulty.min_difficulty..=difficulty.max_difficulty).contains(&state.difficulty) {
        return Err(format!(
            "difficulty must be within [{}, {}], got {}",
            difficulty.min_difficulty, difficulty.max_difficulty, state.difficulty
        ));
    }
    if !(state.days_in_dormant.is_finite() && state.days_in_dormant >= 0.0) {
        return Err(format!(
            "days_in_dormant must be non-negative, got {}",
            state.days_in_dormant
        ));
    }
    Ok(())
}

pub fn is_valid_neural_state(state: &NeuralState, difficulty: &DifficultyConfig) -> bool {
    check_neural_state(state, difficulty).is_ok()
}

/// Validate a JSON payload that claims to be a [`NeuralState`].
pub fn is_valid_neural_state_json(value: &serde_json::Value, difficulty: &DifficultyConfig) -> bool {
    serde_json::from_value::<NeuralState>(value.clone())
        .map(|state| is_valid_neural_state(&state, difficulty))
        .unwrap_or(false)
}

pub fn is_valid_section_config(section: &SectionDecayConfig) -> bool {
    section.validate("section").is_ok()
}

pub fn is_valid_node_input(input: &NodeDecayInput, difficulty: &DifficultyConfig) -> bool {
    !input.node_id.trim().is_empty() && is_valid_neural_state(&input.state, difficulty)
}
