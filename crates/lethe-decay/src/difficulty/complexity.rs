//! Content complexity scoring.

/// Word count at which the length signal saturates.
const WORD_COUNT_SATURATION: f64 = 500.0;
/// Words per sentence at which the sentence-length signal saturates.
const SENTENCE_LENGTH_SATURATION: f64 = 30.0;
/// Average word length (chars) treated as trivially simple.
const SIMPLE_WORD_LENGTH: f64 = 3.0;
/// Average word length range above `SIMPLE_WORD_LENGTH` until saturation.
const WORD_LENGTH_SPAN: f64 = 7.0;

const WORD_COUNT_WEIGHT: f64 = 0.3;
const SENTENCE_LENGTH_WEIGHT: f64 = 0.4;
const VOCABULARY_WEIGHT: f64 = 0.3;

/// Per-signal breakdown of a complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComplexityBreakdown {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Normalized length signal, 0.0–1.0.
    pub length_score: f64,
    /// Normalized words-per-sentence signal, 0.0–1.0.
    pub sentence_score: f64,
    /// Normalized average-word-length signal, 0.0–1.0.
    pub vocabulary_score: f64,
    /// Weighted combination, 0.0–1.0.
    pub complexity: f64,
}

/// Break down the complexity of `content`.
pub fn complexity_breakdown(content: &str) -> ComplexityBreakdown {
    let words: Vec<&str> = content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return ComplexityBreakdown::default();
    }

    let word_count = words.len();
    let sentence_count = content
        .split(['.', '!', '?'])
        .filter(|s| s.split_whitespace().next().is_some())
        .count()
        .max(1);

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = total_chars as f64 / word_count as f64;
    let avg_sentence_length = word_count as f64 / sentence_count as f64;

    let length_score = (word_count as f64 / WORD_COUNT_SATURATION).min(1.0);
    let sentence_score = (avg_sentence_length / SENTENCE_LENGTH_SATURATION).min(1.0);
    let vocabulary_score =
        ((avg_word_length - SIMPLE_WORD_LENGTH) / WORD_LENGTH_SPAN).clamp(0.0, 1.0);

    let complexity = (length_score * WORD_COUNT_WEIGHT
        + sentence_score * SENTENCE_LENGTH_WEIGHT
        + vocabulary_score * VOCABULARY_WEIGHT)
        .clamp(0.0, 1.0);

    ComplexityBreakdown {
        word_count,
        sentence_count,
        length_score,
        sentence_score,
        vocabulary_score,
        complexity,
    }
}

/// Complexity score in [0, 1]. Empty content scores 0.
pub fn analyze_complexity(content: &str) -> f64 {
    complexity_breakdown(content).complexity
}
