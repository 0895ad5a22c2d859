use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

lazy_static! {
    // Numeric tokens are maximal runs of ASCII digits with at most one decimal point.
    static ref NUMERIC_TOKEN: Regex =
        Regex::new(r"[0-9]*\.[0-9]+|[0-9]+").expect("valid token regex");
    static ref SCORE_SHAPE: Regex =
        Regex::new(r"^(?:[01](?:\.[0-9]+)?|0?\.[0-9]+)$").expect("valid score regex");
}

/// Full-width digits (`０`..`９`) become ASCII; digits of other scripts are
/// not read as numbers.
fn normalize_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| ('０'..='９').contains(&c)) {
        return Cow::Borrowed(text);
    }
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            c => c,
        })
        .collect::<String>()
        .into()
}

/// Pulls a score in `[0, 1]` out of free-form model output.
///
/// The first numeric token shaped like a score (`0`, `1`, `0.x`, `1.x` or `.x`)
/// decides the result: it is returned when it lies in `[0, 1]`, otherwise the
/// text carries no score. Tokens such as `100` or `85` are never read as a
/// leading `1` or `0`.
pub fn extract_score(text: &str) -> Option<f64> {
    let normalized = normalize_digits(text);
    let token = NUMERIC_TOKEN
        .find_iter(&normalized)
        .map(|m| m.as_str())
        .find(|token| SCORE_SHAPE.is_match(token))?;

    let score = token.parse::<f64>().ok()?;
    if (0.0..=1.0).contains(&score) {
        Some(score)
    } else {
        tracing::debug!(target: "answer_judge::score", "Score {score} out of range in: {text}");
        None
    }
}

/// Mean of the present scores, `None` if there are none.
pub fn mean(scores: &[Option<f64>]) -> Option<f64> {
    let valid = scores.iter().flatten().collect::<Vec<_>>();
    if valid.is_empty() {
        return None;
    }
    Some(valid.iter().copied().sum::<f64>() / valid.len() as f64)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    #[default]
    Float,
    Int,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Int(i64),
    Float(f64),
}

impl ScoreType {
    pub fn present(&self, score: f64) -> ScoreValue {
        match self {
            ScoreType::Float => ScoreValue::Float(score),
            ScoreType::Int => ScoreValue::Int(to_percentage(score)),
        }
    }

    pub fn present_opt(&self, score: Option<f64>) -> Option<ScoreValue> {
        score.map(|s| self.present(s))
    }
}

/// `round(score * 100)` with ties going to the even neighbour.
pub fn to_percentage(score: f64) -> i64 {
    (score * 100.0).round_ties_even() as i64
}
