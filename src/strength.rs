//  ____  ____                ____
// |  _ \|  _ \ __ _ ___ ___ / ___| ___ _ __
// | |_) | |_) / _` / __/ __| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/\____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-03
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength heuristics

use std::fmt;

/// Heuristic strength score in [0.0, 1.0]. Pure function: additive length
/// bonuses plus a single diversity band chosen by the exact number of
/// character classes present.
pub fn score(password: &str) -> f64 {
    let mut score: f64 = 0.0;
    let length = password.chars().count();

    // Length bonuses are cumulative: a 24-char password collects all four.
    if length >= 8 { score += 0.10; }
    if length >= 12 { score += 0.15; }
    if length >= 16 { score += 0.20; }
    if length >= 24 { score += 0.20; }

    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    // Membership is checked against the full ASCII punctuation set, which is
    // broader than the generator's symbol alphabet (e.g. ' " \ count here but
    // are never generated). Kept deliberately out of sync with passgen.
    let has_symbol = password.chars().any(|c| c.is_ascii_punctuation());

    let type_count = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count();

    score += match type_count {
        2 => 0.10,
        3 => 0.15,
        4 => 0.25,
        _ => 0.0,
    };

    score.min(1.0)
}

// Etiquetas del medidor en español
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Debil,
    Media,
    Fuerte,
    Excelente,
}

impl StrengthLabel {
    /// Color hint for UI layers rendering the strength meter.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::Debil => "red",
            StrengthLabel::Media => "orange",
            StrengthLabel::Fuerte => "yellow",
            StrengthLabel::Excelente => "green",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::Debil => "Débil",
            StrengthLabel::Media => "Media",
            StrengthLabel::Fuerte => "Fuerte",
            StrengthLabel::Excelente => "Excelente",
        };
        write!(f, "{}", label)
    }
}

/// Bucket a score into its discrete label. Half-open intervals, lower bound
/// inclusive: [0, 0.3) [0.3, 0.6) [0.6, 0.9) [0.9, 1.0].
pub fn bucket(score: f64) -> StrengthLabel {
    if score < 0.3 {
        StrengthLabel::Debil
    } else if score < 0.6 {
        StrengthLabel::Media
    } else if score < 0.9 {
        StrengthLabel::Fuerte
    } else {
        StrengthLabel::Excelente
    }
}
