//! Display helpers for numeric fields. Pure, no state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

/// Three-way split at zero. Zero (and NaN) is neutral.
pub fn classify(value: f64) -> Trend {
    if value > 0.0 {
        Trend::Positive
    } else if value < 0.0 {
        Trend::Negative
    } else {
        Trend::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Default,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Default => "default",
        }
    }
}

pub fn color_for(value: f64) -> Color {
    match classify(value) {
        Trend::Positive => Color::Green,
        Trend::Negative => Color::Red,
        Trend::Neutral => Color::Default,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn marker(self) -> char {
        match self {
            Direction::Up => '▲',
            Direction::Down => '▼',
            Direction::Flat => '–',
        }
    }
}

pub fn direction_for(value: f64) -> Direction {
    match classify(value) {
        Trend::Positive => Direction::Up,
        Trend::Negative => Direction::Down,
        Trend::Neutral => Direction::Flat,
    }
}

/// Fixed two-decimal rendering. Callers showing a negative amount pass the
/// magnitude and add the sign themselves.
pub fn format_currency(value: f64) -> String {
    // `-0.0` would otherwise print as "-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

/// `$12.30` or `-$12.30`.
pub fn format_signed_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", format_currency(value.abs()))
}
