//! Pixel lengths, clamping and viewport dimensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: when `min > max` the result is
/// `min`, and a NaN input resolves to a bound.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Live viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

/// A caller-supplied length.
///
/// Numbers and `px` strings are absolute; `vw` and `%` are resolved against
/// the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Vw(f64),
    Percent(f64),
}

/// Returned when a length string has no recognised form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLengthError(String);

impl fmt::Display for ParseLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised length '{}'", self.0)
    }
}

impl std::error::Error for ParseLengthError {}

impl Length {
    /// Absolute pixels, if this length does not depend on the viewport.
    pub fn as_px(&self) -> Option<f64> {
        match *self {
            Length::Px(px) => Some(px),
            Length::Vw(_) | Length::Percent(_) => None,
        }
    }

    /// Resolve to pixels against a viewport width.
    pub fn to_px(&self, viewport_width: f64) -> f64 {
        match *self {
            Length::Px(px) => px,
            Length::Vw(v) | Length::Percent(v) => v / 100.0 * viewport_width,
        }
    }
}

/// Parse the numeric part of a unit-suffixed length (`[0-9.]+`).
fn parse_unit_number(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Strip an ASCII suffix case-insensitively.
fn strip_suffix_ci<'a>(raw: &'a str, suffix: &str) -> Option<&'a str> {
    let split = raw.len().checked_sub(suffix.len())?;
    if !raw.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = raw.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

impl FromStr for Length {
    type Err = ParseLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let err = || ParseLengthError(s.to_string());

        if let Some(digits) = strip_suffix_ci(raw, "vw") {
            return parse_unit_number(digits).map(Length::Vw).ok_or_else(err);
        }
        if let Some(digits) = raw.strip_suffix('%') {
            return parse_unit_number(digits).map(Length::Percent).ok_or_else(err);
        }
        if let Some(digits) = strip_suffix_ci(raw, "px") {
            return parse_unit_number(digits).map(Length::Px).ok_or_else(err);
        }
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Length::Px)
            .ok_or_else(err)
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Length::Px(px)
    }
}

impl From<u32> for Length {
    fn from(px: u32) -> Self {
        Length::Px(px as f64)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Vw(v) => write!(f, "{}vw", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawLength::deserialize(deserializer)? {
            RawLength::Number(px) => Ok(Length::Px(px)),
            RawLength::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Length::Px(px) => serializer.serialize_f64(*px),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

/// Deserialize an optional length, mapping anything unrecognised to `None`.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Length>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64().map(Length::Px),
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}
