use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgba_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {})", self.r, self.g, self.b)
    }
}

pub const RED: Color = Color::new(255, 0, 0);
pub const ORANGE: Color = Color::new(255, 165, 0);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const GREEN: Color = Color::new(0, 255, 0);

pub const DEFAULT_MAX_SCORE: f64 = 18.0;

/// Per-channel linear blend from `from` toward `to`, rounded and saturated.
pub fn interpolate(from: Color, to: Color, t: f64) -> Color {
    let channel = |a: u8, b: u8| -> u8 {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + t * (b - a)).round().clamp(0.0, 255.0) as u8
    };
    Color::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

pub fn midpoint(from: Color, to: Color) -> Color {
    interpolate(from, to, 0.5)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidScore {
    Missing,
    NotNumeric,
    NotFinite,
}

impl fmt::Display for InvalidScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidScore::Missing => write!(f, "score is missing"),
            InvalidScore::NotNumeric => write!(f, "score is not a number"),
            InvalidScore::NotFinite => write!(f, "score is not finite"),
        }
    }
}

impl std::error::Error for InvalidScore {}

#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    max_score: f64,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SCORE)
    }
}

impl ColorScale {
    pub fn new(max_score: f64) -> Self {
        Self { max_score }
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    /// Four-stop gradient: red up to a quarter of the range, then
    /// red -> orange -> yellow -> green over the remaining three quarters.
    /// Scores above the range stay green.
    pub fn color_for(&self, score: f64) -> Result<Color, InvalidScore> {
        if !score.is_finite() {
            return Err(InvalidScore::NotFinite);
        }

        let factor = score / self.max_score;
        let color = if factor > 0.75 {
            interpolate(YELLOW, GREEN, self.local((factor - 0.75) * 4.0))
        } else if factor > 0.5 {
            interpolate(ORANGE, YELLOW, self.local((factor - 0.5) * 4.0))
        } else if factor > 0.25 {
            interpolate(RED, ORANGE, self.local((factor - 0.25) * 4.0))
        } else {
            RED
        };
        Ok(color)
    }

    /// Same as [`ColorScale::color_for`] for a raw JSON score field.
    pub fn color_for_value(&self, value: Option<&Value>) -> Result<Color, InvalidScore> {
        match value {
            None | Some(Value::Null) => Err(InvalidScore::Missing),
            Some(Value::Number(number)) => {
                let score = number.as_f64().ok_or(InvalidScore::NotNumeric)?;
                self.color_for(score)
            }
            Some(_) => Err(InvalidScore::NotNumeric),
        }
    }

    fn local(&self, t: f64) -> f64 {
        t.clamp(0.0, 1.0)
    }
}
