use std::fmt;

use serde::{Deserialize, Serialize};

/// Linear RGB color with single-precision components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Authored value of a typed attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Double(f64),
    Float(f32),
    Int(i64),
    /// Free-form text.
    Token(String),
    /// Per-entity display color array.
    Color3fArray(Vec<Color>),
}

/// Value type of an attribute, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Double,
    Float,
    Int,
    Token,
    Color3fArray,
}

impl AttributeValue {
    /// Returns the value type.
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Double(_) => AttributeKind::Double,
            Self::Float(_) => AttributeKind::Float,
            Self::Int(_) => AttributeKind::Int,
            Self::Token(_) => AttributeKind::Token,
            Self::Color3fArray(_) => AttributeKind::Color3fArray,
        }
    }

    /// Reads the value as a finite real number.
    ///
    /// Numeric types convert directly and text is parsed. Returns `None` for
    /// colors, unparsable text, and non-finite results.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Double(value) => *value,
            Self::Float(value) => f64::from(*value),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(value) => *value as f64,
            Self::Token(text) => text.trim().parse::<f64>().ok()?,
            Self::Color3fArray(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Returns the color array, if this is one.
    #[must_use]
    pub fn as_colors(&self) -> Option<&[Color]> {
        match self {
            Self::Color3fArray(colors) => Some(colors),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int64",
            Self::Token => "token",
            Self::Color3fArray => "color3f[]",
        };
        f.write_str(name)
    }
}
