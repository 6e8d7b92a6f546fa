//! RGBA card color with channels in `[0, 1]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when a color is out of range or malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

/// A four-channel color (red, green, blue, alpha), each channel in `[0, 1]`.
///
/// Persisted as a JSON array of four numbers, e.g. `[0.25, 0.5, 0.75, 1.0]`.
///
/// # Examples
///
/// ```
/// use notecards::domain::Rgba;
///
/// let color = Rgba::new(1.0, 0.5, 0.0, 1.0).unwrap();
/// assert_eq!(color.to_hex(), "#ff8000");
/// assert!(Rgba::new(1.5, 0.0, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Rgba([f64; 4]);

impl Rgba {
    /// Card color used when a stored note carries no color of its own.
    pub const DEFAULT_CARD: Rgba = Rgba([0.5, 0.7, 0.8, 1.0]);

    /// Creates a color, validating that every channel lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `ParseColorError` if any channel is NaN or outside `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self, ParseColorError> {
        Self::from_channels([r, g, b, a])
    }

    /// Creates an opaque color from three channels.
    pub fn opaque(r: f64, g: f64, b: f64) -> Result<Self, ParseColorError> {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color, clamping each channel into `[0, 1]`.
    pub fn clamped(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self([r, g, b, a].map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }))
    }

    fn from_channels(channels: [f64; 4]) -> Result<Self, ParseColorError> {
        const NAMES: [&str; 4] = ["red", "green", "blue", "alpha"];
        for (value, name) in channels.iter().zip(NAMES) {
            if !(0.0..=1.0).contains(value) {
                return Err(ParseColorError(format!(
                    "invalid color: {} channel {} is outside [0, 1]",
                    name, value
                )));
            }
        }
        Ok(Self(channels))
    }

    pub fn red(&self) -> f64 {
        self.0[0]
    }

    pub fn green(&self) -> f64 {
        self.0[1]
    }

    pub fn blue(&self) -> f64 {
        self.0[2]
    }

    pub fn alpha(&self) -> f64 {
        self.0[3]
    }

    /// Returns the channels as an array.
    pub fn channels(&self) -> [f64; 4] {
        self.0
    }

    /// Formats the color channels as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let byte = |v: f64| (v * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red()),
            byte(self.green()),
            byte(self.blue())
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::DEFAULT_CARD
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rgba({}, {}, {}, {})",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let channels = Vec::<f64>::deserialize(deserializer)?;
        let channels: [f64; 4] = channels.try_into().map_err(|v: Vec<f64>| {
            serde::de::Error::custom(format!(
                "invalid color: expected 4 channels, found {}",
                v.len()
            ))
        })?;
        Self::from_channels(channels).map_err(serde::de::Error::custom)
    }
}
