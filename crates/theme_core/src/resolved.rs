//! Resolved colors: concrete RGBA values ready to be shown.
//!
//! A [`ResolvedColor`] carries sRGB channels, their linear counterparts, an
//! opacity, a textual description and an owned native handle. It encodes to a
//! keyed record whose `cgColor` entry is the archived native handle:
//!
//! ```text
//! description, blue, green, linearBlue, linearGreen, linearRed, opacity, red, cgColor
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::color_space::ColorSpace;
use crate::error::{Result, ThemeError};
use crate::native::{NativeColor, PlatformColor};

pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_BLUE: &str = "blue";
pub const FIELD_GREEN: &str = "green";
pub const FIELD_LINEAR_BLUE: &str = "linearBlue";
pub const FIELD_LINEAR_GREEN: &str = "linearGreen";
pub const FIELD_LINEAR_RED: &str = "linearRed";
pub const FIELD_OPACITY: &str = "opacity";
pub const FIELD_RED: &str = "red";
pub const FIELD_NATIVE: &str = "cgColor";

/// Wire layout; field order is the encoding order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Record<'a> {
    description: &'a str,
    blue: f32,
    green: f32,
    linear_blue: f32,
    linear_green: f32,
    linear_red: f32,
    opacity: f32,
    red: f32,
    cg_color: Vec<u8>,
}

/// A concrete color value.
///
/// Channels are in extended range: nothing is clamped, values outside 0..=1
/// are legal. Opacity 0 is fully transparent, 1 fully opaque.
#[derive(Debug, Clone)]
pub struct ResolvedColor<N: NativeColor = PlatformColor> {
    description: String,
    red: f32,
    green: f32,
    blue: f32,
    linear_red: f32,
    linear_green: f32,
    linear_blue: f32,
    opacity: f32,
    native: N,
}

impl<N: NativeColor> ResolvedColor<N> {
    /// Stores every value verbatim. The linear channels start out equal to
    /// the sRGB ones; see [`with_linear`](Self::with_linear).
    pub fn new(
        description: impl Into<String>,
        red: f32,
        green: f32,
        blue: f32,
        opacity: f32,
        native: N,
    ) -> Self {
        Self {
            description: description.into(),
            red,
            green,
            blue,
            linear_red: red,
            linear_green: green,
            linear_blue: blue,
            opacity,
            native,
        }
    }

    /// Overrides the linear channels.
    pub fn with_linear(mut self, red: f32, green: f32, blue: f32) -> Self {
        self.linear_red = red;
        self.linear_green = green;
        self.linear_blue = blue;
        self
    }

    /// Builds a color from components, generating the description and a
    /// fresh native handle.
    ///
    /// `color_space` does not alter the stored values: linear channels are
    /// copies of the given ones and the handle is built from the raw RGBA.
    pub fn from_components(
        color_space: ColorSpace,
        red: f32,
        green: f32,
        blue: f32,
        opacity: f32,
    ) -> Self {
        tracing::trace!(
            %color_space,
            red,
            green,
            blue,
            opacity,
            "resolving color from components"
        );
        Self::new(
            describe(red, green, blue, opacity),
            red,
            green,
            blue,
            opacity,
            N::from_components(red, green, blue, opacity),
        )
    }

    /// Opaque extended-sRGB color.
    pub fn srgb(red: f32, green: f32, blue: f32) -> Self {
        Self::from_components(ColorSpace::Srgb, red, green, blue, 1.0)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn red(&self) -> f32 {
        self.red
    }
    pub fn green(&self) -> f32 {
        self.green
    }
    pub fn blue(&self) -> f32 {
        self.blue
    }
    pub fn linear_red(&self) -> f32 {
        self.linear_red
    }
    pub fn linear_green(&self) -> f32 {
        self.linear_green
    }
    pub fn linear_blue(&self) -> f32 {
        self.linear_blue
    }
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
    pub fn native(&self) -> &N {
        &self.native
    }

    /// `(red, green, blue, opacity)`
    pub fn rgba(&self) -> (f32, f32, f32, f32) {
        (self.red, self.green, self.blue, self.opacity)
    }

    /// Channel-wise linear interpolation towards `other`. `t` is not clamped.
    pub fn interpolate(&self, other: &Self, t: f32) -> Self {
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        let (red, green, blue, opacity) = (
            lerp(self.red, other.red),
            lerp(self.green, other.green),
            lerp(self.blue, other.blue),
            lerp(self.opacity, other.opacity),
        );
        Self::new(
            describe(red, green, blue, opacity),
            red,
            green,
            blue,
            opacity,
            N::from_components(red, green, blue, opacity),
        )
        .with_linear(
            lerp(self.linear_red, other.linear_red),
            lerp(self.linear_green, other.linear_green),
            lerp(self.linear_blue, other.linear_blue),
        )
    }

    /// Encodes the color as a JSON record.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let data = serde_json::to_vec(&self.record()?)?;
        tracing::debug!(
            description = %self.description,
            bytes = data.len(),
            "encoded resolved color"
        );
        Ok(data)
    }

    /// Decodes a record produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)?;
        let record = value
            .as_object()
            .ok_or_else(|| ThemeError::field("record", "expected a keyed record"))?;
        let color = Self::from_record(record)?;
        tracing::debug!(
            description = %color.description,
            bytes = data.len(),
            "decoded resolved color"
        );
        Ok(color)
    }

    fn record(&self) -> Result<Record<'_>> {
        for (key, channel) in self.scalar_fields() {
            if !channel.is_finite() {
                return Err(ThemeError::InvalidInput(format!(
                    "`{key}` is not finite: {channel}"
                )));
            }
        }
        Ok(Record {
            description: &self.description,
            blue: self.blue,
            green: self.green,
            linear_blue: self.linear_blue,
            linear_green: self.linear_green,
            linear_red: self.linear_red,
            opacity: self.opacity,
            red: self.red,
            cg_color: self.native.archive()?,
        })
    }

    /// Decodes the eight scalar fields, then reconstitutes the native handle.
    /// The handle keeps its archived color space but takes its components
    /// from the decoded channels.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self> {
        let description = string_field(record, FIELD_DESCRIPTION)?;
        let blue = float_field(record, FIELD_BLUE)?;
        let green = float_field(record, FIELD_GREEN)?;
        let linear_blue = float_field(record, FIELD_LINEAR_BLUE)?;
        let linear_green = float_field(record, FIELD_LINEAR_GREEN)?;
        let linear_red = float_field(record, FIELD_LINEAR_RED)?;
        let opacity = float_field(record, FIELD_OPACITY)?;
        let red = float_field(record, FIELD_RED)?;

        let blob = blob_field(record, FIELD_NATIVE)?;
        let archived = N::unarchive(&blob)?;

        let channels = [red, green, blue, opacity];
        if archived.components() != channels {
            tracing::debug!(
                %description,
                archived = ?archived.components(),
                ?channels,
                "rebuilding native color from decoded channels"
            );
        }
        let native = archived.with_components(red, green, blue, opacity);

        Ok(Self {
            description,
            red,
            green,
            blue,
            linear_red,
            linear_green,
            linear_blue,
            opacity,
            native,
        })
    }

    fn scalar_fields(&self) -> [(&'static str, f32); 7] {
        [
            (FIELD_BLUE, self.blue),
            (FIELD_GREEN, self.green),
            (FIELD_LINEAR_BLUE, self.linear_blue),
            (FIELD_LINEAR_GREEN, self.linear_green),
            (FIELD_LINEAR_RED, self.linear_red),
            (FIELD_OPACITY, self.opacity),
            (FIELD_RED, self.red),
        ]
    }

    fn bits(&self) -> [u32; 11] {
        let [r, g, b, a] = self.native.components();
        [
            self.red.to_bits(),
            self.green.to_bits(),
            self.blue.to_bits(),
            self.linear_red.to_bits(),
            self.linear_green.to_bits(),
            self.linear_blue.to_bits(),
            self.opacity.to_bits(),
            r.to_bits(),
            g.to_bits(),
            b.to_bits(),
            a.to_bits(),
        ]
    }
}

/// `#RRGGBBAA`, channels clamped to 0..=1 for the text only.
pub fn describe(red: f32, green: f32, blue: f32, opacity: f32) -> String {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        byte(red),
        byte(green),
        byte(blue),
        byte(opacity)
    )
}

fn string_field(record: &Map<String, Value>, key: &'static str) -> Result<String> {
    match record.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ThemeError::field(key, format!("expected a string, found {other}"))),
        None => Err(ThemeError::field(key, "field is missing")),
    }
}

fn float_field(record: &Map<String, Value>, key: &'static str) -> Result<f32> {
    let value = record.get(key).ok_or_else(|| ThemeError::field(key, "field is missing"))?;
    let number = value
        .as_f64()
        .ok_or_else(|| ThemeError::field(key, format!("expected a number, found {value}")))?;
    let channel = number as f32;
    if !channel.is_finite() {
        return Err(ThemeError::field(key, format!("{number} does not fit in a 32-bit float")));
    }
    Ok(channel)
}

fn blob_field(record: &Map<String, Value>, key: &'static str) -> Result<Vec<u8>> {
    let value = record.get(key).ok_or_else(|| ThemeError::field(key, "field is missing"))?;
    let items = value
        .as_array()
        .ok_or_else(|| ThemeError::field(key, format!("expected a byte array, found {value}")))?;
    items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|b| u8::try_from(b).ok())
                .ok_or_else(|| ThemeError::field(key, format!("{item} is not a byte")))
        })
        .collect()
}

impl<N: NativeColor> fmt::Display for ResolvedColor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

// Bitwise, so that equality stays reflexive and agrees with Hash.
impl<N: NativeColor> PartialEq for ResolvedColor<N> {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description && self.bits() == other.bits()
    }
}

impl<N: NativeColor> Eq for ResolvedColor<N> {}

impl<N: NativeColor> Hash for ResolvedColor<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description.hash(state);
        self.bits().hash(state);
    }
}

impl<N: NativeColor> Serialize for ResolvedColor<N> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.record().map_err(S::Error::custom)?.serialize(serializer)
    }
}

impl<'de, N: NativeColor> Deserialize<'de> for ResolvedColor<N> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_record(&record).map_err(D::Error::custom)
    }
}
