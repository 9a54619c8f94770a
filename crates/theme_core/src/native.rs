//! Platform color handles.
//!
//! A resolved color owns one native handle built from its RGBA components.
//! The handle is opaque to the rest of the crate: it only has to be
//! buildable from components, report them back, and survive an
//! archive/unarchive round trip as a byte blob.

use serde::{Deserialize, Serialize};

use crate::color_space::ColorSpace;
use crate::error::{Result, ThemeError};

pub const ARCHIVER: &str = "ThemeKeyedArchiver";
pub const ARCHIVE_VERSION: u32 = 1;

pub trait NativeColor: Clone + std::fmt::Debug + PartialEq + Send + Sync + Sized {
    /// Builds a handle from extended-range sRGB components.
    fn from_components(red: f32, green: f32, blue: f32, alpha: f32) -> Self;

    /// `[red, green, blue, alpha]`
    fn components(&self) -> [f32; 4];

    /// Same kind of handle, same color space, new components.
    fn with_components(&self, red: f32, green: f32, blue: f32, alpha: f32) -> Self;

    fn archive(&self) -> Result<Vec<u8>>;

    /// Must fail with [`ThemeError::CorruptedColorData`] when `data` is not a
    /// valid archive of this handle type.
    fn unarchive(data: &[u8]) -> Result<Self>;
}

/// Portable native handle: an RGBA quadruple tagged with its color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformColor {
    color_space: ColorSpace,
    components: [f32; 4],
}

impl PlatformColor {
    pub fn new(color_space: ColorSpace, red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            color_space,
            components: [red, green, blue, alpha],
        }
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }
}

#[derive(Serialize, Deserialize)]
struct KeyedArchive {
    #[serde(rename = "$archiver")]
    archiver: String,
    #[serde(rename = "$version")]
    version: u32,
    #[serde(rename = "$class")]
    class: String,
    #[serde(rename = "colorSpace")]
    color_space: String,
    components: Vec<f32>,
}

const CLASS: &str = "PlatformColor";

impl NativeColor for PlatformColor {
    fn from_components(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::new(ColorSpace::Srgb, red, green, blue, alpha)
    }

    fn components(&self) -> [f32; 4] {
        self.components
    }

    fn with_components(&self, red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::new(self.color_space, red, green, blue, alpha)
    }

    fn archive(&self) -> Result<Vec<u8>> {
        if self.components.iter().any(|c| !c.is_finite()) {
            return Err(ThemeError::InvalidInput(format!(
                "cannot archive non-finite components {:?}",
                self.components
            )));
        }
        let archive = KeyedArchive {
            archiver: ARCHIVER.to_string(),
            version: ARCHIVE_VERSION,
            class: CLASS.to_string(),
            color_space: self.color_space.name().to_string(),
            components: self.components.to_vec(),
        };
        Ok(serde_json::to_vec(&archive)?)
    }

    fn unarchive(data: &[u8]) -> Result<Self> {
        let archive: KeyedArchive = serde_json::from_slice(data).map_err(|e| {
            ThemeError::CorruptedColorData(format!("unable to decode color archive: {e}"))
        })?;

        if archive.archiver != ARCHIVER || archive.version != ARCHIVE_VERSION {
            return Err(ThemeError::CorruptedColorData(format!(
                "unsupported archive {} v{}",
                archive.archiver, archive.version
            )));
        }
        if archive.class != CLASS {
            return Err(ThemeError::CorruptedColorData(format!(
                "archived object is a {}, expected {CLASS}",
                archive.class
            )));
        }
        let color_space = archive
            .color_space
            .parse::<ColorSpace>()
            .map_err(|e| ThemeError::CorruptedColorData(e.to_string()))?;
        let components: [f32; 4] = archive.components.as_slice().try_into().map_err(|_| {
            ThemeError::CorruptedColorData(format!(
                "expected 4 color components, found {}",
                archive.components.len()
            ))
        })?;
        if components.iter().any(|c| !c.is_finite()) {
            return Err(ThemeError::CorruptedColorData(
                "non-finite color component".to_string(),
            ));
        }

        Ok(Self {
            color_space,
            components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn archive_bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_archive_round_trip() {
        let color = PlatformColor::new(ColorSpace::DisplayP3, 1.2, 0.5, -0.1, 0.75);
        let data = color.archive().unwrap();
        assert_eq!(PlatformColor::unarchive(&data).unwrap(), color);
    }

    #[test]
    fn test_archive_layout() {
        let color = PlatformColor::from_components(1.0, 0.0, 0.5, 1.0);
        let value: serde_json::Value = serde_json::from_slice(&color.archive().unwrap()).unwrap();
        assert_eq!(value["$archiver"], "ThemeKeyedArchiver");
        assert_eq!(value["$class"], "PlatformColor");
        assert_eq!(value["colorSpace"], "sRGB");
        assert_eq!(value["components"], json!([1.0, 0.0, 0.5, 1.0]));
    }

    #[test]
    fn test_truncated_archive_is_corrupted() {
        let data = PlatformColor::from_components(1.0, 1.0, 1.0, 1.0).archive().unwrap();
        let err = PlatformColor::unarchive(&data[..data.len() / 2]).unwrap_err();
        assert!(matches!(err, ThemeError::CorruptedColorData(_)));
    }

    #[test]
    fn test_wrong_class_is_corrupted() {
        let data = archive_bytes(json!({
            "$archiver": "ThemeKeyedArchiver",
            "$version": 1,
            "$class": "PlatformImage",
            "colorSpace": "sRGB",
            "components": [0.0, 0.0, 0.0, 1.0]
        }));
        let err = PlatformColor::unarchive(&data).unwrap_err();
        assert!(err.to_string().contains("PlatformImage"));
    }

    #[test]
    fn test_wrong_component_count_is_corrupted() {
        let data = archive_bytes(json!({
            "$archiver": "ThemeKeyedArchiver",
            "$version": 1,
            "$class": "PlatformColor",
            "colorSpace": "sRGB",
            "components": [0.0, 0.0, 1.0]
        }));
        let err = PlatformColor::unarchive(&data).unwrap_err();
        assert!(matches!(err, ThemeError::CorruptedColorData(_)));
    }

    #[test]
    fn test_with_components_keeps_color_space() {
        let p3 = PlatformColor::new(ColorSpace::DisplayP3, 1.0, 0.0, 0.0, 1.0);
        let rebuilt = p3.with_components(0.2, 0.4, 0.6, 0.5);
        assert_eq!(rebuilt.color_space(), ColorSpace::DisplayP3);
        assert_eq!(rebuilt.components(), [0.2, 0.4, 0.6, 0.5]);
    }

    #[test]
    fn test_non_finite_components_are_not_archived() {
        let color = PlatformColor::from_components(f32::NAN, 0.0, 0.0, 1.0);
        assert!(matches!(color.archive(), Err(ThemeError::InvalidInput(_))));
    }
}
