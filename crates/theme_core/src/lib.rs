//! Theme core: resolved colors, color spaces and semantic color sets.
//!
//! A [`ColorSet`] preset supplies unresolved [`Color`] values; a `Color`
//! resolves against a [`DisplayContext`] into a [`ResolvedColor`], which can
//! be encoded to bytes and decoded back.
//!
//! # Example
//!
//! ```
//! use theme_core::{preset_for, Appearance, ColorRole, ColorSet, ResolvedColor};
//!
//! let palette = preset_for(Appearance::Light);
//! let accent = palette.color(ColorRole::Accent);
//! let resolved: ResolvedColor = accent.resolve_components(&Appearance::Light);
//!
//! let bytes = resolved.to_bytes().unwrap();
//! let back: ResolvedColor = ResolvedColor::from_bytes(&bytes).unwrap();
//! assert_eq!(back, resolved);
//! ```

pub mod appearance;
pub mod color;
pub mod color_set;
pub mod color_space;
pub mod error;
pub mod native;
pub mod presets;
pub mod resolved;

pub use appearance::{Appearance, DisplayContext};
pub use color::Color;
pub use color_set::{ColorRole, ColorSet};
pub use color_space::ColorSpace;
pub use error::{Result, ThemeError};
pub use native::{NativeColor, PlatformColor};
pub use presets::{preset_for, DarkModeColorSet, LightModeColorSet};
pub use resolved::ResolvedColor;
