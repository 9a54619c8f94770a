//! Unresolved colors: lightweight descriptors resolved against a display context.

use crate::appearance::DisplayContext;
use crate::color_space::ColorSpace;
use crate::native::NativeColor;
use crate::resolved::ResolvedColor;

/// What [`Color::resolve`] yields in a dark context.
pub const DARK_RESOLVED: (f32, f32, f32) = (0.1, 0.1, 0.1);
/// What [`Color::resolve`] yields in a light context.
pub const LIGHT_RESOLVED: (f32, f32, f32) = (1.0, 1.0, 1.0);

/// A representation of a color that adapts to a given context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// From 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red as f32 / 255.0, green as f32 / 255.0, blue as f32 / 255.0)
    }

    /// Constant color with the channels of `resolved`. Any channel above 1 is
    /// taken as an 8-bit value and divided by 255. Opacity is dropped.
    pub fn from_resolved<N: NativeColor>(resolved: &ResolvedColor<N>) -> Self {
        Self::new(
            normalize(resolved.red()),
            normalize(resolved.green()),
            normalize(resolved.blue()),
        )
    }

    /// Fixed per-appearance color; the stored channels are not consulted.
    pub fn resolve<N: NativeColor>(&self, context: &impl DisplayContext) -> ResolvedColor<N> {
        let (red, green, blue) = if context.is_dark() {
            DARK_RESOLVED
        } else {
            LIGHT_RESOLVED
        };
        ResolvedColor::from_components(ColorSpace::Srgb, red, green, blue, 1.0)
    }

    /// Resolves this color's own channels, opaque, in extended sRGB. The
    /// context only tags the description with the appearance it was
    /// resolved for.
    pub fn resolve_components<N: NativeColor>(
        &self,
        context: &impl DisplayContext,
    ) -> ResolvedColor<N> {
        let resolved: ResolvedColor<N> =
            ResolvedColor::from_components(ColorSpace::Srgb, self.red, self.green, self.blue, 1.0);
        let description = format!("{} ({})", resolved.description(), context.appearance().name());
        ResolvedColor::new(
            description,
            self.red,
            self.green,
            self.blue,
            1.0,
            resolved.native().clone(),
        )
    }
}

fn normalize(component: f32) -> f32 {
    if component > 1.0 {
        component / 255.0
    } else {
        component
    }
}

impl<N: NativeColor> From<&ResolvedColor<N>> for Color {
    fn from(resolved: &ResolvedColor<N>) -> Self {
        Color::from_resolved(resolved)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::from_rgb8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::Appearance;
    use crate::native::PlatformColor;

    fn resolved(red: f32, green: f32, blue: f32) -> ResolvedColor {
        ResolvedColor::srgb(red, green, blue)
    }

    #[test]
    fn test_from_resolved_normalizes_8bit_channels() {
        let color = Color::from_resolved(&resolved(255.0, 128.0, 0.0));
        assert_eq!(color.red, 1.0);
        assert!((color.green - 0.502).abs() < 1e-3);
        assert_eq!(color.blue, 0.0);
    }

    #[test]
    fn test_from_resolved_keeps_unit_channels() {
        let color = Color::from_resolved(&resolved(0.5, 0.2, 0.9));
        assert_eq!(color, Color::new(0.5, 0.2, 0.9));
    }

    #[test]
    fn test_from_resolved_is_per_channel() {
        let color = Color::from(&resolved(1.0, 51.0, -3.0));
        assert_eq!(color, Color::new(1.0, 0.2, -3.0));
    }

    #[test]
    fn test_resolve_dark_ignores_channels() {
        for color in [Color::new(0.9, 0.0, 0.3), Color::from_rgb8(255, 255, 255)] {
            let r: ResolvedColor<PlatformColor> = color.resolve(&Appearance::Dark);
            assert_eq!(r.rgba(), (0.1, 0.1, 0.1, 1.0));
        }
    }

    #[test]
    fn test_resolve_light_ignores_channels() {
        let r: ResolvedColor<PlatformColor> = Color::new(0.0, 0.0, 0.0).resolve(&Appearance::Light);
        assert_eq!(r.rgba(), (1.0, 1.0, 1.0, 1.0));
        assert_eq!(r.linear_red(), 1.0);
    }

    #[test]
    fn test_resolve_components_uses_own_channels() {
        let r: ResolvedColor<PlatformColor> =
            Color::new(0.2, 0.4, 0.6).resolve_components(&Appearance::Light);
        assert_eq!(r.rgba(), (0.2, 0.4, 0.6, 1.0));
        assert_eq!(r.description(), "#336699FF (light)");
        assert_eq!(r.native().components(), [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn test_from_rgb8() {
        assert_eq!(Color::from((255, 0, 51)), Color::new(1.0, 0.0, 0.2));
    }
}
