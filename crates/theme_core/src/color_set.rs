//! Color sets: the fifteen semantic roles every theme preset supplies.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ThemeError;

/// One semantic color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
    Title,
    Error,
    Success,
    Warning,
    Link,
    Disabled,
    Selection,
    Overlay,
    Shadow,
    Border,
}

impl ColorRole {
    pub const ALL: [ColorRole; 15] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::Title,
        ColorRole::Error,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Link,
        ColorRole::Disabled,
        ColorRole::Selection,
        ColorRole::Overlay,
        ColorRole::Shadow,
        ColorRole::Border,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::Title => "title",
            ColorRole::Error => "error",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Link => "link",
            ColorRole::Disabled => "disabled",
            ColorRole::Selection => "selection",
            ColorRole::Overlay => "overlay",
            ColorRole::Shadow => "shadow",
            ColorRole::Border => "border",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix("color").unwrap_or(&wanted);
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name() == wanted)
            .ok_or_else(|| ThemeError::InvalidInput(format!("unknown color role: {s}")))
    }
}

/// A set of customizable colors for interface theming.
///
/// Implementors store all fifteen roles. The role-keyed accessors are
/// provided in terms of the named ones.
pub trait ColorSet: Send + Sync {
    /// Human-readable preset name.
    fn name(&self) -> &str;

    fn primary_color(&self) -> Color;
    fn secondary_color(&self) -> Color;
    fn accent_color(&self) -> Color;
    fn background_color(&self) -> Color;
    fn text_color(&self) -> Color;
    fn title_color(&self) -> Color;
    fn error_color(&self) -> Color;
    fn success_color(&self) -> Color;
    fn warning_color(&self) -> Color;
    fn link_color(&self) -> Color;
    fn disabled_color(&self) -> Color;
    fn selection_color(&self) -> Color;
    fn overlay_color(&self) -> Color;
    fn shadow_color(&self) -> Color;
    fn border_color(&self) -> Color;

    fn set_primary_color(&mut self, color: Color);
    fn set_secondary_color(&mut self, color: Color);
    fn set_accent_color(&mut self, color: Color);
    fn set_background_color(&mut self, color: Color);
    fn set_text_color(&mut self, color: Color);
    fn set_title_color(&mut self, color: Color);
    fn set_error_color(&mut self, color: Color);
    fn set_success_color(&mut self, color: Color);
    fn set_warning_color(&mut self, color: Color);
    fn set_link_color(&mut self, color: Color);
    fn set_disabled_color(&mut self, color: Color);
    fn set_selection_color(&mut self, color: Color);
    fn set_overlay_color(&mut self, color: Color);
    fn set_shadow_color(&mut self, color: Color);
    fn set_border_color(&mut self, color: Color);

    fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary_color(),
            ColorRole::Secondary => self.secondary_color(),
            ColorRole::Accent => self.accent_color(),
            ColorRole::Background => self.background_color(),
            ColorRole::Text => self.text_color(),
            ColorRole::Title => self.title_color(),
            ColorRole::Error => self.error_color(),
            ColorRole::Success => self.success_color(),
            ColorRole::Warning => self.warning_color(),
            ColorRole::Link => self.link_color(),
            ColorRole::Disabled => self.disabled_color(),
            ColorRole::Selection => self.selection_color(),
            ColorRole::Overlay => self.overlay_color(),
            ColorRole::Shadow => self.shadow_color(),
            ColorRole::Border => self.border_color(),
        }
    }

    fn set_color(&mut self, role: ColorRole, color: Color) {
        match role {
            ColorRole::Primary => self.set_primary_color(color),
            ColorRole::Secondary => self.set_secondary_color(color),
            ColorRole::Accent => self.set_accent_color(color),
            ColorRole::Background => self.set_background_color(color),
            ColorRole::Text => self.set_text_color(color),
            ColorRole::Title => self.set_title_color(color),
            ColorRole::Error => self.set_error_color(color),
            ColorRole::Success => self.set_success_color(color),
            ColorRole::Warning => self.set_warning_color(color),
            ColorRole::Link => self.set_link_color(color),
            ColorRole::Disabled => self.set_disabled_color(color),
            ColorRole::Selection => self.set_selection_color(color),
            ColorRole::Overlay => self.set_overlay_color(color),
            ColorRole::Shadow => self.set_shadow_color(color),
            ColorRole::Border => self.set_border_color(color),
        }
    }

    /// Every role with its color, in declaration order.
    fn roles(&self) -> Vec<(ColorRole, Color)> {
        ColorRole::ALL
            .into_iter()
            .map(|role| (role, self.color(role)))
            .collect()
    }
}
