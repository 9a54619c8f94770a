use theme_constant::theme::light as c;

use crate::color::Color;

/// Light theme preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightModeColorSet {
    pub primary_color: Color,
    pub secondary_color: Color,
    pub accent_color: Color,
    pub background_color: Color,
    pub text_color: Color,
    pub title_color: Color,
    pub error_color: Color,
    pub success_color: Color,
    pub warning_color: Color,
    pub link_color: Color,
    pub disabled_color: Color,
    pub selection_color: Color,
    pub overlay_color: Color,
    pub shadow_color: Color,
    pub border_color: Color,
}

impl Default for LightModeColorSet {
    fn default() -> Self {
        Self {
            primary_color: c::PRIMARY.into(),
            secondary_color: c::SECONDARY.into(),
            accent_color: c::ACCENT.into(),
            background_color: c::BACKGROUND.into(),
            text_color: c::TEXT.into(),
            title_color: c::TITLE.into(),
            error_color: c::ERROR.into(),
            success_color: c::SUCCESS.into(),
            warning_color: c::WARNING.into(),
            link_color: c::LINK.into(),
            disabled_color: c::DISABLED.into(),
            selection_color: c::SELECTION.into(),
            overlay_color: c::OVERLAY.into(),
            shadow_color: c::SHADOW.into(),
            border_color: c::BORDER.into(),
        }
    }
}

super::impl_stored_color_set!(LightModeColorSet, "Light");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_set::ColorSet;

    #[test]
    fn test_light_background_is_white() {
        let set = LightModeColorSet::default();
        assert_eq!(set.background_color(), Color::new(1.0, 1.0, 1.0));
        assert_eq!(set.text_color(), Color::new(0.0, 0.0, 0.0));
    }
}
