//! Built-in color set presets.

mod dark;
mod light;

pub use dark::DarkModeColorSet;
pub use light::LightModeColorSet;

use crate::appearance::Appearance;
use crate::color_set::ColorSet;

/// Preset matching `appearance`.
pub fn preset_for(appearance: Appearance) -> Box<dyn ColorSet> {
    match appearance {
        Appearance::Dark => Box::new(DarkModeColorSet::default()),
        Appearance::Light => Box::new(LightModeColorSet::default()),
    }
}

/// Implements [`ColorSet`] for a struct storing every role as a `<role>_color` field.
macro_rules! stored_color_set {
    ($ty:ty, $name:expr, { $($field:ident => $setter:ident),+ $(,)? }) => {
        impl $crate::color_set::ColorSet for $ty {
            fn name(&self) -> &str {
                $name
            }
            $(
                fn $field(&self) -> $crate::color::Color {
                    self.$field
                }
                fn $setter(&mut self, color: $crate::color::Color) {
                    self.$field = color;
                }
            )+
        }
    };
}

pub(crate) use stored_color_set;

macro_rules! impl_stored_color_set {
    ($ty:ty, $name:expr) => {
        $crate::presets::stored_color_set!($ty, $name, {
            primary_color => set_primary_color,
            secondary_color => set_secondary_color,
            accent_color => set_accent_color,
            background_color => set_background_color,
            text_color => set_text_color,
            title_color => set_title_color,
            error_color => set_error_color,
            success_color => set_success_color,
            warning_color => set_warning_color,
            link_color => set_link_color,
            disabled_color => set_disabled_color,
            selection_color => set_selection_color,
            overlay_color => set_overlay_color,
            shadow_color => set_shadow_color,
            border_color => set_border_color,
        });
    };
}

pub(crate) use impl_stored_color_set;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::color_set::ColorRole;

    #[test]
    fn test_preset_for_appearance() {
        assert_eq!(preset_for(Appearance::Light).name(), "Light");
        assert_eq!(preset_for(Appearance::Dark).name(), "Dark");
    }

    #[test]
    fn test_every_role_is_exposed() {
        for appearance in [Appearance::Light, Appearance::Dark] {
            let set = preset_for(appearance);
            let roles = set.roles();
            assert_eq!(roles.len(), 15);
            assert_eq!(
                roles.iter().map(|(role, _)| *role).collect::<Vec<_>>(),
                ColorRole::ALL.to_vec()
            );
        }
    }

    #[test]
    fn test_set_color_by_role_only_touches_that_role() {
        let mut set = LightModeColorSet::default();
        let before = set.roles();
        set.set_color(ColorRole::Link, Color::new(0.1, 0.2, 0.3));
        for (role, color) in set.roles() {
            if role == ColorRole::Link {
                assert_eq!(color, Color::new(0.1, 0.2, 0.3));
                assert_eq!(set.link_color, color);
            } else {
                let old = before.iter().find(|(r, _)| *r == role).map(|(_, c)| *c);
                assert_eq!(Some(color), old, "{role} changed");
            }
        }
    }
}
