//! Palette presets resolved end to end.

use theme_core::{
    preset_for, Appearance, Color, ColorRole, ColorSet, DarkModeColorSet, LightModeColorSet,
    ResolvedColor,
};

#[test]
fn test_presets_expose_all_fifteen_roles() {
    let light = LightModeColorSet::default();
    let dark = DarkModeColorSet::default();
    let sets: [&dyn ColorSet; 2] = [&light, &dark];
    for set in sets {
        assert_eq!(set.roles().len(), ColorRole::ALL.len());
    }
}

#[test]
fn test_light_and_dark_differ_on_background() {
    assert_ne!(
        preset_for(Appearance::Light).background_color(),
        preset_for(Appearance::Dark).background_color()
    );
}

#[test]
fn test_resolve_is_fixed_per_appearance() {
    for (_, color) in LightModeColorSet::default().roles() {
        let dark: ResolvedColor = color.resolve(&Appearance::Dark);
        let light: ResolvedColor = color.resolve(&Appearance::Light);
        assert_eq!(dark.rgba(), (0.1, 0.1, 0.1, 1.0));
        assert_eq!(light.rgba(), (1.0, 1.0, 1.0, 1.0));
    }
}

#[test]
fn test_resolved_palette_color_survives_encoding() {
    let set = preset_for(Appearance::Dark);
    let resolved: ResolvedColor = set
        .color(ColorRole::Accent)
        .resolve_components(&Appearance::Dark);
    let decoded: ResolvedColor = ResolvedColor::from_bytes(&resolved.to_bytes().unwrap()).unwrap();
    assert_eq!(Color::from_resolved(&decoded), set.accent_color());
}

#[test]
fn test_from_resolved_after_8bit_construction() {
    let resolved: ResolvedColor = ResolvedColor::srgb(255.0, 128.0, 0.0);
    let color = Color::from_resolved(&resolved);
    assert_eq!(color.red, 1.0);
    assert!((color.green - 0.502).abs() < 1e-3);
    assert_eq!(color.blue, 0.0);
}
