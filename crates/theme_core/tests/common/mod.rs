use theme_core::{NativeColor, PlatformColor, ResolvedColor};

/// Colors covering extended range, transparency and an explicit linear override.
pub fn fixtures() -> Vec<ResolvedColor> {
    vec![
        ResolvedColor::srgb(0.0, 0.0, 0.0),
        ResolvedColor::srgb(1.0, 1.0, 1.0),
        ResolvedColor::new(
            "extended red",
            1.25,
            -0.05,
            0.0,
            1.0,
            PlatformColor::from_components(1.25, -0.05, 0.0, 1.0),
        ),
        ResolvedColor::new(
            "",
            0.333,
            0.666,
            0.999,
            0.0,
            PlatformColor::from_components(0.333, 0.666, 0.999, 0.0),
        )
        .with_linear(0.09, 0.4, 0.998),
        ResolvedColor::new(
            "8-bit channels",
            255.0,
            128.0,
            7.0,
            0.5,
            PlatformColor::from_components(255.0, 128.0, 7.0, 0.5),
        ),
    ]
}
