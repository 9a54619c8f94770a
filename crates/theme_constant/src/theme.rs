//! Preset palette colors for the light and dark color sets.
//!
//! Defined as (R, G, B) 8-bit tuples; presets normalize them when building
//! their colors.

/// Light preset
pub mod light {
    /// Primary — #007aff
    pub const PRIMARY: (u8, u8, u8) = (0, 122, 255);
    /// Secondary — #5856d6
    pub const SECONDARY: (u8, u8, u8) = (88, 86, 214);
    /// Accent — #ff9500
    pub const ACCENT: (u8, u8, u8) = (255, 149, 0);
    /// Background — #ffffff
    pub const BACKGROUND: (u8, u8, u8) = (255, 255, 255);
    /// Body text — #000000
    pub const TEXT: (u8, u8, u8) = (0, 0, 0);
    /// Titles — #1c1c1e
    pub const TITLE: (u8, u8, u8) = (28, 28, 30);
    /// Error — #df514c
    pub const ERROR: (u8, u8, u8) = (223, 81, 76);
    /// Success — #4caf50
    pub const SUCCESS: (u8, u8, u8) = (76, 175, 80);
    /// Warning — #ff8c00
    pub const WARNING: (u8, u8, u8) = (255, 140, 0);
    /// Link — #0066cc
    pub const LINK: (u8, u8, u8) = (0, 102, 204);
    /// Disabled — #a1a1aa
    pub const DISABLED: (u8, u8, u8) = (161, 161, 170);
    /// Selection — #b3d7ff
    pub const SELECTION: (u8, u8, u8) = (179, 215, 255);
    /// Overlay — #f4f4f5
    pub const OVERLAY: (u8, u8, u8) = (244, 244, 245);
    /// Shadow — #3c3c43
    pub const SHADOW: (u8, u8, u8) = (60, 60, 67);
    /// Border — #e5e5e5
    pub const BORDER: (u8, u8, u8) = (229, 229, 229);
}

/// Dark preset
pub mod dark {
    /// Primary — #0a84ff
    pub const PRIMARY: (u8, u8, u8) = (10, 132, 255);
    /// Secondary — #5e5ce6
    pub const SECONDARY: (u8, u8, u8) = (94, 92, 230);
    /// Accent — #ff9f0a
    pub const ACCENT: (u8, u8, u8) = (255, 159, 10);
    /// Background — #0a0a0a
    pub const BACKGROUND: (u8, u8, u8) = (10, 10, 10);
    /// Body text — #ffffff
    pub const TEXT: (u8, u8, u8) = (255, 255, 255);
    /// Titles — #f2f2f7
    pub const TITLE: (u8, u8, u8) = (242, 242, 247);
    /// Error — #df514c
    pub const ERROR: (u8, u8, u8) = (223, 81, 76);
    /// Success — #4caf50
    pub const SUCCESS: (u8, u8, u8) = (76, 175, 80);
    /// Warning — #ff8c00
    pub const WARNING: (u8, u8, u8) = (255, 140, 0);
    /// Link — #64c8ff
    pub const LINK: (u8, u8, u8) = (100, 200, 255);
    /// Disabled — #464e6e
    pub const DISABLED: (u8, u8, u8) = (70, 78, 110);
    /// Selection — #24283b
    pub const SELECTION: (u8, u8, u8) = (36, 40, 59);
    /// Overlay — #18181b
    pub const OVERLAY: (u8, u8, u8) = (24, 24, 27);
    /// Shadow — #000000
    pub const SHADOW: (u8, u8, u8) = (0, 0, 0);
    /// Border — #262626
    pub const BORDER: (u8, u8, u8) = (38, 38, 38);
}
