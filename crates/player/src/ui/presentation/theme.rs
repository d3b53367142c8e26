//! Theme capability for the presentation layer
//!
//! Widgets that need themed colors take a palette, not a styling system:
//! all the theme guarantees is a primary and a secondary color per
//! concern.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// Palette of the life bar: fill color over track color.
pub const LIFE: Palette = Palette {
    primary: "#E80A67",
    secondary: "#4d0321",
};
