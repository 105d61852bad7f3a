//! Fallback values for optional style fields.
//!
//! A template may leave out any optional style field, and a renderer has to
//! draw something anyway. These are the values we use. Most are the CSS
//! initial value of the matching property; `font-family` and `font-size` have
//! no portable initial value, so we pick one.

use crate::template::{CardStyle, ContainerStyle};

/// Container `background-image`.
pub const CONTAINER_BACKGROUND_IMAGE: &str = "none";
/// Container `background-size`.
pub const CONTAINER_BACKGROUND_SIZE: &str = "auto";
/// Container `background-position`.
pub const CONTAINER_BACKGROUND_POSITION: &str = "0% 0%";
/// Container `border-radius`.
pub const CONTAINER_BORDER_RADIUS: &str = "0";
/// Container `box-shadow`.
pub const CONTAINER_BOX_SHADOW: &str = "none";

/// Card `font-family`.
pub const CARD_FONT_FAMILY: &str = "sans-serif";
/// Card `font-size`.
pub const CARD_FONT_SIZE: &str = "16px";
/// Card `padding`.
pub const CARD_PADDING: &str = "0";
/// Card `border-radius`.
pub const CARD_BORDER_RADIUS: &str = "0";
/// Card `box-shadow`.
pub const CARD_BOX_SHADOW: &str = "none";

/// A [`ContainerStyle`] with every field filled in, borrowing from the
/// original style or from the defaults above.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(missing_docs)]
pub struct ResolvedContainerStyle<'a> {
    pub padding: &'a str,
    pub background_color: &'a str,
    pub background_image: &'a str,
    pub background_size: &'a str,
    pub background_position: &'a str,
    pub border_radius: &'a str,
    pub box_shadow: &'a str,
}

/// A [`CardStyle`] with every field filled in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(missing_docs)]
pub struct ResolvedCardStyle<'a> {
    pub background_color: &'a str,
    pub color: &'a str,
    pub font_family: &'a str,
    pub font_size: &'a str,
    pub padding: &'a str,
    pub border_radius: &'a str,
    pub box_shadow: &'a str,
}

fn or_default<'a>(value: &'a Option<String>, default: &'static str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

impl ContainerStyle {
    /// Fill in every absent optional field from the default table.
    pub fn resolve(&self) -> ResolvedContainerStyle<'_> {
        ResolvedContainerStyle {
            padding: &self.padding,
            background_color: &self.background_color,
            background_image: or_default(&self.background_image, CONTAINER_BACKGROUND_IMAGE),
            background_size: or_default(&self.background_size, CONTAINER_BACKGROUND_SIZE),
            background_position: or_default(
                &self.background_position,
                CONTAINER_BACKGROUND_POSITION,
            ),
            border_radius: or_default(&self.border_radius, CONTAINER_BORDER_RADIUS),
            box_shadow: or_default(&self.box_shadow, CONTAINER_BOX_SHADOW),
        }
    }
}

impl CardStyle {
    /// Fill in every absent optional field from the default table.
    pub fn resolve(&self) -> ResolvedCardStyle<'_> {
        ResolvedCardStyle {
            background_color: &self.background_color,
            color: &self.color,
            font_family: or_default(&self.font_family, CARD_FONT_FAMILY),
            font_size: or_default(&self.font_size, CARD_FONT_SIZE),
            padding: or_default(&self.padding, CARD_PADDING),
            border_radius: or_default(&self.border_radius, CARD_BORDER_RADIUS),
            box_shadow: or_default(&self.box_shadow, CARD_BOX_SHADOW),
        }
    }
}

#[test]
fn absent_fields_use_defaults() {
    let container = ContainerStyle::new("16px", "#fff");
    assert_eq!(
        container.resolve(),
        ResolvedContainerStyle {
            padding: "16px",
            background_color: "#fff",
            background_image: "none",
            background_size: "auto",
            background_position: "0% 0%",
            border_radius: "0",
            box_shadow: "none",
        }
    );

    let card = CardStyle::new("#000", "#fff");
    let resolved = card.resolve();
    assert_eq!(resolved.font_family, CARD_FONT_FAMILY);
    assert_eq!(resolved.font_size, "16px");
    assert_eq!(resolved.padding, "0");
    assert_eq!(resolved.box_shadow, "none");
}

#[test]
fn author_values_win_over_defaults() {
    let container = ContainerStyle::new("40px", "#ff7e5f")
        .with_background_size("cover")
        .with_border_radius("24px");
    let resolved = container.resolve();
    assert_eq!(resolved.background_size, "cover");
    assert_eq!(resolved.border_radius, "24px");
    assert_eq!(resolved.background_image, "none");

    let card = CardStyle::new("#fff", "#333")
        .with_font_family("serif")
        .with_padding("")
        .with_box_shadow("0 1px 2px #000");
    let resolved = card.resolve();
    assert_eq!(resolved.font_family, "serif");
    // An empty string is a value, not an absence.
    assert_eq!(resolved.padding, "");
    assert_eq!(resolved.box_shadow, "0 1px 2px #000");
    assert_eq!(card.padding.as_deref(), Some(""));
}
