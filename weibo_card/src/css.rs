//! Turning card styles into CSS declarations.
//!
//! This is a convenience for renderers that draw cards with HTML. Values are
//! copied through verbatim; we don't parse or sanitize CSS.

use std::fmt;

use crate::defaults::{ResolvedCardStyle, ResolvedContainerStyle};
use crate::template::CardTemplate;

/// An ordered list of CSS `property: value` pairs. Displays as an inline
/// `style` attribute value, like `padding: 16px; background-color: #fff`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CssDeclarations {
    declarations: Vec<(&'static str, String)>,
}

impl CssDeclarations {
    fn push(&mut self, property: &'static str, value: &str) {
        self.declarations.push((property, value.to_owned()));
    }

    /// Look up the value of `property`, if we have it.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over our declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// The number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Do we have any declarations at all?
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for CssDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

impl<'a> From<ResolvedContainerStyle<'a>> for CssDeclarations {
    fn from(style: ResolvedContainerStyle<'a>) -> Self {
        let mut css = CssDeclarations::default();
        css.push("padding", style.padding);
        css.push("background-color", style.background_color);
        css.push("background-image", style.background_image);
        css.push("background-size", style.background_size);
        css.push("background-position", style.background_position);
        css.push("border-radius", style.border_radius);
        css.push("box-shadow", style.box_shadow);
        css
    }
}

impl<'a> From<ResolvedCardStyle<'a>> for CssDeclarations {
    fn from(style: ResolvedCardStyle<'a>) -> Self {
        let mut css = CssDeclarations::default();
        css.push("background-color", style.background_color);
        css.push("color", style.color);
        css.push("font-family", style.font_family);
        css.push("font-size", style.font_size);
        css.push("padding", style.padding);
        css.push("border-radius", style.border_radius);
        css.push("box-shadow", style.box_shadow);
        css
    }
}

/// CSS for both layers of a card, with defaults applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardCss {
    /// Declarations for the outer container.
    pub container: CssDeclarations,
    /// Declarations for the inner card.
    pub card: CssDeclarations,
}

impl CardTemplate {
    /// Resolve both layers of this template and convert them to CSS.
    pub fn css(&self) -> CardCss {
        CardCss {
            container: self.style.container.resolve().into(),
            card: self.style.card.resolve().into(),
        }
    }
}

#[test]
fn minimal_template_css() {
    let template =
        CardTemplate::from_str(include_str!("../fixtures/templates/minimal.json"))
            .unwrap();
    let css = template.css();
    assert_eq!(
        css.container.to_string(),
        "padding: 16px; background-color: #fff; background-image: none; \
         background-size: auto; background-position: 0% 0%; border-radius: 0; \
         box-shadow: none"
    );
    assert_eq!(
        css.card.to_string(),
        "background-color: #000; color: #fff; font-family: sans-serif; \
         font-size: 16px; padding: 0; border-radius: 0; box-shadow: none"
    );
}

#[test]
fn declarations_keep_author_values_in_order() {
    let template =
        CardTemplate::from_str(include_str!("../fixtures/templates/sunset.json"))
            .unwrap();
    let css = template.css();
    assert_eq!(css.container.len(), 7);
    assert_eq!(
        css.container.get("background-image"),
        Some("linear-gradient(135deg, #ff7e5f 0%, #feb47b 100%)")
    );
    assert_eq!(css.card.get("font-size"), Some("15px"));
    assert_eq!(css.card.get("line-height"), None);
    let properties = css.card.iter().map(|(p, _)| p).collect::<Vec<_>>();
    assert_eq!(
        properties,
        &[
            "background-color",
            "color",
            "font-family",
            "font-size",
            "padding",
            "border-radius",
            "box-shadow",
        ]
    );
}

#[test]
fn empty_declarations_display_as_nothing() {
    let css = CssDeclarations::default();
    assert!(css.is_empty());
    assert_eq!(css.to_string(), "");
}
