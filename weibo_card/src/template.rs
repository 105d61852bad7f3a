//! Card templates: the visual theme a post is rendered with.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::validate::{
    array, join, object, optional_strings, required_object, required_strings,
};
use crate::{Error, Result};

/// Required string fields of the top-level template record.
const TEMPLATE_FIELDS: &[&str] = &["id", "name", "description"];

const CONTAINER_REQUIRED: &[&str] = &["padding", "backgroundColor"];
const CONTAINER_OPTIONAL: &[&str] = &[
    "backgroundImage",
    "backgroundSize",
    "backgroundPosition",
    "borderRadius",
    "boxShadow",
];

const CARD_REQUIRED: &[&str] = &["backgroundColor", "color"];
const CARD_OPTIONAL: &[&str] =
    &["fontFamily", "fontSize", "padding", "borderRadius", "boxShadow"];

/// One selectable visual theme for rendering a post as a card.
///
/// Templates are authored ahead of time and only read at render time. The
/// `id` should be unique among the templates a registry offers, but this type
/// does not know about any other templates, so it cannot check that.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "no_forwards_compatibility", serde(deny_unknown_fields))]
#[non_exhaustive]
pub struct CardTemplate {
    /// Identifier for this template, used when selecting it.
    pub id: String,

    /// Human-readable label.
    pub name: String,

    /// Human-readable summary. May be empty.
    pub description: String,

    /// How to paint the two card layers.
    pub style: TemplateStyle,
}

impl CardTemplate {
    /// Create a new template.
    pub fn new<I, N, D>(id: I, name: N, description: D, style: TemplateStyle) -> CardTemplate
    where
        I: Into<String>,
        N: Into<String>,
        D: Into<String>,
    {
        CardTemplate {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            style,
        }
    }

    /// Parse a template from JSON represented as raw bytes. The data must be
    /// UTF-8.
    pub fn from_bytes(data: &[u8]) -> Result<CardTemplate> {
        let value: Value = serde_json::from_slice(data)
            .map_err(|err| Error::parse("card template", err))?;
        Self::from_value(&value)
    }

    /// Parse a template from a JSON string.
    pub fn from_str(data: &str) -> Result<CardTemplate> {
        Self::from_bytes(data.as_bytes())
    }

    /// Convert an already-parsed JSON value into a template, checking that
    /// every required field is present.
    pub fn from_value(value: &Value) -> Result<CardTemplate> {
        Self::from_value_at(value, "")
    }

    /// Parse a JSON array of templates. If any element is invalid, the error
    /// path starts with its index, as in `[2].style.card.color`.
    ///
    /// Duplicate ids are not rejected here.
    pub fn list_from_str(data: &str) -> Result<Vec<CardTemplate>> {
        let value: Value = serde_json::from_str(data)
            .map_err(|err| Error::parse("card template list", err))?;
        array(&value, "")?
            .iter()
            .enumerate()
            .map(|(i, item)| Self::from_value_at(item, &format!("[{}]", i)))
            .collect()
    }

    fn from_value_at(value: &Value, prefix: &str) -> Result<CardTemplate> {
        trace!("checking card template at {:?}", prefix);
        if let Err(err) = check_template(value, prefix) {
            debug!("rejected card template: {}", err);
            return Err(err);
        }
        let template = CardTemplate::deserialize(value)
            .map_err(|err| Error::parse("card template", err))?;
        debug!("accepted card template {:?}", template.id);
        Ok(template)
    }

    /// Convert this template to a pretty-printed JSON string.
    pub fn to_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| Error::serialize("card template", err))
    }

    /// Convert this template to a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|err| Error::serialize("card template", err))
    }
}

impl FromStr for CardTemplate {
    type Err = Error;

    fn from_str(data: &str) -> Result<CardTemplate> {
        CardTemplate::from_str(data)
    }
}

/// Walk a template document and make sure every required field is present as
/// a string, and every optional field is either absent or a string.
fn check_template(value: &Value, prefix: &str) -> Result<()> {
    let root = object(value, prefix)?;
    required_strings(root, prefix, TEMPLATE_FIELDS)?;

    let style_path = join(prefix, "style");
    let style = required_object(root, prefix, "style")?;

    let container_path = join(&style_path, "container");
    let container = required_object(style, &style_path, "container")?;
    required_strings(container, &container_path, CONTAINER_REQUIRED)?;
    optional_strings(container, &container_path, CONTAINER_OPTIONAL)?;

    let card_path = join(&style_path, "card");
    let card = required_object(style, &style_path, "card")?;
    required_strings(card, &card_path, CARD_REQUIRED)?;
    optional_strings(card, &card_path, CARD_OPTIONAL)?;

    Ok(())
}

/// The styling for both layers of a card.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "no_forwards_compatibility", serde(deny_unknown_fields))]
#[non_exhaustive]
pub struct TemplateStyle {
    /// The outer frame around the card.
    pub container: ContainerStyle,

    /// The inner surface holding the post.
    pub card: CardStyle,
}

impl TemplateStyle {
    /// Combine styles for the two layers.
    pub fn new(container: ContainerStyle, card: CardStyle) -> TemplateStyle {
        TemplateStyle { container, card }
    }
}

/// Styling for the outer container layer. Every `Option` field may be left
/// out, in which case the renderer picks its own value (see
/// [`crate::defaults`]).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "no_forwards_compatibility", serde(deny_unknown_fields))]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContainerStyle {
    /// Space between the container edge and the card, as a CSS length.
    pub padding: String,

    /// Container background color.
    pub background_color: String,

    /// A background image URL or gradient, drawn over the background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    /// How to size `background_image`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,

    /// Where to place `background_image`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,

    /// Corner rounding of the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    /// Drop shadow of the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl ContainerStyle {
    /// Create a container style with only the required fields set.
    pub fn new<P, B>(padding: P, background_color: B) -> ContainerStyle
    where
        P: Into<String>,
        B: Into<String>,
    {
        ContainerStyle {
            padding: padding.into(),
            background_color: background_color.into(),
            background_image: None,
            background_size: None,
            background_position: None,
            border_radius: None,
            box_shadow: None,
        }
    }

    /// Set the background image.
    pub fn with_background_image<S: Into<String>>(mut self, value: S) -> Self {
        self.background_image = Some(value.into());
        self
    }

    /// Set the background size.
    pub fn with_background_size<S: Into<String>>(mut self, value: S) -> Self {
        self.background_size = Some(value.into());
        self
    }

    /// Set the background position.
    pub fn with_background_position<S: Into<String>>(mut self, value: S) -> Self {
        self.background_position = Some(value.into());
        self
    }

    /// Set the corner rounding.
    pub fn with_border_radius<S: Into<String>>(mut self, value: S) -> Self {
        self.border_radius = Some(value.into());
        self
    }

    /// Set the drop shadow.
    pub fn with_box_shadow<S: Into<String>>(mut self, value: S) -> Self {
        self.box_shadow = Some(value.into());
        self
    }
}

/// Styling for the inner card layer, which holds the post text.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "no_forwards_compatibility", serde(deny_unknown_fields))]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CardStyle {
    /// Card background color.
    pub background_color: String,

    /// Text color.
    pub color: String,

    /// Font stack for the post text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size of the post text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    /// Space between the card edge and its text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    /// Corner rounding of the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    /// Drop shadow of the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl CardStyle {
    /// Create a card style with only the required fields set.
    pub fn new<B, C>(background_color: B, color: C) -> CardStyle
    where
        B: Into<String>,
        C: Into<String>,
    {
        CardStyle {
            background_color: background_color.into(),
            color: color.into(),
            font_family: None,
            font_size: None,
            padding: None,
            border_radius: None,
            box_shadow: None,
        }
    }

    /// Set the font family.
    pub fn with_font_family<S: Into<String>>(mut self, value: S) -> Self {
        self.font_family = Some(value.into());
        self
    }

    /// Set the font size.
    pub fn with_font_size<S: Into<String>>(mut self, value: S) -> Self {
        self.font_size = Some(value.into());
        self
    }

    /// Set the inner padding.
    pub fn with_padding<S: Into<String>>(mut self, value: S) -> Self {
        self.padding = Some(value.into());
        self
    }

    /// Set the corner rounding.
    pub fn with_border_radius<S: Into<String>>(mut self, value: S) -> Self {
        self.border_radius = Some(value.into());
        self
    }

    /// Set the drop shadow.
    pub fn with_box_shadow<S: Into<String>>(mut self, value: S) -> Self {
        self.box_shadow = Some(value.into());
        self
    }
}

#[cfg(test)]
fn minimal() -> CardTemplate {
    CardTemplate::new(
        "minimal",
        "Minimal",
        "",
        TemplateStyle::new(
            ContainerStyle::new("16px", "#fff"),
            CardStyle::new("#000", "#fff"),
        ),
    )
}

#[test]
fn parse_fixtures() {
    let examples = &[
        include_str!("../fixtures/templates/minimal.json"),
        include_str!("../fixtures/templates/sunset.json"),
    ];
    for example in examples {
        CardTemplate::from_str(example).expect("failed to parse example template");
    }
    let catalog = CardTemplate::list_from_str(include_str!(
        "../fixtures/templates/catalog.json"
    ))
    .expect("failed to parse example catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[1].style.card.box_shadow, None);
}

#[test]
fn minimal_template_has_no_optional_fields() {
    let parsed =
        CardTemplate::from_str(include_str!("../fixtures/templates/minimal.json"))
            .unwrap();
    assert_eq!(parsed, minimal());
    assert_eq!(parsed.style.container.background_image, None);
    assert_eq!(parsed.style.card.font_family, None);
}

#[test]
fn full_template_keeps_every_optional_field() {
    let parsed =
        CardTemplate::from_str(include_str!("../fixtures/templates/sunset.json"))
            .unwrap();
    let container = &parsed.style.container;
    assert_eq!(container.background_size.as_deref(), Some("cover"));
    assert_eq!(container.background_position.as_deref(), Some("center"));
    assert_eq!(container.border_radius.as_deref(), Some("24px"));
    assert!(container.box_shadow.is_some());
    let card = &parsed.style.card;
    assert_eq!(card.font_size.as_deref(), Some("15px"));
    assert_eq!(card.padding.as_deref(), Some("24px"));
    assert_eq!(card.border_radius.as_deref(), Some("16px"));
    assert!(card.font_family.as_deref().unwrap().starts_with("\"PingFang SC\""));
}

#[test]
fn each_required_field_is_reported_by_path() {
    let paths = &[
        "id",
        "name",
        "description",
        "style",
        "style.container",
        "style.container.padding",
        "style.container.backgroundColor",
        "style.card",
        "style.card.backgroundColor",
        "style.card.color",
    ];
    for path in paths {
        let mut value = minimal().to_value().unwrap();
        let mut parts = path.split('.').collect::<Vec<_>>();
        let last = parts.pop().unwrap();
        let mut parent = &mut value;
        for part in parts {
            parent = parent.get_mut(part).unwrap();
        }
        parent.as_object_mut().unwrap().remove(last);

        let err = CardTemplate::from_value(&value).unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }), "{}: {:?}", path, err);
        assert_eq!(err.path(), Some(*path));
    }
}

#[test]
fn wrong_types_are_rejected() {
    let err = CardTemplate::from_str(
        r##"{"id": "x", "name": "X", "description": "",
            "style": {"container": {"padding": 16, "backgroundColor": "#fff"},
                      "card": {"backgroundColor": "#000", "color": "#fff"}}}"##,
    )
    .unwrap_err();
    assert_eq!(err.path(), Some("style.container.padding"));

    let err = CardTemplate::from_str(
        r##"{"id": "x", "name": "X", "description": "",
            "style": {"container": {"padding": "1px", "backgroundColor": "#fff"},
                      "card": {"backgroundColor": "#000", "color": "#fff",
                               "boxShadow": false}}}"##,
    )
    .unwrap_err();
    assert_eq!(err.path(), Some("style.card.boxShadow"));

    let err = CardTemplate::from_str(
        r#"{"id": "x", "name": "X", "description": "", "style": []}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::WrongType { expected: "object", .. }));
    assert_eq!(err.path(), Some("style"));

    let err = CardTemplate::from_str("[]").unwrap_err();
    assert_eq!(err.path(), Some("<root>"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = CardTemplate::from_str("{\"id\": ").unwrap_err();
    assert!(matches!(err, Error::CouldNotParse { .. }));
    assert_eq!(err.path(), None);
}

#[test]
fn list_errors_include_the_element_index() {
    let data = r##"[
        {"id": "a", "name": "A", "description": "",
         "style": {"container": {"padding": "1px", "backgroundColor": "#fff"},
                   "card": {"backgroundColor": "#000", "color": "#fff"}}},
        {"id": "b", "name": "B", "description": "",
         "style": {"container": {"padding": "1px", "backgroundColor": "#fff"},
                   "card": {"backgroundColor": "#000"}}}
    ]"##;
    let err = CardTemplate::list_from_str(data).unwrap_err();
    assert_eq!(err.path(), Some("[1].style.card.color"));

    let err = CardTemplate::list_from_str("{}").unwrap_err();
    assert!(matches!(err, Error::WrongType { expected: "array", .. }));
}

#[test]
fn round_trip_preserves_absent_fields() {
    let original = CardTemplate::new(
        "mixed",
        "Mixed",
        "Some optional fields",
        TemplateStyle::new(
            ContainerStyle::new("8px", "#eee").with_background_image("url(bg.png)"),
            CardStyle::new("#fff", "#111").with_font_size("18px"),
        ),
    );
    let json = original.to_string().unwrap();
    assert!(json.contains("\"backgroundImage\""));
    assert!(!json.contains("backgroundSize"));
    assert!(!json.contains("null"));
    assert_eq!(CardTemplate::from_str(&json).unwrap(), original);
}

#[test]
fn serialized_names_are_camel_case() {
    let value = minimal().to_value().unwrap();
    assert_eq!(value["style"]["container"]["backgroundColor"], "#fff");
    assert_eq!(value["style"]["card"]["backgroundColor"], "#000");
    assert!(value["style"]["card"].get("background_color").is_none());
}

#[test]
fn parse_via_from_str_trait() {
    let parsed: CardTemplate = include_str!("../fixtures/templates/minimal.json")
        .parse()
        .unwrap();
    assert_eq!(parsed.id, "minimal");
}

#[test]
#[cfg(not(feature = "no_forwards_compatibility"))]
fn unknown_fields_are_ignored() {
    let parsed = CardTemplate::from_str(
        r##"{"id": "x", "name": "X", "description": "", "author": "someone",
            "style": {"container": {"padding": "1px", "backgroundColor": "#fff"},
                      "card": {"backgroundColor": "#000", "color": "#fff",
                               "lineHeight": "1.6"}}}"##,
    )
    .unwrap();
    assert_eq!(parsed.id, "x");
}

#[test]
#[cfg(feature = "no_forwards_compatibility")]
fn unknown_fields_are_rejected() {
    let err = CardTemplate::from_str(
        r##"{"id": "x", "name": "X", "description": "", "author": "someone",
            "style": {"container": {"padding": "1px", "backgroundColor": "#fff"},
                      "card": {"backgroundColor": "#000", "color": "#fff"}}}"##,
    )
    .unwrap_err();
    assert!(matches!(err, Error::CouldNotParse { .. }));
}
