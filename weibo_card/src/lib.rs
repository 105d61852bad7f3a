//! # Data model for weibo post cards
//!
//! This crate defines the two shapes that a card renderer and a post fetcher
//! agree on:
//!
//! - [`CardTemplate`], a named visual theme with an outer "container" layer and
//!   an inner "card" layer.
//! - [`WeiboData`], one social-media post, normalized away from whatever format
//!   it was originally fetched in.
//!
//! Neither type does any rendering. The constructors in this crate are the
//! validation boundary: values parsed with [`CardTemplate::from_str`] or
//! [`WeiboData::from_str`] are guaranteed to carry every required field, and a
//! rejected document names the exact field path that was missing.
//!
//! ```
//! use weibo_card::CardTemplate;
//!
//! let template = CardTemplate::from_str(r##"{
//!     "id": "minimal",
//!     "name": "Minimal",
//!     "description": "",
//!     "style": {
//!         "container": { "padding": "16px", "backgroundColor": "#fff" },
//!         "card": { "backgroundColor": "#000", "color": "#fff" }
//!     }
//! }"##).unwrap();
//! assert_eq!(template.style.card.color, "#fff");
//! assert_eq!(template.style.card.resolve().font_size, "16px");
//! ```

#![warn(missing_docs)]

use std::result;
use thiserror::Error;

pub mod css;
pub mod defaults;
mod post;
mod template;
mod validate;

pub use crate::css::{CardCss, CssDeclarations};
pub use crate::defaults::{ResolvedCardStyle, ResolvedContainerStyle};
pub use crate::post::WeiboData;
pub use crate::template::{CardStyle, CardTemplate, ContainerStyle, TemplateStyle};

/// Our standard result type.
pub type Result<T, E = Error> = result::Result<T, E>;

/// Errors which can be returned by this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// We could not parse the input data.
    #[error("could not parse {what}")]
    #[non_exhaustive]
    CouldNotParse {
        /// What we were trying to parse.
        what: &'static str,

        /// The underlying error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// We could not serialize a value.
    #[error("could not serialize {what}")]
    #[non_exhaustive]
    CouldNotSerialize {
        /// What we were trying to serialize.
        what: &'static str,

        /// The underlying error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A required field was absent, or was `null`.
    #[error("missing required field {path:?}")]
    #[non_exhaustive]
    MissingField {
        /// The dotted path to the field, such as `style.card.color`.
        path: String,
    },

    /// A field was present, but held the wrong kind of JSON value.
    #[error("expected {expected} at {path:?}")]
    #[non_exhaustive]
    WrongType {
        /// The dotted path to the field, or `<root>` for the whole document.
        path: String,

        /// The kind of value we wanted.
        expected: &'static str,
    },
}

impl Error {
    /// The field path this error refers to, if it refers to a specific field.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::MissingField { path } | Error::WrongType { path, .. } => {
                Some(path.as_str())
            }
            _ => None,
        }
    }

    pub(crate) fn parse<E>(what: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::CouldNotParse {
            what,
            source: source.into(),
        }
    }

    pub(crate) fn serialize<E>(what: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::CouldNotSerialize {
            what,
            source: source.into(),
        }
    }
}

#[test]
fn error_messages_name_the_field_path() {
    let err = Error::MissingField {
        path: "style.card.color".to_owned(),
    };
    assert_eq!(err.to_string(), "missing required field \"style.card.color\"");
    assert_eq!(err.path(), Some("style.card.color"));

    let err = Error::WrongType {
        path: "nickname".to_owned(),
        expected: "string",
    };
    assert_eq!(err.to_string(), "expected string at \"nickname\"");
}

#[test]
fn values_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CardTemplate>();
    assert_send_sync::<WeiboData>();
    assert_send_sync::<Error>();
}
