//! Normalized weibo posts.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::validate::{object, required_strings};
use crate::{Error, Result};

const POST_FIELDS: &[&str] = &["nickname", "avatar", "publishTime", "source", "content"];

/// A single social-media post, independent of how it was fetched.
///
/// Every field is required, but any of them may be an empty string. We don't
/// interpret `publish_time` or `content` at all: the timestamp is whatever the
/// source gave us, and the content may be plain text or rich text.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "no_forwards_compatibility", serde(deny_unknown_fields))]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct WeiboData {
    /// The author's display name.
    pub nickname: String,
    /// A URL or other reference to the author's avatar image.
    pub avatar: String,
    /// When the post was published, as formatted by the source.
    pub publish_time: String,
    /// The client or app the post was sent from.
    pub source: String,
    /// The post body.
    pub content: String,
}

impl WeiboData {
    /// Create a new post.
    pub fn new<N, A, P, S, C>(
        nickname: N,
        avatar: A,
        publish_time: P,
        source: S,
        content: C,
    ) -> WeiboData
    where
        N: Into<String>,
        A: Into<String>,
        P: Into<String>,
        S: Into<String>,
        C: Into<String>,
    {
        WeiboData {
            nickname: nickname.into(),
            avatar: avatar.into(),
            publish_time: publish_time.into(),
            source: source.into(),
            content: content.into(),
        }
    }

    /// Parse a post from JSON represented as raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<WeiboData> {
        let value: Value =
            serde_json::from_slice(data).map_err(|err| Error::parse("weibo post", err))?;
        Self::from_value(&value)
    }

    /// Parse a post from a JSON string.
    pub fn from_str(data: &str) -> Result<WeiboData> {
        Self::from_bytes(data.as_bytes())
    }

    /// Convert an already-parsed JSON value into a post, checking that all
    /// five fields are present as strings.
    pub fn from_value(value: &Value) -> Result<WeiboData> {
        trace!("checking weibo post");
        let checked = object(value, "")
            .and_then(|obj| required_strings(obj, "", POST_FIELDS));
        if let Err(err) = checked {
            debug!("rejected weibo post: {}", err);
            return Err(err);
        }
        let post = WeiboData::deserialize(value)
            .map_err(|err| Error::parse("weibo post", err))?;
        debug!("accepted weibo post by {:?}", post.nickname);
        Ok(post)
    }

    /// Convert this post to a pretty-printed JSON string.
    pub fn to_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::serialize("weibo post", err))
    }

    /// Convert this post to a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|err| Error::serialize("weibo post", err))
    }
}

impl FromStr for WeiboData {
    type Err = Error;

    fn from_str(data: &str) -> Result<WeiboData> {
        WeiboData::from_str(data)
    }
}

#[test]
fn parse_fixtures() {
    let post = WeiboData::from_str(include_str!("../fixtures/posts/sample.json"))
        .expect("failed to parse example post");
    assert_eq!(post.nickname, "人民日报");
    assert_eq!(post.publish_time, "2024-03-08 09:30");
    assert_eq!(post.source, "微博 weibo.com");
}

#[test]
fn empty_strings_are_valid() {
    let post = WeiboData::from_str(include_str!("../fixtures/posts/empty.json"))
        .expect("empty strings should be accepted");
    assert_eq!(post, WeiboData::new("", "", "", "", ""));
}

#[test]
fn every_field_is_required() {
    for field in POST_FIELDS {
        let mut value = WeiboData::new("a", "b", "c", "d", "e").to_value().unwrap();
        value.as_object_mut().unwrap().remove(*field);
        let err = WeiboData::from_value(&value).unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }), "{}: {:?}", field, err);
        assert_eq!(err.path(), Some(*field));
    }
}

#[test]
fn null_and_non_string_fields_are_rejected() {
    let err = WeiboData::from_str(
        r#"{"nickname": null, "avatar": "", "publishTime": "", "source": "", "content": ""}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingField { .. }));
    assert_eq!(err.path(), Some("nickname"));

    let err = WeiboData::from_str(
        r#"{"nickname": "", "avatar": "", "publishTime": 1709861400, "source": "", "content": ""}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::WrongType { expected: "string", .. }));
    assert_eq!(err.path(), Some("publishTime"));
}

#[test]
fn round_trip() {
    let original = WeiboData::new(
        "小明",
        "https://example.com/a.jpg",
        "3分钟前",
        "iPhone客户端",
        "<a href=\"/n/小红\">@小红</a> 今天天气不错",
    );
    let json = original.to_string().unwrap();
    assert!(json.contains("\"publishTime\""));
    assert_eq!(WeiboData::from_str(&json).unwrap(), original);
    assert_eq!(json.parse::<WeiboData>().unwrap(), original);
}
