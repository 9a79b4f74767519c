//! JSON envelope parsing for status messages.
//!
//! Every message is a JSON object of the form `{"type": ..., "value": ...}`.
//! For `imageRec` and `location` the value is a nested object, either inline
//! or as a string holding the object's JSON text. Fields are read leniently:
//!
//! - strings are taken verbatim
//! - numbers, booleans, `null`, objects and arrays become their compact
//!   JSON text
//! - only an absent key counts as missing
//!
//! so `{"x": 1}` and `{"x": "1"}` both give `x == "1"`.

use serde_json::{Map, Value};
use thiserror::Error;

use super::{constants::*, messages::*};

/// The single error kind for input that cannot be decoded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MalformedMessage {
    /// Input is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    /// Input is valid JSON but not an object
    #[error("message is not a JSON object")]
    NotAnObject,
    /// A field required by the message kind is absent
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// The `value` of an `imageRec`/`location` message is not an object
    #[error("value of `{kind}` message is not a JSON object")]
    InvalidPayload { kind: String },
}

/// Parse one raw message into an [`IncomingMessage`].
///
/// Surrounding whitespace, including a trailing line terminator, is ignored.
///
/// # Examples
///
/// ```text
/// parse(r#"{"type":"status","value":"ok"}"#)
/// // Ok(IncomingMessage::Other { kind: "status", value: "ok" })
/// ```
pub fn parse(raw: &str) -> Result<IncomingMessage, MalformedMessage> {
    let mut envelope = parse_object(raw.trim())?;
    let kind = required_text(&envelope, "type")?;

    match kind.as_str() {
        TYPE_IMAGE_REC => {
            let payload = take_payload(&mut envelope, &kind)?;
            Ok(IncomingMessage::ImageRec(ImageRec {
                image_id: required_text(&payload, "image_id")?,
                obstacle_id: required_text(&payload, "obstacle_id")?,
            }))
        }
        TYPE_LOCATION => {
            let payload = take_payload(&mut envelope, &kind)?;
            Ok(IncomingMessage::Location(Location {
                x: required_text(&payload, "x")?,
                y: required_text(&payload, "y")?,
                d: required_text(&payload, "d")?,
            }))
        }
        _ => {
            let value = required_text(&envelope, "value")?;
            Ok(IncomingMessage::Other { kind, value })
        }
    }
}

fn parse_object(text: &str) -> Result<Map<String, Value>, MalformedMessage> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(MalformedMessage::NotAnObject),
        Err(e) => Err(MalformedMessage::InvalidJson(e.to_string())),
    }
}

/// Remove the nested payload object from the envelope.
fn take_payload(
    envelope: &mut Map<String, Value>,
    kind: &str,
) -> Result<Map<String, Value>, MalformedMessage> {
    let invalid = || MalformedMessage::InvalidPayload {
        kind: kind.to_string(),
    };

    match envelope.remove("value") {
        None => Err(MalformedMessage::MissingField("value")),
        Some(Value::Object(map)) => Ok(map),
        Some(Value::String(text)) => parse_object(text.trim()).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

/// Read a field as text, coercing non-string JSON values.
fn required_text(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<String, MalformedMessage> {
    match map.get(field) {
        None => Err(MalformedMessage::MissingField(field)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Ok(other.to_string()),
    }
}
