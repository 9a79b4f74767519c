//! Message types carried in the `{"type", "value"}` envelope.

use serde::Serialize;
use serde_json::{Value, json};

use super::constants::{TYPE_IMAGE_REC, TYPE_LOCATION};

/// A decoded envelope, one variant per message kind.
#[derive(PartialEq, Debug, Clone)]
pub enum IncomingMessage {
    ImageRec(ImageRec),
    Location(Location),
    /// Any other kind; the value is passed through as text
    Other { kind: String, value: String },
}

/// Image recognition result for one obstacle.
#[derive(PartialEq, Debug, Clone)]
pub struct ImageRec {
    /// Symbol token, or `"0"` when nothing was recognised
    pub image_id: String,
    pub obstacle_id: String,
}

/// Robot position update. All fields are kept as the text they arrived as.
#[derive(PartialEq, Debug, Clone)]
pub struct Location {
    pub x: String,
    pub y: String,
    /// Heading code, one of `0`, `2`, `4`, `6`
    pub d: String,
}

/// Envelope sent by the controller side.
///
/// Serialises to a single line of compact JSON:
///
/// ```text
/// {"type":"imageRec","value":{"image_id":"A","obstacle_id":"1"}}
/// ```
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct OutgoingMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Value,
}

impl OutgoingMessage {
    pub fn image_rec(image_id: &str, obstacle_id: &str) -> Self {
        Self {
            kind: TYPE_IMAGE_REC.to_string(),
            value: json!({ "image_id": image_id, "obstacle_id": obstacle_id }),
        }
    }

    /// Position update with numeric grid coordinates and heading code.
    pub fn location(x: i64, y: i64, d: i64) -> Self {
        Self {
            kind: TYPE_LOCATION.to_string(),
            value: json!({ "x": x, "y": y, "d": d }),
        }
    }

    /// Plain text message such as `general`, `error`, `mode` or `status`.
    pub fn text(kind: &str, value: &str) -> Self {
        Self {
            kind: kind.to_string(),
            value: Value::String(value.to_string()),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
