//! Translation of status messages into short command strings.
//!
//! | Message                                   | Output                    |
//! |-------------------------------------------|---------------------------|
//! | `imageRec`, `image_id == "0"`             | `Image Not Recognized`    |
//! | `imageRec`, known token                   | `TARGET,<obstacle>,<code>`|
//! | `imageRec`, unknown token                 | `TARGET,<obstacle>,<id>`  |
//! | `location`                                | `ROBOT,<x>,<y>,<N/E/S/W>` |
//! | anything else                             | the value, unchanged      |

use tracing::{debug, warn};

use super::protocol::{
    IMAGE_NOT_RECOGNIZED, IMAGE_NOT_RECOGNIZED_ID, ImageRec, IncomingMessage, Location,
    MalformedMessage, ROBOT_PREFIX, TARGET_PREFIX, heading_letter, parse, symbol_code,
};

/// Decode one raw JSON message into its command string.
pub fn decode(raw: &str) -> Result<String, MalformedMessage> {
    let message = parse(raw)?;
    debug!(?message, "parsed status message");
    Ok(message.to_command())
}

impl IncomingMessage {
    pub fn to_command(&self) -> String {
        match self {
            IncomingMessage::ImageRec(image) => image.to_command(),
            IncomingMessage::Location(location) => location.to_command(),
            IncomingMessage::Other { value, .. } => value.clone(),
        }
    }
}

impl ImageRec {
    pub fn to_command(&self) -> String {
        if self.image_id == IMAGE_NOT_RECOGNIZED_ID {
            return IMAGE_NOT_RECOGNIZED.to_string();
        }

        // Unmapped tokens are passed through so the consumer can see them.
        let code = match symbol_code(&self.image_id) {
            Some(code) => code,
            None => {
                debug!(image_id = %self.image_id, "no symbol code for image id");
                self.image_id.as_str()
            }
        };

        format!("{},{},{}", TARGET_PREFIX, self.obstacle_id, code)
    }
}

impl Location {
    /// Unknown heading codes give an empty fourth field.
    pub fn to_command(&self) -> String {
        let heading = heading_letter(&self.d).unwrap_or_else(|| {
            warn!(d = %self.d, "unknown heading code, leaving heading empty");
            ""
        });

        format!("{},{},{},{}", ROBOT_PREFIX, self.x, self.y, heading)
    }
}
