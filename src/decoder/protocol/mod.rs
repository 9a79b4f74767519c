mod constants;
mod messages;
mod parsing;

pub use constants::*;
pub use messages::*;
pub use parsing::{MalformedMessage, parse};
