//! Fixed lookup data for the status message protocol.
//!
//! Message type tags identify the envelope kind. The symbol and heading
//! tables are static and shared by every decode call.

/// Image recognition result (controller -> display)
pub const TYPE_IMAGE_REC: &str = "imageRec";

/// Robot position and heading update (controller -> display)
pub const TYPE_LOCATION: &str = "location";

/// Image id reported when nothing was recognised
pub const IMAGE_NOT_RECOGNIZED_ID: &str = "0";

/// Output for an unrecognised image
pub const IMAGE_NOT_RECOGNIZED: &str = "Image Not Recognized";

/// Prefix of a recognised target command
pub const TARGET_PREFIX: &str = "TARGET";

/// Prefix of a robot position command
pub const ROBOT_PREFIX: &str = "ROBOT";

/// Symbol token -> numeric output code.
pub const SYMBOL_CODES: [(&str, &str); 30] = [
    ("1", "11"),
    ("2", "12"),
    ("3", "13"),
    ("4", "14"),
    ("5", "15"),
    ("6", "16"),
    ("7", "17"),
    ("8", "18"),
    ("9", "19"),
    ("A", "20"),
    ("B", "21"),
    ("C", "22"),
    ("D", "23"),
    ("E", "24"),
    ("F", "25"),
    ("G", "26"),
    ("H", "27"),
    ("S", "28"),
    ("T", "29"),
    ("U", "30"),
    ("V", "31"),
    ("W", "32"),
    ("X", "33"),
    ("Y", "34"),
    ("Z", "35"),
    ("UP", "36"),
    ("DOWN", "37"),
    ("RIGHT", "38"),
    ("LEFT", "39"),
    ("STOP", "40"),
];

/// Heading code -> compass letter.
pub const HEADINGS: [(&str, &str); 4] = [("0", "N"), ("2", "E"), ("4", "S"), ("6", "W")];

/// Look up the numeric output code for a symbol token.
pub fn symbol_code(token: &str) -> Option<&'static str> {
    SYMBOL_CODES
        .iter()
        .find(|(symbol, _)| *symbol == token)
        .map(|(_, code)| *code)
}

/// Look up the compass letter for a heading code.
pub fn heading_letter(code: &str) -> Option<&'static str> {
    HEADINGS
        .iter()
        .find(|(heading, _)| *heading == code)
        .map(|(_, letter)| *letter)
}
