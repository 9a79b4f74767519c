use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Decode robot status messages into short command strings.
#[derive(Debug, Parser)]
#[command(name = "status-decoder", version, about)]
pub struct Cli {
    /// Log filter, e.g. `info` or `status_decoder=debug`. RUST_LOG wins when set.
    #[arg(long, global = true, env = "STATUS_DECODER_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a single JSON message
    Decode {
        /// Raw message, e.g. '{"type":"status","value":"ok"}'
        message: String,
    },
    /// Decode newline-delimited messages from a file or stdin
    Stream {
        /// Read from this file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Stop at the first malformed line
        #[arg(long)]
        strict: bool,
    },
    /// Build a message envelope as the controller sends it
    #[command(subcommand)]
    Encode(EncodeCommand),
}

#[derive(Debug, Subcommand)]
pub enum EncodeCommand {
    /// Image recognition result
    ImageRec { image_id: String, obstacle_id: String },
    /// Robot position and heading code (0, 2, 4 or 6)
    Location { x: i64, y: i64, d: i64 },
    /// Plain text message such as general, error, mode or status
    Text { kind: String, value: String },
}
