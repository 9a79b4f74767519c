use anyhow::{Context, Result};
use clap::Parser;
use tokio::fs::File;
use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing::info;

mod cli;
mod decoder;
mod logging;

use cli::{Cli, Command, EncodeCommand};
use decoder::{Mode, OutgoingMessage, decode};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    match cli.command {
        Command::Decode { message } => {
            let command = decode(&message).context("failed to decode message")?;
            println!("{command}");
        }
        Command::Stream { input, strict } => run_stream(input, strict).await?,
        Command::Encode(encode) => {
            let message = match encode {
                EncodeCommand::ImageRec {
                    image_id,
                    obstacle_id,
                } => OutgoingMessage::image_rec(&image_id, &obstacle_id),
                EncodeCommand::Location { x, y, d } => OutgoingMessage::location(x, y, d),
                EncodeCommand::Text { kind, value } => OutgoingMessage::text(&kind, &value),
            };
            println!("{}", message.to_json().context("failed to encode message")?);
        }
    }

    Ok(())
}

async fn run_stream(input: Option<std::path::PathBuf>, strict: bool) -> Result<()> {
    let mode = if strict { Mode::Strict } else { Mode::Lenient };
    let mut stdout = io::stdout();

    let summary = match input {
        Some(path) => {
            info!(path = %path.display(), "decoding messages from file");
            let file = File::open(&path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            decoder::stream::run(BufReader::new(file), &mut stdout, mode).await?
        }
        None => {
            info!("decoding messages from stdin");
            decoder::stream::run(BufReader::new(io::stdin()), &mut stdout, mode).await?
        }
    };
    stdout.flush().await?;

    info!(
        decoded = summary.decoded,
        rejected = summary.rejected,
        "stream finished"
    );
    Ok(())
}
