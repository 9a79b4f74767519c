//! Line-by-line decoding of a newline-framed message stream.
//!
//! The controller terminates every envelope with `\n`. Each line read from
//! the input is decoded and the command string is written to the output,
//! also `\n` terminated. Lines are read as raw bytes, so a line that is not
//! UTF-8 or is longer than [`MAX_LINE_LEN`] is rejected on its own without
//! ending the run.

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::decode::decode;
use super::protocol::MalformedMessage;

/// Longest accepted line in bytes, not counting the terminator.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// What to do with a line that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Log the line and carry on
    #[default]
    Lenient,
    /// Stop at the first malformed line
    Strict,
}

/// Counts for one run over a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamSummary {
    pub decoded: usize,
    pub rejected: usize,
}

/// Why a single line was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
    #[error("line exceeds {MAX_LINE_LEN} bytes")]
    TooLong,
    #[error(transparent)]
    Malformed(#[from] MalformedMessage),
}

enum Frame {
    Line,
    TooLong,
    Eof,
}

/// Decode every line of `reader` into `writer` until end of input.
///
/// Blank lines are skipped. I/O errors on either side end the run.
pub async fn run<R, W>(mut reader: R, mut writer: W, mode: Mode) -> Result<StreamSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = StreamSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        let frame = read_frame(&mut reader, &mut buf)
            .await
            .context("failed to read message line")?;

        let line = match frame {
            Frame::Eof => {
                debug!(line_no, "end of input");
                break;
            }
            Frame::TooLong => Err(LineError::TooLong),
            Frame::Line => std::str::from_utf8(&buf).map_err(|_| LineError::InvalidUtf8),
        };
        line_no += 1;

        let result = match line {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => decode(text.trim()).map_err(LineError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(command) => {
                writer
                    .write_all(format!("{command}\n").as_bytes())
                    .await
                    .context("failed to write decoded command")?;
                summary.decoded += 1;
            }
            Err(e) if mode == Mode::Strict => {
                return Err(e).with_context(|| format!("malformed message on line {line_no}"));
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping malformed message");
                summary.rejected += 1;
            }
        }
    }

    writer.flush().await.context("failed to flush output")?;
    Ok(summary)
}

/// Read the next line into `buf`, stopping after [`MAX_LINE_LEN`] bytes.
/// The rest of an overlong line is dropped in bounded chunks.
async fn read_frame<R>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Frame>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let limit = MAX_LINE_LEN as u64 + 1;

    let n = (&mut *reader).take(limit).read_until(b'\n', buf).await?;
    if n == 0 {
        return Ok(Frame::Eof);
    }
    if buf.len() <= MAX_LINE_LEN || buf.ends_with(b"\n") {
        return Ok(Frame::Line);
    }

    loop {
        buf.clear();
        let n = (&mut *reader).take(limit).read_until(b'\n', buf).await?;
        if n == 0 || buf.ends_with(b"\n") {
            break;
        }
    }
    buf.clear();
    Ok(Frame::TooLong)
}
