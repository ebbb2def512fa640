//! Interactive chat loop.
//!
//! Reads one line at a time, turns it into a [`Command`], applies it to the
//! session and prints the outcome. Failures are printed and the loop keeps
//! going; only `/quit` or end of input ends the chat.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::cli::output::{
    OutputFormat, format_error, format_help, format_history, format_stats, format_turn,
};
use crate::completion::CompletionClient;
use crate::error::{Error, Result};
use crate::session::{Command, Reply, Session};

/// Prompt shown before each line of input in text mode.
const INPUT_PROMPT: &str = "> ";

/// Status line printed while a message is with the model.
const PROCESSING: &str = "Processing your request...";

/// Runs the chat loop until `/quit` or end of input.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails; chat
/// failures are reported inline.
pub async fn run_repl<R, W>(
    session: &mut Session,
    client: &dyn CompletionClient,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if format == OutputFormat::Text {
        writeln!(out, "{}", session.footer())?;
        writeln!(out, "Type /help for commands.\n")?;
    }

    let mut input = input;
    let mut raw = Vec::new();
    loop {
        if format == OutputFormat::Text {
            write!(out, "{INPUT_PROMPT}")?;
            out.flush()?;
        }

        let Some(line) = read_line(&mut input, &mut raw).await? else {
            debug!("end of input");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match line.parse::<Command>() {
            Ok(command) => {
                if matches!(command, Command::Send(_)) && format == OutputFormat::Text {
                    writeln!(out, "{PROCESSING}")?;
                    out.flush()?;
                }
                session.apply(command, client).await
            }
            Err(err) => Err(Error::from(err)),
        };

        match outcome {
            Ok(Reply::Quit) => break,
            Ok(reply) => write!(out, "{}", render_reply(session, &reply, format))?,
            Err(err) => match format {
                OutputFormat::Text => writeln!(out, "Error: {}", format_error(&err, format))?,
                OutputFormat::Json => writeln!(out, "{}", format_error(&err, format))?,
            },
        }
        out.flush()?;
    }

    Ok(())
}

/// Reads one line, without its terminator, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line still reaches the session instead of ending the chat.
async fn read_line<R>(input: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

fn render_reply(session: &Session, reply: &Reply, format: OutputFormat) -> String {
    let persona = session.settings().persona;
    let mut text = match reply {
        Reply::Turn(turn) => format_turn(turn, persona, format),
        Reply::Cleared => "Chat history cleared. Starting fresh.".to_string(),
        Reply::TopicStarted => "Memory cleared. Start a new conversation!".to_string(),
        Reply::Updated(message) => message.clone(),
        Reply::Stats(stats) => format_stats(stats, format),
        Reply::History(turns) => format_history(turns, persona, format),
        Reply::Help => format_help(),
        Reply::Quit => String::new(),
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
