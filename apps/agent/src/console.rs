//! Line-oriented speech channel.
//!
//! Each input line is one finished user turn. Lines starting with `/` are
//! control commands (`/start spanish`, `/skip`, `/stop`, `/quit`).

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use crate::error::Result;
use crate::session::{ControlCommand, SessionController};

#[derive(Debug, PartialEq, Eq)]
enum ConsoleInput<'a> {
    Quit,
    Command(&'a str),
    Utterance(&'a str),
}

impl<'a> ConsoleInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim().strip_prefix('/') {
            Some("quit" | "exit") => ConsoleInput::Quit,
            Some(command) => ConsoleInput::Command(command),
            None => ConsoleInput::Utterance(line),
        }
    }
}

/// Feed `input` to the session until EOF or `/quit`, writing replies to `output`.
pub async fn run_console<R, W>(
    session: &mut SessionController,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let reply = match ConsoleInput::parse(&line) {
            ConsoleInput::Quit => break,
            ConsoleInput::Command(text) => match text.parse::<ControlCommand>() {
                Ok(command) => session.on_control_command(command).await,
                Err(e) => {
                    warn!(error = %e, "Rejected control command");
                    Some(format!("[{e}]"))
                }
            },
            ConsoleInput::Utterance(text) => session.on_utterance(text).await,
        };

        if let Some(reply) = reply {
            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }
    }

    Ok(())
}
