use log::{error, info, warn};
use std::io;
use std::net::SocketAddr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::client::ClientSession;
use crate::protocol::responses::{
    COMMAND_TOO_LONG, GOODBYE, GREETING, UNKNOWN_COMMAND, format_current_user,
    format_response, format_result_code,
};
use crate::protocol::{Command, CommandResult, CommandStatus, parse_command};

/// Longest accepted line, line terminator included.
pub const MAX_COMMAND_LENGTH: usize = 512;

/// One line read from a client.
#[derive(Debug, PartialEq)]
pub enum LineRead {
    Eof,
    Line(Vec<u8>),
    /// Over `MAX_COMMAND_LENGTH`; `terminated` is false while the rest of the
    /// line is still unread.
    TooLong { terminated: bool },
}

/// Reads one line, buffering at most `MAX_COMMAND_LENGTH + 1` bytes.
pub async fn read_command_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let n = (&mut *reader)
        .take((MAX_COMMAND_LENGTH + 1) as u64)
        .read_until(b'\n', buf)
        .await?;

    if n == 0 {
        return Ok(LineRead::Eof);
    }

    if buf.len() > MAX_COMMAND_LENGTH {
        return Ok(LineRead::TooLong {
            terminated: buf.ends_with(b"\n"),
        });
    }

    Ok(LineRead::Line(std::mem::take(buf)))
}

/// Consumes input up to and including the next newline without buffering it.
pub async fn discard_line<R>(reader: &mut R) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(());
        }

        match available.iter().position(|&b| b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

/// Executes one parsed command against a client session.
pub fn handle_command(session: &mut ClientSession, command: &Command) -> CommandResult {
    match command {
        Command::LOGIN(form) => {
            let code = session.login(form.as_ref());
            CommandResult {
                status: CommandStatus::Success,
                message: Some(format_result_code(code)),
            }
        }
        Command::WHOAMI => CommandResult {
            status: CommandStatus::Success,
            message: Some(format_current_user(session.current_user().as_deref())),
        },
        Command::QUIT => CommandResult {
            status: CommandStatus::CloseConnection,
            message: Some(format_response(GOODBYE)),
        },
        Command::UNKNOWN => CommandResult {
            status: CommandStatus::Failure("Unknown command".into()),
            message: Some(format_response(UNKNOWN_COMMAND)),
        },
    }
}

/// Handles a client connection using Tokio async runtime.
///
/// - Greets the client, then reads bounded command lines with a BufReader.
/// - Dispatches each line through `handle_command` on the client's own session.
pub async fn handle_client(
    stream: TcpStream,
    client_addr: SocketAddr,
    mut session: ClientSession,
) -> Result<(), std::io::Error> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut buf = Vec::with_capacity(MAX_COMMAND_LENGTH + 1);

    write_half
        .write_all(format_response(GREETING).as_bytes())
        .await?;
    write_half.flush().await?;

    loop {
        match read_command_line(&mut reader, &mut buf).await {
            Ok(LineRead::Eof) => {
                info!("Connection closed by client {}", client_addr);
                break;
            }
            Ok(LineRead::TooLong { terminated }) => {
                warn!("Command from {} exceeds {} bytes", client_addr, MAX_COMMAND_LENGTH);
                write_half
                    .write_all(format_response(COMMAND_TOO_LONG).as_bytes())
                    .await?;
                write_half.flush().await?;
                if !terminated {
                    discard_line(&mut reader).await?;
                }
            }
            Ok(LineRead::Line(bytes)) => {
                let line = String::from_utf8_lossy(&bytes);
                let command = parse_command(line.trim_end_matches(['\r', '\n']));
                info!("Received from {}: {:?}", client_addr, &command);

                let result = handle_command(&mut session, &command);
                if let CommandStatus::Failure(reason) = &result.status {
                    warn!("Command from {} failed: {}", client_addr, reason);
                }
                if let Some(msg) = &result.message {
                    write_half.write_all(msg.as_bytes()).await?;
                }

                if result.status == CommandStatus::CloseConnection {
                    info!("Client {} requested to quit", client_addr);
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read from {}: {}", client_addr, e);
                break;
            }
        }
    }

    info!("Client {} disconnected", client_addr);
    Ok(())
}
