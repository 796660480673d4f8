//! Module `commands`
//!
//! Defines the commands accepted by the login server and the result
//! structures produced when they are executed.

use crate::auth::UserForm;

/// A command parsed from one client line.
///
/// `LOGIN` carries `None` when the username or password is missing; the
/// controller reports that as `ERROR`.
#[derive(Debug, PartialEq)]
pub enum Command {
    LOGIN(Option<UserForm>),
    WHOAMI,
    QUIT,
    UNKNOWN,
}

/// Outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Status plus the reply line to send back.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Parses a raw line received from a client into a `Command`.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "LOGIN" => Command::LOGIN(parse_form(arg)),
        "WHOAMI" => Command::WHOAMI,
        "QUIT" | "Q" => Command::QUIT,
        _ => Command::UNKNOWN,
    }
}

/// `<username> <password>`; the password is the rest of the line.
fn parse_form(arg: &str) -> Option<UserForm> {
    let mut parts = arg.splitn(2, char::is_whitespace);
    let username = parts.next().filter(|u| !u.is_empty())?;
    let password = parts.next().map(str::trim).filter(|p| !p.is_empty())?;
    Some(UserForm::new(username, password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_credentials() {
        assert_eq!(
            parse_command("LOGIN alice alice123\r\n"),
            Command::LOGIN(Some(UserForm::new("alice", "alice123")))
        );
    }

    #[test]
    fn test_login_is_case_insensitive() {
        assert_eq!(
            parse_command("login bob bob123"),
            Command::LOGIN(Some(UserForm::new("bob", "bob123")))
        );
    }

    #[test]
    fn test_password_keeps_inner_spaces() {
        assert_eq!(
            parse_command("LOGIN carol correct horse"),
            Command::LOGIN(Some(UserForm::new("carol", "correct horse")))
        );
    }

    #[test]
    fn test_incomplete_login_has_no_form() {
        assert_eq!(parse_command("LOGIN"), Command::LOGIN(None));
        assert_eq!(parse_command("LOGIN alice"), Command::LOGIN(None));
        assert_eq!(parse_command("LOGIN alice   "), Command::LOGIN(None));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(parse_command("WHOAMI"), Command::WHOAMI);
        assert_eq!(parse_command("quit"), Command::QUIT);
        assert_eq!(parse_command("Q"), Command::QUIT);
        assert_eq!(parse_command("RETR file.txt"), Command::UNKNOWN);
        assert_eq!(parse_command(""), Command::UNKNOWN);
    }
}
