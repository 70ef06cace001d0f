//! Line parsing and dispatch for the interactive session.
//!
//! The session is a two-state loop: running until `close`/`exit`, then
//! terminated. Each turn reads one line, resolves the first token to a
//! [`Command`], and produces a [`Reply`]. Built-ins (`hello`, `close`,
//! `exit`) are resolved before the handler commands; every handler error is
//! translated here, once, into its fixed user-facing message, so nothing
//! propagates to the loop itself.

use crate::api::AbookApi;
use crate::error::AbookError;
use crate::store::SnapshotStore;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Goodbye!";
const HELLO_REPLY: &str = "How can I help you?";
const INVALID_COMMAND: &str = "Invalid command.";

/// User commands, resolved from the first input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Close,
    Exit,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
}

impl Command {
    pub fn resolve(token: &str) -> Option<Self> {
        match token {
            "hello" => Some(Self::Hello),
            "close" => Some(Self::Close),
            "exit" => Some(Self::Exit),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "add-birthday" => Some(Self::AddBirthday),
            "show-birthday" => Some(Self::ShowBirthday),
            "birthdays" => Some(Self::Birthdays),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyLevel {
    Info,
    Success,
    Error,
}

/// One turn's output, plus whether the session should end after printing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub level: ReplyLevel,
    pub text: String,
    pub terminate: bool,
}

impl Reply {
    fn info(text: impl Into<String>) -> Self {
        Self {
            level: ReplyLevel::Info,
            text: text.into(),
            terminate: false,
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            level: ReplyLevel::Success,
            text: text.into(),
            terminate: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            level: ReplyLevel::Error,
            text: text.into(),
            terminate: false,
        }
    }

    fn farewell() -> Self {
        Self {
            level: ReplyLevel::Info,
            text: FAREWELL.to_string(),
            terminate: true,
        }
    }
}

/// Splits a raw input line into a lowercased command token and its args.
/// Empty or blank input yields an empty command token.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let lowered = line.trim().to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let command = tokens.next().unwrap_or("").to_string();
    let args = tokens.map(str::to_string).collect();
    (command, args)
}

/// Runs one command against the API. Never fails: unknown commands and
/// handler errors both come back as error-level replies.
pub fn dispatch<S: SnapshotStore>(api: &mut AbookApi<S>, command: &str, args: &[String]) -> Reply {
    let Some(command) = Command::resolve(command) else {
        return Reply::error(INVALID_COMMAND);
    };

    let outcome = match command {
        Command::Hello => return Reply::info(HELLO_REPLY),
        Command::Close | Command::Exit => return Reply::farewell(),
        Command::Add => api.add_contact(args),
        Command::Change => api.change_contact(args),
        Command::Phone => api.get_contact(args),
        Command::All => api.all_contacts(),
        Command::AddBirthday => api.add_birthday(args),
        Command::ShowBirthday => api.show_birthday(args),
        Command::Birthdays => api.upcoming_birthdays(),
    };

    match outcome {
        Ok(text) => Reply::success(text),
        Err(e) => Reply::error(translate(&e)),
    }
}

/// Maps each error kind to the fixed message the session prints.
fn translate(error: &AbookError) -> String {
    match error {
        AbookError::Validation(_) | AbookError::ArgumentCount { .. } => {
            "Give me name and phone please.".to_string()
        }
        AbookError::ContactNotFound(_) => "Contact does not exist.".to_string(),
        AbookError::MissingArguments => "Enter user name and phone.".to_string(),
        other => format!("Error occurred: {}, {}", other.kind(), other),
    }
}
