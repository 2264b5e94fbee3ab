//! Administrative Command Adapter
//!
//! Text syntax of the administrative surface:
//!
//! ```text
//! swhitelist + <player>     add a pending placeholder
//! swhitelist - <player>     remove a name
//! sw + <player>             alias of swhitelist
//! ```
//!
//! `<player>` is the rest of the line and may contain spaces. The capability
//! check (permission node `swhitelist.whitelist`) belongs to the host and
//! happens before [`AdminCommand::execute`] is reached.

use crate::domain::AdminError;
use crate::ports::inbound::WhitelistAdminApi;
use thiserror::Error;

/// Command root.
pub const COMMAND_ROOT: &str = "swhitelist";

/// Short alias redirecting to [`COMMAND_ROOT`].
pub const COMMAND_ALIAS: &str = "sw";

/// A parsed administrative command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    Add(String),
    Remove(String),
}

/// The line is not a whitelist command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    /// First word is neither `swhitelist` nor `sw`.
    #[error("not a whitelist command")]
    UnknownRoot,

    /// Root matched but the rest is not `+ <player>` or `- <player>`.
    #[error("usage: swhitelist <+|-> <player>")]
    Usage,
}

/// Acknowledgment shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Success(String),
    Failure(String),
}

impl CommandReply {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandReply::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            CommandReply::Success(text) | CommandReply::Failure(text) => text,
        }
    }
}

impl AdminCommand {
    /// Parse one command line. A leading `/` is accepted.
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);

        let (root, rest) = split_word(line);
        if root != COMMAND_ROOT && root != COMMAND_ALIAS {
            return Err(CommandParseError::UnknownRoot);
        }

        let (op, player) = split_word(rest);
        let player = player.trim();
        if player.is_empty() {
            return Err(CommandParseError::Usage);
        }

        match op {
            "+" => Ok(AdminCommand::Add(player.to_string())),
            "-" => Ok(AdminCommand::Remove(player.to_string())),
            _ => Err(CommandParseError::Usage),
        }
    }

    /// Run the command against the administrative API.
    pub fn execute(&self, api: &dyn WhitelistAdminApi) -> CommandReply {
        match self {
            AdminCommand::Add(player) => match api.add_player(player) {
                Ok(()) => CommandReply::Success(format!("Added {player} to the whitelist")),
                Err(e) => CommandReply::Failure(failure_text(&e)),
            },
            AdminCommand::Remove(player) => match api.remove_player(player) {
                Ok(()) => CommandReply::Success(format!("Removed {player} from the whitelist")),
                Err(e) => CommandReply::Failure(failure_text(&e)),
            },
        }
    }
}

fn failure_text(error: &AdminError) -> String {
    match error {
        AdminError::AlreadyWhitelisted(name) => format!("{name} is already whitelisted"),
        AdminError::NotWhitelisted(name) => format!("{name} is not whitelisted"),
        AdminError::InvalidName(e) => format!("Invalid player name: {e}"),
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], &input[at..]),
        None => (input, ""),
    }
}
