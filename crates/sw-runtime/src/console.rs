//! # Operator Console
//!
//! Line-oriented stand-in for the host's connection layer and command
//! dispatcher.
//!
//! ```text
//! join <name> <identity>     run admission, print ADMIT (<path>) or REJECT: <message>
//! swhitelist + <player>      add a placeholder (alias: sw)
//! swhitelist - <player>      remove a name (alias: sw)
//! list                       print every entry
//! help                       print this summary
//! ```

use sw_01_identity_store::WhitelistDocument;
use sw_02_whitelist_gateway::{
    AdminCommand, AdmissionApi, AdmissionDecision, CommandParseError, WhitelistAdminApi,
};

pub const HELP: &str = "\
commands:
  join <name> <identity>   simulate a connection
  swhitelist + <player>    add a player (alias: sw)
  swhitelist - <player>    remove a player (alias: sw)
  list                     show the whitelist
  help                     show this message";

/// Handle one input line. `None` for blank input.
pub fn handle_line<G>(gateway: &G, line: &str) -> Option<String>
where
    G: AdmissionApi + WhitelistAdminApi,
{
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let reply = match word {
        "help" => HELP.to_string(),
        "list" => render_list(&gateway.list_players()),
        "join" => match rest.trim().rsplit_once(char::is_whitespace) {
            Some((name, identity)) => render_decision(&gateway.admit(name.trim(), identity)),
            None => "usage: join <name> <identity>".to_string(),
        },
        _ => match AdminCommand::parse(line) {
            Ok(command) => command.execute(gateway).text().to_string(),
            Err(CommandParseError::Usage) => CommandParseError::Usage.to_string(),
            Err(CommandParseError::UnknownRoot) => {
                format!("unknown command `{word}`, try `help`")
            }
        },
    };
    Some(reply)
}

fn render_decision(decision: &AdmissionDecision) -> String {
    match decision {
        AdmissionDecision::Admit(path) => format!("ADMIT ({path})"),
        AdmissionDecision::Reject(rejection) => format!("REJECT: {}", rejection.message),
    }
}

fn render_list(document: &WhitelistDocument) -> String {
    if document.is_empty() {
        return "whitelist is empty".to_string();
    }
    document
        .entries()
        .map(|(name, identity)| {
            if identity.is_empty() {
                format!("{name}: <pending>")
            } else {
                format!("{name}: {identity}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
