//! Slash command parsing for the terminal concierge.
//!
//! This module handles parsing of special commands that start with `/`,
//! letting visitors browse the studio sections and control the session
//! without sending messages to the remote model.

/// A parsed concierge command.
///
/// These commands are handled locally and are never sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Clear the conversation history.
    Clear,

    /// Show the solutions section.
    Solutions,

    /// Show the process section.
    Process,

    /// Show the team section.
    Team,

    /// Show the careers section.
    Careers,

    /// Submit an application for the numbered career listing.
    Apply(usize),

    /// Save the visit transcript to a file.
    Save(Option<String>),

    /// Display session statistics.
    Stats,

    /// Display help information.
    Help,

    /// Exit the concierge.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses visitor input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a valid command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use azmth::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/apply 2").is_some());
/// assert!(parse_command("What does AZMTH build?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "solutions" => ChatCommand::Solutions,
        "process" => ChatCommand::Process,
        "team" => ChatCommand::Team,
        "careers" => ChatCommand::Careers,
        "apply" => match argument {
            Some(arg) => match arg.parse::<usize>() {
                Ok(number) => ChatCommand::Apply(number),
                Err(_) => {
                    ChatCommand::Invalid("/apply expects a listing number".to_string())
                }
            },
            None => ChatCommand::Invalid("/apply requires a listing number".to_string()),
        },
        "save" => ChatCommand::Save(argument.map(|s| s.to_string())),
        "stats" | "status" => ChatCommand::Stats,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /solutions             Show the shipped product lines
  /process               Show the delivery process
  /team                  Show the unit
  /careers               Show open positions
  /apply <n>             Submit an application for listing n
  /save [file]           Save the visit transcript
  /clear                 Clear conversation history
  /stats                 Show session statistics
  /help                  Show this help message
  /quit                  Exit the concierge"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_sections() {
        assert_eq!(parse_command("/solutions"), Some(ChatCommand::Solutions));
        assert_eq!(parse_command("/process"), Some(ChatCommand::Process));
        assert_eq!(parse_command("/team"), Some(ChatCommand::Team));
        assert_eq!(parse_command("/careers"), Some(ChatCommand::Careers));
        assert_eq!(parse_command("/CAREERS"), Some(ChatCommand::Careers));
    }

    #[test]
    fn parse_apply() {
        assert_eq!(parse_command("/apply 2"), Some(ChatCommand::Apply(2)));
        assert_eq!(parse_command("/apply   1  "), Some(ChatCommand::Apply(1)));
        assert!(matches!(
            parse_command("/apply"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("requires")
        ));
        assert!(matches!(
            parse_command("/apply architect"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("expects")
        ));
    }

    #[test]
    fn parse_save() {
        assert_eq!(
            parse_command("/save visit.json"),
            Some(ChatCommand::Save(Some("visit.json".to_string())))
        );
        assert_eq!(parse_command("/save"), Some(ChatCommand::Save(None)));
    }

    #[test]
    fn parse_stats_and_help() {
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/status"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(
            parse_command("/model gemini-2.5-pro"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("Unknown command")
        ));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("What does AZMTH build?"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(!help.is_empty());
        assert!(help.contains("/quit"));
        assert!(help.contains("/apply"));
        assert!(help.contains("/careers"));
    }
}
