//! Console command parsing

use crate::state::Timer;

/// One parsed console command
///
/// Unknown input is carried as its own variant instead of an error: the
/// defined policy is that unrecognized tags change nothing, so the loop
/// answers with a hint and dispatches no action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `start` - set the running flag
    Start,
    /// `stop` - clear the running flag
    Stop,
    /// `add <name> <duration>` - append a timer
    Add(Timer),
    /// `status` - print the status report as JSON
    Status,
    /// `help` - list available commands
    Help,
    /// `quit` / `exit` - leave the loop
    Quit,
    /// Anything else, kept verbatim for the reply
    Unknown(String),
}

impl Command {
    /// Parse one input line into a command
    ///
    /// `add` takes the last token as the duration and everything before it as
    /// the name, so multi-word names need no quoting. The duration value
    /// itself is not validated beyond being numeric.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let mut tokens = trimmed.split_whitespace();

        match tokens.next() {
            Some("start") => Command::Start,
            Some("stop") => Command::Stop,
            Some("status") => Command::Status,
            Some("help") => Command::Help,
            Some("quit") | Some("exit") => Command::Quit,
            Some("add") => {
                let rest: Vec<&str> = tokens.collect();
                match rest.split_last() {
                    Some((last, name_parts)) if !name_parts.is_empty() => {
                        match last.parse::<f64>() {
                            Ok(duration) => {
                                Command::Add(Timer::new(name_parts.join(" "), duration))
                            }
                            Err(_) => Command::Unknown(trimmed.to_string()),
                        }
                    }
                    _ => Command::Unknown(trimmed.to_string()),
                }
            }
            _ => Command::Unknown(trimmed.to_string()),
        }
    }

    /// One-line usage summary for the `help` command
    pub fn usage() -> &'static str {
        "commands: start | stop | add <name> <duration> | status | help | quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse("start"), Command::Start);
        assert_eq!(Command::parse("  stop "), Command::Stop);
        assert_eq!(Command::parse("status"), Command::Status);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn parses_add_with_single_word_name() {
        assert_eq!(
            Command::parse("add Study 25"),
            Command::Add(Timer::new("Study", 25.0))
        );
    }

    #[test]
    fn parses_add_with_multi_word_name() {
        assert_eq!(
            Command::parse("add Deep Work 90"),
            Command::Add(Timer::new("Deep Work", 90.0))
        );
    }

    #[test]
    fn add_accepts_unvalidated_durations() {
        assert_eq!(
            Command::parse("add Pause -5"),
            Command::Add(Timer::new("Pause", -5.0))
        );
    }

    #[test]
    fn unrecognized_input_maps_to_unknown() {
        assert_eq!(
            Command::parse("launch"),
            Command::Unknown("launch".to_string())
        );
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
        assert_eq!(
            Command::parse("add NoDuration"),
            Command::Unknown("add NoDuration".to_string())
        );
        assert_eq!(
            Command::parse("add Study soon"),
            Command::Unknown("add Study soon".to_string())
        );
    }
}
