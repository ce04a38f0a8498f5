//! Interactive console surface
//!
//! This module is the external boundary of the store: it parses input lines
//! into commands and turns them into context operations.

pub mod command;
pub mod status;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::store::{ComponentScope, TimersContext};

pub use command::Command;
pub use status::StatusReport;

/// What the loop should do after one command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Print this text and keep going
    Reply(String),
    /// Keep going; the render task will show the new state
    Silent,
    /// Leave the loop
    Quit,
}

/// Apply one command to the store through its context
pub fn handle_command(ctx: &TimersContext, command: Command) -> CommandOutcome {
    match command {
        Command::Start => {
            info!("Start command - enabling the running flag");
            ctx.start_timers();
            CommandOutcome::Silent
        }
        Command::Stop => {
            info!("Stop command - disabling the running flag");
            ctx.stop_timers();
            CommandOutcome::Silent
        }
        Command::Add(timer) => {
            info!("Add command - appending timer '{}'", timer.name);
            ctx.add_timer(timer);
            CommandOutcome::Silent
        }
        Command::Status => match serde_json::to_string_pretty(&StatusReport::from_context(ctx)) {
            Ok(json) => CommandOutcome::Reply(json),
            Err(e) => {
                warn!("Failed to serialize status report: {}", e);
                CommandOutcome::Silent
            }
        },
        Command::Help => CommandOutcome::Reply(Command::usage().to_string()),
        Command::Quit => CommandOutcome::Quit,
        Command::Unknown(line) => {
            // Defined no-op policy for unrecognized tags: reply, dispatch nothing.
            CommandOutcome::Reply(format!("unknown command '{}'\n{}", line, Command::usage()))
        }
    }
}

/// Read commands from stdin until quit or end of input
pub async fn run(scope: ComponentScope) -> anyhow::Result<()> {
    let ctx = scope.timers_context()?;

    println!("{}", Command::usage());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match handle_command(&ctx, Command::parse(&line)) {
            CommandOutcome::Reply(text) => println!("{}", text),
            CommandOutcome::Silent => {}
            CommandOutcome::Quit => break,
        }
    }

    info!("Console loop finished");
    Ok(())
}
