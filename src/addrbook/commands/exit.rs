use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "exit";

pub const USAGE: &str = "exit:\n\
    Exits the program.\n\t\
    Example: exit";

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default()
        .with_message(CmdMessage::info("Exiting Address Book as requested ..."));
    result.exit_requested = true;
    Ok(result)
}
