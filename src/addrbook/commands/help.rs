use crate::commands::{
    add, clear, delete, edit, exit, find, list, list_tags, rename_tag, sort, view, CmdMessage,
    CmdResult,
};
use crate::error::Result;

pub const COMMAND_WORD: &str = "help";

pub const USAGE: &str = "help:\n\
    Shows program usage instructions.\n\t\
    Example: help";

const ALL_USAGES: &[&str] = &[
    add::USAGE,
    delete::USAGE,
    edit::USAGE,
    find::USAGE,
    list::USAGE,
    list_tags::USAGE,
    rename_tag::USAGE,
    view::VIEW_USAGE,
    view::VIEW_ALL_USAGE,
    sort::USAGE,
    clear::USAGE,
    USAGE,
    exit::USAGE,
];

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::info(ALL_USAGES.join("\n"))))
}

/// Result for input that could not be parsed. Never touches the book.
pub fn incorrect(message: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::warning(message)))
}
