use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear:\n\
    Clears the address book permanently.\n\t\
    Example: clear";

pub fn run(book: &mut AddressBook) -> Result<CmdResult> {
    book.clear();
    Ok(CmdResult::default().with_message(CmdMessage::success("Address book has been cleared!")))
}
