use crate::book::{AddressBook, EditOp};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, LastShown};

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit:\n\
    Edits the details of the person identified by the index number used in the last person listing.\n\t\
    Fields may be given in any order and repeated; ta/ adds a tag, tr/ removes one.\n\t\
    Parameters: INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [ta/TAG]... [tr/TAG]...\n\t\
    Example: edit 1 n/John Doe p/98765432 ta/colleagues tr/friends";

pub fn run(
    book: &mut AddressBook,
    last_shown: &LastShown,
    index: DisplayIndex,
    ops: &[EditOp],
) -> Result<CmdResult> {
    let target = last_shown.person(index)?;
    let edited = book.edit_person(target, ops)?;
    let message = format!("Edited Person: {}", edited);
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}
