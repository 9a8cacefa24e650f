use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, LastShown};

pub const COMMAND_WORD: &str = "renametag";

pub const USAGE: &str = "renametag:\n\
    Renames the tag identified by the index number used in the last tag listing, on every person holding it.\n\t\
    Parameters: INDEX NEW_TAG_NAME\n\t\
    Example: renametag 2 colleagues";

pub fn run(
    book: &mut AddressBook,
    last_shown: &LastShown,
    index: DisplayIndex,
    new_name: &str,
) -> Result<CmdResult> {
    let old = last_shown.tag(index)?.clone();
    let affected = book.rename_tag(&old, new_name)?;

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Renamed tag: {} to {}",
        old.name(),
        new_name.trim()
    )));
    result.add_message(CmdMessage::info(format!("{} persons updated", affected)));
    Ok(result)
}
