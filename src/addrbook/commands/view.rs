use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddressBookError, Result};
use crate::index::{DisplayIndex, LastShown};

pub const VIEW_WORD: &str = "view";
pub const VIEW_ALL_WORD: &str = "viewall";

pub const VIEW_USAGE: &str = "view:\n\
    Shows the non-private details of the person identified by the index number in the last person listing.\n\t\
    Parameters: INDEX\n\t\
    Example: view 1";

pub const VIEW_ALL_USAGE: &str = "viewall:\n\
    Shows all details of the person identified by the index number in the last person listing, private ones included.\n\t\
    Parameters: INDEX\n\t\
    Example: viewall 1";

/// `show_all` selects the privileged rendering used by `viewall`.
pub fn run(
    book: &AddressBook,
    last_shown: &LastShown,
    index: DisplayIndex,
    show_all: bool,
) -> Result<CmdResult> {
    let target = last_shown.person(index)?;
    if !book.contains(target) {
        return Err(AddressBookError::PersonNotFound);
    }

    let text = if show_all {
        target.as_text_show_all()
    } else {
        target.as_text_hide_private()
    };
    let message = format!("Viewing person: {}", text);
    Ok(CmdResult::default().with_message(CmdMessage::info(message)))
}
