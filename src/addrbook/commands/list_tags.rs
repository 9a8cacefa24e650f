use crate::book::AddressBook;
use crate::commands::{tags_listed_summary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_tags;

pub const COMMAND_WORD: &str = "listtag";

pub const USAGE: &str = "listtag:\n\
    Displays every tag in the address book as a list with index numbers.\n\t\
    Example: listtag";

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let listed = index_tags(book.all_tags().to_vec());
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(tags_listed_summary(listed.len())))
        .with_listed_tags(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{person, person_with_tags, BookFixture};

    #[test]
    fn lists_distinct_tags_by_name() {
        let book = BookFixture::new()
            .with(person_with_tags("A", &["work", "gym"]))
            .with(person_with_tags("B", &["gym"]))
            .with(person("C"))
            .book;
        let result = run(&book).unwrap();
        let names: Vec<(usize, String)> = result
            .listed_tags
            .as_ref()
            .unwrap()
            .iter()
            .map(|dt| (dt.index.get(), dt.tag.name().to_string()))
            .collect();

        assert_eq!(names, vec![(1, "gym".to_string()), (2, "work".to_string())]);
        assert_eq!(result.feedback(), "2 tags listed!");
        assert!(result.listed_persons.is_none());
    }
}
