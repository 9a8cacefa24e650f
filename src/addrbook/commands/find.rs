use crate::book::AddressBook;
use crate::commands::{persons_listed_summary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_persons;
use crate::model::Person;
use std::collections::{BTreeSet, HashSet};

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find:\n\
    Finds all persons whose non-private details or tags contain any of the specified keywords.\n\t\
    Keywords are matched as whole words, ignoring case.\n\t\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\t\
    Example: find alice bob charlie";

pub fn run(book: &AddressBook, keywords: &BTreeSet<String>) -> Result<CmdResult> {
    let wanted: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let matches: Vec<Person> = book
        .persons()
        .iter()
        .filter(|person| {
            let bag = searchable_tokens(person);
            wanted.iter().any(|k| bag.contains(k))
        })
        .cloned()
        .collect();

    let listed = index_persons(matches);
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(persons_listed_summary(listed.len())))
        .with_listed_persons(listed))
}

/// Lowercased words from the name, every non-private detail and every tag.
fn searchable_tokens(person: &Person) -> HashSet<String> {
    let mut tokens: HashSet<String> = HashSet::new();
    let mut add_words = |text: &str| {
        tokens.extend(text.split_whitespace().map(str::to_lowercase));
    };

    add_words(person.name.as_str());
    for detail in person.details() {
        if !detail.is_private() {
            add_words(detail.value());
        }
    }
    for tag in person.tags.iter() {
        add_words(tag.name());
    }
    tokens
}
