//! # Parser
//!
//! Turns one line of user input into a [`Command`]. Parsing never fails:
//! malformed input becomes [`Command::Incorrect`] carrying the usage text of
//! the command the user was attempting, so the caller always has something
//! to execute.
//!
//! The first whitespace-delimited word picks the command, the rest of the
//! line goes to that command's argument parser. Unknown words show help.
//!
//! | Command | Arguments |
//! |---|---|
//! | `add` | `NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...` |
//! | `edit` | `INDEX (n/NAME \| p/PHONE \| e/EMAIL \| a/ADDRESS \| ta/TAG \| tr/TAG)...` |
//! | `delete`, `view`, `viewall` | `INDEX` |
//! | `find` | `KEYWORD [MORE_KEYWORDS]...` |
//! | `renametag` | `INDEX NEW_TAG_NAME` |
//! | `list`, `listtag`, `clear`, `sort`, `exit`, `help` | ignored |

pub mod prefix;

use crate::book::EditOp;
use crate::commands::{self, Command};
use crate::index::DisplayIndex;
use crate::model::{ContactDetail, DetailKind, Name, Person};
use crate::tags::{Tag, TagSet};
use prefix::tokenize;
use std::collections::BTreeSet;
use std::str::FromStr;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";

const ADD_PREFIXES: &[&str] = &["p", "pp", "e", "pe", "a", "pa", "t"];
const EDIT_PREFIXES: &[&str] = &["n", "p", "e", "a", "ta", "tr"];

/// Parses a raw input line.
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (trimmed, ""),
    };

    match word {
        "" => invalid_format(commands::help::USAGE),
        commands::add::COMMAND_WORD => parse_add(args),
        commands::edit::COMMAND_WORD => parse_edit(args),
        commands::delete::COMMAND_WORD => {
            parse_index_command(args, commands::delete::USAGE, |index| Command::Delete {
                index,
            })
        }
        commands::view::VIEW_WORD => {
            parse_index_command(args, commands::view::VIEW_USAGE, |index| Command::View {
                index,
            })
        }
        commands::view::VIEW_ALL_WORD => {
            parse_index_command(args, commands::view::VIEW_ALL_USAGE, |index| {
                Command::ViewAll { index }
            })
        }
        commands::find::COMMAND_WORD => parse_find(args),
        commands::rename_tag::COMMAND_WORD => parse_rename_tag(args),
        commands::list::COMMAND_WORD => Command::List,
        commands::list_tags::COMMAND_WORD => Command::ListTag,
        commands::clear::COMMAND_WORD => Command::Clear,
        commands::sort::COMMAND_WORD => Command::Sort,
        commands::exit::COMMAND_WORD => Command::Exit,
        _ => Command::Help,
    }
}

fn invalid_format(usage: &str) -> Command {
    Command::Incorrect {
        message: format!("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, usage),
    }
}

fn parse_index_command(
    args: &str,
    usage: &str,
    build: impl FnOnce(DisplayIndex) -> Command,
) -> Command {
    match DisplayIndex::from_str(args) {
        Ok(index) => build(index),
        Err(_) => invalid_format(usage),
    }
}

fn parse_add(args: &str) -> Command {
    let usage = commands::add::USAGE;
    let Ok(tokens) = tokenize(args, ADD_PREFIXES) else {
        return invalid_format(usage);
    };
    if tokens.preamble.is_empty() {
        return invalid_format(usage);
    }

    // Phone, email and address must each appear once, in that order, before any tag.
    let mut fields = tokens.fields.into_iter();
    let mut next_detail = |kind: DetailKind| -> Option<(String, bool)> {
        let (prefix, value) = fields.next()?;
        let (public, private) = match kind {
            DetailKind::Phone => ("p", "pp"),
            DetailKind::Email => ("e", "pe"),
            DetailKind::Address => ("a", "pa"),
        };
        match prefix {
            p if p == public => Some((value, false)),
            p if p == private => Some((value, true)),
            _ => None,
        }
    };
    let (Some(phone), Some(email), Some(address)) = (
        next_detail(DetailKind::Phone),
        next_detail(DetailKind::Email),
        next_detail(DetailKind::Address),
    ) else {
        return invalid_format(usage);
    };

    let mut tag_values = Vec::new();
    for (prefix, value) in fields {
        if prefix != "t" {
            return invalid_format(usage);
        }
        tag_values.push(value);
    }

    match build_person(&tokens.preamble, phone, email, address, &tag_values) {
        Ok(person) => Command::Add { person },
        Err(message) => Command::Incorrect { message },
    }
}

fn build_person(
    name: &str,
    phone: (String, bool),
    email: (String, bool),
    address: (String, bool),
    tags: &[String],
) -> Result<Person, String> {
    let name = Name::new(name).map_err(|e| e.to_string())?;
    let phone = ContactDetail::phone(phone.0, phone.1).map_err(|e| e.to_string())?;
    let email = ContactDetail::email(email.0, email.1).map_err(|e| e.to_string())?;
    let address = ContactDetail::address(address.0, address.1).map_err(|e| e.to_string())?;
    let tags = tags
        .iter()
        .map(|t| Tag::new(t.as_str()))
        .collect::<Result<TagSet, _>>()
        .map_err(|e| e.to_string())?;
    Ok(Person::new(name, phone, email, address, tags))
}

fn parse_edit(args: &str) -> Command {
    let usage = commands::edit::USAGE;
    let Ok(tokens) = tokenize(args, EDIT_PREFIXES) else {
        return invalid_format(usage);
    };
    let Ok(index) = DisplayIndex::from_str(&tokens.preamble) else {
        return invalid_format(usage);
    };
    if tokens.fields.is_empty() {
        return invalid_format(usage);
    }

    let ops = tokens
        .fields
        .into_iter()
        .map(|(prefix, value)| match prefix {
            "n" => EditOp::Name(value),
            "p" => EditOp::Phone(value),
            "e" => EditOp::Email(value),
            "a" => EditOp::Address(value),
            "ta" => EditOp::AddTag(value),
            _ => EditOp::RemoveTag(value),
        })
        .collect();

    Command::Edit { index, ops }
}

fn parse_find(args: &str) -> Command {
    let keywords: BTreeSet<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return invalid_format(commands::find::USAGE);
    }
    Command::Find { keywords }
}

fn parse_rename_tag(args: &str) -> Command {
    let usage = commands::rename_tag::USAGE;
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [index, new_name] = parts.as_slice() else {
        return invalid_format(usage);
    };
    match DisplayIndex::from_str(index) {
        Ok(index) => Command::RenameTag {
            index,
            new_name: new_name.to_string(),
        },
        Err(_) => invalid_format(usage),
    }
}
