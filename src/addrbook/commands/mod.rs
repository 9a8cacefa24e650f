//! # Commands
//!
//! One module per command, each exposing `run(...) -> Result<CmdResult>`
//! with its business logic and the `COMMAND_WORD` / `USAGE` strings the
//! parser and `help` use.
//!
//! [`Command`] is the parsed, already-validated form of one input line. It
//! is executed against a [`CommandContext`]: the address book plus the
//! listings the user last saw, which index-based commands resolve against.
//!
//! Domain failures come back as `Err`; the session controller turns them
//! into feedback. A command never prints.

use crate::book::{AddressBook, EditOp};
use crate::error::{AddressBookError, Result};
use crate::index::{DisplayIndex, DisplayPerson, DisplayTag, LastShown};
use crate::model::Person;
use std::collections::BTreeSet;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod list_tags;
pub mod rename_tag;
pub mod sort;
pub mod view;

pub const MESSAGE_PERSONS_LISTED_OVERVIEW: &str = "persons listed!";
pub const MESSAGE_TAGS_LISTED_OVERVIEW: &str = "tags listed!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced.
///
/// `listed_persons` / `listed_tags` are `Some` only when the command showed
/// a new listing; the session controller then replaces its last-shown state.
/// An empty `Some` listing is still a listing.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed_persons: Option<Vec<DisplayPerson>>,
    pub listed_tags: Option<Vec<DisplayTag>>,
    pub exit_requested: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_persons(mut self, persons: Vec<DisplayPerson>) -> Self {
        self.listed_persons = Some(persons);
        self
    }

    pub fn with_listed_tags(mut self, tags: Vec<DisplayTag>) -> Self {
        self.listed_tags = Some(tags);
        self
    }

    /// Feedback for a domain error.
    pub fn from_error(err: &AddressBookError) -> Self {
        Self::default().with_message(CmdMessage::error(err.to_string()))
    }

    /// All message contents, one per line.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The data a command operates on.
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,
    pub last_shown: &'a LastShown,
}

impl<'a> CommandContext<'a> {
    pub fn new(book: &'a mut AddressBook, last_shown: &'a LastShown) -> Self {
        Self { book, last_shown }
    }
}

/// A parsed command holding its validated arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { person: Person },
    Edit {
        index: DisplayIndex,
        ops: Vec<EditOp>,
    },
    Delete { index: DisplayIndex },
    Find { keywords: BTreeSet<String> },
    List,
    ListTag,
    RenameTag {
        index: DisplayIndex,
        new_name: String,
    },
    View { index: DisplayIndex },
    ViewAll { index: DisplayIndex },
    Clear,
    Sort,
    Exit,
    Help,
    Incorrect { message: String },
}

impl Command {
    pub fn execute(&self, ctx: CommandContext<'_>) -> Result<CmdResult> {
        match self {
            Command::Add { person } => add::run(ctx.book, person.clone()),
            Command::Edit { index, ops } => edit::run(ctx.book, ctx.last_shown, *index, ops),
            Command::Delete { index } => delete::run(ctx.book, ctx.last_shown, *index),
            Command::Find { keywords } => find::run(ctx.book, keywords),
            Command::List => list::run(ctx.book),
            Command::ListTag => list_tags::run(ctx.book),
            Command::RenameTag { index, new_name } => {
                rename_tag::run(ctx.book, ctx.last_shown, *index, new_name)
            }
            Command::View { index } => view::run(ctx.book, ctx.last_shown, *index, false),
            Command::ViewAll { index } => view::run(ctx.book, ctx.last_shown, *index, true),
            Command::Clear => clear::run(ctx.book),
            Command::Sort => sort::run(ctx.book),
            Command::Exit => exit::run(),
            Command::Help => help::run(),
            Command::Incorrect { message } => help::incorrect(message),
        }
    }

    /// The word that invokes this command, for logging.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add { .. } => add::COMMAND_WORD,
            Command::Edit { .. } => edit::COMMAND_WORD,
            Command::Delete { .. } => delete::COMMAND_WORD,
            Command::Find { .. } => find::COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::ListTag => list_tags::COMMAND_WORD,
            Command::RenameTag { .. } => rename_tag::COMMAND_WORD,
            Command::View { .. } => view::VIEW_WORD,
            Command::ViewAll { .. } => view::VIEW_ALL_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Sort => sort::COMMAND_WORD,
            Command::Exit => exit::COMMAND_WORD,
            Command::Help => help::COMMAND_WORD,
            Command::Incorrect { .. } => "incorrect",
        }
    }
}

pub(crate) fn persons_listed_summary(count: usize) -> String {
    format!("{} {}", count, MESSAGE_PERSONS_LISTED_OVERVIEW)
}

pub(crate) fn tags_listed_summary(count: usize) -> String {
    format!("{} {}", count, MESSAGE_TAGS_LISTED_OVERVIEW)
}
