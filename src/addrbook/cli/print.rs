use addrbook::commands::{CmdMessage, MessageLevel};
use addrbook::index::{DisplayPerson, DisplayTag};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_persons(persons: &[DisplayPerson], show_private: bool) {
    let rows: Vec<(String, String)> = persons
        .iter()
        .map(|dp| {
            let text = if show_private {
                dp.person.as_text_show_all()
            } else {
                dp.person.as_text_hide_private()
            };
            (format!("{}.", dp.index), text)
        })
        .collect();
    print_rows(&rows);
}

pub(super) fn print_tags(tags: &[DisplayTag]) {
    let rows: Vec<(String, String)> = tags
        .iter()
        .map(|dt| (format!("{}.", dt.index), dt.tag.to_string()))
        .collect();
    print_rows(&rows);
}

fn print_rows(rows: &[(String, String)]) {
    let index_width = rows.iter().map(|(idx, _)| idx.width()).max().unwrap_or(0);
    for (idx, text) in rows {
        let padding = " ".repeat(index_width - idx.width());
        println!("\t{}{} {}", padding, idx.yellow(), text);
    }
}
