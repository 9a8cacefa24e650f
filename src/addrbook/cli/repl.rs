use super::print::{print_messages, print_persons, print_tags};
use addrbook::error::Result;
use addrbook::logic::Logic;
use addrbook::store::Storage;
use log::info;
use std::io::{self, BufRead, Write};

const MESSAGE_WELCOME: &str = "Welcome to your Address Book!";
const MESSAGE_GOODBYE: &str = "Good bye!";
const PROMPT: &str = "Enter command: ";

pub struct ReplOptions {
    pub show_private_in_listings: bool,
}

/// Reads commands from `input` until `exit` or end of input.
pub fn run<S: Storage>(
    logic: &mut Logic<S>,
    input: impl BufRead,
    options: &ReplOptions,
) -> Result<()> {
    println!("{}", MESSAGE_WELCOME);
    println!("Using storage file : {}", logic.storage_location());

    let mut lines = input.lines();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            info!("end of input");
            break;
        };
        let line = line?;

        let result = logic.execute(&line)?;
        print_messages(&result.messages);
        if let Some(persons) = &result.listed_persons {
            print_persons(persons, options.show_private_in_listings);
        }
        if let Some(tags) = &result.listed_tags {
            print_tags(tags);
        }
        if result.exit_requested {
            break;
        }
    }

    println!("{}", MESSAGE_GOODBYE);
    Ok(())
}
