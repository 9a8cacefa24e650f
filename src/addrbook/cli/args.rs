use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook")]
#[command(about = "Text-command address book", long_about = None)]
pub struct Cli {
    /// Storage file to use instead of the configured one (must end in .json)
    #[arg(value_name = "STORAGE_FILE_PATH")]
    pub storage_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
