use addrbook::config::AppConfig;
use addrbook::error::{AddressBookError, Result};
use addrbook::logic::Logic;
use addrbook::store::fs::JsonFileStorage;
use clap::Parser;
use directories::ProjectDirs;
use env_logger::Env;
use log::debug;
use std::io;
use std::path::PathBuf;

mod cli;
use cli::args::Cli;
use cli::repl::{self, ReplOptions};

const HOME_ENV: &str = "ADDRBOOK_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = data_dir()?;
    let config = AppConfig::load(&data_dir)?;
    let storage_path = cli
        .storage_file
        .unwrap_or_else(|| config.storage_path(&data_dir));
    debug!(
        "data dir {}, storage {}",
        data_dir.display(),
        storage_path.display()
    );

    let storage = JsonFileStorage::new(storage_path)?;
    let mut logic = Logic::new(storage)?;
    let options = ReplOptions {
        show_private_in_listings: config.show_private_in_listings,
    };
    repl::run(&mut logic, io::stdin().lock(), &options)
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let Some(dirs) = ProjectDirs::from("com", "addrbook", "addrbook") else {
        let err = io::Error::other("could not determine data directory");
        return Err(AddressBookError::Io(err));
    };
    Ok(dirs.data_dir().to_path_buf())
}
