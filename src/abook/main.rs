use abook::api::AbookApi;
use abook::config::AbookConfig;
use abook::error::{AbookError, Result};
use abook::repl::{self, Reply, ReplyLevel};
use abook::store::fs::FileStore;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let store = FileStore::new(data_file_path()?);
    let mut api = AbookApi::open(store)?;

    println!("{}", repl::GREETING);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", repl::PROMPT);
        io::stdout().flush().map_err(AbookError::Io)?;

        let Some(line) = lines.next() else {
            // end of input behaves like `exit`, minus the farewell
            api.persist()?;
            break;
        };
        let line = line.map_err(AbookError::Io)?;

        let (command, args) = repl::parse_input(&line);
        let reply = repl::dispatch(&mut api, &command, &args);
        print_reply(&reply);

        if reply.terminate {
            api.persist()?;
            break;
        }
    }

    Ok(())
}

/// Snapshot location: env override first (used by the integration tests),
/// then the config file, then the platform data dir.
fn data_file_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("ABOOK_DATA_FILE") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs =
        ProjectDirs::from("com", "abook", "abook").expect("Could not determine config dir");
    let config = AbookConfig::load(proj_dirs.config_dir()).unwrap_or_default();
    Ok(match config.data_file {
        Some(path) => path,
        None => proj_dirs.data_dir().join("addressbook.json"),
    })
}

fn print_reply(reply: &Reply) {
    match reply.level {
        ReplyLevel::Info => println!("{}", reply.text),
        ReplyLevel::Success => println!("{}", reply.text.green()),
        ReplyLevel::Error => println!("{}", reply.text.red()),
    }
}
