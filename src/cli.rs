// src/cli.rs
use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;

use crate::config::consts::CONFIG_FILE;
use crate::config::options::AppOptions;
use crate::file::normalize_separators;
use crate::notice::Notice;
use crate::runner;
use crate::store::FileStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Capture { page: PathBuf },
    Export { out: Option<PathBuf> },
    Sync,
    Stats,
    Clear { confirmed: bool },
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub config: PathBuf,
    pub command: Command,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, Box<dyn Error + Send + Sync>> {
    let mut config = PathBuf::from(CONFIG_FILE);
    let mut command: Option<Command> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--config" | "-c" => {
                let v = args.next().ok_or("Missing value for --config")?;
                config = PathBuf::from(normalize_separators(&v));
            }
            "-h" | "--help" => command = Some(Command::Help),
            "capture" => {
                let v = args.next().ok_or("Missing page path for capture")?;
                command = Some(Command::Capture { page: PathBuf::from(normalize_separators(&v)) });
            }
            "export" => command = Some(Command::Export { out: None }),
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output directory")?;
                match command {
                    Some(Command::Export { ref mut out }) => *out = Some(PathBuf::from(normalize_separators(&v))),
                    _ => return Err("-o is only valid after `export`".into()),
                }
            }
            "sync" => command = Some(Command::Sync),
            "stats" => command = Some(Command::Stats),
            "clear" => command = Some(Command::Clear { confirmed: false }),
            "--yes" | "-y" => match command {
                Some(Command::Clear { ref mut confirmed }) => *confirmed = true,
                _ => return Err("--yes is only valid after `clear`".into()),
            },
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let command = command.ok_or("No command given (try --help)")?;
    Ok(Params { config, command })
}

/// Run one command and return its notice. Setup failures (bad args, bad
/// config) are errors; everything after that is reported as a notice.
pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<Notice, Box<dyn Error + Send + Sync>> {
    let params = parse_args(args)?;
    if params.command == Command::Help {
        return Ok(help());
    }

    let opts = AppOptions::load(&params.config)?;
    crate::log::init(&opts.store_dir);
    logf!("CLI: {:?} (store {})", params.command, opts.store_dir.display());

    let mut store = FileStore::new(&opts.store_dir);

    let notice = match params.command {
        Command::Capture { page } => runner::capture_page(&mut store, &page),
        Command::Export { out } => {
            let dir = out.unwrap_or_else(|| opts.export_dir.clone());
            runner::export(&store, &dir, Utc::now().date_naive())
        }
        Command::Sync => runner::sync(&opts.sync, &store),
        Command::Stats => match runner::stats(&store) {
            Ok(stats) => notice!(Info, "{} records, last update {}", stats.count, stats.last_update_display()),
            Err(e) => notice!(Error, "Cannot read stored data: {e}"),
        },
        Command::Clear { confirmed: false } => {
            notice!(Warning, "Refusing to clear without --yes")
        }
        Command::Clear { confirmed: true } => runner::clear(&mut store),
        Command::Help => help(),
    };
    Ok(notice)
}

fn help() -> Notice {
    notice!(Info, "{}", include_str!("cli_help.txt").trim_end())
}
