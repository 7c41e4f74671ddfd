// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use ht_scout::cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let notice = cli::run(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))?;
    if notice.is_error() {
        eprintln!("{notice}");
        std::process::exit(1);
    }
    println!("{notice}");
    Ok(())
}
