use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use currency_rate::{Cli, ErrorLog, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let log = ErrorLog::new(root.join("error.log"));

    match run(&cli, &root) {
        Ok(path) => {
            println!("Saved: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log.error(&err);
            eprintln!("[ERROR] {err}");
            ExitCode::FAILURE
        }
    }
}
