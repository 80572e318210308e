mod commands;
mod config;
mod error;
mod logging;
mod shell;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use vocab_core::{AppContext, JsonFileSource, JsonFileStore};

use crate::commands::Command;
use crate::config::Config;
use crate::error::CliResult;
use crate::shell::{Flow, Labels, Shell};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let log_guard = logging::init_tracing(&config);

    tracing::info!(
        words = %config.words_path.display(),
        store = %config.store_path().display(),
        "vocab trainer starting"
    );

    let code = match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "vocab trainer stopped");
            ExitCode::FAILURE
        }
    };

    drop(log_guard);
    code
}

fn run(config: &Config) -> CliResult<()> {
    let store = open_store(config);
    let source = JsonFileSource::new(&config.words_path);
    let (app, load_error) = AppContext::new(source, store, config.shuffle_seed);

    let mut shell = Shell::new(
        app,
        Labels {
            front: config.front_label.clone(),
            back: config.back_label.clone(),
        },
    );
    if let Some(err) = load_error {
        shell.notify(format!(
            "Failed to load words from {}: {err}",
            config.words_path.display()
        ));
    }

    let mut stdout = io::stdout().lock();
    shell.render(&mut stdout)?;
    prompt(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if shell.handle(Command::parse(&line)) == Flow::Quit {
            break;
        }
        writeln!(stdout)?;
        shell.render(&mut stdout)?;
        prompt(&mut stdout)?;
    }

    tracing::info!(
        hard_words = shell.app().hard_count(),
        screen = ?shell.screen(),
        "session finished"
    );
    Ok(())
}

/// The configured store, or an empty one when the file is unreadable
fn open_store(config: &Config) -> JsonFileStore {
    let store_path = config.store_path();
    JsonFileStore::open(&store_path).unwrap_or_else(|err| {
        tracing::warn!(
            path = %store_path.display(),
            error = %err,
            "hard-word store unreadable, starting with an empty one"
        );
        JsonFileStore::empty(&store_path)
    })
}

fn prompt<O: Write>(out: &mut O) -> CliResult<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
