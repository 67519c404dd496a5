mod command;
mod error;

use command::Command;
use log::debug;
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, IsTerminal, Read};

/// Installs a terminal logger whose level is taken from the `GRAPHX_LOG` environment variable,
/// defaulting to `warn`.
fn init_logger() {
    let level = std::env::var("GRAPHX_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    // the only failure is a logger having already been set
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

/// Runs one line of input, printing the result or reporting the error.
fn execute(line: &str) {
    let command = Command::parse(line);
    debug!("running {:?}", command);
    match command.run(line) {
        Ok(out) => println!("{}", out),
        Err(err) => err.report_to_stderr(),
    }
}

fn main() {
    init_logger();

    if !io::stdin().is_terminal() {
        // run every line of stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("{}", err);
            return;
        }

        input.lines()
            .filter(|line| !line.trim().is_empty())
            .for_each(execute);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return;
            },
        };

        fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
            let input = rl.readline("y = ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            execute(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
