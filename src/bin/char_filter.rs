//! char-filter - remove a set of characters from a text file.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use filter_fetch::{
    cli::{init_logging, FilterArgs},
    error::{exit_codes, Error, Result},
    filter::{filter_file, ExclusionSet},
};

const PROMPT: &str = "Enter symbols to delete(no separation): ";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match FilterArgs::try_parse_input(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => return report(&e),
    };
    init_logging(args.debug);

    match run(args).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => report(&e),
    }
}

fn report(err: &Error) -> ExitCode {
    println!("Error occured: {}", err);
    ExitCode::from(err.exit_code() as u8)
}

async fn run(args: FilterArgs) -> Result<()> {
    let symbols = match args.symbols {
        Some(symbols) => ExclusionSet::from_line(&symbols),
        None => prompt_symbols()?,
    };

    filter_file(&args.filename, &symbols).await?;
    Ok(())
}

/// Ask for the symbols on stdin, one line, no separators.
fn prompt_symbols() -> Result<ExclusionSet> {
    print!("{}", PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(Error::Input(
            "No symbols entered: standard input was closed".into(),
        ));
    }

    Ok(ExclusionSet::from_line(&line))
}
