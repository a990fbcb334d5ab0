use clap::Parser;
use std::{fs::File, io::{self, BufRead, BufReader, BufWriter, Write}, path};
use anyhow::{Result, Context};
use log::{debug, info};
use cases::reader::CaseReader;

mod cases;
mod utils;

/// Count the distinct city names in each test case.
///
/// Input starts with the number of test cases. Each test case is a line
/// holding the number of entries, followed by that many city names, one
/// per line. One count is printed per test case.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Read from this file instead of standard input
    input: Option<path::PathBuf>,
}

// Writes one distinct count per test case and returns how many test cases
// were processed.
fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<usize> {
    let reader = CaseReader::new(input)?;
    let declared = reader.declared();
    let mut processed = 0;

    for case in reader {
        let case = case?;
        let distinct = case.distinct();
        debug!("Test case {}: {} entries, {} distinct", case.index, case.entries.len(), distinct);
        writeln!(output, "{}", distinct)?;
        processed += 1;
    }

    info!("Processed {} of {} declared test case(s)", processed, declared);
    Ok(processed)
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();
    let args = Cli::parse();

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    let result = match &args.input {
        Some(input_path) => {
            let file = File::open(input_path)
                .with_context(|| format!("Failed to open {}", input_path.display()))?;
            run(BufReader::new(file), &mut output)
        }
        None => run(io::stdin().lock(), &mut output),
    };

    // Counts for test cases before a failure still go out
    output.flush()?;
    result.map(|_| ())
}
