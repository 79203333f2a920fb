use clap::Parser;
use statcore::report::Report;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use workflow::config::RunConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print average, median, variance and standard deviation of a file of numbers"
)]
struct Args {
    /// Text file with one number per line
    input: PathBuf,
}

fn run(args: Args) -> anyhow::Result<()> {
    let runner = Runner::new(RunConfig::from_args(args.input));
    let stats = runner.execute()?;
    Report::write_to(&stats, io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
