use std::process::ExitCode;
use vanity_pages::cli::Cli;
use vanity_pages::{logging, output, run};

fn main() -> ExitCode {
    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init_cli_logger(cli.verbose);

    match run::run(&cli.run_config()) {
        Ok(summary) => {
            output::print_run_output(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
