mod cli_args;
mod input;
mod logger;
mod stdio_calculator;

use clap::Parser;
use cli_args::CliArgs;
use stdio_calculator::{StdioCalculator, EXIT_SUCCESS, EXIT_USAGE_ERROR};

fn main() {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Printing can only fail if the terminal went away, in which
            // case there's nobody to tell.
            let _ = err.print();
            let exit_code = if err.use_stderr() {
                EXIT_USAGE_ERROR
            } else {
                EXIT_SUCCESS
            };
            std::process::exit(exit_code);
        }
    };
    let config = args.create_config();
    if let Err(err) = logger::init(config.verbose) {
        eprintln!("Initializing logger failed: {}", err);
    }
    let calculator = StdioCalculator::new(config);
    let exit_code = calculator.run();
    std::process::exit(exit_code);
}
