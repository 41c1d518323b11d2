use clap::Parser;
use collatz_tree::cli::{run, Cli, Destination};
use collatz_tree::logging::setup_logging;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(Destination::File(path)) => {
            println!("DOT file written to {}", path.display());
        }
        Ok(Destination::Stdout) => {
            eprintln!("DOT file written to stdout");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
