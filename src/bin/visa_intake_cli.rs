use visa_intake::cli::{run_cli, CommandError};
use visa_intake::init;

fn main() {
    init();

    match run_cli(std::env::args().skip(1).collect()) {
        Ok(()) => {}
        Err(CommandError::Reported) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
