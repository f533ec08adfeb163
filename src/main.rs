use std::process::ExitCode;

fn main() -> ExitCode {
    pda::cli::run()
}
