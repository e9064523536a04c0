use std::process::ExitCode;

fn main() -> ExitCode {
    tool_links::cli::run()
}
