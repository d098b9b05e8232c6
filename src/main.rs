use std::process::ExitCode;

fn main() -> ExitCode {
    timeline_e2e::entry::run()
}
