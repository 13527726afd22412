use std::process::ExitCode;

fn main() -> ExitCode {
    sendreq::app::run()
}
