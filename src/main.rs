use std::process::ExitCode;

use jot::session::SessionError;

fn main() -> ExitCode {
    if let Err(err) = jot::run() {
        match err.downcast_ref::<SessionError>() {
            Some(warning) if warning.is_warning() => eprintln!("warning: {warning}"),
            _ => eprintln!("error: {err:#}"),
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
