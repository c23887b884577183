use std::process::ExitCode;

use file_renamer::RenamerError;
use file_renamer::cli;
use file_renamer::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            let code = e.downcast_ref::<RenamerError>().map_or(1, RenamerError::code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
