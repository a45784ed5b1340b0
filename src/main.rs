use std::process::ExitCode;

fn main() -> ExitCode {
    viminfo_timeline::logging::init();

    match viminfo_timeline::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
