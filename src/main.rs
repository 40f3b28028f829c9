use std::process::ExitCode;

use tmpc::env::SystemEnv;
use tmpc::{Bootstrap, bootstrap, logging};

fn main() -> ExitCode {
    let env = SystemEnv;
    logging::init(&env);

    match bootstrap(std::env::args_os(), &env) {
        Ok(Bootstrap::Exit { message }) => {
            print!("{message}");
            ExitCode::SUCCESS
        }
        Ok(Bootstrap::Ready { settings, bindings }) => {
            tracing::info!(
                host = %settings.host,
                port = settings.port,
                "configuration resolved"
            );
            // TODO: connect and hand settings + bindings to the interface
            // event loop once it lands.
            let _ = (settings, bindings);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
