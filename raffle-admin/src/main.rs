mod cli;

use clap::Parser;
use cli::Cli;
use raffle_admin::{
    application::{self, ApplicationEnv},
    error::Error,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let args = Cli::parse();

    let env = ApplicationEnv::parse()?;

    let tracing_guard = application::setup_tracing(&env)?;

    let state = application::create_state(&env)?;

    if let Err(err) = cli::run(&state, args.command).await {
        eprintln!("{}", state.error_handler.get_error_message(&err));
        if let Error::Validation(errors) = &err {
            for (field, field_errors) in errors.fields() {
                for field_error in field_errors {
                    eprintln!("  {field}: {field_error}");
                }
            }
        }
        drop(tracing_guard);
        std::process::exit(1);
    }

    Ok(())
}
