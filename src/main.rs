//! Buildcreds - build-time credential provisioning.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use buildcreds::cli::output;
use buildcreds::cli::{execute, Cli};
use buildcreds::error::{ConfigError, Error, SubstituteError};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr: stdout of `read` is evaluated by a shell
    let filter = EnvFilter::try_from_env("BUILDCREDS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("buildcreds=debug")
        } else {
            EnvFilter::new("buildcreds=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let code = match execute(cli.command) {
        Ok(code) => code,
        Err(e) => {
            let suggestion = match &e {
                Error::Substitute(SubstituteError::Unresolved { variable, .. }) => {
                    Some(format!("export {} before running", variable))
                }
                Error::Config(ConfigError::MissingEnv(name)) => {
                    Some(format!("export {} before running", name))
                }
                Error::Config(ConfigError::UnknownItem { .. }) => {
                    Some("run: buildcreds requirements all".to_string())
                }
                _ => None,
            };

            output::error(&e.to_string());
            if let Some(hint) = suggestion {
                output::hint(&hint);
            }
            1
        }
    };

    std::process::exit(code);
}
