use std::process::ExitCode;

use torc_cli::config::{Grammar, default_config_path, resolve};
use torc_cli::error::TorcError;
use torc_cli::{logging, output};

fn main() -> ExitCode {
    logging::init();

    let tokens: Vec<String> = std::env::args().skip(1).collect();

    // Error presentation must honor --json even when resolution itself is
    // what failed, so the output mode comes from a raw token pre-scan.
    let json = tokens.iter().any(|t| t == "--json" || t == "-j");

    let _ = ctrlc::set_handler(move || {
        output::print_error(&TorcError::Aborted, json);
        std::process::exit(i32::from(TorcError::Aborted.exit_code()));
    });

    let grammar = Grammar::standard();
    match resolve(&grammar, &tokens, &default_config_path()) {
        Ok(cfg) => {
            if cfg.flag("help") {
                println!("{}", output::USAGE);
                return ExitCode::SUCCESS;
            }
            if cfg.flag("version") {
                let version = option_env!("TORC_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
                println!("torc {version}");
                return ExitCode::SUCCESS;
            }
            match output::print_config(&cfg, cfg.flag("json")) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!("{e:#}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            output::print_error(&e, json);
            ExitCode::from(e.exit_code())
        }
    }
}
