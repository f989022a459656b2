use clap::Parser;
use pizzabot_cli::commands::cli;
use pizzabot_cli::{app, logging};
use pizzabot_core::api as core_api;

fn main() {
    let exit = match real_main() {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            app::exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

fn real_main() -> Result<i32, core_api::CliError> {
    let args = cli::Args::parse();
    let cfg = match args.config.as_deref() {
        Some(path) => core_api::load_from_path(path),
        None => core_api::load_default(),
    }
    .map_err(|e| core_api::CliError::Config(format!("{e:#}")))?;
    logging::init_tracing(&cfg.logging)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run_app(args, &cfg, &mut out)
}

fn report_error(e: &core_api::CliError) {
    if e.is_usage_error() {
        let stdout = std::io::stdout();
        if app::render_usage_error(e, &mut stdout.lock()).is_ok() {
            return;
        }
    }
    eprintln!("{e}");
}
