//! CLI application layer: resolves the output format, runs the planner and renders
//! the result or the error with usage help.
use std::io::Write;

use crate::commands::cli::Args;
use pizzabot_core::api as core_api;

pub const USAGE: &str = "Usage\n./pizzabot \"5x5 (1, 2) (3, 4)\"";

#[tracing::instrument(name = "cli.run_app", skip(args, cfg, out))]
pub fn run_app<W: Write>(
    args: Args,
    cfg: &core_api::AppConfig,
    out: &mut W,
) -> Result<i32, core_api::CliError> {
    let format = args
        .format
        .map(core_api::OutputFormat::from)
        .unwrap_or(cfg.output.format);
    tracing::debug!("output format: {}", format);

    let input = args
        .route_input()
        .ok_or(core_api::CliError::MissingInput)?;
    if args.input.len() > 1 {
        tracing::debug!("ignoring {} extra argument(s)", args.input.len() - 1);
    }
    let plan = core_api::plan_route(input)?;

    render_plan(&plan, format, out)?;
    Ok(0)
}

pub fn render_plan<W: Write>(
    plan: &core_api::RoutePlan,
    format: core_api::OutputFormat,
    out: &mut W,
) -> std::io::Result<()> {
    match format {
        core_api::OutputFormat::Text => writeln!(out, "{}", plan.route)?,
        core_api::OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &plan.report())?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Writes `Error: <message>` followed by the usage block.
pub fn render_usage_error<W: Write>(
    err: &core_api::CliError,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "Error: {err}")?;
    writeln!(out, "{USAGE}")?;
    out.flush()
}

pub fn exit_code_for_error(e: &core_api::CliError) -> i32 {
    // 0: success
    // 2: input parse error (missing input, structure, grid format)
    // 3: integer validation error
    // 4: point outside grid
    // 11: config error
    // 20: IO error
    match e {
        core_api::CliError::Route(re) => i32::from(re.error_code().as_u16()),
        core_api::CliError::MissingInput => i32::from(core_api::ErrorCode::ParseError.as_u16()),
        core_api::CliError::Config(_) => 11,
        core_api::CliError::Io(_) => 20,
    }
}
