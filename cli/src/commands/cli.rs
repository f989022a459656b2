use std::path::PathBuf;

use clap::Parser;
use pizzabot_core::api::OutputFormat;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Plan a delivery route across a grid, e.g. pizzabot "5x5 (1, 3) (4, 4)"
#[derive(Parser, Debug)]
#[command(name = "pizzabot", version)]
pub struct Args {
    /// Grid size followed by coordinate groups, e.g. "5x5 (1, 3) (4, 4)".
    /// Only the first value is planned; anything after it is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub input: Vec<String>,

    /// Output format. Defaults to `output.format` from the config file.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Read configuration from this file instead of the default locations.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn route_input(&self) -> Option<&str> {
        self.input.first().map(String::as_str)
    }
}
