use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rankframes", version, about = "Chart frame sequence generator CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Chart CSV input (.csv or .csv.gz)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = 10, help = "Frame size cap")]
    pub top_n: usize,

    #[arg(long, value_enum, default_value_t = MetricArg::Ytd)]
    pub metric: MetricArg,

    #[arg(long, value_enum, default_value_t = PoolArg::CurrentYear)]
    pub pool: PoolArg,

    #[arg(long, help = "Year boundary for YTD reset and the carry-in window")]
    pub start_year: Option<i32>,

    #[arg(
        long,
        default_value_t = 0,
        help = "Trailing window width in weeks feeding window-total (0 disables)"
    )]
    pub carry_in_weeks: u32,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Chart CSV input (.csv or .csv.gz)")]
    pub input: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Ytd,
    Window,
    Lifetime,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PoolArg {
    CurrentYear,
    FullHistory,
}
