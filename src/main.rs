use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rankframes::cli::{Cli, Commands, MetricArg, PoolArg};
use rankframes::ctx::Ctx;
use rankframes::io;
use rankframes::pipeline::Pipeline;
use rankframes::pipeline::stage0_scaffold::Stage0Scaffold;
use rankframes::pipeline::stage1_rows::Stage1Rows;
use rankframes::pipeline::stage2_normalize::Stage2Normalize;
use rankframes::pipeline::stage3_aggregate::Stage3Aggregate;
use rankframes::pipeline::stage4_timeline::Stage4Timeline;
use rankframes::pipeline::stage5_frames::Stage5Frames;
use rankframes::pipeline::stage6_output::Stage6Output;
use rankframes::schema::v1::{MetricMode, PoolMode};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let metric = match args.metric {
                MetricArg::Ytd => MetricMode::Ytd,
                MetricArg::Window => MetricMode::Window,
                MetricArg::Lifetime => MetricMode::Lifetime,
            };
            let pool = match args.pool {
                PoolArg::CurrentYear => PoolMode::CurrentYear,
                PoolArg::FullHistory => PoolMode::FullHistory,
            };

            let mut ctx = Ctx::new(
                args.input,
                args.out,
                args.top_n,
                metric,
                pool,
                args.start_year,
                args.carry_in_weeks,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Rows::new()),
                Box::new(Stage2Normalize::new()),
                Box::new(Stage3Aggregate::new()),
                Box::new(Stage4Timeline::new()),
                Box::new(Stage5Frames::new()),
                Box::new(Stage6Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx);
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(
                args.input,
                PathBuf::from("."),
                10,
                MetricMode::Ytd,
                PoolMode::CurrentYear,
                None,
                0,
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );

            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Rows::new()),
                Box::new(Stage2Normalize::new()),
                Box::new(Stage3Aggregate::new()),
                Box::new(Stage4Timeline::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) {
    print!("{}", io::summary::format_summary(ctx));
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}

fn print_validate_summary(ctx: &Ctx) {
    println!("rankframes validate ok");
    println!("rows: {}", ctx.rows.len());
    println!("records: {}", ctx.records.len());
    println!("dropped (rank): {}", ctx.dropped_rank);
    println!("dropped (date): {}", ctx.dropped_date);
    println!("entities: {}", ctx.input_meta.entities.unwrap_or(0));
    println!("weeks: {}", ctx.timeline.len());
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
