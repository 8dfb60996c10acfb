use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use txpulse::application::config::AppConfig;
use txpulse::application::services::dispatch::AlertDispatcher;
use txpulse::application::services::pipeline::BatchPipeline;
use txpulse::domain::filters::RecordFilter;
use txpulse::infrastructure::notifications::create_notifier;
use txpulse::infrastructure::sources::create_source;
use txpulse::infrastructure::sources::synthetic::SyntheticSource;
use txpulse::presentation::cli::app::{Cli, Commands, SourceArgs};
use txpulse::presentation::cli::commands::config::run_config;
use txpulse::presentation::cli::commands::generate::run_generate;
use txpulse::presentation::cli::commands::scan::run_scan;
use txpulse::presentation::cli::commands::summary::run_summary;
use txpulse::presentation::cli::commands::watch::run_watch;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  TXPULSE · Transaction Health Monitor".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// CLI flags win over the config file
fn apply_overrides(config: &mut AppConfig, args: &SourceArgs) {
    if let Some(threshold) = args.threshold {
        config.general.threshold = threshold;
    }
    if let Some(ref csv) = args.csv {
        config.source.csv_path = Some(csv.clone());
    }
}

fn filter_from(args: Option<&SourceArgs>) -> RecordFilter {
    args.map_or_else(RecordFilter::default, |a| {
        RecordFilter::new(a.region.clone(), a.prefix.clone())
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => AppConfig::config_path()?,
    };
    let mut config = if cli.config.is_some() {
        AppConfig::load_from(&config_path)?
    } else {
        AppConfig::load_or_create(&config_path)?
    };

    let command = cli.command.unwrap_or(Commands::Scan {
        json: false,
        notify: false,
        source: SourceArgs::default(),
    });
    if let Some(args) = command.source_args() {
        apply_overrides(&mut config, args);
    }
    let filter = filter_from(command.source_args());

    // Commands that never classify run before the engine is built
    match command {
        Commands::Config { path } => return run_config(&config, &config_path, path),
        Commands::Generate {
            output,
            count,
            seed,
        } => {
            let mut generator = SyntheticSource::new(
                count.unwrap_or(config.source.synthetic_count),
                config.source.region_count,
                config.source.failure_rate,
            );
            if let Some(seed) = seed {
                generator = generator.with_seed(seed);
            }
            run_generate(&generator, output.as_deref())?;
            return Ok(());
        }
        _ => {}
    }

    // Manual DI: main.rs is the only place that knows concrete types
    let unit = config.general.unit;
    let engine = config.engine();
    let source = create_source(
        config.source.csv_path.as_deref(),
        config.source.synthetic_count,
        config.source.region_count,
        config.source.failure_rate,
    );
    let notifier = create_notifier(&config.notifications, unit);
    let dispatcher = AlertDispatcher::new(&notifier);
    let pipeline = BatchPipeline::new(&*source, &engine, filter);

    match command {
        Commands::Scan { json, notify, .. } => {
            run_scan(&pipeline, notify.then_some(&dispatcher), unit, json)?;
        }
        Commands::Summary { json, .. } => {
            run_summary(&pipeline, json)?;
        }
        Commands::Watch { interval, .. } => {
            print_banner();
            tracing::info!("Source: {}", source.describe());
            tracing::info!("Threshold: {} {}", engine.threshold(), unit.suffix());
            let interval_secs = interval.unwrap_or(config.general.interval_secs);
            run_watch(&pipeline, &dispatcher, interval_secs).await?;
        }
        Commands::Generate { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}
