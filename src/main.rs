use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use devscore::cli::{Cli, Commands, RunArgs};
use devscore::config;
use devscore::core::{self, RunProfile};
use devscore::insights;
use log::{LevelFilter, info, warn};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Report(args) => run_profile(args, RunProfile::Full),
        Commands::Score(args) => run_profile(args, RunProfile::ScoreOnly),
        Commands::Plan(args) => run_profile(args, RunProfile::PlanOnly),
        Commands::Skills(args) => run_profile(args, RunProfile::SkillsOnly),
        Commands::Init(args) => {
            if args.config.is_some() {
                warn!(
                    "--config is ignored by `devscore init`; writing ./{}",
                    config::CONFIG_FILE_NAME
                );
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_profile(args: RunArgs, profile: RunProfile) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    if let Some(source) = &loaded.source {
        info!("using config {}", source.display());
    }

    let now = resolve_now(args.now.as_deref())?;
    let insights = insights::load_insights(&args.input)?;
    let report = core::build_report(&insights, &loaded.config, profile, now);

    let output_json = args.json || loaded.config.general.json;
    if output_json {
        let json_report = core::report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&report, &loaded.config.report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .with_context(|| format!("invalid --now timestamp {raw:?} (expected RFC 3339)")),
        None => Ok(Utc::now()),
    }
}
