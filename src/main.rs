//! Fire CLI - fan-out deployment script generator
//!
//! Usage: fire [OPTIONS] <COMMAND> [HOSTS]...
//!
//! Commands:
//!   generate  Write config.json, run and clean
//!   run       Generate, then execute the run script
//!   clean     Generate, then execute the clean script
//!   show      Generate, then print one of the scripts

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fire::application::DeployOptions;
use fire::config::{self, Config};
use fire::infrastructure::shell;
use fire::presentation::cli::{Cli, Commands, ScriptKind};
use fire::presentation::create_deploy_use_case;
use fire::presentation::output::{render_summary, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// `FIRE_LOG` takes an env-filter directive; otherwise `-v` picks the level
fn init_logging(verbose: u8) {
    let filter = std::env::var("FIRE_LOG")
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| {
            EnvFilter::new(match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            })
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, warnings) = config::load_or_default(cli.config.as_deref(), &cwd)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    let config = apply_cli_overrides(config, &cli);

    let options = DeployOptions::from_config(&config)?;
    let result = create_deploy_use_case(&config)
        .execute(&options)
        .context("failed to generate deployment scripts")?;

    if let Commands::Show { script, .. } = &cli.command {
        let text = match script {
            ScriptKind::Run => result.run_script.render(),
            ScriptKind::Clean => result.clean_script.render(),
        };
        print!("{}", text);
        return Ok(0);
    }

    print!(
        "{}",
        render_summary(&result, OutputFormat::from_json_flag(cli.json))
    );

    let Some(kind) = cli.command.script_to_execute() else {
        return Ok(0);
    };
    let script = match kind {
        ScriptKind::Run => &result.run_path,
        ScriptKind::Clean => &result.clean_path,
    };
    if !shell::check_available() {
        anyhow::bail!(
            "{} not found; the script was written to {}",
            shell::SHELL,
            script.display()
        );
    }
    let status = shell::run_script(script)
        .with_context(|| format!("failed to execute {}", script.display()))?;
    Ok(status.code().unwrap_or(1))
}

fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if !cli.command.hosts().is_empty() {
        config = config.with_hosts(cli.command.hosts());
    }
    if let Some(out) = &cli.out {
        config.output_dir = out.clone();
    }
    if let Some(task) = &cli.task {
        config.task = task.clone();
    }
    if let Some(entry) = &cli.entry {
        config.entry = Some(entry.clone());
    }
    if cli.parallel {
        config.parallel_push = true;
    }
    config
}
