use gitx::*;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use error::GitxError;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // 根据 verbose 标志设置日志级别
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();

    let config_file = cli.config_file.as_deref();

    // config 命令自己加载配置，可以在配置损坏时运行
    if let Commands::Config { action } = cli.command {
        let colored = config::load_config_from(config_file)
            .map(|c| c.ui.colored)
            .unwrap_or(true);
        if let Err(e) = commands::config::run(action, config_file, colored) {
            report_error(&e, colored);
            std::process::exit(1);
        }
        return Ok(());
    }

    let json_requested = match &cli.command {
        Commands::Format { format, json, .. } | Commands::Classify { format, json, .. } => {
            commands::OutputFormat::from_cli(*format, *json).is_json()
        }
        _ => false,
    };

    let config = match config::load_config_from(config_file) {
        Ok(config) => config,
        Err(e) => {
            if json_requested {
                let _ = commands::json::output_json_error::<()>(&e);
            } else {
                report_error(&e, true);
            }
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Format {
            mode,
            input,
            format,
            json,
        } => {
            let options = commands::FormatOptions::from_cli(*mode, input, *format, *json, &config);
            commands::format_message::run(&options, &config)
        }
        Commands::Classify {
            input,
            format,
            json,
        } => {
            let options = commands::ClassifyOptions::from_cli(input, *format, *json);
            commands::classify::run(&options, &config)
        }
        Commands::Commit {
            mode,
            input,
            dry_run,
        } => {
            let options = commands::CommitOptions::from_cli(*mode, input, *dry_run, &config);
            commands::commit::run(&options, &config)
        }
        Commands::Config { .. } => Ok(()),
    };

    if let Err(e) = result {
        if json_requested {
            let _ = commands::json::output_json_error::<()>(&e);
        } else {
            report_error(&e, config.ui.colored);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn report_error(e: &GitxError, colored: bool) {
    ui::error(&e.to_string(), colored);
    if let Some(suggestion) = e.suggestion() {
        eprintln!();
        eprintln!("{}", ui::info(suggestion, colored));
    }
}
