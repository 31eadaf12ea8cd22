use clap::Parser;
use docpeek::application::{
    show_config, CliHelpService, HelpOutcome, TopicPreviewService, VimHelpService,
};
use docpeek::cli::{write_banner, write_excerpt, write_lines, Cli, Commands};
use docpeek::domain::{Excerpt, TopicCatalog};
use docpeek::error::DocpeekError;
use docpeek::infrastructure::{
    ColorMode, Config, FileSystemRuntime, OutputPipe, Overrides, SystemRunner,
};
use std::io::{IsTerminal, Write};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let topics = TopicCatalog::builtin();
    let result = run(cli, &topics);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; stdout carries the preview
fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "docpeek=warn",
        1 => "docpeek=info",
        2 => "docpeek=debug",
        _ => "docpeek=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

fn apply_color(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => colored::control::unset_override(),
    }
}

fn run(cli: Cli, topics: &TopicCatalog) -> Result<(), DocpeekError> {
    let (config, source) = Config::discover(cli.config.as_deref())?;
    tracing::info!(%source, "loaded configuration");

    let color = cli
        .color
        .as_deref()
        .map(ColorMode::from_str)
        .transpose()
        .map_err(DocpeekError::Config)?;

    let mut overrides = Overrides {
        formatter: cli.formatter,
        color,
        ..Overrides::default()
    };

    match cli.command {
        Commands::VimHelp {
            key,
            runtime,
            max_lines,
        } => {
            overrides.runtime_path = runtime;
            overrides.max_lines = max_lines.map(|n| n as usize);
            let config = config.apply_overrides(overrides)?;
            apply_color(config.color);
            tracing::info!(tags = %config.tags_path().display(), %key, "looking up help tag");

            let service = VimHelpService::new(FileSystemRuntime::new(config.runtime_path.clone()));
            let excerpt = service.execute(&key, config.max_lines)?;

            let mut out = OutputPipe::open(config.formatter.as_deref())?;
            write_excerpt(&mut out, &excerpt)?;
            out.finish()
        }
        Commands::CliHelp { key } => {
            let config = config.apply_overrides(overrides)?;
            apply_color(config.color);

            let service = CliHelpService::new(SystemRunner, &config.help_flag);
            let outcome = service.execute(&key);

            let mut out = OutputPipe::open(config.formatter.as_deref())?;
            write_banner(&mut out, &key)?;
            match outcome {
                HelpOutcome::Found { source, text } => {
                    tracing::debug!(?source, "rendering external help");
                    write_excerpt(&mut out, &Excerpt::from_text(&text, None))?;
                    out.finish()
                }
                HelpOutcome::Missing { diagnostics } => {
                    writeln!(out, "No help found for {}", key)?;
                    if !diagnostics.trim().is_empty() {
                        write_excerpt(&mut out, &Excerpt::from_text(&diagnostics, None))?;
                    }
                    out.finish()?;
                    Err(DocpeekError::HelpNotFound(key))
                }
            }
        }
        Commands::VimToplevel { key, list } => {
            let config = config.apply_overrides(overrides)?;
            apply_color(config.color);

            let service = TopicPreviewService::new(topics);
            if list {
                let mut out = OutputPipe::open(config.formatter.as_deref())?;
                write_lines(&mut out, &service.list())?;
                return out.finish();
            }

            let key = key.unwrap_or_default();
            let topic = service.execute(&key)?;

            let mut out = OutputPipe::open(config.formatter.as_deref())?;
            write_banner(&mut out, &topic.name)?;
            write_excerpt(&mut out, &Excerpt::from_text(&topic.preview, None))?;
            out.finish()
        }
        Commands::Config => {
            let config = config.apply_overrides(overrides)?;
            print!("{}", show_config::render(&config, &source)?);
            Ok(())
        }
    }
}
