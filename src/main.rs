// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::app_controller::Controller;
use crate::content_filter::FilterConfig;

mod app_config;
mod app_controller;
mod content_filter;
mod errors;
mod file_utils;
mod line_chunker;
mod regex_matcher;
mod srt_parser;
mod subtitle_document;
mod timestamp;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remove closed captions, lyrics and speaker labels (default command)
    #[command(alias = "clean")]
    Filter(FilterArgs),

    /// Shift every subtitle line by a signed millisecond delta
    Shift(ShiftArgs),

    /// Show line count, span and state tallies for a subtitle file
    Info(InfoArgs),

    /// Generate shell completions for subedit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct FilterArgs {
    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Remove bracketed hearing-impaired text
    #[arg(long)]
    closed_captions: bool,

    /// Remove lyrics wrapped in music note markers
    #[arg(long)]
    lyrics: bool,

    /// Remove caption-style speaker labels
    #[arg(long)]
    speaker_labels: bool,

    /// Print the per-line preview without writing anything
    #[arg(short, long)]
    dry_run: bool,

    /// Print the preview as JSON (implies --dry-run)
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ShiftArgs {
    /// Input subtitle file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Shift amount in milliseconds (negative shifts earlier, clamping at zero)
    #[arg(short, long, value_name = "MILLIS", allow_hyphen_values = true)]
    by_millis: i64,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input subtitle file to inspect
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Print the document as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subedit - subtitle cleanup and editing tool
///
/// Loads SubRip (.srt) files, removes hearing-impaired text, lyrics and
/// speaker labels with built-in filters, shifts timings, and writes the
/// edited file back out.
#[derive(Parser, Debug)]
#[command(name = "subedit")]
#[command(version = "1.0.0")]
#[command(about = "SRT subtitle cleanup and editing tool")]
#[command(long_about = "subedit loads SubRip (.srt) files, removes hearing-impaired text, lyrics and
speaker labels with built-in regex filters, shifts timings, and writes the
edited file back out.

EXAMPLES:
    subedit movie.srt                            # Filter using config defaults
    subedit filter -f movie.srt                  # Force overwrite existing output
    subedit filter --dry-run movie.srt           # Preview what would be removed
    subedit filter --closed-captions movie.srt   # Only remove bracketed captions
    subedit filter /subs/                        # Process a whole directory
    subedit shift --by-millis -2500 movie.srt    # Shift everything 2.5s earlier
    subedit info --json movie.srt                # Inspect a file as JSON
    subedit completions bash > subedit.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Remove bracketed hearing-impaired text
    #[arg(long)]
    closed_captions: bool,

    /// Remove lyrics wrapped in music note markers
    #[arg(long)]
    lyrics: bool,

    /// Remove caption-style speaker labels
    #[arg(long)]
    speaker_labels: bool,

    /// Print the per-line preview without writing anything
    #[arg(short, long)]
    dry_run: bool,

    /// Print the preview as JSON (implies --dry-run)
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subedit", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Filter(args)) => run_filter(args),
        Some(Commands::Shift(args)) => run_shift(args),
        Some(Commands::Info(args)) => run_info(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let filter_args = FilterArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                closed_captions: cli.closed_captions,
                lyrics: cli.lyrics,
                speaker_labels: cli.speaker_labels,
                dry_run: cli.dry_run,
                json: cli.json,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_filter(filter_args)
        }
    }
}

// Load the config file (creating a default one when missing) and apply the
// command line log level on top
fn load_config(config_path: &str, cmd_log_level: Option<CliLogLevel>) -> Result<Config> {
    if let Some(cmd_log_level) = &cmd_log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save_to_file(config_path)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    if let Some(cmd_log_level) = cmd_log_level {
        config.log_level = cmd_log_level.into();
    }
    log::set_max_level(level_filter_for(&config.log_level));

    Ok(config)
}

// An explicit category flag on the command line narrows the filter to
// exactly the named categories; otherwise the config defaults apply
fn filter_overrides(config: &Config, args: &FilterArgs) -> FilterConfig {
    if args.closed_captions || args.lyrics || args.speaker_labels {
        FilterConfig {
            closed_captions: args.closed_captions,
            lyrics: args.lyrics,
            speaker_labels: args.speaker_labels,
        }
    } else {
        config.filters
    }
}

fn run_filter(args: FilterArgs) -> Result<()> {
    let mut config = load_config(&args.config_path, args.log_level.clone())?;
    config.filters = filter_overrides(&config, &args);

    let controller = Controller::with_config(config)?;

    if args.dry_run || args.json {
        return print_preview(&controller, &args);
    }

    if args.input_path.is_file() {
        controller.run_filter(&args.input_path, args.output_dir.as_deref(), args.force_overwrite)
    } else if args.input_path.is_dir() {
        controller.run_filter_folder(&args.input_path, args.force_overwrite)
    } else {
        Err(anyhow!("Input path does not exist: {:?}", args.input_path))
    }
}

fn print_preview(controller: &Controller, args: &FilterArgs) -> Result<()> {
    let previews = controller.preview_filters(&args.input_path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&previews)?);
        return Ok(());
    }

    for preview in &previews {
        let original: String = preview.chunks.iter().map(|c| c.text.as_str()).collect();
        if preview.result_line.is_empty() {
            println!("#{}: {:?} -> (removed)", preview.line_id, original);
        } else {
            println!("#{}: {:?} -> {:?}", preview.line_id, original, preview.result_line);
        }
    }
    println!("{} line(s) affected", previews.len());

    Ok(())
}

fn run_shift(args: ShiftArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;
    let controller = Controller::with_config(config)?;

    if !args.input_path.is_file() {
        return Err(anyhow!("Input path does not exist: {:?}", args.input_path));
    }
    controller.run_shift(&args.input_path, args.output_dir.as_deref(), args.by_millis, args.force_overwrite)
}

fn run_info(args: InfoArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;
    let controller = Controller::with_config(config)?;

    let document = controller.load_document(&args.input_path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let (enabled, removed, modified) = Controller::state_counts(&document);
    println!("File:     {}", document.filename);
    println!("Lines:    {} ({} enabled, {} modified, {} removed)", document.lines.len(), enabled, modified, removed);

    if let (Some(first), Some(last)) = (document.lines.first(), document.lines.last()) {
        println!(
            "Span:     {} --> {}",
            first.format_start_time(),
            last.format_end_time()
        );
    }

    let longest = document
        .lines
        .iter()
        .max_by_key(|line| line.effective_text().len());
    if let Some(line) = longest {
        println!("Longest:  #{} ({} chars)", line.id, line.effective_text().len());
    }

    Ok(())
}
