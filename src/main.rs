// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use celcheck::app_config::{self, Config, OutputFormat};
use celcheck::file_utils::{self, FileManager};
use celcheck::report;
use celcheck::validation::{BatchReport, PhoneValidator, QualityReport, ResultFilter};

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

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or more numbers and show the details of each
    Check {
        /// Phone numbers in any common format
        #[arg(value_name = "NUMBER", required = true)]
        numbers: Vec<String>,
    },

    /// Validate a list of numbers, one per line ('-' reads stdin)
    Batch {
        /// Input file with one number per line
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Results to list: all, valid, invalid, suspicious or operator:<name>
        #[arg(long, default_value = "all")]
        filter: String,

        /// Write the full JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Data-quality report over failed and processing deliveries
    Quality {
        /// JSON array of delivery records ('-' reads stdin)
        #[arg(value_name = "RECORDS_JSON")]
        records: PathBuf,

        /// Write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions for celcheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// celcheck - Colombian mobile number validator
///
/// Cleans, classifies and reports on Colombian mobile phone numbers.
#[derive(Parser, Debug)]
#[command(name = "celcheck")]
#[command(version)]
#[command(about = "Colombian mobile number validator")]
#[command(long_about = "celcheck cleans Colombian phone numbers, identifies their mobile operator and flags numbers that look fake.

EXAMPLES:
    celcheck check 3157894261 '+57 310 472 9583'   # Validate single numbers
    celcheck batch numbers.txt                      # Validate a list
    celcheck batch numbers.txt --filter invalid     # Only list invalid numbers
    celcheck batch numbers.txt --filter operator:claro
    celcheck batch - -o report.json < numbers.txt   # Read stdin, save JSON
    celcheck quality deliveries.json                # Undelivered-message report
    celcheck --format json check 3001234567         # JSON output
    celcheck completions bash > celcheck.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    format: Option<CliOutputFormat>,
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour for log level
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set by max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "celcheck", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());
    debug!("Loaded configuration from '{}'", cli.config_path);

    match cli.command {
        Commands::Check { numbers } => run_check(&config, &numbers),
        Commands::Batch { input, filter, output } => {
            let filter: ResultFilter = filter.parse()?;
            run_batch(&config, &input, filter, output.as_deref())
        }
        Commands::Quality { records, output } => run_quality(&config, &records, output.as_deref()),
        Commands::Completions { .. } => Ok(()),
    }
}

// @loads: Config file, then command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)
        .with_context(|| format!("Failed to load config file: {}", cli.config_path))?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(format) = &cli.format {
        config.output.format = format.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn run_check(config: &Config, numbers: &[String]) -> Result<()> {
    let validator = PhoneValidator::new();
    let results: Vec<_> = numbers.iter().map(|number| validator.validate(number)).collect();

    report::print_out(config.output.format, &results, |result| {
        format!("{}\n", report::render_result(result))
    })?;
    Ok(())
}

fn run_batch(config: &Config, input: &Path, filter: ResultFilter, output: Option<&Path>) -> Result<()> {
    let numbers = file_utils::read_number_list(input)?;
    info!("📱 Validating {} numbers from {:?}", numbers.len(), input);

    let batch = validate_with_progress(config, &numbers);

    if let Some(path) = output {
        FileManager::write_to_file(path, &report::to_json(&batch)?)?;
        info!("Report written to {:?}", path);
    }

    let selected = batch.filtered(&filter);
    if selected.is_empty() && filter != ResultFilter::All {
        warn!("No results match filter '{}'", filter);
    }

    let view = BatchView {
        stats: &batch.stats,
        filter: filter.to_string(),
        results: selected,
    };
    report::print_one(config.output.format, view, render_batch_view)?;
    Ok(())
}

/// Batch output limited to the filtered results
#[derive(serde::Serialize)]
struct BatchView<'a> {
    stats: &'a celcheck::AggregateStats,
    filter: String,
    results: Vec<&'a celcheck::ValidationResult>,
}

fn render_batch_view(view: &BatchView<'_>) -> String {
    let mut lines = vec![report::render_stats(view.stats), String::new()];
    lines.extend(view.results.iter().map(|result| report::render_result_row(result)));
    lines.join("\n")
}

// @validates: Every number, with a progress bar for large lists
fn validate_with_progress(config: &Config, numbers: &[String]) -> BatchReport {
    let validator = PhoneValidator::new();
    let top_n = config.report.top_repeated;

    if numbers.len() < config.output.progress_threshold {
        return validator.validate_batch(numbers, top_n);
    }

    let progress_bar = ProgressBar::new(numbers.len() as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} numbers ({percent}%) {eta}")
        .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%)"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(style.progress_chars("█▓▒░"));

    let results = numbers
        .iter()
        .map(|number| {
            let result = validator.validate(number);
            progress_bar.inc(1);
            result
        })
        .collect();
    progress_bar.finish_and_clear();

    BatchReport::from_results(results, top_n)
}

fn run_quality(config: &Config, records_path: &Path, output: Option<&Path>) -> Result<()> {
    let records = file_utils::read_delivery_records(records_path)?;
    info!("🔍 Analyzing {} delivery records from {:?}", records.len(), records_path);

    let quality = QualityReport::analyze(&records, &config.report);

    if let Some(path) = output {
        FileManager::write_to_file(path, &report::to_json(&quality)?)?;
        info!("Report written to {:?}", path);
    }

    report::print_one(config.output.format, &quality, |quality| report::render_quality(quality))?;
    Ok(())
}
