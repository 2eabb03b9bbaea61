use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use lede_core::{
    DateLocale, Extractor, FetchConfig, LedeError, OutputFormat, Settings, fetch_file, fetch_stdin, fetch_url,
};
use owo_colors::OwoColorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

mod echo;

use echo::{
    format_size, print_banner, print_error, print_field, print_info, print_step, print_success, print_timing,
    print_warning,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the extracted article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Text,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: json, text", s)),
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Text => OutputFormat::PlainText,
        }
    }
}

/// Extract the title, publication date and body text of a web article
#[derive(Parser, Debug)]
#[command(name = "lede")]
#[command(version)]
#[command(about = "Extract the title, date and body of web articles", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// HTTP timeout in seconds [default: 15]
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Minimum body length in characters [default: 100]
    #[arg(long, value_name = "NUM")]
    min_content: Option<usize>,

    /// Language for rendered dates (ru, en)
    #[arg(long, value_name = "LOCALE")]
    locale: Option<DateLocale>,

    /// Settings file (default: <config dir>/lede/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print whatever was found, even if the body is missing or short
    #[arg(long)]
    no_validate: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Args {
    /// Command-line flags win over the settings file.
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(timeout) = self.timeout {
            settings.fetch.timeout = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            settings.fetch.user_agent.clone_from(user_agent);
        }
        if let Some(min_content) = self.min_content {
            settings.extract.min_content_chars = min_content;
        }
        if let Some(locale) = self.locale {
            settings.extract.date_locale = locale;
        }
        settings
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "lede_core=debug,lede=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn is_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

async fn read_input(input: &str, fetch_config: &FetchConfig, verbose: bool) -> anyhow::Result<String> {
    if input == "-" {
        if verbose {
            print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")
    } else if is_url(input) {
        if verbose {
            print_step(1, 3, &format!("Fetching from {}", input.bright_white().underline()));
        }
        fetch_url(input, fetch_config).await.context("Failed to fetch URL")
    } else {
        if verbose {
            print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

/// Prints the failure chain and, for extraction failures, the stable error code.
fn report(err: &anyhow::Error) {
    print_error(&format!("{:#}", err));

    if let Some(cause) = err.downcast_ref::<LedeError>() {
        let code = cause.code();
        print_field("Code", code.as_str());
        print_field("Hint", code.message());
        if cause.is_retryable() {
            print_field("Retryable", "yes");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "lede", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let input = args.input.as_deref().context("INPUT is required")?;

    init_tracing(args.verbose);

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let settings = args.apply(Settings::discover(args.config.as_deref()).context("Failed to load settings")?);

    let started = Instant::now();
    let html = read_input(input, &settings.fetch, args.verbose).await?;
    let read_time = started.elapsed();

    if args.verbose {
        print_field("Size", &format_size(html.len()));
        print_timing("Read", read_time);
        eprintln!();
        print_step(2, 3, "Extracting article");
    }

    let extractor = Extractor::with_config(settings.extract);
    let started = Instant::now();
    let result = if args.no_validate { extractor.parse_article(&html) } else { extractor.extract_html(&html) };
    let article = result.context("Failed to extract article")?;
    let extract_time = started.elapsed();

    if args.verbose {
        print_field("Title", article.title.as_deref().unwrap_or("-"));
        print_field("Date", article.date.as_deref().unwrap_or("-"));
        print_field("Content", &format!("{} chars", article.content_len()));
        print_timing("Extract", extract_time);
        eprintln!();
        print_step(3, 3, "Writing output");
    }

    if args.no_validate && article.content.is_none() {
        print_warning("No article body found");
    }

    let output = article
        .to_format(args.format.into(), args.pretty)
        .context("Failed to render output")?;

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
