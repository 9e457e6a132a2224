use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use manglish_acquire::archive::{DEFAULT_ARCHIVE_BASE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use manglish_acquire::{output, ArchiveConfig, ArchiveFetcher, SourceInfo};
use manglish_model::ExtractOptions;
use manglish_server::{AppState, HttpServer, ServerConfig};

#[derive(Parser)]
#[command(name = "manglish")]
#[command(about = "Turn archived Manglish lyrics pages into presentation slides")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP endpoint
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 7071)]
        port: u16,

        #[command(flatten)]
        archive: ArchiveArgs,

        /// Reduce titles to filename-safe characters
        #[arg(long)]
        sanitize_title: bool,

        /// Title returned when the page has none
        #[arg(long, default_value = "Untitled")]
        fallback_title: String,

        /// Return an empty slide list instead of an error when a page has no lyrics
        #[arg(long)]
        lenient: bool,
    },

    /// Extract slides from one page and write them to files
    Extract {
        /// Lyrics page URL, fetched through the archive
        #[arg(short, long, required_unless_present = "html_file", conflicts_with = "html_file")]
        url: Option<String>,

        /// Read a saved HTML page instead of fetching
        #[arg(long)]
        html_file: Option<String>,

        /// Output directory
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: String,

        /// Also save the fetched page as raw.html
        #[arg(long)]
        cache_html: bool,

        /// Fail when the page has no lyrics instead of writing an empty export
        #[arg(long)]
        strict: bool,

        /// Keep the title as shown on the page instead of sanitizing it
        #[arg(long)]
        keep_title: bool,

        #[command(flatten)]
        archive: ArchiveArgs,
    },
}

#[derive(Args)]
struct ArchiveArgs {
    /// Archive snapshot prefix that page URLs are appended to
    #[arg(long, default_value = DEFAULT_ARCHIVE_BASE)]
    archive_base: String,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// User-Agent sent to the archive
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Strip http:// or https:// from page URLs before appending them
    #[arg(long)]
    strip_scheme: bool,
}

impl ArchiveArgs {
    fn into_config(self) -> ArchiveConfig {
        ArchiveConfig {
            archive_base: self.archive_base,
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent,
            strip_scheme: self.strip_scheme,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Serve {
            host,
            port,
            archive,
            sanitize_title,
            fallback_title,
            lenient,
        } => {
            let archive = archive.into_config();
            let options = ExtractOptions {
                sanitize_for_filename: sanitize_title,
                fallback_title,
                strict: !lenient,
            };
            tracing::info!(
                archive_base = %archive.archive_base,
                timeout_secs = archive.timeout_secs,
                strict = options.strict,
                sanitize_title = options.sanitize_for_filename,
                "Configured extraction"
            );

            let fetcher = ArchiveFetcher::new(archive)?;
            let server = HttpServer::new(
                ServerConfig::new(host, port),
                AppState::new(fetcher, options),
            );

            server
                .run_with_shutdown(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %e, "Failed to listen for ctrl-c");
                        std::future::pending::<()>().await;
                    }
                    tracing::info!("Received shutdown signal");
                })
                .await?;

            tracing::info!("Server shutdown complete");
        }
        Commands::Extract {
            url,
            html_file,
            output_dir,
            cache_html,
            strict,
            keep_title,
            archive,
        } => {
            let options = ExtractOptions {
                sanitize_for_filename: !keep_title,
                strict,
                ..ExtractOptions::for_filename()
            };

            let acquired = if let Some(path) = html_file {
                tracing::info!(path = %path, "Reading saved page");
                let html = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {path}"))?;
                if cache_html {
                    output::cache_html(&output_dir, "raw.html", &html)?;
                }
                manglish_acquire::acquire_from_html(&html, SourceInfo::new(&path, &path), &options)?
            } else {
                let url = url.context("either --url or --html-file is required")?;
                tracing::info!(url = %url, "Acquiring lyrics page");
                let fetcher = ArchiveFetcher::new(archive.into_config())?;
                let page = fetcher.fetch(&url).await?;
                if cache_html {
                    output::cache_html(&output_dir, "raw.html", &page.html)?;
                }
                let source = SourceInfo::new(&url, &page.archived_url);
                manglish_acquire::acquire_from_html(&page.html, source, &options)?
            };

            let song = manglish_parse::parse(&acquired);
            let path = output::write_slides(&song, &acquired.source, &output_dir)?;
            tracing::info!(
                title = %song.title,
                slides = song.slide_count,
                path = %path.display(),
                "Exported slides"
            );
        }
    }

    Ok(())
}
