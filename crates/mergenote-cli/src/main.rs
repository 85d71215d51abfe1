use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mergenote_merge::output::{self, Provenance};
use mergenote_model::RetentionPercent;

mod clipboard;
mod session;

use clipboard::SystemClipboard;
use session::Session;

#[derive(Parser)]
#[command(name = "mergenote")]
#[command(about = "Merge text files, remove duplicate lines, summarize, and publish to Notion")]
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
    /// Merge files and remove duplicate and empty lines
    Merge {
        /// Text files to merge, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory for merged_clean.txt and source.md
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: String,

        /// Also copy the cleaned text to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Merge files, then produce an extractive summary
    Summarize {
        /// Text files to merge, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Percentage of sentences to keep (5-90)
        #[arg(short, long, default_value = "20")]
        percent: RetentionPercent,

        /// Output directory for merged_clean.txt, all_clean_summary.txt and source.md
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: String,

        /// Also copy the summary to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the summary to stdout
        #[arg(long)]
        print: bool,
    },

    /// Merge files and create a Notion page from the result
    Notion {
        /// Text files to merge, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Notion integration token
        #[arg(long, env = "NOTION_TOKEN", hide_env_values = true, default_value = "")]
        token: String,

        /// Parent page id the new page is created under
        #[arg(long, env = "NOTION_PARENT_PAGE_ID", default_value = "")]
        parent: String,

        /// Page title
        #[arg(long, default_value = "Merged note")]
        title: String,

        /// Which text becomes the page body
        #[arg(long, value_enum, default_value = "clean")]
        content: PageContent,

        /// Percentage of sentences to keep when the body is the summary (5-90)
        #[arg(short, long, default_value = "20")]
        percent: RetentionPercent,

        /// Also write output files to this directory
        #[arg(short = 'O', long)]
        output_dir: Option<String>,

        /// Notion API root, for proxies and testing
        #[arg(long, hide = true)]
        api_url: Option<String>,
    },
}

#[derive(Clone, clap::ValueEnum)]
enum PageContent {
    /// Cleaned, deduplicated text
    Clean,
    /// Extractive summary of the cleaned text
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,hyper_util=info,reqwest=info",
        LogLevel::Trace => "trace,hyper_util=info,reqwest=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Merge {
            files,
            output_dir,
            copy,
        } => {
            tracing::info!(files = files.len(), output = %output_dir, "Merging");
            let mut session = Session::new(RetentionPercent::default());
            load_and_merge(&mut session, &files)?;

            output::write_clean(&session.clean_text, &session.merged_text, &output_dir)?;
            write_provenance(&session, &output_dir)?;

            if copy {
                let text = session.clean_or_merged().to_string();
                session.copy_to_clipboard(&mut SystemClipboard, &text);
            }
        }
        Commands::Summarize {
            files,
            percent,
            output_dir,
            copy,
            print,
        } => {
            tracing::info!(files = files.len(), percent = %percent, output = %output_dir, "Summarizing");
            let mut session = Session::new(percent);
            load_and_merge(&mut session, &files)?;
            session.generate_summary();

            output::write_clean(&session.clean_text, &session.merged_text, &output_dir)?;
            output::write_export(session.export_text(), &output_dir)?;
            write_provenance(&session, &output_dir)?;

            if print {
                println!("{}", session.summary_text());
            }
            if copy {
                let text = session.summary_text().to_string();
                session.copy_to_clipboard(&mut SystemClipboard, &text);
            }
        }
        Commands::Notion {
            files,
            token,
            parent,
            title,
            content,
            percent,
            output_dir,
            api_url,
        } => {
            tracing::info!(files = files.len(), title = %title, "Publishing to Notion");
            let mut session = Session::new(percent);
            load_and_merge(&mut session, &files)?;

            let body = match content {
                PageContent::Clean => session.clean_or_merged().to_string(),
                PageContent::Summary => {
                    session.generate_summary();
                    session.summary_text().to_string()
                }
            };

            if let Some(dir) = &output_dir {
                output::write_clean(&session.clean_text, &session.merged_text, dir)?;
                output::write_export(session.export_text(), dir)?;
                write_provenance(&session, dir)?;
            }

            let page = session
                .create_page(&token, &parent, api_url.as_deref(), &title, &body)
                .await;
            match page {
                Some(page) => {
                    if let Some(url) = &page.url {
                        println!("{url}");
                    } else {
                        println!("{}", page.id);
                    }
                }
                None => anyhow::bail!("{}", session.status()),
            }
        }
    }

    Ok(())
}

fn load_and_merge(session: &mut Session, files: &[PathBuf]) -> Result<()> {
    session.load(files);
    if !session.merge_and_clean() {
        anyhow::bail!("No readable input files");
    }
    Ok(())
}

fn write_provenance(session: &Session, output_dir: &str) -> Result<()> {
    let provenance = Provenance {
        sources: &session.sources,
        skipped: &session.skipped,
        stats: &session.stats,
        summary: session.summary.as_ref(),
    };
    output::write_provenance(&provenance, output_dir)?;
    Ok(())
}
