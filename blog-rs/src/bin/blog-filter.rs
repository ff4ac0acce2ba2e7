//! CLI tool for the blog content core
//!
//! Checks post and comment bodies against the spam filter and renders
//! RSS feeds from a JSON dump of posts.
//!
//! # Usage
//!
//! ```bash
//! # Check a post body (use - for stdin)
//! blog-filter post body.txt
//!
//! # Check a comment body, verdict as JSON
//! blog-filter comment - --json
//!
//! # Render the site feed from a JSON array of posts
//! blog-filter feed posts.json
//! ```
//!
//! Configuration comes from a TOML file when `--config` is given,
//! otherwise from environment variables (`BANNED_KEYWORDS`,
//! `BANNED_ALT_KEYWORDS`, `FEED_*`).

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use blog_rs::config::Config;
use blog_rs::feed::{self, Post};
use blog_rs::spam::{SpamCheck, SpamFilter};

#[derive(Parser)]
#[command(name = "blog-filter")]
#[command(about = "Spam filtering and feed rendering for blog content", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a post body
    Post {
        /// Input file, or - for stdin
        input: String,
        /// Print the full verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a comment body
    Comment {
        /// Input file, or - for stdin
        input: String,
        /// Print the full verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the site RSS feed from a JSON array of posts
    Feed {
        /// JSON file with an array of posts
        input: String,
    },
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn report(check: &SpamCheck, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(check)?);
    } else if check.is_spam {
        println!("spam");
    } else {
        println!("ok");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    match cli.command {
        Commands::Post { input, json } => {
            let text = read_input(&input)?;
            let filter = SpamFilter::new(config.filter);
            let check = filter.evaluate(&text);
            report(&check, json)?;
            if check.is_spam {
                std::process::exit(1);
            }
        }
        Commands::Comment { input, json } => {
            let text = read_input(&input)?;
            let filter = SpamFilter::new(config.filter);
            let check = filter.evaluate_comment(&text);
            report(&check, json)?;
            if check.is_spam {
                std::process::exit(1);
            }
        }
        Commands::Feed { input } => {
            let posts: Vec<Post> = serde_json::from_str(&read_input(&input)?)?;
            let xml = feed::render_site_feed(&posts, &config.feed)?;
            println!("{xml}");
        }
    }

    Ok(())
}
