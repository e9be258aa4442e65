//! blockdown CLI - assembles already-fetched content records into posts.
//!
//! Input files contain the retrieval collaborator's output: a JSON array of
//! raw block records and a JSON object of raw properties.

use blockdown::{source, Publisher, RenderOptions};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Assemble content blocks into publishable Markdown posts
#[derive(Parser)]
#[command(
    name = "blockdown",
    version,
    about = "Assemble content blocks into publishable Markdown posts",
    long_about = "blockdown - content block to Markdown post assembler.\n\n\
                  Reads already-fetched raw block and property JSON and\n\
                  produces a frontmatter+body post with a date-slug filename.\n\n\
                  Usage:\n  \
                  blockdown build <blocks.json> <props.json>   Assemble and write a post\n  \
                  blockdown render <blocks.json>               Render body Markdown to stdout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a post and write it to the posts directory
    Build {
        /// JSON file with the fetched raw block sequence
        blocks: PathBuf,

        /// JSON file with the fetched raw property map
        properties: PathBuf,

        /// Output directory for the post file
        #[arg(short, long, default_value = "posts")]
        output: PathBuf,

        /// Page identifier used in error messages
        #[arg(long, default_value = "local")]
        page_id: String,

        /// Assembly date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Render the body Markdown to stdout (no frontmatter, no validation)
    Render {
        /// JSON file with the fetched raw block sequence
        blocks: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Build {
            blocks,
            properties,
            output,
            page_id,
            date,
        } => {
            let raw_blocks = source::raw_blocks_from_json(&fs::read_to_string(&blocks)?)?;
            let raw_properties =
                source::raw_properties_from_json(&fs::read_to_string(&properties)?)?;

            let mut publisher = Publisher::new();
            if let Some(date) = date {
                publisher = publisher.with_date(date);
            }
            let post = publisher.assemble(&page_id, &raw_blocks, &raw_properties)?;

            fs::create_dir_all(&output)?;
            let path = post.write_to_file(&output)?;
            println!("{} {}", "wrote".green().bold(), path.display());
        }
        Commands::Render { blocks } => {
            let raw_blocks = source::raw_blocks_from_json(&fs::read_to_string(&blocks)?)?;
            let resolved = source::resolve_blocks(&raw_blocks)?;
            let body = blockdown::render_body(&resolved, &RenderOptions::default())?;
            print!("{}", blockdown::normalize::normalize(&body));
        }
    }
    Ok(())
}
