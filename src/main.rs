use clap::{Parser, Subcommand};
use folio::diagnostics::TracingDiagnostics;
use folio::layout::{self, ImageUrlClassifier};
use folio::types::LightweightPost;
use folio::{aggregate, config, index, output, tags};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Blog content pipeline for a developer portfolio")]
#[command(long_about = "\
Blog content pipeline for a developer portfolio

Local markdown posts and an external article feed are merged into one
newest-first index with uniform fields.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── hello-world.md               # Post (id: hello-world.md)
  ├── 2024/
  │   └── astro-migration.mdx      # Nested post (id: 2024/astro-migration.mdx)
  └── _drafts/                     # Leading _ or . = ignored

Field resolution (first available wins):
  Slug:         frontmatter slug → file path without extension
  Brief:        frontmatter brief → first prose body line → empty
  Reading time: frontmatter readingTime → body words / words_per_minute

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// External RSS or Atom feed file to merge
    #[arg(long, global = true)]
    feed: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the merged post index and write it as JSON
    Index {
        /// Where to write the index
        #[arg(long, default_value = "dist/posts.json")]
        output: PathBuf,
    },
    /// List every tag with its post count
    Tags,
    /// Search titles, briefs and tags
    Search {
        query: String,
        /// 1-based result page
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Responsive image dimensions for an aspect ratio
    Dimensions {
        /// Ratio as "W/H", e.g. 16/9
        ratio: String,
        /// Grid position of the card
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        position: i64,
    },
    /// Bento grid layout for the first N cards
    Bento { count: usize },
    /// Classify a cover image URL
    CheckImage { url: String },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Index { output: out } => {
            let (_, posts) = load(&cli.source, cli.feed.as_deref())?;
            index::write_index(&posts, &out)?;
            output::print_index_output(&posts, &out);
        }
        Command::Tags => {
            let (_, posts) = load(&cli.source, cli.feed.as_deref())?;
            output::print_tags_output(&tags::get_tags_with_count(&posts));
        }
        Command::Search { query, page } => {
            let (site_config, posts) = load(&cli.source, cli.feed.as_deref())?;
            let matches: Vec<LightweightPost> = aggregate::search_posts(&posts, &query)
                .into_iter()
                .cloned()
                .collect();
            let per_page = site_config.pagination.posts_per_page;
            match aggregate::paginate(&matches, page, per_page) {
                Some(result) => output::print_search_output(&query, &result),
                None => return Err(format!("no page {page} for \"{query}\"").into()),
            }
        }
        Command::Dimensions { ratio, position } => {
            let dims = layout::calculate_image_dimensions(&ratio, position)?;
            println!("{}", serde_json::to_string_pretty(&dims)?);
        }
        Command::Bento { count } => {
            output::print_bento_output(&layout::bento_layout(count));
        }
        Command::CheckImage { url } => {
            let site_config = config::load_config(&cli.source)?;
            let classifier = ImageUrlClassifier::new(&site_config.images, &TracingDiagnostics);
            output::print_image_check(&url, classifier.classify(&url));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config from the content root, then build the index.
fn load(
    source: &Path,
    feed: Option<&Path>,
) -> Result<(config::SiteConfig, Vec<LightweightPost>), Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    let posts = index::load_index(source, feed, &site_config)?;
    Ok((site_config, posts))
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
