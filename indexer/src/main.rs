use anyhow::{bail, Context, Result};
use catindex_core::{
    filter_by_topic, to_inverted_index_string, to_inverted_pairs, CategoryIndexer, Document, Mode,
    WordCategoryMap,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;
use std::path::{Path, PathBuf};

mod loader;

#[derive(Parser)]
#[command(name = "catindex")]
#[command(about = "Map words to document categories and count content words", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the word-to-category map and print it as `category:word` entries
    Categories {
        /// Comma-separated categories to index: title, author, content or all
        #[arg(long, env = "CATINDEX_MODE", default_value = "all")]
        mode: String,
        /// Print one `category word` line per entry instead of the joined string
        #[arg(long, default_value_t = false)]
        pairs: bool,
        /// Print the map as a JSON object of word to category
        #[arg(long, default_value_t = false, conflicts_with = "pairs")]
        json: bool,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Count content words and print the counts as JSON
    Counts {
        /// Count stop words too
        #[arg(long, default_value_t = false)]
        keep_stop_words: bool,
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// JSON manifest of {"id", "path", "tags"} entries
    #[arg(long, conflicts_with_all = ["files", "dir"])]
    manifest: Option<PathBuf>,
    /// JSON document files, numbered from 1 in the given order
    #[arg(long, num_args = 1..)]
    files: Vec<PathBuf>,
    /// Directory searched recursively for .json documents (after --files)
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Topic tags given to documents read with --files or --dir
    #[arg(long, value_delimiter = ',', default_value = "general")]
    tags: Vec<String>,
    /// Only index documents tagged with this topic
    #[arg(long)]
    topic: Option<String>,
    /// Index documents on the rayon thread pool
    #[arg(long, default_value_t = false)]
    parallel: bool,
    /// Write the result here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Categories { mode, pairs, json, input } => {
            let format = if json {
                CategoryFormat::Json
            } else if pairs {
                CategoryFormat::Pairs
            } else {
                CategoryFormat::Joined
            };
            run_categories(&mode, format, &input)
        }
        Commands::Counts { keep_stop_words, input } => run_counts(keep_stop_words, &input),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CategoryFormat {
    Joined,
    Pairs,
    Json,
}

fn run_categories(mode: &str, format: CategoryFormat, input: &InputArgs) -> Result<()> {
    let mode: Mode = mode.parse()?;
    let docs = load_input(input)?;
    let selected = select(&docs, input.topic.as_deref());
    let indexer = CategoryIndexer::new(mode);

    let map = if input.parallel {
        indexer.build_category_map_par(&selected)?
    } else {
        indexer.build_category_map(&selected)?
    };

    let body = render_categories(&map, format)?;
    write_output(input.output.as_deref(), &body)
}

fn render_categories(map: &WordCategoryMap, format: CategoryFormat) -> Result<String> {
    let body = match format {
        CategoryFormat::Joined => to_inverted_index_string(map) + "\n",
        CategoryFormat::Pairs => to_inverted_pairs(map)
            .into_iter()
            .map(|(category, word)| format!("{category} {word}\n"))
            .collect(),
        CategoryFormat::Json => serde_json::to_string_pretty(map)? + "\n",
    };
    Ok(body)
}

fn run_counts(keep_stop_words: bool, input: &InputArgs) -> Result<()> {
    let docs = load_input(input)?;
    let selected = select(&docs, input.topic.as_deref());
    let indexer = CategoryIndexer::new(Mode::all()).with_skip_stop_words(!keep_stop_words);

    let counts = if input.parallel {
        indexer.build_word_count_map_par(&selected)?
    } else {
        indexer.build_word_count_map(&selected)?
    };
    let body = serde_json::to_string_pretty(&counts)? + "\n";
    write_output(input.output.as_deref(), &body)
}

fn load_input(input: &InputArgs) -> Result<Vec<Document>> {
    let docs = if let Some(manifest) = &input.manifest {
        loader::load_manifest(manifest)?
    } else {
        let mut files = input.files.clone();
        if let Some(dir) = &input.dir {
            files.extend(loader::collect_json_files(dir));
        }
        loader::load_files(&files, &input.tags)?
    };
    if docs.is_empty() {
        bail!("no input documents; pass --manifest, --files or --dir");
    }
    Ok(docs)
}

fn select<'a>(docs: &'a [Document], topic: Option<&str>) -> Vec<&'a Document> {
    match topic {
        Some(topic) => {
            let selected = filter_by_topic(docs, topic);
            tracing::info!(topic, selected = selected.len(), total = docs.len(), "filtered by topic");
            selected
        }
        None => docs.iter().collect(),
    }
}

fn write_output(output: Option<&Path>, body: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(output = %path.display(), bytes = body.len(), "wrote result");
        }
        None => print!("{body}"),
    }
    Ok(())
}
