use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use notegraph::index::build::{BuildRequest, build_site_auto, load_site_corpus};
use notegraph::index::check::check_links;
use notegraph::index::{BuildOptions, build};
use notegraph::output;
use notegraph::utils::find_site_root;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notegraph")]
#[command(about = "Build the search index and backlink map of a notes site")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Site directory (the root is auto-detected upwards)
    #[arg(short, long, default_value = ".", global = true)]
    path: PathBuf,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build search-index.json and backlinks.json (the default)
    Build {
        /// Content directory (overrides notegraph.json)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Primary output directory (overrides notegraph.json)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Mirror directory, written only if it exists
        #[arg(long, conflicts_with = "no_mirror")]
        mirror: Option<PathBuf>,

        /// Skip the mirror directory
        #[arg(long)]
        no_mirror: bool,
    },
    /// Report dangling references and shared titles
    Check {
        /// Exit with an error if any problem is found
        #[arg(long)]
        strict: bool,
    },
    /// List the notes that link to a note
    Backlinks {
        /// Slug of the target note
        slug: String,
    },
}

fn init_logging(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    let color = !cli.no_color;

    match cli.command {
        None => {
            let request = BuildRequest {
                quiet: cli.quiet,
                ..Default::default()
            };
            build_site_auto(&cli.path, request)?;
        }
        Some(Commands::Build {
            content,
            out,
            mirror,
            no_mirror,
        }) => {
            let request = BuildRequest {
                root: PathBuf::new(),
                content_dir: content,
                out_dir: out,
                mirror_dir: mirror,
                no_mirror,
                quiet: cli.quiet,
            };
            build_site_auto(&cli.path, request)?;
        }
        Some(Commands::Check { strict }) => {
            let root = find_site_root(&cli.path)?;
            let corpus = load_site_corpus(&root)?;
            let report = check_links(&corpus);

            if !cli.quiet {
                output::print_link_report(&report, corpus.len(), color)?;
            }
            if strict && report.has_problems() {
                bail!(
                    "{} dangling references, {} shared titles",
                    report.dangling.len(),
                    report.collisions.len()
                );
            }
        }
        Some(Commands::Backlinks { slug }) => {
            let root = find_site_root(&cli.path)?;
            let corpus = load_site_corpus(&root)?;
            if corpus.get(&slug).is_none() {
                bail!("No note with slug: {}", slug);
            }

            let built = build(&corpus, &BuildOptions::default());
            let entries = built.backlinks.get(&slug).map(Vec::as_slice).unwrap_or(&[]);
            output::print_backlinks(&slug, entries, color)?;
        }
    }

    Ok(())
}
