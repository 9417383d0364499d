//! CLI entry point for blog-cards

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-cards")]
#[command(version)]
#[command(about = "Render blog post summary cards from headless CMS exports", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default _config.yml and a sample export
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render an article export to HTML
    #[command(alias = "r")]
    Render {
        /// Exported CMS response (`-` for stdin)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// HTML fragment appended after the grid
        #[arg(short, long)]
        trailing: Option<PathBuf>,
    },

    /// List the articles of an export
    List {
        /// Exported CMS response (`-` for stdin)
        input: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_cards=debug,info"
    } else {
        "blog_cards=info"
    };

    // Logs go to stderr so rendered HTML on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    // Relative paths are taken from the base directory
    let resolve = |path: PathBuf| {
        if path.is_absolute() || path.as_os_str() == "-" {
            path
        } else {
            base_dir.join(path)
        }
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            blog_cards::BlogCards::new(&target_dir)?.init()?;
            eprintln!("Initialized blog-cards site in {:?}", target_dir);
        }

        Commands::Render {
            input,
            output,
            trailing,
        } => {
            let app = blog_cards::BlogCards::new(&base_dir)?;
            let output = output.map(resolve);
            let trailing = trailing.map(resolve);
            app.render(&resolve(input), output.as_deref(), trailing.as_deref())?;
        }

        Commands::List { input } => {
            let app = blog_cards::BlogCards::new(&base_dir)?;
            app.list(&resolve(input))?;
        }

        Commands::Version => {
            println!("blog-cards version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
