//! CLI entry point for blogr

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogr")]
#[command(version)]
#[command(about = "Blog content tooling: scaffold posts, lint front matter, wrap the site generator", long_about = None)]
struct Cli {
    /// Set the blog directory (defaults to current directory)
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
    /// Initialize a new blog directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post (prompted for when omitted)
        title: Option<String>,

        /// Slug to use instead of deriving one from the title
        #[arg(short, long)]
        slug: Option<String>,

        /// Mark the new post as a draft
        #[arg(long)]
        draft: bool,

        /// Do not open the editor after creating the file
        #[arg(long)]
        no_edit: bool,
    },

    /// List content
    List {
        /// Type of content to list (post, draft, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Validate front matter across the content tree
    Check,

    /// Build the site with the external generator
    #[command(alias = "b")]
    Build {
        /// Include draft posts
        #[arg(long)]
        drafts: bool,
    },

    /// Serve the site with the external generator
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "1111")]
        port: u16,

        /// Interface to bind to
        #[arg(short, long, default_value = "127.0.0.1")]
        interface: String,

        /// Include draft posts
        #[arg(long)]
        drafts: bool,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogr=debug,info"
    } else {
        "blogr=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli
        .cwd
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            blogr::commands::init::init_blog(&target_dir)?;
            println!("Initialized empty blog in {:?}", target_dir);
        }

        Commands::New {
            title,
            slug,
            draft,
            no_edit,
        } => {
            let blog = blogr::Blog::new(&base_dir)?;
            blogr::commands::new::run(&blog, title.as_deref(), slug.as_deref(), draft, no_edit)?;
        }

        Commands::List { r#type } => {
            let blog = blogr::Blog::new(&base_dir)?;
            blogr::commands::list::run(&blog, &r#type)?;
        }

        Commands::Check => {
            let blog = blogr::Blog::new(&base_dir)?;
            blogr::commands::check::run(&blog)?;
        }

        Commands::Build { drafts } => {
            let blog = blogr::Blog::new(&base_dir)?;
            tracing::info!("Building with {}...", blog.config.extra.generator.command);
            blogr::commands::build::run(&blog, drafts)?;
            println!("Build finished!");
        }

        Commands::Serve {
            port,
            interface,
            drafts,
            open,
        } => {
            let blog = blogr::Blog::new(&base_dir)?;
            tracing::info!("Serving at http://{}:{}", interface, port);
            blogr::commands::serve::run(&blog, &interface, port, drafts, open)?;
        }

        Commands::Clean => {
            let blog = blogr::Blog::new(&base_dir)?;
            tracing::info!("Cleaning output directory...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("blogr version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
