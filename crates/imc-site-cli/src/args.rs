use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "imc-site")]
#[command(about = "Static site generator for the InternationalMC plugin catalog")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project directory holding site.toml (default: current directory)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the site into the output directory
    Build {
        /// Output directory (default: site.out_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Rewrite files even when unchanged
        #[arg(short, long)]
        force: bool,
    },

    /// List plugins
    List {
        /// Category filter (all, active, archived)
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Case-insensitive search over name, description and tags
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort order (downloads, name)
        #[arg(long, default_value = "downloads")]
        sort: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one plugin
    Show {
        /// Plugin id (e.g., valentines)
        id: String,
    },

    /// Catalog statistics
    Stats,

    /// Plugins supporting a Minecraft version
    Compatible {
        /// Minecraft version (e.g., 1.21)
        version: String,
    },

    /// Terms of Service document
    Terms {
        #[command(subcommand)]
        action: TermsAction,
    },

    /// Play the hero code preview in the terminal
    Preview,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TermsAction {
    /// Print the section outline and dates
    Show,

    /// Print the document as JSON
    Export,

    /// Replace the document from a JSON file and save it to terms.source
    Import {
        /// JSON file exported by `terms export`
        file: PathBuf,
    },

    /// Print one section
    Section {
        /// Section key (e.g., license)
        key: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Create site.toml with commented defaults
    Init,

    /// Get a config value
    Get {
        /// Config key (e.g., catalog.stagger_ms)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., site.assets_exclude)
        key: String,

        /// Value to set (e.g., "*.psd,drafts/*" or "[*.psd, drafts/*]")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,
}
