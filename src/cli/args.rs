use clap::{Parser, Subcommand, ValueEnum};

/// shotsweep — auto-destroy retention manager for screenshot folders
#[derive(Parser, Debug)]
#[command(
    name = "shotsweep",
    version,
    about = "Auto-destroy retention manager for screenshot folders",
    long_about = "shotsweep tracks screenshot folders under an auto-destroy policy:\n\
                   each tracked folder gets a retention period of 1-365 days after\n\
                   which its contents are eligible for deletion.",
    after_help = "EXAMPLES:\n  \
        shotsweep config init --sample         Set up with a sample catalog\n  \
        shotsweep enable                       Turn auto-destroy on\n  \
        shotsweep folders list --selectable    Folders not yet tracked\n  \
        shotsweep add f1 --days 30             Track folder f1 for 30 days\n  \
        shotsweep set f1 90                    Change retention to 90 days\n  \
        shotsweep list --format json           Tracked folders as JSON\n  \
        shotsweep remove f1                    Stop tracking f1\n  \
        shotsweep status                       Show the current policy"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the auto-destroy policy and data locations
    Status,

    /// Turn auto-destroy on
    Enable,

    /// Turn auto-destroy off
    Disable,

    /// List tracked folders
    List,

    /// Track a folder from the catalog
    Add {
        /// Catalog id of the folder to track
        folder_id: String,

        /// Retention period in days (1-365); defaults to the configured
        /// default
        #[arg(long)]
        days: Option<i64>,
    },

    /// Stop tracking a folder
    Remove {
        /// Id of the tracked folder
        folder_id: String,
    },

    /// Change a tracked folder's retention period (clamped to 1-365)
    Set {
        /// Id of the tracked folder
        folder_id: String,

        /// New retention period in days
        #[arg(allow_hyphen_values = true)]
        days: i64,
    },

    /// Manage the folder catalog
    Folders {
        #[command(subcommand)]
        action: FoldersAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum FoldersAction {
    /// List catalog folders
    List {
        /// Only show folders not yet tracked
        #[arg(long)]
        selectable: bool,
    },

    /// Register a new folder in the catalog
    Add {
        /// Display name
        name: String,

        /// Display icon (emoji or glyph)
        #[arg(long, default_value = "📁")]
        icon: String,

        /// Display color token
        #[arg(long, default_value = "#6366f1")]
        color: String,

        /// Current screenshot count
        #[arg(long, default_value = "0")]
        count: u64,
    },

    /// Import catalog records from a JSON file
    Import {
        /// Path to a JSON array of folder records
        file: String,
    },

    /// Show details about a catalog folder
    Show {
        /// Catalog id
        folder_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset to default configuration
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },

    /// Initialize shotsweep directories and default config
    Init {
        /// Also seed the catalog with sample folders
        #[arg(long)]
        sample: bool,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
