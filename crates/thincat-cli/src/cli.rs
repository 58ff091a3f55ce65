use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "thincat",
    about = "Thincat: closure, functor search, and natural transformations over thin categories",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); THINCAT_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the closed relation of a category document
    Closure {
        /// Category document (.toml, otherwise JSON)
        category: String,

        /// Also verify the relation is reflexive and transitive
        #[arg(long)]
        verify: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decide whether an arrow exists between two objects
    Arrow {
        /// Category document (.toml, otherwise JSON)
        category: String,

        /// Source object
        from: String,

        /// Target object
        to: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enumerate every functor between two categories
    Functors {
        /// Source category document
        source: String,

        /// Target category document
        target: String,

        /// Only report how many functors exist
        #[arg(long)]
        count: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Order all functors between two categories by natural transformations
    Transform {
        /// Source category document
        source: String,

        /// Target category document
        target: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
