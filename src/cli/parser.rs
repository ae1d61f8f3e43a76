use clap::{Parser, Subcommand};

/// Command-line interface definition for hydrotrack
#[derive(Parser)]
#[command(
    name = "hydrotrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small water intake tracker: log drinks against a daily goal, with midnight rollover and a 7-day chart",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Drink: increase today's total by the configured increment
    Add,

    /// Undo: decrease today's total by the configured increment (never below zero)
    Sub,

    /// Show today's total and goal progress
    Status,

    /// Show or change unit, goal and increment
    Settings {
        /// Display unit: ml, liters (l) or oz
        #[arg(long, short = 'u')]
        unit: Option<String>,

        /// Daily goal, in the selected unit
        #[arg(long, short = 'g')]
        goal: Option<String>,

        /// Amount per add/sub, in the selected unit
        #[arg(long, short = 'i')]
        increment: Option<String>,
    },

    /// Show the chart of the last days
    Stats {
        #[arg(long, help = "Print the chart dataset as JSON")]
        json: bool,

        #[arg(long, value_name = "N", help = "Number of days (default from config)")]
        days: Option<usize>,
    },

    /// Print the archived daily totals
    History,

    /// Print or export the wave geometry of one animation frame
    Wave {
        #[arg(long, default_value_t = 1, help = "Animation frame to render")]
        frame: u64,

        #[arg(long, value_name = "FILE", help = "Write an SVG document instead of path data")]
        svg: Option<String>,
    },

    /// Animated water tank; rolls the total over at midnight
    Watch {
        #[arg(long, value_name = "N", help = "Stop after N frames")]
        frames: Option<u64>,

        #[arg(long, help = "Frames per second (default from config)")]
        fps: Option<u32>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
