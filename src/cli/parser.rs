use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for bike
#[derive(Parser)]
#[command(
    name = "bike",
    version = env!("CARGO_PKG_VERSION"),
    about = "Gather statistics about bike rides stored in a plain text file",
    long_about = None
)]
pub struct Cli {
    /// Override the rides file path (useful for tests or several logs)
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(global = true, short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty rides file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Add a new ride
    Add {
        /// Distance in km (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        distance: Option<String>,

        /// Duration: decimal hours, HH:MM, HHhMM or HHh (prompted for when omitted)
        #[arg(allow_negative_numbers = true)]
        duration: Option<String>,

        #[arg(long, short = 'c', help = "Free text comment")]
        comment: Option<String>,

        #[arg(long, short = 'u', help = "URL of the itinerary")]
        url: Option<String>,
    },

    /// Print statistics about rides
    Stats {
        /// Year(s) to include (default: configured period, usually the current year)
        years: Vec<i32>,

        /// Filter by period.
        ///
        /// Supported formats:
        /// - all, year, month
        /// - YYYY, YYYY-MM, YYYY-MM-DD
        /// - ranges in the same format: YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
        #[arg(long, short = 'p', help = "Filter by year/month/day, a range, or 'all'")]
        period: Option<String>,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// Print rides as a table
    Rides {
        /// Year(s) to include (default: configured period, usually the current year)
        years: Vec<i32>,

        #[arg(long, short = 'p', help = "Filter by year/month/day, a range, or 'all'")]
        period: Option<String>,
    },

    /// Open the itinerary URL of a ride in the web browser
    View {
        /// Ride id, as shown by `bike rides`
        ride_id: usize,

        #[arg(long, help = "Only print the URL")]
        print: bool,
    },

    /// Import a ride from a Wahoo CSV export
    Import {
        /// Wahoo CSV file
        filename: String,

        /// Comment for the ride (default: "Imported from Wahoo")
        #[arg(trailing_var_arg = true)]
        comment: Vec<String>,
    },

    /// Rewrite a rides file that still uses YYYY-MM-DD timestamps
    Migrate,

    /// Open the rides file in a text editor
    Edit {
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
