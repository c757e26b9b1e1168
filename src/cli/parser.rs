use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fieldlog
/// CLI application to log field-engineer site visits over a CSV visit log
#[derive(Parser)]
#[command(
    name = "fieldlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple field visit logging CLI: check in and out of sites, track dwell time",
    long_about = None
)]
pub struct Cli {
    /// Override visit log path (useful for tests or a shared log)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override master directory file path
    #[arg(global = true, long = "master-file")]
    pub master_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty visit log
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing files or fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Check in at a site (opens a visit session)
    Checkin {
        /// Site identifier, key into the master directory
        site_id: String,

        /// FE/Contractor name
        #[arg(long)]
        name: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Free-text remarks
        #[arg(long, default_value = "")]
        remarks: String,

        /// Latitude reported by the location provider
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude reported by the location provider
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Site photo to store alongside the visit
        #[arg(long)]
        photo: Option<String>,

        /// Record the visit as already completed (zero dwell)
        #[arg(long)]
        complete: bool,
    },

    /// Check out of a site (closes the open visit session)
    Checkout {
        /// Site identifier used at check-in
        site_id: String,

        /// FE/Contractor name used at check-in
        #[arg(long)]
        name: String,

        /// Replace the remarks recorded at check-in
        #[arg(long)]
        remarks: Option<String>,

        /// Site photo to store alongside the visit
        #[arg(long)]
        photo: Option<String>,
    },

    /// List visits
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", conflicts_with = "period", help = "Show only today's visits")]
        now: bool,

        #[arg(long, help = "Filter by FE/Contractor name (substring)")]
        name: Option<String>,

        #[arg(long, help = "Filter by region")]
        region: Option<String>,

        #[arg(long, help = "Filter by site id")]
        site: Option<String>,

        #[arg(long = "open", help = "Show only visits still open")]
        open_only: bool,

        #[arg(long, help = "Show aggregate counts after the table")]
        summary: bool,
    },

    /// Look up a site in the master directory
    Master {
        /// Site identifier
        site_id: String,
    },

    /// List stored site photos
    Photos,

    /// Print the operation log
    Log {
        #[arg(long = "print", help = "Print the operation log, newest first")]
        print: bool,

        #[arg(long, help = "Admin password, when one is configured")]
        password: Option<String>,
    },

    /// Create a backup copy of the visit log
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,

        #[arg(
            long,
            conflicts_with = "compress",
            help = "Compress the backup into a .tar.gz archive"
        )]
        tarball: bool,
    },

    /// Export visit data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Filter export by region")]
        region: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long, help = "Admin password, when one is configured")]
        password: Option<String>,
    },
}
