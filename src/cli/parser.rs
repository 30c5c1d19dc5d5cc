use crate::export::{ExportDataset, ExportFormat};
use crate::models::{FilterOrder, MasterDuplicates, PlannedMatch, TieBreak};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for orkpi
#[derive(Parser)]
#[command(
    name = "orkpi",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate the planned vs. unplanned work-order KPI from spreadsheet extractions",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostics on stderr: -v info, -vv debug, -vvv trace (RUST_LOG wins)
    #[arg(global = true, short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// The spreadsheet exports of one run.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Work-order extraction, already processed (with the "Planifié ?" column)
    #[arg(long, short = 'x', value_name = "FILE")]
    pub extraction: Option<PathBuf>,

    /// Raw timesheet ("pointage")
    #[arg(long, short = 't', value_name = "FILE")]
    pub timesheet: Option<PathBuf>,

    /// Equipment table with manufacturers (optional)
    #[arg(long, short = 'q', value_name = "FILE")]
    pub equipment: Option<PathBuf>,
}

/// Filter selection and business-rule overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Positions to include (repeat the flag for several; default: all)
    #[arg(long = "position", value_name = "POSITION")]
    pub positions: Vec<String>,

    /// Manufacturers to include (repeat the flag for several; default: all)
    #[arg(long = "manufacturer", value_name = "NAME")]
    pub manufacturers: Vec<String>,

    /// Who owns a work order when several technicians logged hours
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// How the status text is recognised as planned
    #[arg(long, value_enum)]
    pub planned_match: Option<PlannedMatch>,

    /// Whether the manufacturer filter shapes the KPI or only the drill-down
    #[arg(long, value_enum)]
    pub filter_order: Option<FilterOrder>,

    /// Reduce or reject an extraction that repeats work-order keys
    #[arg(long, value_enum)]
    pub master_duplicates: Option<MasterDuplicates>,

    /// Ignore the field-location rule and keep every location
    #[arg(long = "all-locations")]
    pub all_locations: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// List the positions and manufacturers found in the inputs
    Categories {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// Compute the KPI and print metrics, chart and detail table
    Report {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        rules: RuleArgs,

        #[arg(long, value_name = "N", help = "Detail rows to print (0 = all)")]
        limit: Option<usize>,

        #[arg(long, help = "Print the report as JSON instead of tables")]
        json: bool,
    },

    /// Export the report to a file
    Export {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        rules: RuleArgs,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(
            long,
            value_enum,
            default_value = "detail",
            help = "Table written by single-table formats (csv)"
        )]
        dataset: ExportDataset,

        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
