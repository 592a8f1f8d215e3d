use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use bayflow::models::{Choice, PhotoSlot, StageKind};
use bayflow::validation::{clap_discount_validator, clap_id_validator, clap_text_validator};

const HELP_TEMPLATE: &str = "
  ┌┐ ┌─┐┬ ┬┌─┐┬  ┌─┐┬ ┬
  ├┴┐├─┤└┬┘├┤ │  │ ││││
  └─┘┴ ┴ ┴ └  ┴─┘└─┘└┴┘

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "bayflow")]
#[command(about = "Stage-gated repair-shop job workflow", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize .work/ with a default config.toml
    Init {
        /// Shop name shown on invoices and the dashboard
        #[arg(long, value_parser = clap_text_validator)]
        shop_name: Option<String>,
    },

    /// Open, list, and inspect job cards
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },

    /// Work a stage's checklist
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Record customer decisions on recommended work
    Decision {
        #[command(subcommand)]
        command: DecisionCommands,
    },

    /// Move a job between stages
    Stage {
        #[command(subcommand)]
        command: StageCommands,
    },

    /// Show a job's stage strip
    Status {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
    },

    /// Show or discount a job's invoice
    Invoice {
        #[command(subcommand)]
        command: InvoiceCommands,
    },

    /// Service history and postponed repairs for a vehicle
    History {
        /// Vehicle reference, e.g. a registration number
        #[arg(value_parser = clap_text_validator)]
        vehicle: String,
    },

    /// Shop-wide job counts per stage
    Dashboard,

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

#[derive(Subcommand)]
pub enum JobCommands {
    /// Open a job on the standard blueprint
    Create {
        #[arg(value_parser = clap_text_validator)]
        vehicle: String,
        #[arg(value_parser = clap_text_validator)]
        customer: String,
    },

    /// List all jobs, oldest first
    List,

    /// Show a job's details and stages
    Show {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Mark a task done, or reopen it
    Toggle {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
        stage: StageKind,
        #[arg(value_parser = clap_id_validator)]
        task_id: String,
    },

    /// Record a QC issue on a task; the stage cannot advance until cleared
    Flag {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
        stage: StageKind,
        #[arg(value_parser = clap_id_validator)]
        task_id: String,
        #[arg(value_parser = clap_text_validator)]
        note: String,
    },

    /// Clear a task's QC issue
    Clear {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
        stage: StageKind,
        #[arg(value_parser = clap_id_validator)]
        task_id: String,
    },

    /// Attach a before or after photo to a task
    Photo {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
        stage: StageKind,
        #[arg(value_parser = clap_id_validator)]
        task_id: String,
        /// before or after
        slot: PhotoSlot,
        /// Path or URL of the photo
        #[arg(value_parser = clap_text_validator)]
        path: String,
    },
}

#[derive(Subcommand)]
pub enum DecisionCommands {
    /// Approve, postpone, or clear a decision
    Set {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
        stage: StageKind,
        #[arg(value_parser = clap_id_validator)]
        decision_id: String,
        /// approve, postpone, or unset
        choice: Choice,
    },
}

#[derive(Subcommand)]
pub enum StageCommands {
    /// Finalize the current stage and move to the next
    Advance {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
    },

    /// Step back to the previous stage
    Back {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
    },

    /// Show a stage's tasks and decisions (current stage by default)
    Show {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
        stage: Option<StageKind>,
    },
}

#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Print the invoice
    Show {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the discount percent (0 to 100)
    Discount {
        #[arg(value_parser = clap_id_validator)]
        job_id: String,
        #[arg(value_parser = clap_discount_validator, allow_hyphen_values = true)]
        percent: Decimal,
    },
}
