use anyhow::Result;
use bayflow::commands::{
    dashboard, decision, history, init, invoice, job, stage, status, task, ShopContext,
};
use bayflow::completions::{generate_completions, Shell};
use std::path::Path;
use std::str::FromStr;

use super::types::{
    Cli, Commands, DecisionCommands, InvoiceCommands, JobCommands, StageCommands, TaskCommands,
};

pub fn dispatch(command: Commands, base: &Path) -> Result<()> {
    match command {
        Commands::Init { shop_name } => init::execute(base, shop_name),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate_completions(&mut cmd, shell, &mut std::io::stdout());
            Ok(())
        }
        command => {
            let ctx = ShopContext::open(base)?;
            dispatch_shop(command, &ctx)
        }
    }
}

fn dispatch_shop(command: Commands, ctx: &ShopContext) -> Result<()> {
    match command {
        Commands::Job { command } => match command {
            JobCommands::Create { vehicle, customer } => {
                job::create(ctx, vehicle, customer).map(|_| ())
            }
            JobCommands::List => job::list(ctx),
            JobCommands::Show { job_id } => job::show(ctx, &job_id),
        },
        Commands::Task { command } => match command {
            TaskCommands::Toggle {
                job_id,
                stage,
                task_id,
            } => task::toggle(ctx, &job_id, stage, &task_id),
            TaskCommands::Flag {
                job_id,
                stage,
                task_id,
                note,
            } => task::flag(ctx, &job_id, stage, &task_id, note),
            TaskCommands::Clear {
                job_id,
                stage,
                task_id,
            } => task::clear(ctx, &job_id, stage, &task_id),
            TaskCommands::Photo {
                job_id,
                stage,
                task_id,
                slot,
                path,
            } => task::photo(ctx, &job_id, stage, &task_id, slot, path),
        },
        Commands::Decision { command } => match command {
            DecisionCommands::Set {
                job_id,
                stage,
                decision_id,
                choice,
            } => decision::set(ctx, &job_id, stage, &decision_id, choice),
        },
        Commands::Stage { command } => match command {
            StageCommands::Advance { job_id } => stage::advance(ctx, &job_id),
            StageCommands::Back { job_id } => stage::back(ctx, &job_id),
            StageCommands::Show { job_id, stage } => stage::show(ctx, &job_id, stage),
        },
        Commands::Status { job_id } => status::execute(ctx, &job_id),
        Commands::Invoice { command } => match command {
            InvoiceCommands::Show { job_id, json } => invoice::show(ctx, &job_id, json),
            InvoiceCommands::Discount { job_id, percent } => {
                invoice::discount(ctx, &job_id, percent)
            }
        },
        Commands::History { vehicle } => history::execute(ctx, &vehicle),
        Commands::Dashboard => dashboard::execute(ctx),
        Commands::Init { .. } | Commands::Completions { .. } => Ok(()),
    }
}
