//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the kudos table.
    Deploy(DeployCommand),

    /// Insert sample kudos for a user.
    Seed(SeedCommand),
}

/// Deploy or destroy the kudos table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the kudos DynamoDB table.

By default, this command creates the table with a single `User` (S)
partition key and on-demand billing. An existing table is checked
against that key schema.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, default_value_t = config::default_table_name())]
    pub table_name: String,
}

/// Insert sample kudos for a user.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert sample kudos into DynamoDB.

Creates alternating pull request and issue kudos, one per day going back
from now. The table is keyed by user alone and keeps one kudo per login,
so the first kudo goes to --user and the following ones to numbered
logins (alice, alice-2, alice-3, ...).")]
pub struct SeedCommand {
    /// GitHub login the first kudo belongs to.
    #[arg(long)]
    pub user: String,

    /// Number of kudos to generate.
    #[arg(
        long,
        default_value = "10",
        value_parser = clap::value_parser!(u32).range(1..=seed::MAX_SEED_COUNT as i64)
    )]
    pub count: u32,

    /// Table name to use.
    #[arg(long, default_value_t = config::default_table_name())]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete this table? ALL KUDOS WILL BE LOST")
                .default(false)
                .interact()?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
    } else {
        let table_config = config::kudos_table_config().with_table_name(&cmd.table_name);
        let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in planning::format_deploy_plan(&plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else if line.starts_with('!') {
                    aprintln!("  {}", p_r(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        match plan {
            planning::DeployPlan::NoChanges { .. } => {
                if !global.is_silent() {
                    aprintln!("{}", p_g("Infrastructure is up to date."));
                }
                return Ok(());
            }
            planning::DeployPlan::KeySchemaMismatch { .. } => {
                return deploy::execute_deploy_plan(&dynamo_client, &plan).await;
            }
            planning::DeployPlan::CreateTable { .. } => {}
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Apply these changes?")
                .default(true)
                .interact()?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Applying changes..."));
        }

        deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!("{} {}", p_b("Table:"), cmd.table_name);
        aprintln!("{} {}", p_b("User:"), cmd.user);
        aprintln!("{} {}", p_b("Kudo count:"), cmd.count);
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;

    let table_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;
    if table_state.is_none() {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let kudos = seed::generate_seed_kudos(&cmd.user, chrono::Utc::now(), cmd.count);

    if !global.is_silent() {
        aprintln!("{}", p_c("Kudos to create:"));
        for kudo in kudos.iter().take(5) {
            aprintln!(
                "  {} {} - {} ({})",
                kudo.user,
                kudo.time.format("%Y-%m-%d"),
                kudo.contribution_name,
                seed::format_contribution_type(kudo.contribution_type)
            );
        }
        if kudos.len() > 5 {
            aprintln!("  ... and {} more", kudos.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {} kudos?", kudos.len()))
            .default(true)
            .interact()?;

        if !confirmed {
            return Err(DynamodbError::UserCancelled);
        }
    }

    let inserted = seed::seed_kudos(&dynamo_client, &cmd.table_name, &kudos).await?;

    if !global.is_silent() {
        aprintln!("{} {} kudos inserted.", p_g("Success:"), inserted);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_seed(args: &[&str]) -> std::result::Result<SeedCommand, clap::Error> {
        let argv = ["dynamodb", "seed"].iter().chain(args.iter());
        DynamodbCommand::try_parse_from(argv).map(|cmd| match cmd.action {
            DynamodbAction::Seed(seed) => seed,
            DynamodbAction::Deploy(_) => panic!("expected seed"),
        })
    }

    #[test]
    fn test_seed_defaults() {
        let cmd = parse_seed(&["--user", "alice"]).unwrap();

        assert_eq!(cmd.user, "alice");
        assert_eq!(cmd.count, 10);
        assert_eq!(cmd.table_name, "ecskudos-test-kudos");
        assert!(!cmd.force);
    }

    #[test]
    fn test_seed_count_is_bounded() {
        assert!(parse_seed(&["--user", "alice", "--count", "0"]).is_err());
        assert!(parse_seed(&["--user", "alice", "--count", "100000000"]).is_err());
        assert_eq!(
            parse_seed(&["--user", "alice", "--count", "1000"])
                .unwrap()
                .count,
            1000
        );
    }
}
