use crate::config::ApiClientConfig;
use crate::domain::{EmployeeChanges, NewEmployee};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "employee-directory")]
#[command(about = "Manage employee records through the Employee API")]
pub struct CliConfig {
    /// TOML file with an [api] table
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overrides api.base_address
    #[arg(long)]
    pub base_address: Option<String>,

    /// Overrides api.timeout_ms
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every employee
    List,
    /// Show one employee
    Get { id: String },
    /// Register a new employee
    Create(CreateArgs),
    /// Change some fields of an employee
    Update(UpdateArgs),
    /// Remove an employee
    Delete { id: String },
}

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub department: String,
    #[arg(long)]
    pub position: String,
    /// ISO-8601 date or timestamp, e.g. 2023-01-01
    #[arg(long, value_parser = parse_date_arg)]
    pub hire_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long, value_parser = parse_date_arg)]
    pub hire_date: Option<DateTime<Utc>>,
}

fn parse_date_arg(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    crate::adapters::employee_repository::parse_hire_date(value).map_err(|e| e.to_string())
}

impl CliConfig {
    /// File settings first, then environment overrides, then flags.
    pub fn api_config(&self) -> Result<ApiClientConfig> {
        let base = match &self.config {
            Some(path) => ApiClientConfig::from_file(path)?,
            None => ApiClientConfig::default(),
        };
        let mut config = base.with_env_overrides()?;

        if let Some(base_address) = &self.base_address {
            config.base_address = base_address.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        Ok(config)
    }
}

impl From<CreateArgs> for NewEmployee {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            department: args.department,
            position: args.position,
            hire_date: args.hire_date,
        }
    }
}

impl From<&UpdateArgs> for EmployeeChanges {
    fn from(args: &UpdateArgs) -> Self {
        Self {
            name: args.name.clone(),
            email: args.email.clone(),
            department: args.department.clone(),
            position: args.position.clone(),
            hire_date: args.hire_date,
        }
    }
}
