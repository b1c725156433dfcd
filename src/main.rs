use clap::Parser;
use employee_directory::adapters::employee_repository::EmployeeDto;
use employee_directory::config::cli::{CliConfig, Command};
use employee_directory::core::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetEmployeeUseCase, ListEmployeesUseCase,
    UpdateEmployeeUseCase,
};
use employee_directory::utils::{logger, validation::Validate};
use employee_directory::{
    ApiClient, EmployeeChanges, EmployeeError, EmployeeId, HttpEmployeeRepository,
    NewEmployee, Result,
};

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: CliConfig) -> Result<()> {
    let api_config = cli.api_config()?;
    api_config.validate()?;
    tracing::debug!("API config: {:?}", api_config);

    let repository = HttpEmployeeRepository::new(ApiClient::new(&api_config)?);

    match cli.command {
        Command::List => {
            let employees = ListEmployeesUseCase::new(repository).execute().await?;
            let dtos: Vec<EmployeeDto> = employees.iter().map(EmployeeDto::from).collect();
            print_json(&dtos)
        }
        Command::Get { id } => {
            let id = EmployeeId::new(id)?;
            match GetEmployeeUseCase::new(repository).execute(&id).await? {
                Some(employee) => print_json(&EmployeeDto::from(&employee)),
                None => Err(EmployeeError::repository(format!(
                    "Employee {} not found",
                    id
                ))),
            }
        }
        Command::Create(args) => {
            let employee = NewEmployee::from(args);
            let created = CreateEmployeeUseCase::new(repository)
                .execute(&employee)
                .await?;
            print_json(&EmployeeDto::from(&created))
        }
        Command::Update(args) => {
            let id = EmployeeId::new(args.id.clone())?;
            let changes = EmployeeChanges::from(&args);
            let updated = UpdateEmployeeUseCase::new(repository)
                .execute(&id, &changes)
                .await?;
            print_json(&EmployeeDto::from(&updated))
        }
        Command::Delete { id } => {
            let id = EmployeeId::new(id)?;
            DeleteEmployeeUseCase::new(repository).execute(&id).await?;
            tracing::info!("Employee {} deleted", id);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("❌ Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
