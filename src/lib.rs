pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ApiClient, HttpEmployeeRepository, InMemoryEmployeeRepository};
pub use config::ApiClientConfig;
pub use self::core::CreateEmployeeUseCase;
pub use domain::{
    Email, Employee, EmployeeChanges, EmployeeId, EmployeeProps, EmployeeRepository, NewEmployee,
};
pub use utils::error::{ApiError, EmployeeError, Result, ValidationError, ValidationErrorKind};
