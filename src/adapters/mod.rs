// Adapters layer: concrete implementations of the domain ports and the
// HTTP client they run on.

pub mod employee_repository;
pub mod http;
pub mod memory;

pub use employee_repository::{EmployeeDto, HttpEmployeeRepository};
pub use http::ApiClient;
pub use memory::InMemoryEmployeeRepository;
