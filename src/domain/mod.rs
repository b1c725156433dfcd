// Domain layer: value objects, the employee entity and the repository port.
// Nothing here knows about HTTP or JSON.

pub mod model;
pub mod ports;
pub mod value_objects;

pub use model::{Employee, EmployeeChanges, EmployeeProps, NewEmployee};
pub use ports::EmployeeRepository;
pub use value_objects::{Email, EmployeeId};
