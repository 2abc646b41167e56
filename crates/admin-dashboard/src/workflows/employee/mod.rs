//! Employee screen: list the directory and add new employees.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{parse_ctc, Employee, EmployeeDraft, EmployeeField, EmployeeId, NewEmployee};
pub use repository::EmployeeRepository;
pub use service::{EmployeeScreen, EmployeeView, EmployeeWorkflowError, EMPLOYEE_ADDED};
