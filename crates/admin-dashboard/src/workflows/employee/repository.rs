use std::future::Future;

use super::domain::{Employee, NewEmployee};
use crate::backend::BackendError;

/// Storage abstraction so the employee screen can be exercised without a live backend.
pub trait EmployeeRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Employee>, BackendError>> + Send;

    /// Any accepted submission counts as success; the created record is not needed.
    fn create(
        &self,
        employee: &NewEmployee,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;
}
