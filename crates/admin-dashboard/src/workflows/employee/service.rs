use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info};

use super::domain::{Employee, EmployeeDraft, EmployeeField};
use super::repository::EmployeeRepository;
use crate::backend::BackendError;
use crate::config::BannerConfig;
use crate::workflows::banner::{Banner, BannerBoard};
use crate::workflows::view::{Panel, ScreenView};

pub const EMPLOYEE_ADDED: &str = "Employee added successfully!";

/// The employee screen has no list-local state; the list panel only shows the collection.
pub type EmployeeView = ScreenView<EmployeeDraft, ()>;

#[derive(Debug, Default)]
struct EmployeeState {
    generation: u64,
    employees: Vec<Employee>,
    view: EmployeeView,
}

/// Employee list/create workflow.
///
/// Cloning yields another handle onto the same screen, so long-running
/// requests can be driven from spawned tasks while the view keeps changing.
pub struct EmployeeScreen<R> {
    repository: Arc<R>,
    state: Arc<Mutex<EmployeeState>>,
    banner: BannerBoard,
}

impl<R> Clone for EmployeeScreen<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            state: Arc::clone(&self.state),
            banner: self.banner.clone(),
        }
    }
}

impl<R> EmployeeScreen<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>, banner: &BannerConfig) -> Self {
        Self {
            repository,
            state: Arc::new(Mutex::new(EmployeeState::default())),
            banner: BannerBoard::new(banner),
        }
    }

    /// Enter the screen: start a new lifetime, reset the view, fetch employees.
    pub async fn mount(&self) -> Result<(), EmployeeWorkflowError> {
        {
            let mut state = self.lock();
            state.generation += 1;
            state.view.close();
        }
        self.banner.dismiss();
        self.load_employees().await
    }

    /// Replace the local collection with the backend's. Failures are logged
    /// and leave the previous collection in place.
    pub async fn load_employees(&self) -> Result<(), EmployeeWorkflowError> {
        let generation = self.generation();
        match self.repository.list().await {
            Ok(employees) => {
                let mut state = self.lock();
                if state.generation != generation {
                    debug!(generation, "discarding employee list from a previous mount");
                    return Ok(());
                }
                debug!(count = employees.len(), "employees loaded");
                state.employees = employees;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "error fetching employees");
                Err(err.into())
            }
        }
    }

    pub fn toggle_form(&self) {
        self.lock().view.toggle_form();
    }

    pub fn toggle_list(&self) {
        self.lock().view.toggle_list();
    }

    /// Write a form field. Returns `false` when the form is not open.
    pub fn set_field(&self, field: EmployeeField, value: impl Into<String>) -> bool {
        match self.lock().view.form_mut() {
            Some(draft) => {
                draft.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Submit the open form.
    ///
    /// On success the form is hidden if it is still open, the success banner
    /// is shown and the collection re-fetched. On a backend failure the form
    /// stays as typed.
    pub async fn submit(&self) -> Result<(), EmployeeWorkflowError> {
        let (generation, employee) = {
            let state = self.lock();
            let draft = state
                .view
                .form()
                .ok_or(EmployeeWorkflowError::FormClosed)?;
            if !draft.has_required_fields() {
                return Err(EmployeeWorkflowError::MissingRequired);
            }
            (state.generation, draft.to_new_employee())
        };

        if let Err(err) = self.repository.create(&employee).await {
            error!(error = %err, "error adding employee");
            return Err(err.into());
        }
        info!(email = %employee.email, "employee added");

        {
            let mut state = self.lock();
            if state.generation != generation {
                debug!(generation, "employee saved after the screen was left");
                return Ok(());
            }
            // Only the form is hidden; a list opened meanwhile stays up.
            if state.view.form().is_some() {
                state.view.close();
            }
        }
        self.banner.show(Banner::success(EMPLOYEE_ADDED));

        // A failed refresh is logged by the load itself; the submission stands.
        let _ = self.load_employees().await;
        Ok(())
    }

    pub fn dismiss_banner(&self) {
        self.banner.dismiss();
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.lock().employees.clone()
    }

    pub fn view(&self) -> EmployeeView {
        self.lock().view.clone()
    }

    pub fn panel(&self) -> Panel {
        self.lock().view.panel()
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner.current()
    }

    fn generation(&self) -> u64 {
        self.lock().generation
    }

    fn lock(&self) -> MutexGuard<'_, EmployeeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Error raised by the employee workflow.
#[derive(Debug, thiserror::Error)]
pub enum EmployeeWorkflowError {
    #[error("Name and Email are required.")]
    MissingRequired,
    #[error("the add employee form is not open")]
    FormClosed,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl EmployeeWorkflowError {
    /// Whether the UI should interrupt the user with this error. Backend
    /// failures are only logged.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, EmployeeWorkflowError::Backend(_))
    }
}
