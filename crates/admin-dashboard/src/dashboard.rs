use std::sync::Arc;

use crate::backend::{BackendError, HttpBackend};
use crate::config::AppConfig;
use crate::workflows::employee::EmployeeScreen;
use crate::workflows::vendor::VendorScreen;

/// The two screens reachable from the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Employees,
    Vendors,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Employees, Route::Vendors];

    pub const fn path(self) -> &'static str {
        match self {
            Route::Employees => "/employees",
            Route::Vendors => "/vendors",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Route::Employees => "Employees",
            Route::Vendors => "Vendors",
        }
    }

    /// Accepts the route path with or without its leading slash.
    pub fn from_path(raw: &str) -> Option<Self> {
        let wanted = raw.trim().trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/').eq_ignore_ascii_case(wanted))
    }
}

/// Both screens wired to one HTTP backend.
#[derive(Clone)]
pub struct Dashboard {
    pub employees: EmployeeScreen<HttpBackend>,
    pub vendors: VendorScreen<HttpBackend, HttpBackend>,
}

impl Dashboard {
    pub fn connect(config: &AppConfig) -> Result<Self, BackendError> {
        let backend = Arc::new(HttpBackend::new(&config.backend)?);
        Ok(Self::with_backend(backend, config))
    }

    pub fn with_backend(backend: Arc<HttpBackend>, config: &AppConfig) -> Self {
        Self {
            employees: EmployeeScreen::new(backend.clone(), &config.banner),
            vendors: VendorScreen::new(backend.clone(), backend, &config.banner),
        }
    }

    /// Mount the screen behind `route`. Fetch failures are already logged by
    /// the screen and leave it empty, so they are not reported here.
    pub async fn navigate(&self, route: Route) {
        match route {
            Route::Employees => {
                let _ = self.employees.mount().await;
            }
            Route::Vendors => {
                let _ = self.vendors.mount().await;
            }
        }
    }
}
