use std::fmt;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Centers,
    CenterDetails(String),
    BookAppointment,
    Tests,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Centers => "/centers".to_string(),
            Route::CenterDetails(id) => format!("/centers/{id}"),
            Route::BookAppointment => "/appointments/book".to_string(),
            Route::Tests => "/tests".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Records navigations instead of performing them.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<Route>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Route> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn current(&self) -> Option<Route> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for History {
    fn navigate(&self, route: Route) {
        tracing::debug!(to = %route, "navigate");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
