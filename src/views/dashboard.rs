use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, warn};

use crate::format::{date_input_value, display_date};
use crate::generation::RequestGeneration;
use crate::models::{Appointment, AppointmentUpdateRequest, SessionUser};
use crate::navigation::Route;
use crate::status::{AppointmentStatus, DASHBOARD_STATUS_OPTIONS, StatusColor};
use crate::toast::Toast;
use crate::views::ViewContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    pub route: QuickActionRoute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionRoute {
    BookAppointment,
    Centers,
    Tests,
}

impl QuickActionRoute {
    pub fn route(self) -> Route {
        match self {
            QuickActionRoute::BookAppointment => Route::BookAppointment,
            QuickActionRoute::Centers => Route::Centers,
            QuickActionRoute::Tests => Route::Tests,
        }
    }
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Book Appointment",
        description: "Schedule a new diagnostic appointment",
        button: "Book Now",
        route: QuickActionRoute::BookAppointment,
    },
    QuickAction {
        title: "Find Centers",
        description: "Browse diagnostic centers near you",
        button: "Browse",
        route: QuickActionRoute::Centers,
    },
    QuickAction {
        title: "View Tests",
        description: "Explore available diagnostic tests",
        button: "View Tests",
        route: QuickActionRoute::Tests,
    },
];

/// Form behind the "Edit Appointment" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentEditForm {
    pub appointment_id: String,
    /// `YYYY-MM-DD`
    pub appointment_date: String,
    /// `None` until a known status is selected.
    pub status: Option<AppointmentStatus>,
}

impl AppointmentEditForm {
    /// `None` while no status is selected.
    pub fn request(&self) -> Option<AppointmentUpdateRequest> {
        Some(AppointmentUpdateRequest {
            status: self.status?,
            appointment_date: self.appointment_date.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub user: Option<SessionUser>,
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub edit: Option<AppointmentEditForm>,
    /// Appointment awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            user: None,
            appointments: Vec::new(),
            loading: true,
            edit: None,
            pending_delete: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard {
    pub appointment_id: String,
    pub test_name: String,
    pub center_name: String,
    pub date: String,
    pub status: AppointmentStatus,
    pub color: StatusColor,
    pub edit_enabled: bool,
    pub delete_enabled: bool,
}

impl DashboardCard {
    fn from_appointment(a: &Appointment) -> Self {
        let permissions = a.status.permissions();
        Self {
            appointment_id: a.id.clone(),
            test_name: a
                .test
                .as_ref()
                .map(|t| t.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Test".to_string()),
            center_name: a
                .center
                .as_ref()
                .map(|c| c.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Center".to_string()),
            date: if a.appointment_date.is_empty() {
                String::new()
            } else {
                display_date(&a.appointment_date)
            },
            status: a.status,
            color: a.status.color(),
            edit_enabled: permissions.can_edit,
            delete_enabled: permissions.can_delete,
        }
    }
}

struct Inner {
    ctx: ViewContext,
    state: Mutex<DashboardState>,
    appointments_generation: RequestGeneration,
}

/// Signed-in patient's landing page.
#[derive(Clone)]
pub struct DashboardView {
    inner: Arc<Inner>,
}

impl DashboardView {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            inner: Arc::new(Inner {
                ctx,
                state: Mutex::new(DashboardState::default()),
                appointments_generation: RequestGeneration::new(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, DashboardState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state().clone()
    }

    /// Redirects to the login page unless both a token and a user record
    /// are in the session; otherwise loads the user's appointments.
    pub async fn mount(&self) {
        let session = &self.inner.ctx.session;
        let (Some(token), Some(user)) = (session.token(), session.user()) else {
            debug!("no session, redirecting to login");
            self.inner.ctx.navigator.navigate(Route::Login);
            return;
        };

        self.state().user = Some(user);
        self.fetch_appointments(&token).await;
    }

    pub fn unmount(&self) {
        self.inner.appointments_generation.invalidate();
    }

    async fn fetch_appointments(&self, token: &str) {
        let ticket = self.inner.appointments_generation.begin();
        let result = self.inner.ctx.api.my_appointments(token).await;
        if !self.inner.appointments_generation.is_current(ticket) {
            debug!("discarding stale appointment list");
            return;
        }

        let mut state = self.state();
        match result {
            Ok(appointments) => state.appointments = appointments,
            Err(e) if e.is_transport() => error!("error fetching appointments: {e}"),
            Err(e) => debug!("appointment list unavailable: {e}"),
        }
        state.loading = false;
    }

    pub fn cards(&self) -> Vec<DashboardCard> {
        self.state()
            .appointments
            .iter()
            .map(DashboardCard::from_appointment)
            .collect()
    }

    /// Opens the edit dialog. Ignored (returns false) for unknown ids and for
    /// completed or cancelled appointments.
    pub fn open_edit(&self, appointment_id: &str) -> bool {
        let mut state = self.state();
        let form = state
            .appointments
            .iter()
            .find(|a| a.id == appointment_id)
            .filter(|a| a.status.permissions().can_edit)
            .map(|a| AppointmentEditForm {
                appointment_id: a.id.clone(),
                appointment_date: date_input_value(&a.appointment_date),
                status: a.status.known(),
            });
        let opened = form.is_some();
        if opened {
            state.edit = form;
        }
        opened
    }

    pub fn set_edit_date(&self, date: impl Into<String>) {
        if let Some(form) = self.state().edit.as_mut() {
            form.appointment_date = date.into();
        }
    }

    pub fn set_edit_status(&self, status: AppointmentStatus) {
        if let Some(form) = self.state().edit.as_mut() {
            form.status = status.known();
        }
    }

    pub fn close_edit(&self) {
        self.state().edit = None;
    }

    pub async fn submit_edit(&self) {
        let Some(form) = self.state().edit.clone() else {
            return;
        };
        let Some(token) = self.inner.ctx.session.token() else {
            return;
        };
        let Some(body) = form.request() else {
            self.inner
                .ctx
                .toaster
                .show(Toast::failure("Select a status before saving"));
            return;
        };

        debug!(appointment_id = %form.appointment_id, "updating appointment");
        let result = self
            .inner
            .ctx
            .api
            .update_appointment(&form.appointment_id, &body, &token)
            .await;
        match result {
            Ok(()) => {
                self.inner
                    .ctx
                    .toaster
                    .show(Toast::success("Appointment updated successfully"));
                self.state().edit = None;
                self.fetch_appointments(&token).await;
            }
            Err(e) => {
                warn!(appointment_id = %form.appointment_id, "failed to update appointment: {e}");
                self.inner
                    .ctx
                    .toaster
                    .show(Toast::failure("Failed to update appointment"));
            }
        }
    }

    /// Opens the delete confirmation. Ignored (returns false) for unknown ids
    /// and completed appointments.
    pub fn request_delete(&self, appointment_id: &str) -> bool {
        let mut state = self.state();
        let allowed = state
            .appointments
            .iter()
            .any(|a| a.id == appointment_id && a.status.permissions().can_delete);
        if allowed {
            state.pending_delete = Some(appointment_id.to_string());
        }
        allowed
    }

    pub fn cancel_delete(&self) {
        self.state().pending_delete = None;
    }

    pub async fn confirm_delete(&self) {
        let Some(appointment_id) = self.state().pending_delete.clone() else {
            return;
        };
        let Some(token) = self.inner.ctx.session.token() else {
            return;
        };

        debug!(%appointment_id, "deleting appointment");
        match self
            .inner
            .ctx
            .api
            .delete_appointment(&appointment_id, &token)
            .await
        {
            Ok(()) => {
                self.inner
                    .ctx
                    .toaster
                    .show(Toast::success("Appointment deleted successfully"));
                self.state().pending_delete = None;
                self.fetch_appointments(&token).await;
            }
            Err(e) => {
                warn!(%appointment_id, "failed to delete appointment: {e}");
                self.inner
                    .ctx
                    .toaster
                    .show(Toast::failure("Failed to delete appointment"));
            }
        }
    }

    pub fn logout(&self) {
        if let Err(e) = self.inner.ctx.session.clear() {
            error!("failed to clear session: {e}");
        }
        self.inner.ctx.navigator.navigate(Route::Home);
    }

    pub fn render(&self) -> String {
        DashboardPage(&self.snapshot()).to_string()
    }
}

fn enabled(on: bool) -> &'static str {
    if on { "enabled" } else { "disabled" }
}

/// Text rendering of a dashboard snapshot.
struct DashboardPage<'a>(&'a DashboardState);

impl fmt::Display for DashboardPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if state.loading {
            return writeln!(f, "Loading...");
        }

        write!(f, "HealthCare System")?;
        if let Some(user) = &state.user {
            write!(f, "  |  {} [{}]", user.name, user.role)?;
        }
        writeln!(f, "  |  [Logout]")?;
        writeln!(f, "\nDashboard\n")?;

        for action in QUICK_ACTIONS {
            writeln!(f, "{}: {}", action.title, action.description)?;
            writeln!(f, "  [{}] -> {}", action.button, action.route.route())?;
        }

        writeln!(f, "\nRecent Appointments")?;
        writeln!(f, "Your latest appointment bookings")?;
        if state.appointments.is_empty() {
            writeln!(
                f,
                "  No appointments found. Book your first appointment -> {}",
                Route::BookAppointment
            )?;
        }
        for card in state.appointments.iter().map(DashboardCard::from_appointment) {
            writeln!(
                f,
                "  - {} @ {} {} [{}] {} (#{})",
                card.test_name,
                card.center_name,
                card.date,
                card.status,
                card.color.css_class(),
                card.appointment_id
            )?;
            writeln!(
                f,
                "    edit: {}  delete: {}",
                enabled(card.edit_enabled),
                enabled(card.delete_enabled)
            )?;
        }

        if let Some(form) = &state.edit {
            let options: Vec<&str> = DASHBOARD_STATUS_OPTIONS.iter().map(|s| s.label()).collect();
            let selected = form.status.map_or("Select status", AppointmentStatus::label);
            writeln!(f, "\nEdit Appointment #{}", form.appointment_id)?;
            writeln!(f, "  Date: {}", form.appointment_date)?;
            writeln!(f, "  Status: {selected} ({})", options.join(", "))?;
        }
        if let Some(id) = &state.pending_delete {
            writeln!(f, "\nDelete Appointment #{id}? This action cannot be undone.")?;
        }
        Ok(())
    }
}
