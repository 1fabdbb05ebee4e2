use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, warn};

use crate::error::ClientError;
use crate::format::{display_amount, display_date, display_rating};
use crate::generation::RequestGeneration;
use crate::models::{Appointment, DiagnosticCenter, StatusUpdateRequest};
use crate::navigation::Route;
use crate::status::{AppointmentStatus, BadgeVariant, CENTER_STATUS_OPTIONS};
use crate::toast::Toast;
use crate::views::ViewContext;

/// Most appointments listed on the page.
pub const RECENT_APPOINTMENT_LIMIT: usize = 5;
/// Reason sent by the one-click cancel action.
pub const ADMIN_CANCELLATION_REASON: &str = "Cancelled by admin";

const CENTER_FETCH_FAILED: &str = "Failed to fetch center details";
const SELECT_STATUS: &str = "Select a status before saving";

/// Form behind the "Update Appointment" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEditForm {
    pub appointment_id: String,
    /// `None` until a known status is selected.
    pub status: Option<AppointmentStatus>,
    pub notes: String,
    pub cancellation_reason: String,
}

impl StatusEditForm {
    pub fn for_appointment(appointment: &Appointment) -> Self {
        Self {
            appointment_id: appointment.id.clone(),
            status: appointment.status.known(),
            notes: appointment.notes.clone().unwrap_or_default(),
            cancellation_reason: appointment.cancellation_reason.clone().unwrap_or_default(),
        }
    }

    /// The reason field is only shown, and only sent, while cancelling.
    pub fn shows_reason(&self) -> bool {
        self.status.is_some_and(AppointmentStatus::requires_reason)
    }

    /// `None` while no status is selected.
    pub fn request(&self) -> Option<StatusUpdateRequest> {
        Some(StatusUpdateRequest {
            status: self.status?,
            notes: Some(self.notes.clone()),
            cancellation_reason: self
                .shows_reason()
                .then(|| self.cancellation_reason.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CenterDetailsState {
    pub center: Option<DiagnosticCenter>,
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub appointments_loading: bool,
    pub error: Option<String>,
    pub edit: Option<StatusEditForm>,
}

impl Default for CenterDetailsState {
    fn default() -> Self {
        Self {
            center: None,
            appointments: Vec::new(),
            loading: true,
            appointments_loading: false,
            error: None,
            edit: None,
        }
    }
}

/// One row of the "Recent Appointments" card.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentCard {
    pub appointment_id: String,
    pub patient_name: String,
    pub status: AppointmentStatus,
    pub badge: BadgeVariant,
    pub test_name: String,
    pub schedule: String,
    pub amount: String,
    pub notes: Option<String>,
}

impl AppointmentCard {
    fn from_appointment(a: &Appointment) -> Self {
        let date = display_date(&a.appointment_date);
        let schedule = match a.appointment_time.as_deref() {
            Some(time) => format!("{date} at {time}"),
            None => date,
        };
        Self {
            appointment_id: a.id.clone(),
            patient_name: a.patient.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
            status: a.status,
            badge: a.status.badge(),
            test_name: a.test.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
            schedule,
            amount: display_amount(a.total_amount.unwrap_or(0.0)),
            notes: a.notes.clone().filter(|n| !n.is_empty()),
        }
    }
}

struct Inner {
    ctx: ViewContext,
    center_id: String,
    state: Mutex<CenterDetailsState>,
    center_generation: RequestGeneration,
    appointments_generation: RequestGeneration,
}

/// Center profile page: contact block, weekly hours, services,
/// administrator and the five most recent appointments with edit/cancel.
#[derive(Clone)]
pub struct CenterDetailsView {
    inner: Arc<Inner>,
}

impl CenterDetailsView {
    pub fn new(ctx: ViewContext, center_id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                ctx,
                center_id: center_id.into(),
                state: Mutex::new(CenterDetailsState::default()),
                center_generation: RequestGeneration::new(),
                appointments_generation: RequestGeneration::new(),
            }),
        }
    }

    pub fn center_id(&self) -> &str {
        &self.inner.center_id
    }

    fn state(&self) -> MutexGuard<'_, CenterDetailsState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> CenterDetailsState {
        self.state().clone()
    }

    /// Profile and appointment list are requested concurrently; each result
    /// lands in its own slice of state.
    pub async fn mount(&self) {
        if self.inner.center_id.is_empty() {
            return;
        }
        tokio::join!(self.load_center(), self.load_appointments());
    }

    /// Results still in flight are dropped when they arrive.
    pub fn unmount(&self) {
        self.inner.center_generation.invalidate();
        self.inner.appointments_generation.invalidate();
    }

    pub async fn load_center(&self) {
        let ticket = self.inner.center_generation.begin();
        let result = self.inner.ctx.api.get_center(&self.inner.center_id).await;
        if !self.inner.center_generation.is_current(ticket) {
            debug!(center_id = %self.inner.center_id, "discarding stale center profile");
            return;
        }

        let mut state = self.state();
        match result {
            Ok(center) => state.center = Some(center),
            Err(e) => {
                if e.is_transport() {
                    error!(center_id = %self.inner.center_id, "error fetching center details: {e}");
                }
                state.error = Some(CENTER_FETCH_FAILED.to_string());
            }
        }
        state.loading = false;
    }

    pub async fn load_appointments(&self) {
        let ticket = self.inner.appointments_generation.begin();
        self.state().appointments_loading = true;

        let Some(token) = self.inner.ctx.session.token() else {
            if self.inner.appointments_generation.is_current(ticket) {
                self.state().appointments_loading = false;
            }
            return;
        };

        let result = self
            .inner
            .ctx
            .api
            .center_appointments(&self.inner.center_id, &token)
            .await;
        if !self.inner.appointments_generation.is_current(ticket) {
            debug!(center_id = %self.inner.center_id, "discarding stale appointment list");
            return;
        }

        let mut state = self.state();
        match result {
            Ok(appointments) => state.appointments = appointments,
            Err(e) if e.is_transport() => error!("error fetching appointments: {e}"),
            Err(e) => debug!("appointment list unavailable: {e}"),
        }
        state.appointments_loading = false;
    }

    /// Up to five cards, in the order the backend listed them.
    pub fn recent_appointments(&self) -> Vec<AppointmentCard> {
        self.state()
            .appointments
            .iter()
            .take(RECENT_APPOINTMENT_LIMIT)
            .map(AppointmentCard::from_appointment)
            .collect()
    }

    /// The page's own address.
    pub fn route(&self) -> Route {
        Route::CenterDetails(self.inner.center_id.clone())
    }

    /// Opens the dialog pre-filled from the appointment. Returns false if the
    /// appointment is not on the page.
    pub fn open_edit(&self, appointment_id: &str) -> bool {
        let mut state = self.state();
        let form = state
            .appointments
            .iter()
            .find(|a| a.id == appointment_id)
            .map(StatusEditForm::for_appointment);
        let opened = form.is_some();
        if opened {
            state.edit = form;
        }
        opened
    }

    pub fn set_edit_status(&self, status: AppointmentStatus) {
        if let Some(form) = self.state().edit.as_mut() {
            form.status = status.known();
        }
    }

    pub fn set_edit_notes(&self, notes: impl Into<String>) {
        if let Some(form) = self.state().edit.as_mut() {
            form.notes = notes.into();
        }
    }

    pub fn set_edit_reason(&self, reason: impl Into<String>) {
        if let Some(form) = self.state().edit.as_mut() {
            form.cancellation_reason = reason.into();
        }
    }

    pub fn close_edit(&self) {
        self.state().edit = None;
    }

    /// Sends the dialog's status update. The dialog closes and the list is
    /// reloaded on success; on failure both stay as they were.
    pub async fn submit_edit(&self) {
        let Some(form) = self.state().edit.clone() else {
            return;
        };
        let Some(body) = form.request() else {
            self.inner
                .ctx
                .toaster
                .show(Toast::failure(SELECT_STATUS));
            return;
        };

        let result = self.send_status(&form.appointment_id, &body).await;
        match result {
            Ok(()) => {
                self.inner
                    .ctx
                    .toaster
                    .show(Toast::success("Appointment updated successfully"));
                self.state().edit = None;
                self.load_appointments().await;
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

    /// One-click cancel with a fixed reason.
    pub async fn cancel_appointment(&self, appointment_id: &str) {
        let body = StatusUpdateRequest {
            status: AppointmentStatus::Cancelled,
            notes: None,
            cancellation_reason: Some(ADMIN_CANCELLATION_REASON.to_string()),
        };

        match self.send_status(appointment_id, &body).await {
            Ok(()) => {
                self.inner
                    .ctx
                    .toaster
                    .show(Toast::success("Appointment cancelled successfully"));
                self.load_appointments().await;
            }
            Err(e) => {
                warn!(%appointment_id, "failed to cancel appointment: {e}");
                self.inner
                    .ctx
                    .toaster
                    .show(Toast::failure("Failed to cancel appointment"));
            }
        }
    }

    async fn send_status(
        &self,
        appointment_id: &str,
        body: &StatusUpdateRequest,
    ) -> Result<(), ClientError> {
        let token = self
            .inner
            .ctx
            .session
            .token()
            .ok_or(ClientError::MissingSession)?;
        self.inner
            .ctx
            .api
            .update_status(appointment_id, body, &token)
            .await
    }

    pub fn render(&self) -> String {
        CenterPage(&self.snapshot()).to_string()
    }
}

/// Text rendering of a center page snapshot.
struct CenterPage<'a>(&'a CenterDetailsState);

impl fmt::Display for CenterPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if state.loading {
            return writeln!(f, "Loading...");
        }

        let center = match (&state.error, &state.center) {
            (None, Some(center)) => center,
            (error, _) => {
                writeln!(f, "{}", error.as_deref().unwrap_or("Center not found"))?;
                return writeln!(f, "[Back to Centers] -> {}", Route::Centers);
            }
        };

        let status = if center.is_active { "Active" } else { "Inactive" };
        writeln!(f, "{} [{status}]", center.name)?;
        if let Some(description) = &center.description {
            writeln!(f, "{description}")?;
        }
        if let Some(rating) = center.rating {
            writeln!(f, "Rating: {}", display_rating(rating, center.total_reviews))?;
        }

        let a = &center.address;
        writeln!(f, "\nContact Information")?;
        writeln!(f, "  Address: {}", a.street)?;
        writeln!(f, "           {}, {} - {}", a.city, a.state, a.zip_code)?;
        writeln!(f, "           {}", a.country)?;
        writeln!(f, "  Phone: {}", center.phone)?;
        writeln!(f, "  Email: {}", center.email)?;

        writeln!(f, "\nOperating Hours")?;
        for (day, hours) in center.operating_hours.table() {
            writeln!(f, "  {day:<10} {hours}")?;
        }

        if let Some(services) = center.services.as_ref().filter(|s| !s.is_empty()) {
            writeln!(f, "\nServices Offered")?;
            writeln!(f, "  {}", services.join(" | "))?;
        }

        if let Some(admin) = &center.admin {
            writeln!(f, "\nCenter Administrator")?;
            writeln!(f, "  {}", admin.name)?;
            writeln!(f, "  {}", admin.email)?;
            writeln!(f, "  {}", admin.phone)?;
        }

        writeln!(f, "\nRecent Appointments")?;
        if state.appointments_loading {
            writeln!(f, "  Loading appointments...")?;
        } else if state.appointments.is_empty() {
            writeln!(f, "  No appointments found")?;
        } else {
            for a in state.appointments.iter().take(RECENT_APPOINTMENT_LIMIT) {
                let card = AppointmentCard::from_appointment(a);
                writeln!(f, "  - {} [{}] (#{})", card.patient_name, card.status, card.appointment_id)?;
                writeln!(f, "    {} | {} | {}", card.test_name, card.schedule, card.amount)?;
                if let Some(notes) = &card.notes {
                    writeln!(f, "    Notes: {notes}")?;
                }
            }
        }

        if let Some(form) = &state.edit {
            let options: Vec<&str> = CENTER_STATUS_OPTIONS.iter().map(|s| s.label()).collect();
            let selected = form.status.map_or("Select status", AppointmentStatus::label);
            writeln!(f, "\nUpdate Appointment #{}", form.appointment_id)?;
            writeln!(f, "  Status: {selected} ({})", options.join(", "))?;
            writeln!(f, "  Notes: {}", form.notes)?;
            if form.shows_reason() {
                writeln!(f, "  Cancellation Reason: {}", form.cancellation_reason)?;
            }
        }

        writeln!(f, "\n[Book Appointment] -> {}", Route::BookAppointment)?;
        writeln!(f, "[Back to Centers] -> {}", Route::Centers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, Call, FakeApi, Harness};
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn appointments(n: usize) -> Vec<Appointment> {
        (0..n)
            .map(|i| testing::appointment(&format!("a{i}"), AppointmentStatus::Pending))
            .collect()
    }

    async fn mounted(harness: &Harness) -> CenterDetailsView {
        let view = CenterDetailsView::new(harness.context(), "c1");
        view.mount().await;
        view
    }

    #[tokio::test]
    async fn test_lists_at_most_five_appointments() {
        for n in [0usize, 3, 5, 8] {
            let h = Harness::new(FakeApi::new(Some(testing::center()), appointments(n))).signed_in();
            let view = mounted(&h).await;
            assert_eq!(view.recent_appointments().len(), n.min(5), "n = {n}");
            assert_eq!(view.snapshot().appointments.len(), n);
        }
    }

    #[tokio::test]
    async fn test_render_shows_profile_blocks() {
        let mut center = testing::center();
        center.admin = Some(crate::models::ContactPerson {
            name: "Asha Menon".into(),
            email: "asha@sunrise.example".into(),
            phone: "99".into(),
        });
        let h = Harness::new(FakeApi::new(Some(center), appointments(1))).signed_in();
        let view = mounted(&h).await;

        let page = view.render();
        assert!(page.contains("Sunrise Diagnostics [Active]"));
        assert!(page.contains("Pune, Maharashtra - 411001"));
        assert!(page.contains("Monday     08:00 - 20:00"));
        assert!(page.contains("Sunday     Closed"));
        assert!(page.contains("Services Offered"));
        assert!(page.contains("Center Administrator"));
        assert!(page.contains("Rating: 4.6 / 5 (128 reviews)"));
        assert!(page.contains("Complete Blood Count | 1/5/2031 at 09:30 | ₹350"));
        assert!(page.contains("Notes: Fasting"));
    }

    #[tokio::test]
    async fn test_card_fields() {
        let mut a = testing::appointment("a1", AppointmentStatus::Cancelled);
        a.notes = None;
        let h = Harness::new(FakeApi::new(Some(testing::center()), vec![a])).signed_in();
        let view = mounted(&h).await;
        let cards = view.recent_appointments();
        assert_eq!(cards[0].badge, BadgeVariant::Destructive);
        assert_eq!(cards[0].patient_name, "Ravi Kumar");
        assert_eq!(cards[0].schedule, "1/5/2031 at 09:30");
        assert!(cards[0].notes.is_none());
    }

    #[tokio::test]
    async fn test_profile_failure_renders_error_and_back_link() {
        let h = Harness::new(FakeApi::new(None, vec![])).signed_in();
        let view = mounted(&h).await;

        let state = view.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch center details"));
        let page = view.render();
        assert!(page.starts_with("Failed to fetch center details"));
        assert!(page.contains("[Back to Centers] -> /centers"));
    }

    #[tokio::test]
    async fn test_loading_until_profile_resolves() {
        let h = Harness::new(FakeApi::new(Some(testing::center()), vec![]));
        let view = CenterDetailsView::new(h.context(), "c1");
        assert!(view.snapshot().loading);
        assert_eq!(view.render(), "Loading...\n");
    }

    #[tokio::test]
    async fn test_missing_token_skips_appointment_fetch() {
        let h = Harness::new(FakeApi::new(Some(testing::center()), appointments(2)));
        let view = mounted(&h).await;

        assert_eq!(h.api.calls(), vec![Call::GetCenter("c1".into())]);
        let state = view.snapshot();
        assert!(state.appointments.is_empty());
        assert!(!state.appointments_loading);
        assert!(h.toasts.toasts().is_empty());
        assert!(view.render().contains("No appointments found"));
    }

    #[tokio::test]
    async fn test_cancel_from_dialog_sends_reason() {
        let h = Harness::new(FakeApi::new(
            Some(testing::center()),
            vec![testing::appointment("a1", AppointmentStatus::Pending)],
        ))
        .signed_in();
        let view = mounted(&h).await;

        assert!(view.open_edit("a1"));
        view.set_edit_status(AppointmentStatus::Cancelled);
        view.set_edit_reason("Patient request");
        assert!(view.render().contains("Cancellation Reason: Patient request"));
        view.submit_edit().await;

        let sent = h
            .api
            .calls()
            .into_iter()
            .find_map(|c| match c {
                Call::UpdateStatus { appointment_id, body, token } => Some((appointment_id, body, token)),
                _ => None,
            })
            .unwrap();
        assert_eq!(sent.0, "a1");
        assert_eq!(sent.2, "tok-test");
        assert_eq!(
            serde_json::to_value(&sent.1).unwrap(),
            serde_json::json!({
                "status": "cancelled",
                "notes": "Fasting",
                "cancellationReason": "Patient request"
            })
        );

        let state = view.snapshot();
        assert!(state.edit.is_none());
        assert_eq!(state.appointments[0].status, AppointmentStatus::Cancelled);
        assert_eq!(h.toasts.toasts(), vec![Toast::success("Appointment updated successfully")]);
    }

    #[tokio::test]
    async fn test_reason_only_sent_when_cancelling() {
        let mut a = testing::appointment("a1", AppointmentStatus::Cancelled);
        a.cancellation_reason = Some("Travelling".into());
        let h = Harness::new(FakeApi::new(Some(testing::center()), vec![a])).signed_in();
        let view = mounted(&h).await;

        assert!(view.open_edit("a1"));
        assert_eq!(view.snapshot().edit.unwrap().cancellation_reason, "Travelling");
        view.set_edit_status(AppointmentStatus::Confirmed);
        view.set_edit_notes("");
        view.submit_edit().await;

        let body = h
            .api
            .calls()
            .into_iter()
            .find_map(|c| match c {
                Call::UpdateStatus { body, .. } => Some(body),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "status": "confirmed", "notes": "" })
        );
    }

    #[tokio::test]
    async fn test_failed_update_keeps_list_and_toasts_once() {
        let h = Harness::new(FakeApi::new(Some(testing::center()), appointments(3))).signed_in();
        let view = mounted(&h).await;
        let before = view.snapshot();

        h.api.fail_writes(true);
        assert!(view.open_edit("a1"));
        view.set_edit_status(AppointmentStatus::Confirmed);
        view.submit_edit().await;

        let after = view.snapshot();
        assert_eq!(after.appointments, before.appointments);
        assert!(after.edit.is_some(), "dialog stays open");
        let toasts = h.toasts.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0], Toast::failure("Failed to update appointment"));
    }

    #[tokio::test]
    async fn test_direct_cancel_uses_fixed_reason_and_refreshes() {
        let h = Harness::new(FakeApi::new(
            Some(testing::center()),
            vec![testing::appointment("a1", AppointmentStatus::Confirmed)],
        ))
        .signed_in();
        let view = mounted(&h).await;

        view.cancel_appointment("a1").await;

        let calls = h.api.calls();
        let body = calls
            .iter()
            .find_map(|c| match c {
                Call::UpdateStatus { body, .. } => Some(body.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "status": "cancelled", "cancellationReason": "Cancelled by admin" })
        );
        let list_fetches = calls
            .iter()
            .filter(|c| matches!(c, Call::CenterAppointments { .. }))
            .count();
        assert_eq!(list_fetches, 2);
        assert_eq!(view.snapshot().appointments[0].status, AppointmentStatus::Cancelled);
        assert_eq!(h.toasts.toasts(), vec![Toast::success("Appointment cancelled successfully")]);
    }

    #[tokio::test]
    async fn test_mutation_without_token_fails_without_request() {
        let h = Harness::new(FakeApi::new(Some(testing::center()), vec![]));
        let view = mounted(&h).await;

        view.cancel_appointment("a1").await;

        assert!(!h.api.calls().iter().any(|c| matches!(c, Call::UpdateStatus { .. })));
        assert_eq!(h.toasts.toasts(), vec![Toast::failure("Failed to cancel appointment")]);
    }

    #[tokio::test]
    async fn test_unrecognised_status_is_never_sent() {
        let h = Harness::new(FakeApi::new(
            Some(testing::center()),
            vec![testing::appointment("a1", AppointmentStatus::Unknown)],
        ))
        .signed_in();
        let view = mounted(&h).await;

        assert!(view.open_edit("a1"));
        assert_eq!(view.snapshot().edit.unwrap().status, None);
        assert!(view.render().contains("Status: Select status"));
        view.set_edit_notes("x");
        view.submit_edit().await;

        assert!(!h.api.calls().iter().any(|c| matches!(c, Call::UpdateStatus { .. })));
        assert_eq!(h.toasts.drain(), vec![Toast::failure("Select a status before saving")]);
        assert!(view.snapshot().edit.is_some());

        view.set_edit_status(AppointmentStatus::Unknown);
        view.submit_edit().await;
        assert!(!h.api.calls().iter().any(|c| matches!(c, Call::UpdateStatus { .. })));

        view.set_edit_status(AppointmentStatus::Confirmed);
        view.submit_edit().await;
        let body = h
            .api
            .calls()
            .into_iter()
            .find_map(|c| match c {
                Call::UpdateStatus { body, .. } => Some(body),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "status": "confirmed", "notes": "x" })
        );
    }

    #[test]
    fn test_route_points_at_center() {
        let h = Harness::new(FakeApi::new(None, vec![]));
        let view = CenterDetailsView::new(h.context(), "c1");
        assert_eq!(view.route().to_string(), "/centers/c1");
    }

    #[tokio::test]
    async fn test_open_edit_unknown_appointment() {
        let h = Harness::new(FakeApi::new(Some(testing::center()), appointments(1))).signed_in();
        let view = mounted(&h).await;
        assert!(!view.open_edit("missing"));
        assert!(view.snapshot().edit.is_none());
    }

    #[tokio::test]
    async fn test_empty_center_id_fetches_nothing() {
        let h = Harness::new(FakeApi::new(Some(testing::center()), vec![])).signed_in();
        let view = CenterDetailsView::new(h.context(), "");
        view.mount().await;
        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unmount_discards_late_profile() {
        let gate = Arc::new(Notify::new());
        let api = FakeApi::new(Some(testing::center()), vec![]);
        *api.hold_center.lock().unwrap() = Some(gate.clone());
        let h = Harness::new(api);
        let view = CenterDetailsView::new(h.context(), "c1");

        let task = tokio::spawn({
            let view = view.clone();
            async move { view.load_center().await }
        });
        while h.api.calls().is_empty() {
            tokio::task::yield_now().await;
        }
        view.unmount();
        gate.notify_one();
        task.await.unwrap();

        let state = view.snapshot();
        assert!(state.center.is_none());
        assert!(state.loading);
    }
}
