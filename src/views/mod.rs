//! Headless page view-models.
//!
//! Each view owns its page state behind a mutex so it can be cloned into a
//! spawned task; no lock is held across an await.

use std::sync::Arc;

use crate::api::BookingApi;
use crate::navigation::Navigator;
use crate::session::SessionContext;
use crate::toast::Toaster;

pub mod center_details;
pub mod dashboard;

pub use center_details::CenterDetailsView;
pub use dashboard::DashboardView;

/// Everything a page needs from its surroundings.
#[derive(Clone)]
pub struct ViewContext {
    pub api: Arc<dyn BookingApi>,
    pub session: SessionContext,
    pub toaster: Arc<dyn Toaster>,
    pub navigator: Arc<dyn Navigator>,
}
