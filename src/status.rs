use std::fmt;

use serde::{Deserialize, Serialize};

/// Appointment lifecycle status as the backend spells it.
///
/// Every lookup below is an exhaustive `match`, so a new variant will not
/// compile until its badge, colour and permissions are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Scheduled,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Options offered by the status select on the center page.
pub const CENTER_STATUS_OPTIONS: [AppointmentStatus; 4] = [
    AppointmentStatus::Pending,
    AppointmentStatus::Confirmed,
    AppointmentStatus::Completed,
    AppointmentStatus::Cancelled,
];

/// Options offered by the status select on the dashboard.
pub const DASHBOARD_STATUS_OPTIONS: [AppointmentStatus; 3] = [
    AppointmentStatus::Scheduled,
    AppointmentStatus::Confirmed,
    AppointmentStatus::Cancelled,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
    Blue,
    Gray,
}

impl StatusColor {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusColor::Green => "bg-green-500",
            StatusColor::Yellow => "bg-yellow-500",
            StatusColor::Red => "bg-red-500",
            StatusColor::Blue => "bg-blue-500",
            StatusColor::Gray => "bg-gray-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPermissions {
    pub can_edit: bool,
    pub can_delete: bool,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Unknown => "unknown",
        }
    }

    /// Label used in status selects.
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Unknown => "Unknown",
        }
    }

    /// `None` for `Unknown`, which is never offered in a select or sent back.
    pub fn known(self) -> Option<Self> {
        match self {
            AppointmentStatus::Unknown => None,
            known => Some(known),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(AppointmentStatus::Pending),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            "scheduled" => Some(AppointmentStatus::Scheduled),
            _ => None,
        }
    }

    /// Badge on the center page.
    pub fn badge(self) -> BadgeVariant {
        match self {
            AppointmentStatus::Confirmed => BadgeVariant::Default,
            AppointmentStatus::Completed => BadgeVariant::Secondary,
            AppointmentStatus::Cancelled => BadgeVariant::Destructive,
            AppointmentStatus::Pending
            | AppointmentStatus::Scheduled
            | AppointmentStatus::Unknown => BadgeVariant::Outline,
        }
    }

    /// Badge colour on the dashboard.
    pub fn color(self) -> StatusColor {
        match self {
            AppointmentStatus::Confirmed => StatusColor::Green,
            AppointmentStatus::Pending => StatusColor::Yellow,
            AppointmentStatus::Cancelled => StatusColor::Red,
            AppointmentStatus::Completed => StatusColor::Blue,
            AppointmentStatus::Scheduled | AppointmentStatus::Unknown => StatusColor::Gray,
        }
    }

    /// Dashboard actions. Cancelled appointments can still be deleted but no
    /// longer edited; completed ones allow neither.
    pub fn permissions(self) -> StatusPermissions {
        match self {
            AppointmentStatus::Completed => StatusPermissions {
                can_edit: false,
                can_delete: false,
            },
            AppointmentStatus::Cancelled => StatusPermissions {
                can_edit: false,
                can_delete: true,
            },
            AppointmentStatus::Pending
            | AppointmentStatus::Confirmed
            | AppointmentStatus::Scheduled
            | AppointmentStatus::Unknown => StatusPermissions {
                can_edit: true,
                can_delete: true,
            },
        }
    }

    pub fn requires_reason(self) -> bool {
        matches!(self, AppointmentStatus::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
