//! User roles and the dashboard menu each role sees.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Closed set of roles a signed-in user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Patient,
    Doctor,
    Staff,
}

/// One entry of the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const PATIENT_MENU: &[MenuItem] = &[MenuItem {
    id: "dashboard",
    label: "Dashboard",
    path: "/dashboard/user",
    description: "Your dashboard overview",
}];

const STAFF_MENU: &[MenuItem] = &[
    MenuItem {
        id: "overview",
        label: "Dashboard Overview",
        path: "/dashboard",
        description: "Main dashboard view",
    },
    MenuItem {
        id: "campaigns",
        label: "Create Campaigns",
        path: "/dashboard/create/campaigns",
        description: "Manage vaccination campaigns",
    },
    MenuItem {
        id: "allCampaigns",
        label: "All Campaigns",
        path: "/dashboard/campaigns",
        description: "Manage vaccination campaigns",
    },
    MenuItem {
        id: "bookings",
        label: "Bookings",
        path: "/dashboard/bookings",
        description: "Manage bookings",
    },
    MenuItem {
        id: "reviews",
        label: "Reviews",
        path: "/dashboard/reviews",
        description: "Customer reviews",
    },
    MenuItem {
        id: "analytics",
        label: "Analytics",
        path: "/dashboard/analytics",
        description: "Performance insights",
    },
];

impl Role {
    /// Resolve a role from the user payload's `role` field and `is_staff` flag.
    ///
    /// `is_staff` takes precedence over the role string.
    pub fn from_api(role: Option<&str>, is_staff: bool) -> Result<Self, CoreError> {
        if is_staff {
            return Ok(Self::Staff);
        }
        match role {
            Some(raw) => raw.parse(),
            None => Err(CoreError::UnknownRole(String::new())),
        }
    }

    /// Sidebar entries for this role.
    pub fn menu(self) -> &'static [MenuItem] {
        match self {
            Self::Patient => PATIENT_MENU,
            Self::Doctor | Self::Staff => STAFF_MENU,
        }
    }

    /// Landing path after sign-in, also where route guards send a user
    /// who lacks the role a screen requires.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Patient => "/dashboard/user",
            Self::Doctor | Self::Staff => "/dashboard",
        }
    }

    pub fn can_manage_campaigns(self) -> bool {
        matches!(self, Self::Doctor | Self::Staff)
    }

    /// Whether a screen restricted to `allowed` admits this role.
    pub fn is_allowed(self, allowed: &[Role]) -> bool {
        allowed.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "PATIENT",
            Self::Doctor => "DOCTOR",
            Self::Staff => "STAFF",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PATIENT" => Ok(Self::Patient),
            "DOCTOR" => Ok(Self::Doctor),
            "STAFF" | "IS_STAFF" => Ok(Self::Staff),
            _ => Err(CoreError::UnknownRole(raw.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
