//! The signed-in identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::InventoError;
use crate::types::capability::{PermissionSet, WarehouseScope};
use crate::types::identifiers::ActorId;

/// Organisational role of an actor.
///
/// Roles are informational. Authorization is decided by the actor's
/// [`PermissionSet`], never by its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full system administration
    #[serde(rename = "admin")]
    Administrator,
    /// Operations management across warehouses
    Manager,
    /// Day-to-day warehouse work
    Staff,
    /// Read-only reporting
    Viewer,
}

impl Role {
    /// All roles, most privileged first.
    pub const ALL: [Role; 4] = [Role::Administrator, Role::Manager, Role::Staff, Role::Viewer];

    /// Serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
            Self::Viewer => "viewer",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Administrator => "System Administrator",
            Self::Manager => "Operations Manager",
            Self::Staff => "Warehouse Staff",
            Self::Viewer => "Read-Only Access",
        }
    }

    /// One-line summary.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Administrator => "Full system access with all permissions",
            Self::Manager => "Comprehensive business operations access",
            Self::Staff => "Day-to-day operational tasks",
            Self::Viewer => "View-only access for reporting and analysis",
        }
    }

    /// Feature highlights shown next to the role.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Self::Administrator => &[
                "Complete system control",
                "User management",
                "System configuration",
                "All warehouse access",
            ],
            Self::Manager => &[
                "Inventory management",
                "Sales operations",
                "Customer management",
                "Multi-warehouse access",
            ],
            Self::Staff => &[
                "Stock management",
                "Order processing",
                "Basic reporting",
                "Assigned warehouse access",
            ],
            Self::Viewer => &[
                "View inventory",
                "Access reports",
                "Product information",
                "Limited warehouse access",
            ],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InventoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| InventoError::invalid(format!("unknown role `{s}`")))
    }
}

/// An authenticated identity.
///
/// Actors are replaced wholesale on login and never partially mutated while
/// a session holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Opaque unique identifier
    pub id: ActorId,
    /// Display name
    pub name: String,
    /// Login address
    pub email: String,
    /// Department, display only
    pub department: String,
    /// Organisational role, display only
    pub role: Role,
    /// Capabilities held
    pub permissions: PermissionSet,
    /// Warehouses the actor may operate on
    pub warehouses: WarehouseScope,
    /// Time of the last successful authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl Actor {
    /// Create an actor with no permissions and no warehouses.
    pub fn new(
        id: impl Into<ActorId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            department: String::new(),
            role,
            permissions: PermissionSet::none(),
            warehouses: WarehouseScope::Only(Default::default()),
            last_login: None,
        }
    }

    /// Set the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Set the permission set.
    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }

    /// Set the warehouse scope.
    pub fn with_warehouses(mut self, warehouses: WarehouseScope) -> Self {
        self.warehouses = warehouses;
        self
    }

    /// Stamp the last login time.
    pub fn with_last_login(mut self, at: DateTime<Utc>) -> Self {
        self.last_login = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn manager() -> Actor {
        Actor::new("2", "Sarah Manager", "manager@invento.com", Role::Manager)
            .with_department("Operations")
            .with_permissions(PermissionSet::parse(["inventory.read", "sales.write"]).unwrap())
            .with_warehouses(WarehouseScope::parse(["main", "branch-1"]))
            .with_last_login(Utc.with_ymd_and_hms(2024, 1, 20, 9, 15, 0).unwrap())
    }

    #[test]
    fn actor_json_round_trip_is_exact() {
        let actor = manager();
        let json = serde_json::to_vec(&actor).unwrap();
        let back: Actor = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, actor);
    }

    #[test]
    fn wildcard_actor_round_trips() {
        let admin = Actor::new("1", "John Admin", "admin@invento.com", Role::Administrator)
            .with_permissions(PermissionSet::all())
            .with_warehouses(WarehouseScope::All);
        let json = serde_json::to_string(&admin).unwrap();
        assert!(json.contains(r#""role":"admin""#));
        assert!(json.contains(r#""permissions":["*"]"#));
        let back: Actor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, admin);
    }

    #[test]
    fn roles_parse_from_tags() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("owner".parse::<Role>().is_err());
    }
}
