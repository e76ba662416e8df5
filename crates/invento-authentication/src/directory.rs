//! The set of known actors.

use chrono::{TimeZone, Utc};
use invento_authorization::CapabilityCatalog;
use invento_core::{Actor, ActorId, InventoError, PermissionSet, Role, WarehouseScope};

use crate::credentials::Registration;
use crate::errors::AuthenticationError;

/// Capabilities granted to newly registered accounts.
pub const DEFAULT_REGISTRATION_PERMISSIONS: &[&str] = &[
    "inventory.read",
    "inventory.write",
    "products.read",
    "sales.read",
];

const DEFAULT_REGISTRATION_WAREHOUSE: &str = "main";
const DEFAULT_DEPARTMENT: &str = "General";

/// Lookup and enrolment of actors by email.
pub trait ActorDirectory: Send + Sync {
    /// Find the actor whose email matches `email`, ignoring case.
    fn find_by_email(&self, email: &str) -> Option<&Actor>;

    /// Add a new actor. Fails with [`AuthenticationError::AlreadyRegistered`]
    /// when the email is taken.
    fn enroll(&mut self, actor: Actor) -> Result<(), AuthenticationError>;
}

/// A directory held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    actors: Vec<Actor>,
}

struct DemoAccount {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    role: Role,
    permissions: &'static [&'static str],
    warehouses: &'static [&'static str],
    department: &'static str,
    last_login: (i32, u32, u32, u32, u32),
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: "1",
        name: "John Admin",
        email: "admin@invento.com",
        role: Role::Administrator,
        permissions: &["*"],
        warehouses: &["*"],
        department: "IT Administration",
        last_login: (2024, 1, 20, 10, 30),
    },
    DemoAccount {
        id: "2",
        name: "Sarah Manager",
        email: "manager@invento.com",
        role: Role::Manager,
        permissions: &[
            "inventory.read",
            "inventory.write",
            "products.read",
            "products.write",
            "sales.read",
            "sales.write",
            "reports.read",
            "customers.read",
            "customers.write",
            "transfers.read",
            "transfers.write",
            "warehouses.read",
            "analytics.read",
        ],
        warehouses: &["main", "branch-1", "branch-2"],
        department: "Operations",
        last_login: (2024, 1, 20, 9, 15),
    },
    DemoAccount {
        id: "3",
        name: "Mike Staff",
        email: "staff@invento.com",
        role: Role::Staff,
        permissions: &[
            "inventory.read",
            "inventory.write",
            "products.read",
            "sales.read",
            "sales.write",
            "transfers.read",
        ],
        warehouses: &["main"],
        department: "Warehouse Operations",
        last_login: (2024, 1, 20, 8, 45),
    },
    DemoAccount {
        id: "4",
        name: "Lisa Viewer",
        email: "viewer@invento.com",
        role: Role::Viewer,
        permissions: &["inventory.read", "products.read", "reports.read"],
        warehouses: &["main", "branch-1"],
        department: "Analytics",
        last_login: (2024, 1, 19, 16, 20),
    },
];

impl DemoAccount {
    fn to_actor(&self) -> Result<Actor, InventoError> {
        let (year, month, day, hour, minute) = self.last_login;
        let mut actor = Actor::new(self.id, self.name, self.email, self.role)
            .with_department(self.department)
            .with_permissions(PermissionSet::parse(self.permissions)?)
            .with_warehouses(WarehouseScope::parse(self.warehouses));
        actor.last_login = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single();
        Ok(actor)
    }
}

impl InMemoryDirectory {
    /// Build a directory, rejecting duplicate emails and capabilities outside
    /// `catalog`.
    pub fn new(actors: Vec<Actor>, catalog: &CapabilityCatalog) -> Result<Self, InventoError> {
        let mut directory = Self::default();
        for actor in actors {
            catalog.check_actor(&actor)?;
            directory.enroll(actor)?;
        }
        Ok(directory)
    }

    /// The four demo accounts: admin, manager, staff and viewer, all at
    /// `@invento.com`.
    pub fn demo() -> Result<Self, InventoError> {
        let actors = DEMO_ACCOUNTS
            .iter()
            .map(DemoAccount::to_actor)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(actors, &CapabilityCatalog::standard())
    }

    /// Every actor, in enrolment order.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }
}

impl ActorDirectory for InMemoryDirectory {
    fn find_by_email(&self, email: &str) -> Option<&Actor> {
        let needle = email.to_lowercase();
        self.actors
            .iter()
            .find(|actor| actor.email.to_lowercase() == needle)
    }

    fn enroll(&mut self, actor: Actor) -> Result<(), AuthenticationError> {
        if self.find_by_email(&actor.email).is_some() {
            return Err(AuthenticationError::AlreadyRegistered);
        }
        self.actors.push(actor);
        Ok(())
    }
}

/// Build the actor a registration creates: staff role, default permissions,
/// the `main` warehouse and a fresh id.
pub(crate) fn registered_actor(registration: &Registration) -> Result<Actor, InventoError> {
    let department = if registration.department.is_empty() {
        DEFAULT_DEPARTMENT
    } else {
        registration.department.as_str()
    };
    Ok(Actor::new(
        ActorId::generate(),
        registration.name.clone(),
        registration.email.clone(),
        Role::Staff,
    )
    .with_department(department)
    .with_permissions(PermissionSet::parse(DEFAULT_REGISTRATION_PERMISSIONS)?)
    .with_warehouses(WarehouseScope::parse([DEFAULT_REGISTRATION_WAREHOUSE])))
}

impl From<InventoError> for AuthenticationError {
    fn from(err: InventoError) -> Self {
        AuthenticationError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_directory_loads() {
        let directory = InMemoryDirectory::demo().unwrap();
        assert_eq!(directory.actors().len(), 4);

        let admin = directory.find_by_email("admin@invento.com").unwrap();
        assert!(admin.permissions.is_wildcard());
        assert!(admin.warehouses.is_wildcard());
        assert_eq!(admin.role, Role::Administrator);
    }

    #[test]
    fn lookup_ignores_case() {
        let directory = InMemoryDirectory::demo().unwrap();
        let viewer = directory.find_by_email("Viewer@INVENTO.com").unwrap();
        assert_eq!(viewer.name, "Lisa Viewer");
        assert!(directory.find_by_email("ghost@invento.com").is_none());
    }

    #[test]
    fn duplicate_emails_are_rejected() {
        let mut directory = InMemoryDirectory::demo().unwrap();
        let clash = Actor::new("5", "Clash", "STAFF@invento.com", Role::Staff);
        assert_eq!(
            directory.enroll(clash),
            Err(AuthenticationError::AlreadyRegistered)
        );
    }

    #[test]
    fn unknown_capabilities_fail_to_load() {
        let typo = Actor::new("5", "Typo", "typo@invento.com", Role::Staff)
            .with_permissions(PermissionSet::parse(["inventory.raed"]).unwrap());
        assert!(InMemoryDirectory::new(vec![typo], &CapabilityCatalog::standard()).is_err());
    }

    #[test]
    fn registered_actors_get_staff_defaults() {
        let actor = registered_actor(&Registration {
            name: "New Hire".into(),
            email: "new@invento.com".into(),
            password: "secret1".into(),
            department: String::new(),
        })
        .unwrap();
        assert_eq!(actor.role, Role::Staff);
        assert_eq!(actor.department, "General");
        assert_eq!(
            actor.permissions.listed().count(),
            DEFAULT_REGISTRATION_PERMISSIONS.len()
        );
        assert!(actor.warehouses.lists(&"main".into()));
    }
}
