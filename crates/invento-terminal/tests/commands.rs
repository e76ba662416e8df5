//! End-to-end command runs. Each `run` is a fresh invocation over the same
//! storage, as separate processes would be.

#![allow(clippy::unwrap_used)]

use invento_app::AppConfig;
use invento_effects::{FilesystemStorageHandler, MemoryStorageHandler};
use invento_terminal::{CliHandler, Commands};

fn config() -> AppConfig {
    AppConfig {
        login_delay_ms: 0,
        ..AppConfig::default()
    }
}

async fn run(storage: &MemoryStorageHandler, command: Commands) -> anyhow::Result<String> {
    let mut handler = CliHandler::new(&config(), storage.clone())?;
    let mut out = Vec::new();
    handler.dispatch(command, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

fn login(email: &str) -> Commands {
    Commands::Login {
        email: email.to_string(),
        password: "secret".to_string(),
    }
}

fn open(view: &str) -> Commands {
    Commands::Open {
        view: view.to_string(),
    }
}

fn check(capability: &str, warehouse: Option<&str>) -> Commands {
    Commands::Check {
        capability: capability.to_string(),
        warehouse: warehouse.map(str::to_string),
    }
}

#[tokio::test]
async fn test_session_survives_between_invocations() {
    let storage = MemoryStorageHandler::new();

    let out = run(&storage, login("manager@invento.com")).await.unwrap();
    assert_eq!(out, "Signed in as Sarah Manager (Operations Manager)\n");

    let out = run(&storage, Commands::Whoami).await.unwrap();
    assert!(out.starts_with("Sarah Manager <manager@invento.com>"));
    assert!(out.contains("department:  Operations"));
    assert!(out.contains("warehouses:  branch-1, branch-2, main"));

    let out = run(&storage, Commands::Logout).await.unwrap();
    assert_eq!(out, "Signed out Sarah Manager\n");

    let out = run(&storage, Commands::Whoami).await.unwrap();
    assert_eq!(out, "Not signed in\n");
}

#[tokio::test]
async fn test_failed_login_leaves_no_session() {
    let storage = MemoryStorageHandler::new();

    let err = run(&storage, login("ghost@invento.com")).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");

    let err = run(
        &storage,
        Commands::Login {
            email: "admin@invento.com".into(),
            password: "ab".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Password must be at least 3 characters");

    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_views_follow_permissions() {
    let storage = MemoryStorageHandler::new();
    assert_eq!(run(&storage, Commands::Views).await.unwrap(), "Not signed in\n");

    run(&storage, login("viewer@invento.com")).await.unwrap();
    let out = run(&storage, Commands::Views).await.unwrap();
    let ids: Vec<&str> = out
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, ["dashboard", "inventory", "products", "reports"]);

    run(&storage, login("admin@invento.com")).await.unwrap();
    let out = run(&storage, Commands::Views).await.unwrap();
    assert_eq!(out.lines().count(), 14);
}

#[tokio::test]
async fn test_open_reports_render_instruction() {
    let storage = MemoryStorageHandler::new();
    assert_eq!(
        run(&storage, open("inventory")).await.unwrap(),
        "Please sign in first\n"
    );

    run(&storage, login("staff@invento.com")).await.unwrap();
    assert_eq!(
        run(&storage, open("inventory")).await.unwrap(),
        "Showing Inventory\n"
    );
    assert_eq!(
        run(&storage, open("system-admin")).await.unwrap(),
        "Access denied: system-admin requires admin.read\n"
    );
    assert_eq!(
        run(&storage, open("no-such-view")).await.unwrap(),
        "Showing Dashboard\n"
    );
}

#[tokio::test]
async fn test_check_capabilities_and_warehouses() {
    let storage = MemoryStorageHandler::new();
    run(&storage, login("staff@invento.com")).await.unwrap();

    assert_eq!(
        run(&storage, check("inventory.write", Some("main"))).await.unwrap(),
        "inventory.write: granted\nwarehouse main: granted\n"
    );
    assert_eq!(
        run(&storage, check("products.write", Some("branch-1"))).await.unwrap(),
        "products.write: denied\nwarehouse branch-1: denied\n"
    );
    assert_eq!(
        run(&storage, check("inventory.delete", None)).await.unwrap(),
        "inventory.delete: denied (not a known capability)\n"
    );
    assert!(run(&storage, check("inventory", None)).await.is_err());
}

#[tokio::test]
async fn test_roles_lists_all_four() {
    let storage = MemoryStorageHandler::new();
    let out = run(&storage, Commands::Roles).await.unwrap();
    assert!(out.starts_with("System Administrator (admin)\n"));
    assert!(out.contains("Read-Only Access (viewer)"));
    assert!(out.contains("  - Assigned warehouse access"));
}

#[tokio::test]
async fn test_filesystem_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage_dir: dir.path().to_path_buf(),
        ..config()
    };

    let mut handler =
        CliHandler::new(&config, FilesystemStorageHandler::new(&config.storage_dir)).unwrap();
    handler
        .dispatch(login("admin@invento.com"), &mut Vec::new())
        .await
        .unwrap();
    drop(handler);

    let handler =
        CliHandler::new(&config, FilesystemStorageHandler::new(&config.storage_dir)).unwrap();
    assert_eq!(
        handler.session().current_actor().unwrap().name,
        "John Admin"
    );
    assert_eq!(handler.router().current_view().as_str(), "dashboard");
}
