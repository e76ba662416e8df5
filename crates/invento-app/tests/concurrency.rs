//! Overlapping logins sharing one session store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use invento_app::SessionStore;
use invento_authentication::{Authenticator, Credentials, InMemoryDirectory};
use invento_effects::MemoryStorageHandler;
use parking_lot::Mutex;

#[tokio::test(start_paused = true)]
async fn test_second_login_wins() {
    let storage = MemoryStorageHandler::new();
    let session = Arc::new(Mutex::new(SessionStore::init(storage.clone(), "invento-user")));
    let slow = Arc::new(InMemoryDirectory::demo().map(Authenticator::new).unwrap());
    let fast = Arc::new(
        InMemoryDirectory::demo()
            .map(Authenticator::new)
            .unwrap()
            .with_delay(Duration::from_millis(10)),
    );

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            let actor = slow
                .authenticate(&Credentials::new("admin@invento.com", "admin"))
                .await
                .unwrap();
            session.lock().login(actor);
        })
    };
    let second = {
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            let actor = fast
                .authenticate(&Credentials::new("viewer@invento.com", "view"))
                .await
                .unwrap();
            session.lock().login(actor);
        })
    };

    second.await.unwrap();
    assert_eq!(
        session.lock().current_actor().unwrap().email,
        "viewer@invento.com"
    );

    // The slower login resolves last and therefore wins.
    first.await.unwrap();
    assert_eq!(
        session.lock().current_actor().unwrap().email,
        "admin@invento.com"
    );

    let reloaded = SessionStore::init(storage, "invento-user");
    assert_eq!(
        reloaded.current_actor().unwrap().email,
        "admin@invento.com"
    );
}
