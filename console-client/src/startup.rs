use crate::config::Settings;
use crate::middleware::guard::RouteGuard;
use crate::routes;
use crate::services::auth_client::HttpAuthenticator;
use crate::services::session::SessionStore;
use console_core::storage::FileStore;
use std::sync::Arc;

/// The assembled client shell: one session store plus the guard that
/// consults it.
pub struct Shell {
    pub session: SessionStore,
    pub guard: RouteGuard,
}

/// Wire storage, API client, session store and guard from settings.
pub fn build_shell(settings: &Settings) -> Shell {
    let storage = Arc::new(FileStore::open(&settings.storage.path));
    let auth = Arc::new(HttpAuthenticator::new(settings.api.clone()));

    let session = SessionStore::open(storage, auth);
    let guard = RouteGuard::new(routes::panel_routes());

    Shell { session, guard }
}
