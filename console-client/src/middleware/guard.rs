use crate::routes::{self, AccessLevel, RouteTable};
use crate::services::session::SessionStore;

/// Verdict for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// What to do with a reported navigation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorAction {
    Reload,
    Propagate,
}

/// Failure signatures raised by lazy page loads after a redeploy or on a
/// flaky network. These recover with a full reload.
const RECOVERABLE_LOAD_ERRORS: [&str; 3] = [
    "Failed to fetch dynamically imported module",
    "Loading chunk",
    "Loading CSS chunk",
];

/// Per-navigation admission check over the static page classification and
/// the current session. Keeps no state of its own between navigations.
pub struct RouteGuard {
    table: RouteTable,
}

impl RouteGuard {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// Decide one navigation attempt, reading the session fresh.
    pub fn check(&self, target: &str, session: &SessionStore) -> RouteDecision {
        match self.table.classify(target) {
            AccessLevel::Public => RouteDecision::Allow,
            _ if !session.is_authenticated() => RouteDecision::Redirect(routes::LOGIN),
            AccessLevel::AdminOnly => match session.user() {
                // Profile not loaded yet: let the navigation through and
                // leave the rejection to the API once the role is known.
                None => RouteDecision::Allow,
                Some(user) if !user.is_admin() => {
                    tracing::warn!(
                        route = target,
                        user_id = user.id,
                        "Non-admin redirected away from admin page"
                    );
                    RouteDecision::Redirect(routes::DASHBOARD)
                }
                Some(_) => RouteDecision::Allow,
            },
            _ => RouteDecision::Allow,
        }
    }

    /// Classify a lazy-load failure. Chunk fetch errors ask the host for a
    /// full reload; anything else stays on the host's error channel.
    pub fn handle_load_error(&self, message: &str) -> LoadErrorAction {
        if RECOVERABLE_LOAD_ERRORS
            .iter()
            .any(|signature| message.contains(signature))
        {
            tracing::warn!(error = message, "Chunk loading error, requesting reload");
            LoadErrorAction::Reload
        } else {
            LoadErrorAction::Propagate
        }
    }
}
