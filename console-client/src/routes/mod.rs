use console_core::error::AppError;
use std::collections::HashMap;

/// Redirect targets used by the guard.
pub const LOGIN: &str = "login";
pub const DASHBOARD: &str = "dashboard";

/// Admission level of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Public,
    Authenticated,
    AdminOnly,
}

/// Static page classification supplied by the hosting application.
///
/// `public` and `admin_only` enumerate their members; every route name in
/// neither set is authenticated-required. The two explicit sets must be
/// disjoint.
pub struct RouteTable {
    levels: HashMap<String, AccessLevel>,
}

impl RouteTable {
    pub fn new(public: &[&str], admin_only: &[&str]) -> Result<Self, AppError> {
        let mut levels = HashMap::new();

        for name in public {
            levels.insert((*name).to_string(), AccessLevel::Public);
        }

        for name in admin_only {
            if let Some(AccessLevel::Public) =
                levels.insert((*name).to_string(), AccessLevel::AdminOnly)
            {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "route '{}' is listed as both public and admin-only",
                    name
                )));
            }
        }

        Ok(Self { levels })
    }

    pub fn classify(&self, route: &str) -> AccessLevel {
        self.levels
            .get(route)
            .copied()
            .unwrap_or(AccessLevel::Authenticated)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        panel_routes()
    }
}

/// Classification for the panel's shipped pages.
pub fn panel_routes() -> RouteTable {
    RouteTable::new(
        &[
            "login",
            "register",
            "verify-email",
            "forgot-password",
            "reset-password",
        ],
        &[
            "users",
            "settings",
            "notify",
            "operation-logs",
            "plans",
            "rules",
        ],
    )
    .expect("shipped route sets are disjoint")
}
