pub mod guard;

pub use guard::{LoadErrorAction, RouteDecision, RouteGuard};
