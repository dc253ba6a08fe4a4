pub mod auth_client;
pub mod session;

pub use auth_client::{
    AuthenticatedSession, Authenticator, HttpAuthenticator, LoginOutcome, PendingTwoFactor,
};
pub use session::SessionStore;
