//! HTTP middleware.

mod identity;

pub use identity::{IdentityMiddleware, UserId};
