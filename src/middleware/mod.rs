pub mod guard;

pub use guard::{require_bearer_auth, Guard, RouteAccess, RoutePolicy};
