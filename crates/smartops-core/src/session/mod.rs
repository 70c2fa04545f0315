//! Session domain: the in-memory authentication state and the request
//! headers derived from it.

pub mod headers;
pub mod model;

pub use headers::{AuthHeaders, AUTHORIZATION, CONTENT_TYPE, JSON_CONTENT_TYPE};
pub use model::SessionState;
