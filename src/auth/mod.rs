//! Authentication module
//!
//! Strapi uses bearer API tokens. Credentials are validated locally and
//! tested against the instance; the header itself is injected by the HTTP
//! middleware.

mod check;
mod types;

pub use check::test_authentication;
pub use types::Credentials;
