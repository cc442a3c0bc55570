//! Authentication module
//!
//! JWT bearer-token decoding. Tokens are issued by the platform's auth
//! service with the shared `JWT_SECRET`; this server only validates them.

pub mod jwt;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
