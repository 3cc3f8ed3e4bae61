//! Authentication and authorization
//!
//! JWT-based authentication with argon2 password hashing, plus the
//! ownership policy applied to mutating endpoints.

mod jwt;
mod middleware;
mod ownership;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{AuthUser, AUTH_TOKEN_HEADER};
pub use ownership::{can_mutate, ensure_can_mutate};
pub use password::PasswordService;
