//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the
//! repositories and the auth components. Status-code decisions happen here;
//! the routes only translate between wire types and service calls.

pub mod customer;
pub mod job;
pub mod task;
pub mod user;

pub use customer::CustomerService;
pub use job::JobService;
pub use task::TaskService;
pub use user::{RegisterInput, UserService};
