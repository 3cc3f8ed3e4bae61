//! Database repositories
//!
//! Data access layer; nothing above this module speaks SQL. Each repository
//! exposes the find/save/remove operations its service needs.

pub mod customer;
pub mod job;
pub mod task;
pub mod user;

pub use customer::{CreateCustomer, CustomerRecord, CustomerRepository, UpdateCustomer};
pub use job::{CreateJob, JobRecord, JobRepository, UpdateJob};
pub use task::{CreateTask, TaskRecord, TaskRepository, UpdateTask};
pub use user::{Role, UserRecord, UserRepository};
