pub mod task;
pub mod user;

pub use task::{Task, TaskInput, TaskRow, TaskStatus};
pub use user::User;
