#![doc = "The `taskdesk` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, authentication mechanisms, routing"]
#![doc = "configuration, database setup, and error handling for the taskdesk API."]
#![doc = "It is used by the main binary (`main.rs`) to construct and run the application."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

// Process-wide environment variables are shared between unit tests; tests
// that mutate them serialize on this lock.
#[cfg(test)]
pub(crate) mod test_env {
    use std::sync::Mutex;

    pub static ENV_LOCK: Mutex<()> = Mutex::new(());
}
