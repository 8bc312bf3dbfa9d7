//! Parley client flows.
//!
//! This crate coordinates the engine with the collaborators the host shell
//! owns: an authentication service, a key-value persistence store, and a
//! dispatch sink for action descriptors. It renders nothing and speaks no
//! wire protocol itself; every boundary is a trait the shell implements.
//!
//! The main entry point is [`SignupFlow`], the non-UI logic of the signup
//! screen: validate, authenticate, persist credentials, record the user id
//! in client state.

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod session;
pub mod signup;
pub mod storage;

pub use auth::{AuthError, AuthService, Credentials, SignupOutcome, SignupRejection};
pub use config::{Config, ConfigError};
pub use dispatch::Dispatch;
pub use error::{ClientError, Result};
pub use form::{FormField, SignupForm, Validator};
pub use signup::{SignupAdvance, SignupFlow};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
