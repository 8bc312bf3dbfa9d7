//! # Parley Engine
//!
//! The client-side state engine for the Parley chat application.
//!
//! This crate holds the presentation-layer state a mobile shell renders from:
//! the signed-in user, the conversation list, and the current selection. All
//! changes flow through plain action descriptors applied by a single-writer
//! store, so the same inputs always produce the same state.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of files, network, or platform
//! - **Deterministic**: same inputs always produce same outputs
//! - **Testable**: pure logic, no mocks needed
//! - **Portable**: runs anywhere Rust runs (native, WASM, embedded)
//!
//! ## Core Concepts
//!
//! ### Conversations
//!
//! A [`Conversation`] is a chat thread with a unique id and an ordered list
//! of [`Message`]s. The store holds them in a list whose ids are unique.
//!
//! ### Actions
//!
//! State transitions are expressed as [`Action`] descriptors, not direct
//! mutations. The descriptor set is closed:
//!
//! - [`Action::SetUserId`] - record the signed-in user
//! - [`Action::SetConversations`] - replace the conversation list
//! - [`Action::SetConversationSelectedId`] - change the open thread
//! - [`Action::UpdateConversations`] - fold one updated conversation in
//!
//! ### Reconciliation
//!
//! [`reconcile`] folds one updated conversation into the current list:
//! a matching entry has its messages replaced wholesale, a missing one is
//! appended. The input list is never mutated.
//!
//! ## Quick Start
//!
//! ```rust
//! use parley_engine::{Action, Conversation, Message, Store};
//!
//! let mut store = Store::new();
//!
//! // Seed the list, e.g. from an initial fetch
//! let greeting = Message::new("msg_1", "user_2", "hey!", 1706745600000);
//! store.apply(Action::set_conversations(vec![Conversation::new(
//!     "conv_1",
//!     vec![greeting.clone()],
//! )]));
//!
//! // A reply arrives for the same thread
//! let reply = Message::new("msg_2", "user_1", "hello!", 1706745601000);
//! store.apply(Action::update_conversations(Conversation::new(
//!     "conv_1",
//!     vec![greeting, reply],
//! )));
//!
//! assert_eq!(store.conversation("conv_1").unwrap().messages.len(), 2);
//! ```
//!
//! ## Persistence
//!
//! Use [`Store::export_state`] and [`Store::import_state`] with
//! [`StateSnapshot`] for persistence. Snapshots serialize to JSON so the
//! host shell can stash them in whatever storage it owns.

pub mod action;
pub mod conversation;
pub mod error;
pub mod message;
pub mod reconcile;
pub mod snapshot;
pub mod store;

// Re-export main types at crate root
pub use action::{Action, ActionKind};
pub use conversation::Conversation;
pub use error::Error;
pub use message::Message;
pub use reconcile::reconcile;
pub use snapshot::{StateSnapshot, SNAPSHOT_FORMAT_VERSION};
pub use store::{Store, Transition};

/// Type aliases for clarity
pub type UserId = String;
pub type ConversationId = String;
pub type MessageId = String;
pub type Timestamp = u64;
