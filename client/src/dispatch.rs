//! Dispatch sink for action descriptors.

use parley_engine::{Action, Store};

/// Where action descriptors go.
///
/// The engine [`Store`] is the production sink; tests substitute a
/// recording sink to assert on what a flow dispatched.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        let transition = self.apply(action);
        tracing::trace!(?transition, "action applied");
    }
}
