//! Signup flow coordination.
//!
//! The shell renders the screen; this flow does everything behind it:
//! reveal validation on the first submit, short-circuit invalid forms, call
//! the auth service, persist granted credentials, and record the user id in
//! client state. Navigation stays with the shell, driven by the returned
//! [`SignupAdvance`].

use crate::{
    auth::AuthService,
    config::Config,
    dispatch::Dispatch,
    error::Result,
    form::{self, SignupForm},
    session,
    storage::KeyValueStore,
};
use parley_engine::Action;
use std::sync::Arc;

/// What the shell should do after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupAdvance {
    /// Validation is now visible and the form still has invalid fields;
    /// stay on the screen.
    ValidationPending,
    /// Credentials granted and persisted, user id dispatched; leave the
    /// screen.
    Completed(crate::auth::Credentials),
    /// The service rejected the request; stay and show the message.
    Rejected { message: String },
}

/// The signup flow over the shell-provided collaborators.
pub struct SignupFlow {
    auth: Arc<dyn AuthService>,
    storage: Arc<dyn KeyValueStore>,
    config: Arc<Config>,
    loading: bool,
}

impl SignupFlow {
    /// Create a flow over the given collaborators.
    pub fn new(
        auth: Arc<dyn AuthService>,
        storage: Arc<dyn KeyValueStore>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            auth,
            storage,
            config,
            loading: false,
        }
    }

    /// Whether a signup request is in flight. The shell renders its
    /// activity indicator from this.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Handle a press of the signup button.
    pub async fn submit(
        &mut self,
        form: &mut SignupForm,
        sink: &mut dyn Dispatch,
    ) -> Result<SignupAdvance> {
        if !form.validation_visible() {
            form.show_validation();
        }

        if !form.is_form_valid() {
            tracing::debug!("signup blocked by invalid form");
            return Ok(SignupAdvance::ValidationPending);
        }

        self.loading = true;
        let result = self.run_signup(form, sink).await;
        self.loading = false;

        result
    }

    async fn run_signup(
        &self,
        form: &mut SignupForm,
        sink: &mut dyn Dispatch,
    ) -> Result<SignupAdvance> {
        let outcome = self
            .auth
            .signup(
                form.value(form::EMAIL),
                form.value(form::NAME),
                form.value(form::PASSWORD),
            )
            .await?;

        match outcome {
            Ok(credentials) => {
                session::persist_credentials(self.storage.as_ref(), &self.config, &credentials)
                    .await?;

                sink.dispatch(Action::set_user_id(credentials.user_id.clone()));

                tracing::info!(user_id = %credentials.user_id, "signup completed");
                Ok(SignupAdvance::Completed(credentials))
            }
            Err(rejection) => {
                if rejection.email_exists() {
                    form.invalidate(form::EMAIL);
                }

                tracing::warn!(message = %rejection.message, "signup rejected");
                Ok(SignupAdvance::Rejected {
                    message: rejection.message,
                })
            }
        }
    }
}
