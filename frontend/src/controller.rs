use crate::models::CompletionRequest;
use crate::trial::{TrialState, TrialStateStore};
use crate::utils::api::CloserApi;

/// Shown when the request to the backend cannot complete at all.
pub const CLIENT_FALLBACK: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The free try is spent; nothing was sent.
    Paywall,
    /// Text to show in the output panel.
    Reply(String),
}

/// Gating and submission logic behind the demo form.
pub struct FormController<S, A> {
    store: S,
    api: A,
}

impl<S: TrialStateStore, A: CloserApi> FormController<S, A> {
    pub fn new(store: S, api: A) -> Self {
        Self { store, api }
    }

    pub fn trial_state(&self) -> TrialState {
        self.store.get()
    }

    pub fn is_locked(&self) -> bool {
        self.store.get() == TrialState::UsedFree
    }

    pub async fn submit(&self, request: &CompletionRequest) -> SubmitOutcome {
        if self.is_locked() {
            return SubmitOutcome::Paywall;
        }

        match self.api.generate(request).await {
            Ok(response) => {
                // Paid browsers stay unlocked.
                if self.store.get() == TrialState::Unused {
                    self.store.set(TrialState::UsedFree);
                }
                SubmitOutcome::Reply(response.output)
            }
            Err(_) => SubmitOutcome::Reply(CLIENT_FALLBACK.to_string()),
        }
    }

    /// Simulated payment: no transaction, just unlocks this browser for good.
    pub fn pay(&self) {
        self.store.set(TrialState::Paid);
    }
}
