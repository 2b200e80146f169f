use std::cell::Cell;

/// Key the trial flag lives under in browser local storage.
pub const TRIAL_STORAGE_KEY: &str = "dmcloser_free_try";

const USED_MARKER: &str = "1";
const PAID_MARKER: &str = "paid";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrialState {
    #[default]
    Unused,
    UsedFree,
    Paid,
}

impl TrialState {
    /// Decodes the stored marker. Anything unrecognised reads as unused.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(USED_MARKER) => TrialState::UsedFree,
            Some(PAID_MARKER) => TrialState::Paid,
            _ => TrialState::Unused,
        }
    }

    /// The marker to persist, `None` meaning the key should be absent.
    pub fn to_stored(self) -> Option<&'static str> {
        match self {
            TrialState::Unused => None,
            TrialState::UsedFree => Some(USED_MARKER),
            TrialState::Paid => Some(PAID_MARKER),
        }
    }
}

pub trait TrialStateStore {
    fn get(&self) -> TrialState;
    fn set(&self, state: TrialState);
}

/// Trial flag backed by `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageTrialStore;

impl LocalStorageTrialStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl TrialStateStore for LocalStorageTrialStore {
    fn get(&self) -> TrialState {
        let raw = Self::storage().and_then(|storage| storage.get_item(TRIAL_STORAGE_KEY).ok().flatten());
        TrialState::from_stored(raw.as_deref())
    }

    fn set(&self, state: TrialState) {
        let Some(storage) = Self::storage() else {
            gloo_console::warn!("Local storage unavailable, trial flag not persisted");
            return;
        };
        let result = match state.to_stored() {
            Some(marker) => storage.set_item(TRIAL_STORAGE_KEY, marker),
            None => storage.remove_item(TRIAL_STORAGE_KEY),
        };
        if result.is_err() {
            gloo_console::error!("Failed to persist trial flag");
        }
    }
}

/// In-memory store, for tests and environments without local storage.
#[derive(Default)]
pub struct MemoryTrialStore {
    state: Cell<TrialState>,
}

impl MemoryTrialStore {
    pub fn new(state: TrialState) -> Self {
        Self { state: Cell::new(state) }
    }
}

impl TrialStateStore for MemoryTrialStore {
    fn get(&self) -> TrialState {
        self.state.get()
    }

    fn set(&self, state: TrialState) {
        self.state.set(state);
    }
}

impl<S: TrialStateStore + ?Sized> TrialStateStore for &S {
    fn get(&self) -> TrialState {
        (**self).get()
    }

    fn set(&self, state: TrialState) {
        (**self).set(state)
    }
}
