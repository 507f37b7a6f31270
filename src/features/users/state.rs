//! View state for the explorer page. All mutation goes through the
//! transition methods here so the loading/loaded/failed lifecycle is
//! testable without a browser.
//!
//! Overlapping fetches are neither queued nor cancelled. Instead every
//! fetch is tagged with a monotonic sequence token and [`ExplorerState::resolve_fetch`]
//! discards any outcome that is not the latest, so a slow stale response
//! can never overwrite newer state.

use crate::app_lib::AppError;
use crate::features::users::types::User;

/// Smallest number of profiles a single fetch may request.
pub const MIN_RESULTS: u8 = 1;
/// Largest number of profiles a single fetch may request.
pub const MAX_RESULTS: u8 = 50;
/// Number of profiles requested on first load.
pub const DEFAULT_RESULTS: u8 = 5;

/// Complete view state of the explorer page: the profile list, the fetch
/// lifecycle flags, the requested count, and the current selection.
#[derive(Clone, Debug, Default)]
pub struct ExplorerState {
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
    requested_count: u8,
    selected: Option<User>,
    latest_seq: u64,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            requested_count: DEFAULT_RESULTS,
            ..Self::default()
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn requested_count(&self) -> u8 {
        self.requested_count
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Begins a new fetch: raises the loading flag, clears any previous
    /// error and selection, and returns the sequence token the caller must
    /// hand back to [`ExplorerState::resolve_fetch`].
    pub fn start_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        self.selected = None;
        self.latest_seq
    }

    /// Applies a fetch outcome. Outcomes carrying a token other than the
    /// latest one belong to a superseded fetch and are discarded entirely.
    pub fn resolve_fetch(&mut self, seq: u64, outcome: Result<Vec<User>, AppError>) {
        if seq != self.latest_seq {
            return;
        }

        self.loading = false;
        match outcome {
            Ok(users) => self.users = users,
            Err(err) => {
                self.users.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Applies a new requested count if it is within [`MIN_RESULTS`] and
    /// [`MAX_RESULTS`]; anything else is silently ignored. Returns whether
    /// the value was applied so callers know to re-fetch.
    pub fn set_requested_count(&mut self, raw: i64) -> bool {
        match u8::try_from(raw) {
            Ok(count) if (MIN_RESULTS..=MAX_RESULTS).contains(&count) => {
                self.requested_count = count;
                true
            }
            _ => false,
        }
    }

    /// Marks a profile as selected. Selection never touches the list, the
    /// loading flag, or the error.
    pub fn select_user(&mut self, user: User) {
        self.selected = Some(user);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
