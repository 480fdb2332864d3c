//! View Fetch State
//!
//! Explicit tagged state for a view's request lifecycle. Every view holds one
//! of these in a signal instead of juggling `loading`/`data` booleans, which
//! makes the "stuck loading forever" failure mode impossible: a request that
//! completes always resolves to `Loaded` or `Failed`.

/// Lifecycle of a view's single outstanding request.
///
/// The prediction view reuses this with `Loading` meaning "submitting".
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    Idle,
    /// Request in flight; prior data has been discarded.
    Loading,
    /// Last request succeeded.
    Loaded(T),
    /// Last request failed with a user-presentable message.
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Enter the pending state, invalidating any prior result.
    pub fn begin(&mut self) {
        *self = FetchState::Loading;
    }

    /// Leave the pending state with the request's outcome.
    pub fn resolve(&mut self, result: Result<T, String>) {
        *self = match result {
            Ok(value) => FetchState::Loaded(value),
            Err(message) => FetchState::Failed(message),
        };
    }

    /// Whether a request is currently outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_discards_prior_result() {
        let mut state = FetchState::Loaded(42);
        state.begin();
        assert!(state.is_pending());
        assert!(state.loaded().is_none());
    }

    #[test]
    fn resolve_clears_pending_on_success() {
        let mut state = FetchState::Idle;
        state.begin();
        assert!(state.is_pending());
        state.resolve(Ok(7));
        assert!(!state.is_pending());
        assert_eq!(state.loaded(), Some(&7));
    }

    #[test]
    fn resolve_clears_pending_on_failure() {
        let mut state: FetchState<i32> = FetchState::Idle;
        state.begin();
        state.resolve(Err("network down".to_string()));
        assert!(!state.is_pending());
        assert_eq!(state.error(), Some("network down"));
    }

    #[test]
    fn default_is_idle() {
        let state: FetchState<()> = FetchState::default();
        assert_eq!(state, FetchState::Idle);
    }
}
