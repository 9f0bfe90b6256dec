//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::storage::{SessionState, UserDirectory};

/// Validate that the session indexes agree with the session collection
pub(crate) fn assert_index_invariants(state: &SessionState, users: &UserDirectory) {
    if !cfg!(debug_assertions) {
        return;
    }

    // Every indexed token belongs to a stored session of a known user
    for (token, username) in &state.by_token {
        debug_assert!(
            users.find_user(username),
            "Token {} maps to unknown user '{}'",
            token,
            username
        );
        debug_assert!(
            state
                .sessions
                .iter()
                .any(|s| &s.token == token && &s.username == username),
            "Token {} for '{}' has no stored session",
            token,
            username
        );
    }

    // The user index covers exactly the sessions of known users
    let indexed: usize = state.by_user.values().map(Vec::len).sum();
    debug_assert_eq!(
        indexed + state.skipped.len(),
        state.sessions.len(),
        "User index covers {} of {} sessions with {} skipped",
        indexed,
        state.sessions.len(),
        state.skipped.len()
    );

    for (username, positions) in &state.by_user {
        debug_assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "Sessions of '{}' are out of order",
            username
        );
        for &i in positions {
            debug_assert!(
                state.sessions.get(i).map(|s| &s.username) == Some(username),
                "Position {} in index of '{}' points elsewhere",
                i,
                username
            );
        }
    }
}
