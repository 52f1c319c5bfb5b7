//! Eligibility rules applied before any mutation.

use super::UserRecord;

/// Message reported when a disable targets a full member.
pub const FULL_USER_MESSAGE: &str = "Full users cannot be disabled.";

/// Returns `true` when `user` may be disabled.
///
/// Either restriction flag is sufficient; both set at once is also eligible.
#[must_use]
pub const fn can_disable(user: &UserRecord) -> bool {
    user.is_restricted || user.is_ultra_restricted
}

/// Returns `true` when `email` belongs to the configured uninvitable domain.
///
/// The domain is the text after the last `@` and is compared without regard
/// to ASCII case. An empty configured domain disables the check.
#[must_use]
pub fn is_uninvitable(email: &str, uninvitable_domain: &str) -> bool {
    let blocked = uninvitable_domain.trim().trim_start_matches('@');
    if blocked.is_empty() {
        return false;
    }

    email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.eq_ignore_ascii_case(blocked))
}
