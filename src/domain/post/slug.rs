//! Slug assignment for new posts.
//!
//! A candidate base slug collides when the store already holds the same slug
//! or the base followed by a numeric suffix (`my-post`, `my-post-2`, ...).
//! Resolution is a pure scan over the colliding slugs; the caller fetches
//! them first and persists the winner afterward. The read and the write are
//! not transactional, so two concurrent publishes with the same title can
//! still race; the store's unique constraint on `slug` is the final arbiter.

#[derive(Clone, Copy)]
enum SuffixKind {
    /// The bare base, or a tail that is not an exact `-<digits>` shape.
    Bare,
    Numeric(u64),
}

fn classify(tail: &str) -> SuffixKind {
    let Some(digits) = tail.strip_prefix('-') else {
        return SuffixKind::Bare;
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return SuffixKind::Bare;
    }
    digits.parse().map_or(SuffixKind::Bare, SuffixKind::Numeric)
}

/// Resolve a unique slug for `base` against the slugs already stored.
///
/// Returns `base` untouched when nothing matches. Otherwise tracks the
/// maximum numeric suffix over the matches, floors it at 1 when any match
/// lacks a numeric suffix, and returns `base-<max + 1>`. Matching is
/// case-insensitive; entries that share the base prefix without an exact
/// `-<digits>` tail count as the bare base.
pub fn resolve_unique(base: &str, existing: &[String]) -> String {
    let base_lower = base.to_lowercase();

    let mut max_suffix: u64 = 0;
    let mut collided = false;
    for stored in existing {
        let stored_lower = stored.to_lowercase();
        let Some(tail) = stored_lower.strip_prefix(&base_lower) else {
            continue;
        };
        collided = true;
        match classify(tail) {
            SuffixKind::Numeric(n) => max_suffix = max_suffix.max(n),
            SuffixKind::Bare => max_suffix = max_suffix.max(1),
        }
    }

    if !collided {
        return base.to_owned();
    }
    format!("{base}-{}", max_suffix + 1)
}

/// Anchored pattern matching `base` or `base-<digits>`, for the store's
/// case-insensitive regex operator.
pub fn collision_pattern(base: &str) -> String {
    format!("^{}(-[0-9]+)?$", regex::escape(base))
}
