//! Uniform candidate selection over static tables.

use crate::error::PickError;
use crate::random::RandomSource;

/// Picks one element of `candidates` uniformly at random.
///
/// When `rng` is `None` a time-seeded source is substituted, so callers
/// without a seed still get a valid draw.
///
/// # Panics
///
/// Panics if `candidates` is empty. Candidate tables are static data, so an
/// empty table is a defect that should fail loudly in development. Use
/// [`try_pick`] where emptiness is a legitimate runtime condition.
///
/// # Example
///
/// ```
/// use namegen::{RandomSource, pick};
///
/// let names = ["Ada", "Grace", "Hedy"];
/// let mut rng = RandomSource::new(42);
///
/// let chosen = pick(&names, Some(&mut rng));
/// assert!(names.contains(chosen));
/// ```
pub fn pick<'a, T>(candidates: &'a [T], rng: Option<&mut RandomSource>) -> &'a T {
    match try_pick(candidates, rng) {
        Ok(chosen) => chosen,
        Err(err) => panic!("pick: {err}"),
    }
}

/// Picks one element of `candidates`, reporting an empty slice as an error.
///
/// # Errors
///
/// Returns [`PickError::EmptyCandidates`] if `candidates` is empty.
pub fn try_pick<'a, T>(
    candidates: &'a [T],
    rng: Option<&mut RandomSource>,
) -> Result<&'a T, PickError> {
    if candidates.is_empty() {
        return Err(PickError::EmptyCandidates);
    }

    let len = candidates.len();
    let idx = rng.map_or_else(
        || RandomSource::from_time().index(len),
        |source| source.index(len),
    );

    candidates.get(idx).ok_or(PickError::EmptyCandidates)
}
