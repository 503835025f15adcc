//! Seeded random selection
//!
//! Selection is kept pure: callers pass the random source explicitly, so a
//! seeded `StdRng` yields reproducible picks.

use rand::Rng;

/// Pick one element uniformly at random
///
/// A one-element slice is returned without consuming a draw, so unrelated
/// lookups do not perturb a seeded sequence.
pub fn choose<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    match items.len() {
        0 => None,
        1 => items.first(),
        n => items.get(rng.gen_range(0..n)),
    }
}

/// Pick a group uniformly, then an element within it uniformly
///
/// Empty groups are dropped before the first draw. Not uniform over the
/// flattened elements: a group holding many entries gets the same chance as a
/// group holding one.
pub fn choose_two_level<'a, T, G, R>(groups: &'a [G], rng: &mut R) -> Option<&'a T>
where
    G: AsRef<[T]>,
    R: Rng + ?Sized,
{
    let non_empty: Vec<&'a [T]> = groups
        .iter()
        .map(AsRef::as_ref)
        .filter(|g| !g.is_empty())
        .collect();
    let group: &'a [T] = choose(&non_empty, rng).copied()?;
    choose(group, rng)
}
