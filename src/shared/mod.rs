pub mod geo;

pub use geo::*;

use rayon::prelude::*;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
}

/// Returns true when the needle has nothing to search for.
pub fn is_blank(needle: &str) -> bool {
    needle.trim().is_empty()
}

/// Case-insensitive substring filter over names, keeping the haystack order.
/// A blank needle matches everything. The needle itself is not trimmed, so
/// surrounding whitespace is part of what has to match.
pub fn filter_by_name<T>(needle: &str, haystack: &[T]) -> Vec<T>
where
    T: Clone + Send + Sync + Identifiable,
{
    if is_blank(needle) {
        return haystack.to_vec();
    }
    let normalized_needle = needle.to_lowercase();
    haystack
        .par_iter()
        .filter(|hay| hay.normalized_name().contains(normalized_needle.as_str()))
        .cloned()
        .collect()
}
