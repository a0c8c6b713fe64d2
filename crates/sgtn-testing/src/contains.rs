//! Element lookup for result assertions.

/// Index of the first element equal to `target`, or `None`.
///
/// `target` may be any type the elements compare against, e.g. a `&str`
/// against a `Vec<String>`.
pub fn position_of<T, U>(items: &[T], target: &U) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    items.iter().position(|item| item == target)
}
