//! Splitting an iterable by a predicate.

/// Builds a reusable partition over any iterable.
///
/// The input is traversed once, forward. The result is a pair
/// `(matching, non_matching)` of `Vec`s, each in encounter order, whatever the
/// shape of the input.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::partition;
///
/// let (evens, odds) = partition(|x: &i32| x % 2 == 0)(vec![1, 2, 3, 4]);
/// assert_eq!(evens, vec![2, 4]);
/// assert_eq!(odds, vec![1, 3]);
/// ```
pub fn partition<C, P>(predicate: P) -> impl Fn(C) -> (Vec<C::Item>, Vec<C::Item>)
where
    C: IntoIterator,
    P: Fn(&C::Item) -> bool,
{
    move |collection: C| {
        let mut matching = Vec::new();
        let mut non_matching = Vec::new();
        for element in collection {
            if predicate(&element) {
                matching.push(element);
            } else {
                non_matching.push(element);
            }
        }
        (matching, non_matching)
    }
}
