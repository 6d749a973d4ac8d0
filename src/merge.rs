use crate::{
    key::MergeKey,
    policy::{MergePolicy, PairPolicy, TriplePolicy},
    span_map::SpanMap,
};

/// Merge a sequence of elements under the given `policy`, producing the
/// minimal equivalent sequence of non-overlapping, non-touching elements in
/// ascending key order.
///
/// ## Specifics
/// - Elements are first stable-sorted by start, breaking start ties by end
///   *descending*, so a range always sorts before the narrower ranges it
///   contains.
/// - The sorted elements are then layered left to right: a later element
///   claims every key it covers. Where it meets an earlier element carrying
///   an equal attribute the two simply fuse (overlapping *or* touching, as
///   decided by the key domain's successor step); where the attributes
///   differ, the later element wins the contested keys and the earlier one
///   keeps whatever remains on either side of it.
/// - Elements with identical start and end keys but differing attributes
///   resolve by input order: the later element wins.
/// - Each surviving span is rebuilt into an element through
///   [`MergePolicy::construct`].
///
/// The result does not otherwise depend on the input order, and merging is
/// idempotent: feeding the output back in reproduces it.
pub fn merge_with_policy<P>(policy: &P, elements: &[P::Element]) -> Vec<P::Element>
where
    P: MergePolicy,
{
    let mut ordered: Vec<&P::Element> = elements.iter().collect();
    ordered.sort_by(|left, right| {
        policy
            .start_of(left)
            .compare(&policy.start_of(right))
            .then_with(|| policy.end_of(right).compare(&policy.end_of(left)))
    });

    let mut map = SpanMap::new();
    for element in ordered {
        map.insert_with_overwrite(
            policy.start_of(element),
            policy.end_of(element),
            policy.attribute_of(element),
        );
    }

    map.into_spans()
        .into_iter()
        .map(|span| policy.construct(span.start, span.end, span.attribute))
        .collect()
}

/// Merge `(start, end)` range pairs into the minimal equivalent set.
///
/// Overlapping and touching ranges fuse unconditionally; the output is the
/// ascending list of maximal disjoint ranges covering exactly the same keys
/// as the input.
pub fn merge<K>(ranges: &[(K, K)]) -> Vec<(K, K)>
where
    K: MergeKey,
{
    merge_with_policy(&PairPolicy::new(), ranges)
}

/// Merge `(start, end, attribute)` range triples into the minimal equivalent
/// set.
///
/// Ranges only fuse where their attributes compare equal; see
/// [`merge_with_policy`] for how conflicting overlaps are resolved.
pub fn merge_with_attributes<K, A>(ranges: &[(K, K, A)]) -> Vec<(K, K, A)>
where
    K: MergeKey,
    A: Clone + PartialEq,
{
    merge_with_policy(&TriplePolicy::new(), ranges)
}

/// Merge discrete points into closed `(value, value)` ranges.
///
/// Every point becomes the singleton range `(point, point)` before merging,
/// so runs of equal or consecutive points collapse into one range.
pub fn merge_discrete<K>(points: &[K]) -> Vec<(K, K)>
where
    K: MergeKey,
{
    let singletons: Vec<(K, K)> = points
        .iter()
        .map(|point| (point.clone(), point.clone()))
        .collect();

    merge(&singletons)
}
