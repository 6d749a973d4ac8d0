use std::marker::PhantomData;

use crate::key::MergeKey;

/// Describes how the merge engine reads elements of one particular type and
/// how it rebuilds merged elements afterwards.
///
/// The engine never assumes anything about the element shape itself: it sees
/// elements only through [`start_of`][Self::start_of],
/// [`end_of`][Self::end_of] and [`attribute_of`][Self::attribute_of], and it
/// produces output exclusively through [`construct`][Self::construct]. The
/// key domain (ordering and adjacency) comes from the `Key` type's
/// [`MergeKey`] implementation.
///
/// Attribute-less merging is the special case `Attribute = ()`: every element
/// then carries an equal attribute, so overlapping and touching ranges always
/// fuse. [`PairPolicy`] does exactly that for plain `(start, end)` tuples,
/// and [`TriplePolicy`] handles the `(start, end, attribute)` shape.
pub trait MergePolicy {
    type Element;
    type Key: MergeKey;
    type Attribute: Clone + PartialEq;

    /// The start key of an element.
    fn start_of(&self, element: &Self::Element) -> Self::Key;

    /// The end key of an element (inclusive).
    fn end_of(&self, element: &Self::Element) -> Self::Key;

    /// The attribute attached to an element. Ranges only fuse when their
    /// attributes compare equal.
    fn attribute_of(&self, element: &Self::Element) -> Self::Attribute;

    /// Rebuild an output element from a merged span.
    fn construct(
        &self,
        start: Self::Key,
        end: Self::Key,
        attribute: Self::Attribute,
    ) -> Self::Element;
}

/// The default policy for plain `(start, end)` pairs, without attributes.
pub struct PairPolicy<K> {
    key_marker: PhantomData<K>,
}

impl<K> PairPolicy<K> {
    pub fn new() -> Self {
        Self {
            key_marker: PhantomData,
        }
    }
}

impl<K> Default for PairPolicy<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K> MergePolicy for PairPolicy<K>
where
    K: MergeKey,
{
    type Element = (K, K);
    type Key = K;
    type Attribute = ();

    fn start_of(&self, element: &(K, K)) -> K {
        element.0.clone()
    }

    fn end_of(&self, element: &(K, K)) -> K {
        element.1.clone()
    }

    fn attribute_of(&self, _element: &(K, K)) {}

    fn construct(&self, start: K, end: K, _attribute: ()) -> (K, K) {
        (start, end)
    }
}

/// The default policy for `(start, end, attribute)` triples.
pub struct TriplePolicy<K, A> {
    marker: PhantomData<(K, A)>,
}

impl<K, A> TriplePolicy<K, A> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<K, A> Default for TriplePolicy<K, A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A> MergePolicy for TriplePolicy<K, A>
where
    K: MergeKey,
    A: Clone + PartialEq,
{
    type Element = (K, K, A);
    type Key = K;
    type Attribute = A;

    fn start_of(&self, element: &(K, K, A)) -> K {
        element.0.clone()
    }

    fn end_of(&self, element: &(K, K, A)) -> K {
        element.1.clone()
    }

    fn attribute_of(&self, element: &(K, K, A)) -> A {
        element.2.clone()
    }

    fn construct(&self, start: K, end: K, attribute: A) -> (K, K, A) {
        (start, end, attribute)
    }
}
