use std::cmp::Ordering;

use crate::key::MergeKey;

/// A single merged span: a closed `[start, end]` key range together with the
/// attribute that owns it.
#[derive(Clone, Debug)]
pub(crate) struct Span<K, A> {
    pub(crate) start: K,
    pub(crate) end: K,
    pub(crate) attribute: A,
}

/// The merge engine's working state: an ascending vector of pairwise disjoint
/// attributed spans over the key domain `K`.
///
/// Elements are layered onto the map one at a time. A later insertion claims
/// its whole key range, clipping whatever it collides with, so the caller
/// controls precedence purely through insertion order. Neighbouring spans
/// that carry an equal attribute and leave no gap between one another are
/// re-joined after every insertion, which keeps the map minimal at all times.
pub(crate) struct SpanMap<K, A>
where
    K: MergeKey,
    A: Clone + PartialEq,
{
    /// A vector of ascending spans.
    spans: Vec<Span<K, A>>,
}

impl<K, A> SpanMap<K, A>
where
    K: MergeKey,
    A: Clone + PartialEq,
{
    pub(crate) fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Layer a new span onto the map.
    ///
    /// One of four things can occur:
    /// - the new span does not collide with any existing span,
    /// - the new span falls inside a single existing span, splitting it,
    /// - the new span partially overlaps an existing span on either side, or,
    /// - the new span envelops one or more existing spans entirely.
    ///
    /// In every case the new span claims its whole `[start, end]` range:
    /// enveloped spans are removed, partially overlapped spans keep whatever
    /// sticks out on either side, and a split span keeps its attribute on
    /// both remaining pieces. Once the span is in place it is coalesced with
    /// its neighbours where they carry an equal attribute and overlap or
    /// touch.
    ///
    /// A `start` and `end` given in descending key order denote the same
    /// closed range and are reordered before insertion.
    pub(crate) fn insert_with_overwrite(&mut self, start: K, end: K, attribute: A) {
        let (start, end) = match start.compare(&end) {
            Ordering::Greater => (end, start),
            _ => (start, end),
        };

        let start_hit = self.locate(&start);
        let end_hit = self.locate(&end);

        // Whatever remains of the span overlapping `start` once the new span
        // has claimed its share. Only computed when that span actually begins
        // before the new one; `start` then has a predecessor in the domain.
        let left_remainder = match start_hit {
            Ok(span_index)
                if self.spans[span_index].start.compare(&start) == Ordering::Less =>
            {
                Some(Span {
                    start: self.spans[span_index].start.clone(),
                    end: start.predecessor(),
                    attribute: self.spans[span_index].attribute.clone(),
                })
            }
            _ => None,
        };

        // Same on the right: the tail of the span overlapping `end`.
        let right_remainder = match end_hit {
            Ok(span_index)
                if self.spans[span_index].end.compare(&end) == Ordering::Greater =>
            {
                Some(Span {
                    start: end.successor(),
                    end: self.spans[span_index].end.clone(),
                    attribute: self.spans[span_index].attribute.clone(),
                })
            }
            _ => None,
        };

        let replace_from = match start_hit {
            Ok(span_index) | Err(span_index) => span_index,
        };
        let replace_until = match end_hit {
            Ok(span_index) => span_index + 1,
            Err(insert_point) => insert_point,
        };

        let mut inserted_at = replace_from;
        let mut replacement = Vec::with_capacity(3);
        if let Some(remainder) = left_remainder {
            replacement.push(remainder);
            inserted_at += 1;
        }
        replacement.push(Span {
            start,
            end,
            attribute,
        });
        if let Some(remainder) = right_remainder {
            replacement.push(remainder);
        }

        self.spans.splice(replace_from..replace_until, replacement);
        self.coalesce_around(inserted_at);
    }

    /// Consume the map, yielding its spans in ascending order.
    pub(crate) fn into_spans(self) -> Vec<Span<K, A>> {
        self.spans
    }

    /// Locates the span containing `key`.
    ///
    /// Returns `Ok(index)` when `key` falls inside the span at `index`, and
    /// `Err(insertion_point)` when no span contains it.
    fn locate(&self, key: &K) -> Result<usize, usize> {
        self.spans.binary_search_by(|span| {
            if span.start.compare(key) == Ordering::Greater {
                // The whole span lies beyond `key`.
                Ordering::Greater
            } else if span.end.compare(key) == Ordering::Less {
                // The whole span lies before `key`.
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
    }

    /// Re-join the span at `index` with its immediate neighbours where the
    /// attribute matches and no gap separates them.
    fn coalesce_around(&mut self, index: usize) {
        if index + 1 < self.spans.len() && self.joinable(index, index + 1) {
            let right = self.spans.remove(index + 1);
            self.spans[index].end = right.end;
        }
        if index > 0 && self.joinable(index - 1, index) {
            let right = self.spans.remove(index);
            self.spans[index - 1].end = right.end;
        }
    }

    /// Whether the spans at the adjacent indices `left` and `right` carry an
    /// equal attribute and overlap or touch. `left`'s end always has a
    /// successor here, since a span exists beyond it.
    fn joinable(&self, left: usize, right: usize) -> bool {
        self.spans[left].attribute == self.spans[right].attribute
            && self.spans[left]
                .end
                .successor()
                .compare(&self.spans[right].start)
                != Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::SpanMap;

    fn spans_of(map: SpanMap<i64, &'static str>) -> Vec<(i64, i64, &'static str)> {
        map.into_spans()
            .into_iter()
            .map(|span| (span.start, span.end, span.attribute))
            .collect()
    }

    #[test]
    fn insert_into_empty_map() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(3, 7, "a");

        assert_eq!(spans_of(map), vec![(3, 7, "a")]);
    }

    #[test]
    fn inner_insert_splits_the_enclosing_span() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(0, 99, "soup");
        map.insert_with_overwrite(57, 57, "cereal");

        assert_eq!(
            spans_of(map),
            vec![(0, 56, "soup"), (57, 57, "cereal"), (58, 99, "soup")]
        );
    }

    #[test]
    fn inner_insert_with_equal_attribute_is_absorbed() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(0, 99, "a");
        map.insert_with_overwrite(40, 50, "a");

        assert_eq!(spans_of(map), vec![(0, 99, "a")]);
    }

    #[test]
    fn overlapping_insert_clips_both_neighbours() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(0, 10, "a");
        map.insert_with_overwrite(20, 30, "b");
        map.insert_with_overwrite(5, 25, "c");

        assert_eq!(
            spans_of(map),
            vec![(0, 4, "a"), (5, 25, "c"), (26, 30, "b")]
        );
    }

    #[test]
    fn enveloping_insert_removes_inner_spans() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(10, 12, "a");
        map.insert_with_overwrite(14, 16, "b");
        map.insert_with_overwrite(0, 100, "c");

        assert_eq!(spans_of(map), vec![(0, 100, "c")]);
    }

    #[test]
    fn touching_spans_with_equal_attribute_coalesce() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(1, 2, "a");
        map.insert_with_overwrite(4, 5, "a");
        map.insert_with_overwrite(3, 3, "a");

        assert_eq!(spans_of(map), vec![(1, 5, "a")]);
    }

    #[test]
    fn touching_spans_with_differing_attributes_stay_apart() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(1, 2, "a");
        map.insert_with_overwrite(3, 4, "b");

        assert_eq!(spans_of(map), vec![(1, 2, "a"), (3, 4, "b")]);
    }

    #[test]
    fn exact_replacement_takes_the_new_attribute() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(5, 9, "a");
        map.insert_with_overwrite(5, 9, "b");

        assert_eq!(spans_of(map), vec![(5, 9, "b")]);
    }

    #[test]
    fn descending_bounds_are_reordered() {
        let mut map = SpanMap::new();
        map.insert_with_overwrite(9, 5, "a");

        assert_eq!(spans_of(map), vec![(5, 9, "a")]);
    }
}
