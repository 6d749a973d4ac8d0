use std::cmp::Ordering;

/// A key domain the merge engine can work over: a totally ordered set of
/// values with discrete neighbour steps.
///
/// Two ranges are *adjacent* (and therefore mergeable when their attributes
/// allow it) exactly when the [`successor`][Self::successor] of one range's
/// end equals the other range's start.
///
/// Every primitive integer type gets this through its natural order and
/// arithmetic `±1`. Other domains implement it by hand, usually on a newtype:
/// IP addresses step through their address space, a date key steps a day at a
/// time, and so on.
///
/// The engine only asks for the predecessor of a key when a smaller key is
/// present in the input, and likewise for successors, so implementations do
/// not need to handle stepping past the ends of a bounded domain.
pub trait MergeKey: Clone {
    /// Total order over the key domain.
    fn compare(&self, other: &Self) -> Ordering;

    /// The largest key strictly smaller than this one.
    fn predecessor(&self) -> Self;

    /// The smallest key strictly larger than this one.
    fn successor(&self) -> Self;
}

macro_rules! impl_merge_key_for_integer {
    ($($t:ty),*) => ($(
        impl MergeKey for $t {
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            fn predecessor(&self) -> Self {
                *self - 1
            }

            fn successor(&self) -> Self {
                *self + 1
            }
        }
    )*)
}

impl_merge_key_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
