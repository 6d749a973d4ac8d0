use std::{
    cmp::Ordering,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use crate::{
    error::IpRangeError,
    key::MergeKey,
    merge::{merge, merge_with_attributes},
};

/// IPv4 addresses order as their 32-bit values and step one address at a
/// time. Stepping saturates at the edges of the address space, so the highest
/// address is never considered adjacent to anything beyond it.
impl MergeKey for Ipv4Addr {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn predecessor(&self) -> Self {
        Ipv4Addr::from(u32::from(*self).saturating_sub(1))
    }

    fn successor(&self) -> Self {
        Ipv4Addr::from(u32::from(*self).saturating_add(1))
    }
}

/// IPv6 addresses order as their 128-bit values; stepping saturates like the
/// IPv4 implementation.
impl MergeKey for Ipv6Addr {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn predecessor(&self) -> Self {
        Ipv6Addr::from(u128::from(*self).saturating_sub(1))
    }

    fn successor(&self) -> Self {
        Ipv6Addr::from(u128::from(*self).saturating_add(1))
    }
}

/// The combined key domain over both families. Every IPv4 address orders
/// before every IPv6 address, and stepping stays within the address's own
/// family, so ranges of different families never overlap and never touch —
/// they merely share one sorted output sequence.
impl MergeKey for IpAddr {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn predecessor(&self) -> Self {
        match self {
            IpAddr::V4(address) => IpAddr::V4(address.predecessor()),
            IpAddr::V6(address) => IpAddr::V6(address.predecessor()),
        }
    }

    fn successor(&self) -> Self {
        match self {
            IpAddr::V4(address) => IpAddr::V4(address.successor()),
            IpAddr::V6(address) => IpAddr::V6(address.successor()),
        }
    }
}

/// Merge IP address ranges given as `(start, end)` literal pairs.
///
/// Overlapping and touching ranges of the same family fuse into one; the
/// result lists the minimal disjoint ranges in ascending order, all IPv4
/// ranges before all IPv6 ranges.
///
/// Each entry must keep both endpoints in one address family, otherwise
/// [`IpRangeError::MismatchedAddressFamilies`] is returned before any
/// merging happens.
pub fn merge_ip_ranges(entries: &[(&str, &str)]) -> Result<Vec<(IpAddr, IpAddr)>, IpRangeError> {
    let mut ranges = Vec::with_capacity(entries.len());
    for (start_literal, end_literal) in entries {
        ranges.push(parse_address_range(start_literal, end_literal)?);
    }

    Ok(merge(&ranges))
}

/// Merge IP address ranges given as `(start, end, attribute)` literal
/// triples.
///
/// Family handling matches [`merge_ip_ranges`]; attribute handling matches
/// [`merge_with_attributes`][crate::merge_with_attributes], so ranges only
/// fuse when their attributes compare equal.
pub fn merge_ip_ranges_with_attributes<A>(
    entries: &[(&str, &str, A)],
) -> Result<Vec<(IpAddr, IpAddr, A)>, IpRangeError>
where
    A: Clone + PartialEq,
{
    let mut ranges = Vec::with_capacity(entries.len());
    for (start_literal, end_literal, attribute) in entries {
        let (start, end) = parse_address_range(start_literal, end_literal)?;
        ranges.push((start, end, attribute.clone()));
    }

    Ok(merge_with_attributes(&ranges))
}

/// Parse both endpoint literals of a single entry, rejecting mixed families.
fn parse_address_range(
    start_literal: &str,
    end_literal: &str,
) -> Result<(IpAddr, IpAddr), IpRangeError> {
    let start: IpAddr = start_literal.parse()?;
    let end: IpAddr = end_literal.parse()?;

    if start.is_ipv4() != end.is_ipv4() {
        return Err(IpRangeError::MismatchedAddressFamilies { start, end });
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::{merge_ip_ranges, parse_address_range};
    use crate::{error::IpRangeError, key::MergeKey, test_utilities::TestResult};

    #[test]
    fn touching_ranges_fuse_across_entries() -> TestResult {
        let merged = merge_ip_ranges(&[
            ("10.0.0.0", "10.0.0.127"),
            ("10.0.0.128", "10.0.0.255"),
        ])?;

        let expected: (IpAddr, IpAddr) =
            ("10.0.0.0".parse().expect("valid"), "10.0.0.255".parse().expect("valid"));
        assert_eq!(merged, vec![expected]);

        Ok(())
    }

    #[test]
    fn mixed_family_entry_is_rejected() {
        let result = parse_address_range("1.0.0.0", "ffff::");

        assert_eq!(
            result,
            Err(IpRangeError::MismatchedAddressFamilies {
                start: "1.0.0.0".parse().expect("valid"),
                end: "ffff::".parse().expect("valid"),
            })
        );
    }

    #[test]
    fn unparsable_literal_is_rejected() {
        let result = parse_address_range("not-an-address", "10.0.0.1");

        assert!(matches!(
            result,
            Err(IpRangeError::InvalidAddressLiteral(_))
        ));
    }

    #[test]
    fn stepping_saturates_at_the_family_bounds() {
        let highest = Ipv4Addr::new(255, 255, 255, 255);
        assert_eq!(highest.successor(), highest);

        let lowest = Ipv4Addr::new(0, 0, 0, 0);
        assert_eq!(lowest.predecessor(), lowest);
    }
}
