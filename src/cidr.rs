use std::net::{Ipv4Addr, Ipv6Addr};

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use crate::{
    error::CidrRangeError,
    merge::{merge, merge_with_attributes},
};

const IPV4_WIDTH: u32 = 32;
const IPV6_WIDTH: u32 = 128;

/// Merge CIDR blocks given as literals.
///
/// Every block is expanded to the address range it covers, the ranges are
/// merged, and each merged range is decomposed back into the smallest list
/// of CIDR blocks covering it exactly. Blocks that merely touch fuse too, so
/// e.g. two sibling `/26` blocks come back as one `/25`.
///
/// IPv4 and IPv6 blocks may share one input; the output lists all IPv4
/// blocks before all IPv6 blocks, each family in ascending address order. A
/// literal with host bits set is accepted and truncated to its network.
pub fn merge_cidr_ranges(entries: &[&str]) -> Result<Vec<IpNet>, CidrRangeError> {
    let mut v4_ranges = Vec::new();
    let mut v6_ranges = Vec::new();
    for literal in entries {
        match literal.parse::<IpNet>()? {
            IpNet::V4(network) => v4_ranges.push((network.network(), network.broadcast())),
            IpNet::V6(network) => v6_ranges.push((network.network(), network.broadcast())),
        }
    }

    // IPv4 addresses order before IPv6 ones and the families never interact,
    // so merging them apart and concatenating preserves the output order a
    // combined merge would produce.
    let mut blocks = Vec::new();
    for (first, last) in merge(&v4_ranges) {
        append_ipv4_blocks(&mut blocks, first, last)?;
    }
    for (first, last) in merge(&v6_ranges) {
        append_ipv6_blocks(&mut blocks, first, last)?;
    }

    Ok(blocks)
}

/// Merge CIDR blocks given as `(literal, attribute)` entries.
///
/// Expansion and decomposition match [`merge_cidr_ranges`]; attribute
/// handling matches [`merge_with_attributes`][crate::merge_with_attributes],
/// so blocks only fuse when their attributes compare equal, and a later
/// entry claims the addresses it covers from an earlier conflicting one. The
/// attribute of a merged range is carried onto every block it decomposes
/// into.
pub fn merge_cidr_ranges_with_attributes<A>(
    entries: &[(&str, A)],
) -> Result<Vec<(IpNet, A)>, CidrRangeError>
where
    A: Clone + PartialEq,
{
    let mut v4_ranges = Vec::new();
    let mut v6_ranges = Vec::new();
    for (literal, attribute) in entries {
        match literal.parse::<IpNet>()? {
            IpNet::V4(network) => {
                v4_ranges.push((network.network(), network.broadcast(), attribute.clone()));
            }
            IpNet::V6(network) => {
                v6_ranges.push((network.network(), network.broadcast(), attribute.clone()));
            }
        }
    }

    let mut blocks = Vec::new();
    for (first, last, attribute) in merge_with_attributes(&v4_ranges) {
        let mut networks = Vec::new();
        append_ipv4_blocks(&mut networks, first, last)?;
        blocks.extend(networks.into_iter().map(|network| (network, attribute.clone())));
    }
    for (first, last, attribute) in merge_with_attributes(&v6_ranges) {
        let mut networks = Vec::new();
        append_ipv6_blocks(&mut networks, first, last)?;
        blocks.extend(networks.into_iter().map(|network| (network, attribute.clone())));
    }

    Ok(blocks)
}

fn append_ipv4_blocks(
    blocks: &mut Vec<IpNet>,
    first: Ipv4Addr,
    last: Ipv4Addr,
) -> Result<(), CidrRangeError> {
    for (network, prefix_length) in aligned_blocks(u32::from(first), u32::from(last), IPV4_WIDTH) {
        blocks.push(IpNet::V4(Ipv4Net::new(
            Ipv4Addr::from(network),
            prefix_length,
        )?));
    }

    Ok(())
}

fn append_ipv6_blocks(
    blocks: &mut Vec<IpNet>,
    first: Ipv6Addr,
    last: Ipv6Addr,
) -> Result<(), CidrRangeError> {
    for (network, prefix_length) in aligned_blocks(u128::from(first), u128::from(last), IPV6_WIDTH)
    {
        blocks.push(IpNet::V6(Ipv6Net::new(
            Ipv6Addr::from(network),
            prefix_length,
        )?));
    }

    Ok(())
}

/// Decompose the closed integer range `[first, last]` into the minimal
/// ascending list of power-of-two aligned blocks, returned as
/// `(network, prefix_length)` pairs for an address family of `width` bits.
///
/// Each step peels off the largest block that both starts at `first` (its
/// size capped by the alignment of `first`, i.e. its trailing zero bits) and
/// does not pass `last`, then advances past it. A range decomposes into at
/// most `2 * width` blocks.
fn aligned_blocks<T>(first: T, last: T, width: u32) -> Vec<(T, u8)>
where
    T: num::PrimInt + num::Unsigned,
{
    let mut blocks = Vec::new();
    let mut first = first;

    loop {
        // The largest block size the alignment of `first` permits, and the
        // largest that still fits before `last`; the all-zeros and all-ones
        // cases would overflow the plain expressions and mean "everything".
        let alignment = if first.is_zero() {
            width
        } else {
            first.trailing_zeros()
        };
        let distance = last - first;
        let fit = if distance == T::max_value() {
            width
        } else {
            width - (distance + T::one()).leading_zeros() - 1
        };

        let size = alignment.min(fit);
        blocks.push((first, (width - size) as u8));

        if size == width {
            // A single block covering the whole address space.
            break;
        }
        let block_last = first | ((T::one() << size as usize) - T::one());
        if block_last == last {
            break;
        }
        first = block_last + T::one();
    }

    blocks
}
