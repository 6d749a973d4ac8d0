//! Validate that CIDR blocks are properly merged and re-decomposed.

use ipnet::IpNet;
use range_merge::{
    error::CidrRangeError, merge_cidr_ranges, merge_cidr_ranges_with_attributes,
};
use test_utilities::TestResult;


fn network(literal: &str) -> IpNet {
    literal.parse().expect("valid CIDR literal")
}


#[test]
pub fn sibling_blocks_fuse_into_their_parent() -> TestResult {
    let merged = merge_cidr_ranges(&["192.0.2.0/26", "192.0.2.64/26"])?;

    assert_eq!(merged, vec![network("192.0.2.0/25")]);

    Ok(())
}

#[test]
pub fn attribute_conflicts_are_resolved_before_decomposition() -> TestResult {
    let src = vec![
        ("192.0.2.0/24", "a"),
        ("192.0.2.0/26", "b"),
        ("192.0.2.64/26", "b"),
        ("224.0.0.0/4", "c"),
        ("2000::/3", "c"),
    ];

    let expected = vec![
        (network("192.0.2.0/25"), "b"),
        (network("192.0.2.128/25"), "a"),
        (network("224.0.0.0/4"), "c"),
        (network("2000::/3"), "c"),
    ];

    assert_eq!(merge_cidr_ranges_with_attributes(&src)?, expected);

    Ok(())
}

#[test]
pub fn carved_out_block_explodes_the_remainder() -> TestResult {
    let src = vec![
        ("1.0.0.0/8", "foo"),
        ("1.255.240.0/24", "bar"),
        ("2000::/4", "foo"),
        ("3000::/4", "foo"),
    ];

    let expected = vec![
        (network("1.0.0.0/9"), "foo"),
        (network("1.128.0.0/10"), "foo"),
        (network("1.192.0.0/11"), "foo"),
        (network("1.224.0.0/12"), "foo"),
        (network("1.240.0.0/13"), "foo"),
        (network("1.248.0.0/14"), "foo"),
        (network("1.252.0.0/15"), "foo"),
        (network("1.254.0.0/16"), "foo"),
        (network("1.255.0.0/17"), "foo"),
        (network("1.255.128.0/18"), "foo"),
        (network("1.255.192.0/19"), "foo"),
        (network("1.255.224.0/20"), "foo"),
        (network("1.255.240.0/24"), "bar"),
        (network("1.255.241.0/24"), "foo"),
        (network("1.255.242.0/23"), "foo"),
        (network("1.255.244.0/22"), "foo"),
        (network("1.255.248.0/21"), "foo"),
        (network("2000::/3"), "foo"),
    ];

    assert_eq!(merge_cidr_ranges_with_attributes(&src)?, expected);

    Ok(())
}

#[test]
pub fn host_bits_are_truncated_to_the_network() -> TestResult {
    let merged = merge_cidr_ranges(&["192.0.2.17/24"])?;

    assert_eq!(merged, vec![network("192.0.2.0/24")]);

    Ok(())
}

#[test]
pub fn empty_input_stays_empty() -> TestResult {
    assert_eq!(merge_cidr_ranges(&[])?, vec![]);
    assert_eq!(merge_cidr_ranges_with_attributes::<&str>(&[])?, vec![]);

    Ok(())
}

#[test]
pub fn unparsable_literal_is_rejected() {
    let result = merge_cidr_ranges(&["192.0.2.0/33"]);

    assert!(matches!(result, Err(CidrRangeError::InvalidCidrLiteral(_))));
}
