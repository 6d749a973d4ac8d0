//! Custom error types.

use std::net::IpAddr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpRangeError {
    /// A range endpoint could not be parsed as an IPv4 or IPv6 address.
    #[error("failed to parse an address literal: {0}")]
    InvalidAddressLiteral(#[from] std::net::AddrParseError),

    /// Note: this is raised while validating a single entry, before any
    /// merging happens. A range must keep both of its endpoints in one
    /// address family; mixing families across *entries* is fine.
    #[error("range endpoints mix address families: {start} and {end}")]
    MismatchedAddressFamilies { start: IpAddr, end: IpAddr },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrRangeError {
    /// An entry could not be parsed as a CIDR literal.
    #[error("failed to parse a CIDR literal: {0}")]
    InvalidCidrLiteral(#[from] ipnet::AddrParseError),

    /// A block produced by range decomposition could not be rebuilt as a
    /// network value.
    #[error("invalid prefix length for a decomposed block: {0}")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
}
