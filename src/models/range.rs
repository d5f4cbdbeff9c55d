//! CIDR block parsing into canonical address ranges.
//!
//! Provides [`Range`] for a named CIDR block with its derived bounds,
//! along with the byte-wise mask helpers it is built from. IPv4 and IPv6
//! are handled by the same code over 4- and 16-byte address octets.

use crate::error::{ParseError, ParseErrorKind};
use num_bigint::BigUint;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Bit width of an IPv4 address.
pub const IPV4_BITS: u8 = 32;
/// Bit width of an IPv6 address.
pub const IPV6_BITS: u8 = 128;

/// Build the subnet mask for a prefix length over `width` bytes.
///
/// # Examples
/// ```
/// use cidr_registry::models::prefix_mask;
/// assert_eq!(prefix_mask(20, 4).unwrap(), vec![0xFF, 0xFF, 0xF0, 0x00]);
/// ```
pub fn prefix_mask(len: u8, width: usize) -> Result<Vec<u8>, ParseErrorKind> {
    let bits = width * 8;
    if usize::from(len) > bits {
        return Err(ParseErrorKind::PrefixTooLong {
            length: u32::from(len),
            bits: bits as u8,
        });
    }
    let mask = (0..width)
        .map(|i| {
            let ones = usize::from(len).saturating_sub(i * 8).min(8);
            if ones == 0 {
                0
            } else {
                0xFFu8 << (8 - ones)
            }
        })
        .collect();
    Ok(mask)
}

/// Get the network address (host bits cleared) for an IP and prefix length.
pub fn network_addr(addr: IpAddr, len: u8) -> Result<IpAddr, ParseErrorKind> {
    match addr {
        IpAddr::V4(a) => {
            let mut octets = a.octets();
            apply_mask(&mut octets, len, false)?;
            Ok(IpAddr::V4(Ipv4Addr::from(octets)))
        }
        IpAddr::V6(a) => {
            let mut octets = a.octets();
            apply_mask(&mut octets, len, false)?;
            Ok(IpAddr::V6(Ipv6Addr::from(octets)))
        }
    }
}

/// Get the highest address (host bits set) for an IP and prefix length.
pub fn broadcast_addr(addr: IpAddr, len: u8) -> Result<IpAddr, ParseErrorKind> {
    match addr {
        IpAddr::V4(a) => {
            let mut octets = a.octets();
            apply_mask(&mut octets, len, true)?;
            Ok(IpAddr::V4(Ipv4Addr::from(octets)))
        }
        IpAddr::V6(a) => {
            let mut octets = a.octets();
            apply_mask(&mut octets, len, true)?;
            Ok(IpAddr::V6(Ipv6Addr::from(octets)))
        }
    }
}

/// Number of addresses in a block, `2^(bits - len)`.
///
/// A `/0` IPv6 block holds 2^128 addresses, so this is never a native integer.
pub fn address_count(len: u8, bits: u8) -> Result<BigUint, ParseErrorKind> {
    if len > bits {
        return Err(ParseErrorKind::PrefixTooLong {
            length: u32::from(len),
            bits,
        });
    }
    Ok(BigUint::from(1u8) << usize::from(bits - len))
}

// Clears host bits, then optionally sets them all (first | !mask).
fn apply_mask(octets: &mut [u8], len: u8, set_host_bits: bool) -> Result<(), ParseErrorKind> {
    let mask = prefix_mask(len, octets.len())?;
    for (octet, m) in octets.iter_mut().zip(mask) {
        *octet &= m;
        if set_host_bits {
            *octet |= !m;
        }
    }
    Ok(())
}

fn octets_of(addr: &IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(a) => a.octets().to_vec(),
        IpAddr::V6(a) => a.octets().to_vec(),
    }
}

fn bits_of(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_BITS,
        IpAddr::V6(_) => IPV6_BITS,
    }
}

/// A named CIDR block with its canonical bounds.
///
/// Built once by [`Range::new`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    name: String,
    cidr: String,
    description: String,
    first_ip: IpAddr,
    last_ip: IpAddr,
    prefix: String,
    length: u8,
    count: BigUint,
    mask: Vec<u8>,
}

impl Range {
    /// Parse a CIDR literal (e.g. "10.0.0.0/16" or "2001:db8::/32").
    ///
    /// The address may have host bits set; they are cleared in
    /// [`Range::first_ip`] and [`Range::prefix`].
    pub fn new(name: &str, cidr: &str, description: &str) -> Result<Range, ParseError> {
        let err = |kind| ParseError::new(cidr, kind);

        let (addr_text, len_text) = cidr
            .split_once('/')
            .ok_or_else(|| err(ParseErrorKind::MissingSeparator))?;
        let addr: IpAddr = addr_text
            .parse()
            .map_err(|_| err(ParseErrorKind::InvalidAddress(addr_text.to_string())))?;

        if len_text.is_empty() || !len_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err(ParseErrorKind::InvalidPrefixLength(len_text.to_string())));
        }
        let length: u32 = len_text
            .parse()
            .map_err(|_| err(ParseErrorKind::InvalidPrefixLength(len_text.to_string())))?;
        let bits = bits_of(&addr);
        if length > u32::from(bits) {
            return Err(err(ParseErrorKind::PrefixTooLong { length, bits }));
        }
        let length = length as u8;

        let mask = prefix_mask(length, usize::from(bits / 8)).map_err(err)?;
        let first_ip = network_addr(addr, length).map_err(err)?;
        let last_ip = broadcast_addr(addr, length).map_err(err)?;
        let count = address_count(length, bits).map_err(err)?;

        log::trace!("parsed {name} {cidr} => {first_ip}..{last_ip} count={count}");

        Ok(Range {
            name: name.to_string(),
            cidr: cidr.to_string(),
            description: description.to_string(),
            first_ip,
            last_ip,
            prefix: format!("{first_ip}/{length}"),
            length,
            count,
            mask,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The CIDR text as originally supplied.
    pub fn cidr(&self) -> &str {
        &self.cidr
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lowest address in the block.
    pub fn first_ip(&self) -> IpAddr {
        self.first_ip
    }

    /// Highest address in the block.
    pub fn last_ip(&self) -> IpAddr {
        self.last_ip
    }

    /// Canonical `network/length` form.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn count(&self) -> &BigUint {
        &self.count
    }

    /// Address width of this block's family (32 or 128).
    pub fn bits(&self) -> u8 {
        bits_of(&self.first_ip)
    }

    /// True if `addr` lies inside this block's network boundary.
    ///
    /// Addresses of the other family are never contained.
    pub fn contains(&self, addr: &IpAddr) -> bool {
        let octets = octets_of(addr);
        let network = octets_of(&self.first_ip);
        octets.len() == network.len()
            && octets
                .iter()
                .zip(&self.mask)
                .zip(&network)
                .all(|((a, m), n)| a & m == *n)
    }

    /// True if the two blocks share at least one address.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.contains(&other.first_ip)
            || self.contains(&other.last_ip)
            || other.contains(&self.first_ip)
            || other.contains(&self.last_ip)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.cidr)
    }
}
