use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// A KNX group address (16 bit)
///
/// Parsed from three-level `main/middle/sub` (5/3/8 bits), two-level
/// `main/sub` (5/11 bits) or a free integer. Always displayed three-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupAddress(pub u16);

impl GroupAddress {
    /// Creates a group address from its three-level parts
    pub fn new(main: u8, middle: u8, sub: u8) -> Result<Self> {
        if main > 0x1F {
            return Err(Error::invalid_address(format!("main group {} out of range", main)));
        }
        if middle > 0x07 {
            return Err(Error::invalid_address(format!("middle group {} out of range", middle)));
        }
        Ok(GroupAddress(
            (u16::from(main) << 11) | (u16::from(middle) << 8) | u16::from(sub),
        ))
    }

    /// Returns the raw 16-bit value
    pub fn raw(&self) -> u16 {
        self.0
    }

    pub fn main(&self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    pub fn middle(&self) -> u8 {
        ((self.0 >> 8) & 0x07) as u8
    }

    pub fn sub(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl FromStr for GroupAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = parse_parts(s, '/')?;
        match parts.as_slice() {
            [raw] => u16::try_from(*raw)
                .map(GroupAddress)
                .map_err(|_| Error::invalid_address(s)),
            [main, sub] => {
                if *main > 0x1F || *sub > 0x07FF {
                    return Err(Error::invalid_address(s));
                }
                Ok(GroupAddress(((*main as u16) << 11) | *sub as u16))
            }
            [main, middle, sub] => {
                if *sub > 0xFF {
                    return Err(Error::invalid_address(s));
                }
                let main = u8::try_from(*main).map_err(|_| Error::invalid_address(s))?;
                let middle = u8::try_from(*middle).map_err(|_| Error::invalid_address(s))?;
                GroupAddress::new(main, middle, *sub as u8)
            }
            _ => Err(Error::invalid_address(s)),
        }
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.main(), self.middle(), self.sub())
    }
}

impl TryFrom<String> for GroupAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<GroupAddress> for String {
    fn from(address: GroupAddress) -> Self {
        address.to_string()
    }
}

/// A KNX physical (individual) address: `area.line.device` (4/4/8 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhysicalAddress(pub u16);

impl PhysicalAddress {
    /// Creates a physical address from its parts
    pub fn new(area: u8, line: u8, device: u8) -> Result<Self> {
        if area > 0x0F || line > 0x0F {
            return Err(Error::invalid_address(format!("{}.{}.{}", area, line, device)));
        }
        Ok(PhysicalAddress(
            (u16::from(area) << 12) | (u16::from(line) << 8) | u16::from(device),
        ))
    }

    pub fn area(&self) -> u8 {
        ((self.0 >> 12) & 0x0F) as u8
    }

    pub fn line(&self) -> u8 {
        ((self.0 >> 8) & 0x0F) as u8
    }

    pub fn device(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl Default for PhysicalAddress {
    fn default() -> Self {
        // 15.15.250
        PhysicalAddress(0xFFFA)
    }
}

impl FromStr for PhysicalAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = parse_parts(s, '.')?;
        match parts.as_slice() {
            [area, line, device] => {
                let area = u8::try_from(*area).map_err(|_| Error::invalid_address(s))?;
                let line = u8::try_from(*line).map_err(|_| Error::invalid_address(s))?;
                let device = u8::try_from(*device).map_err(|_| Error::invalid_address(s))?;
                PhysicalAddress::new(area, line, device)
            }
            _ => Err(Error::invalid_address(s)),
        }
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.area(), self.line(), self.device())
    }
}

impl TryFrom<String> for PhysicalAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PhysicalAddress> for String {
    fn from(address: PhysicalAddress) -> Self {
        address.to_string()
    }
}

fn parse_parts(s: &str, separator: char) -> Result<Vec<u32>> {
    s.trim()
        .split(separator)
        .map(|part| part.parse::<u32>().map_err(|_| Error::invalid_address(s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_address_three_level() {
        let addr: GroupAddress = "1/2/3".parse().unwrap();
        assert_eq!(addr.raw(), 0x0A03);
        assert_eq!(addr.to_string(), "1/2/3");
        assert_eq!(addr, GroupAddress::new(1, 2, 3).unwrap());
    }

    #[test]
    fn test_group_address_two_level_and_free() {
        let two: GroupAddress = "1/515".parse().unwrap();
        assert_eq!(two.to_string(), "1/2/3");
        let free: GroupAddress = "2563".parse().unwrap();
        assert_eq!(free, two);
    }

    #[test]
    fn test_group_address_out_of_range() {
        assert!("32/0/0".parse::<GroupAddress>().is_err());
        assert!("1/8/0".parse::<GroupAddress>().is_err());
        assert!("1/2/256".parse::<GroupAddress>().is_err());
        assert!("1/2048".parse::<GroupAddress>().is_err());
        assert!("65536".parse::<GroupAddress>().is_err());
        assert!("a/b/c".parse::<GroupAddress>().is_err());
        assert!("1/2/3/4".parse::<GroupAddress>().is_err());
    }

    #[test]
    fn test_physical_address() {
        let addr: PhysicalAddress = "1.1.1".parse().unwrap();
        assert_eq!(addr.0, 0x1101);
        assert_eq!(addr.to_string(), "1.1.1");
        assert_eq!(PhysicalAddress::default().to_string(), "15.15.250");
        assert!("16.0.0".parse::<PhysicalAddress>().is_err());
        assert!("1/1/1".parse::<PhysicalAddress>().is_err());
    }

    #[test]
    fn test_address_serde() {
        let addr = GroupAddress::new(1, 0, 12).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"1/0/12\"");
        let back: GroupAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<GroupAddress>("\"99/0/0\"").is_err());
    }
}
