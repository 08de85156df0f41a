use std::fmt;

use bytes::Bytes;

/// Data portion of a telegram
///
/// Values of up to six bits travel inline in the APCI octet (`Binary`),
/// everything wider as a fixed-length byte sequence (`Array`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    /// Inline small value
    Binary(u8),
    /// Byte sequence whose length is defined by the DPT
    Array(Bytes),
}

impl Payload {
    /// Creates an array payload from raw bytes
    pub fn array(raw: impl Into<Bytes>) -> Self {
        Payload::Array(raw.into())
    }

    /// Returns true for inline payloads
    pub fn is_binary(&self) -> bool {
        matches!(self, Payload::Binary(_))
    }

    /// Returns the raw payload bytes
    pub fn to_bytes(&self) -> Bytes {
        match self {
            Payload::Binary(value) => Bytes::copy_from_slice(&[*value]),
            Payload::Array(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Binary(value) => write!(f, "<Binary {:#04x}>", value),
            Payload::Array(raw) => {
                write!(f, "<Array")?;
                for byte in raw.iter() {
                    write!(f, " {:#04x}", byte)?;
                }
                write!(f, ">")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Payload::Binary(0x0f), Payload::Binary(0x0f));
        assert_ne!(Payload::Binary(0x01), Payload::array(vec![0x01u8]));
        assert_eq!(Payload::array(vec![0x0cu8, 0x1a]), Payload::Array(Bytes::from_static(&[0x0c, 0x1a])));
    }

    #[test]
    fn test_display() {
        assert_eq!(Payload::Binary(0x0f).to_string(), "<Binary 0x0f>");
        assert_eq!(Payload::array(vec![0x01u8, 0xff]).to_string(), "<Array 0x01 0xff>");
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(&Payload::Binary(0x05).to_bytes()[..], &[0x05]);
        assert!(Payload::Binary(0).is_binary());
    }
}
