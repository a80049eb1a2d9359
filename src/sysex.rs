//! MIDI System Exclusive message (SysEx) parser and builder.
//!
//! SysExes are an extensibility feature of the MIDI standard and almost
//! always vendor-specific, so a fully general parser is neither possible nor
//! wanted here: this code understands the universal identity handshake and
//! the JD-Xi's Roland-format messages, and classifies everything else as
//! foreign so the caller can drop it without logging noise. A shared MIDI
//! bus routinely carries other devices' identity probes and dumps, so the
//! foreign case is common, not exceptional.
//!
//! Manufacturer-specific parsing is delegated to child modules.
//!
//! The main reference here was the _MIDI 1.0 Detailed Specification_.

pub mod roland;
pub mod universal;

use thiserror::Error;

pub type ManufacturerId = u8;
pub const MF_ID_ROLAND: ManufacturerId = 0x41;
pub const MF_ID_UNIVERSAL_NON_REAL_TIME: ManufacturerId = 0x7E;
pub const MF_ID_UNIVERSAL_REAL_TIME: ManufacturerId = 0x7F;

pub type DeviceId = u8;
/// "All call" is the name in the MIDI 1.0 Detailed Specification, but it is
/// more intuitive to call this the "broadcast" ID. That's what Roland do.
pub const DV_ID_BROADCAST: DeviceId = 0x7F;

/// Why a buffer could not be parsed.
///
/// The foreign variants ([ParseError::NotJdxi] and
/// [ParseError::UnsupportedUniversal]) are recoverable skip conditions, not
/// faults: they mean "well-formed SysEx for somebody else". Callers should
/// check [ParseError::is_foreign] before logging anything.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a SysEx message (missing F0h status byte)")]
    NotSysEx,
    #[error("SysEx message is missing its F7h terminator")]
    Unterminated,
    #[error("SysEx message too short to contain a complete header")]
    TooShort,
    #[error("SysEx body contains non-data byte {byte:02X}h at offset {offset}")]
    DataByteOutOfRange { byte: u8, offset: usize },
    #[error("not a JD-Xi message (manufacturer {manufacturer:02X}h)")]
    NotJdxi { manufacturer: ManufacturerId },
    #[error("universal SysEx sub-ID {sub_id1:02X}h {sub_id2:02X}h is not an identity message")]
    UnsupportedUniversal { sub_id1: u8, sub_id2: u8 },
}

impl ParseError {
    /// True for well-formed SysEx that simply belongs to another device or
    /// protocol. Callers are expected to ignore these silently.
    pub fn is_foreign(&self) -> bool {
        matches!(
            self,
            ParseError::NotJdxi { .. } | ParseError::UnsupportedUniversal { .. }
        )
    }
}

/// A successfully parsed SysEx message.
#[derive(Debug)]
pub enum ParsedSysEx {
    /// Universal identity request. The JD-Xi answers these; so do we, in the
    /// sense that the embedding application may want to reply on behalf of a
    /// virtual device.
    IdentityRequest { device_id: DeviceId },
    /// Universal identity reply, from any manufacturer. Use
    /// [universal::IdentityReply::is_jd_xi] before trusting the device.
    IdentityReply(universal::IdentityReply),
    /// JD-Xi DT1 data set: decoded parameter dump.
    Dump(roland::ParsedSysExData),
    /// JD-Xi RQ1 data request (as composed by [roland::compose_request]).
    DataRequest {
        address: roland::Address,
        size: u32,
    },
}

/// Parse one complete `F0h..F7h` buffer.
///
/// Universal non-real-time messages are checked before the Roland branch:
/// identity replies use a different header layout than tone dumps, and must
/// be recognised even when they come from a non-Roland device.
pub fn parse_sysex(data: &[u8]) -> Result<ParsedSysEx, ParseError> {
    let &[0xF0, ref data @ ..] = data else {
        return Err(ParseError::NotSysEx);
    };
    let &[ref data @ .., 0xF7] = data else {
        return Err(ParseError::Unterminated);
    };

    if let Some(offset) = data.iter().position(|&byte| byte > 0x7F) {
        return Err(ParseError::DataByteOutOfRange {
            byte: data[offset],
            offset,
        });
    }

    let &[manufacturer_id, ref body @ ..] = data else {
        return Err(ParseError::TooShort);
    };

    match manufacturer_id {
        MF_ID_UNIVERSAL_NON_REAL_TIME => universal::parse_identity_body(body),
        MF_ID_ROLAND => roland::parse_sysex_body(body),
        other => Err(ParseError::NotJdxi {
            manufacturer: other,
        }),
    }
}
