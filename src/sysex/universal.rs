//! Universal SysEx handling. These are the only messages specified in the
//! MIDI spec itself, rather than by a manufacturer. Only the General
//! Information identity handshake is understood; it is how we confirm, at
//! connection time, that the device answering on the bus is a JD-Xi before
//! any parameter traffic is trusted.
//!
//! The main reference here was the _MIDI 1.0 Detailed Specification_.

use super::{
    DeviceId, ManufacturerId, ParseError, ParsedSysEx, DV_ID_BROADCAST, MF_ID_ROLAND,
    MF_ID_UNIVERSAL_NON_REAL_TIME,
};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub type SubId1 = u8;
/// Non-real time "General Information" sub-ID#1.
pub const SI1_NRT_GENERAL_INFORMATION: SubId1 = 0x06;

pub type SubId2 = u8;
// Sub-ID#2 values are namespaced under sub-ID#1 ones. These are the General
// Information ones.
pub const SI2_NRT_GI_IDENTITY_REQUEST: SubId2 = 0x01;
pub const SI2_NRT_GI_IDENTITY_REPLY: SubId2 = 0x02;

/// Device family code the JD-Xi reports in its identity reply.
pub const JD_XI_FAMILY_CODE: [u8; 2] = [0x0E, 0x03];

/// A parsed universal identity reply.
///
/// The layout is fixed:
/// `F0h 7Eh <dev> 06h 02h <mfr> <family lo> <family hi> <number lo>
/// <number hi> <v1> <v2> <v3> <v4> F7h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityReply {
    pub device_id: DeviceId,
    pub manufacturer_id: ManufacturerId,
    /// Device family, LSB first as transmitted.
    pub family_code: [u8; 2],
    /// Family member number, LSB first as transmitted.
    pub family_number: [u8; 2],
    pub software_version: [u8; 4],
}

impl IdentityReply {
    /// Whether this reply came from a JD-Xi (Roland manufacturer ID and the
    /// JD-Xi family code).
    pub fn is_jd_xi(&self) -> bool {
        self.manufacturer_id == MF_ID_ROLAND && self.family_code == JD_XI_FAMILY_CODE
    }

    /// Software version in the dotted form the front panel shows.
    pub fn version_string(&self) -> String {
        let [a, b, c, d] = self.software_version;
        format!("{}.{}.{}.{}", a, b, c, d)
    }
}

impl Display for IdentityReply {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if self.device_id == DV_ID_BROADCAST {
            write!(f, "Broadcast, ")?;
        } else {
            write!(f, "Device {:02X}h, ", self.device_id)?;
        }
        if self.is_jd_xi() {
            write!(f, "Roland JD-Xi")?;
        } else {
            write!(
                f,
                "Manufacturer {:02X}h, Family {:02X}h {:02X}h",
                self.manufacturer_id, self.family_code[0], self.family_code[1]
            )?;
        }
        write!(f, ", version {}", self.version_string())
    }
}

/// Build a universal identity request. Send this on connect and feed the
/// answer back through [super::parse_sysex]; a JD-Xi always answers.
pub fn identity_request(device_id: DeviceId) -> Vec<u8> {
    vec![
        0xF0,
        MF_ID_UNIVERSAL_NON_REAL_TIME,
        device_id,
        SI1_NRT_GENERAL_INFORMATION,
        SI2_NRT_GI_IDENTITY_REQUEST,
        0xF7,
    ]
}

/// Parse the body of a universal non-real-time SysEx (everything between the
/// manufacturer ID and the trailing F7h).
pub(super) fn parse_identity_body(body: &[u8]) -> Result<ParsedSysEx, ParseError> {
    let &[device_id, sub_id1, sub_id2, ref data @ ..] = body else {
        return Err(ParseError::TooShort);
    };

    match (sub_id1, sub_id2) {
        (SI1_NRT_GENERAL_INFORMATION, SI2_NRT_GI_IDENTITY_REQUEST) => {
            Ok(ParsedSysEx::IdentityRequest { device_id })
        }
        (SI1_NRT_GENERAL_INFORMATION, SI2_NRT_GI_IDENTITY_REPLY) => {
            let &[manufacturer_id, fam_lo, fam_hi, num_lo, num_hi, v1, v2, v3, v4, ..] = data
            else {
                return Err(ParseError::TooShort);
            };
            Ok(ParsedSysEx::IdentityReply(IdentityReply {
                device_id,
                manufacturer_id,
                family_code: [fam_lo, fam_hi],
                family_number: [num_lo, num_hi],
                software_version: [v1, v2, v3, v4],
            }))
        }
        // Sample dumps, tuning dumps, file dumps and friends may well be on
        // the bus, but they belong to somebody else's conversation.
        _ => Err(ParseError::UnsupportedUniversal { sub_id1, sub_id2 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sysex::parse_sysex;

    #[test]
    fn test_identity_request_round_trip() {
        let request = identity_request(DV_ID_BROADCAST);
        assert_eq!(request, [0xF0, 0x7E, 0x7F, 0x06, 0x01, 0xF7]);
        match parse_sysex(&request) {
            Ok(ParsedSysEx::IdentityRequest { device_id }) => {
                assert_eq!(device_id, DV_ID_BROADCAST)
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_jd_xi_identity_reply() {
        let reply = [
            0xF0, 0x7E, 0x10, 0x06, 0x02, 0x41, 0x0E, 0x03, 0x00, 0x00, 0x01, 0x05, 0x00, 0x00,
            0xF7,
        ];
        let Ok(ParsedSysEx::IdentityReply(reply)) = parse_sysex(&reply) else {
            panic!("expected identity reply");
        };
        assert!(reply.is_jd_xi());
        assert_eq!(reply.device_id, 0x10);
        assert_eq!(reply.version_string(), "1.5.0.0");
    }

    #[test]
    fn test_foreign_identity_reply_parses_but_is_not_jd_xi() {
        // Yamaha identity reply: must parse, must not be mistaken for a
        // JD-Xi, must not be an error.
        let reply = [
            0xF0, 0x7E, 0x01, 0x06, 0x02, 0x43, 0x00, 0x41, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
            0xF7,
        ];
        let Ok(ParsedSysEx::IdentityReply(reply)) = parse_sysex(&reply) else {
            panic!("expected identity reply");
        };
        assert!(!reply.is_jd_xi());
    }

    #[test]
    fn test_other_universal_traffic_is_foreign() {
        // Sample Dump Request aimed at some sampler.
        let err = parse_sysex(&[0xF0, 0x7E, 0x00, 0x03, 0x00, 0x00, 0xF7]).unwrap_err();
        assert!(err.is_foreign());
    }
}
