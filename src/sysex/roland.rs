//! Roland JD-Xi SysEx composing and parsing.
//!
//! The JD-Xi speaks the same "Type IV" exclusive format as the rest of
//! Roland's range: a 4-byte address into the device's parameter memory, a
//! one-byte command (DT1 to set data, RQ1 to request it), and a
//! two's-complement-mod-128 checksum over the address and data. The
//! parameter maps themselves live in the [maps] child module.
//!
//! Both directions are pure byte transformations. Nothing here performs I/O
//! or keeps state between calls, so the functions may be used from a MIDI
//! callback thread directly.
//!
//! The main reference here was the JD-Xi MIDI implementation chart; the
//! framing matches the SC-7 and SC-55 owner's manuals too.

use super::{DeviceId, ParseError, ParsedSysEx, MF_ID_ROLAND};
use crate::format_bytes;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

pub type CommandId = u8;

/// "Data set 1" aka "DT1".
pub const CM_ID_DT1: CommandId = 0x12;
/// "Request data 1" aka "RQ1".
pub const CM_ID_RQ1: CommandId = 0x11;

/// The JD-Xi's model ID, as it appears after the device ID.
pub const MODEL_ID_JD_XI: [u8; 4] = [0x00, 0x00, 0x00, 0x0E];

/// Device ID the JD-Xi ships with. Configurable on the hardware from 11h to
/// 1Fh, but 10h in practice.
pub const DV_ID_JD_XI: DeviceId = 0x10;

// Reserved keys in the decoded parameter map.
pub const KEY_ADDRESS: &str = "ADDRESS";
pub const KEY_TEMPORARY_AREA: &str = "TEMPORARY_AREA";
pub const KEY_SYNTH_TONE: &str = "SYNTH_TONE";

/// A 4-byte parameter-memory address (MSB, UMB, LMB, LSB).
///
/// Immutable value object: deriving a nearby address (a partial's block, a
/// parameter's slot) always produces a new `Address` via [Address::offset_by]
/// rather than mutating in place. Every byte stays within the 7-bit range
/// the wire format allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 4]);

impl Address {
    pub const fn new(msb: u8, umb: u8, lmb: u8, lsb: u8) -> Address {
        assert!(msb < 0x80 && umb < 0x80 && lmb < 0x80 && lsb < 0x80);
        Address([msb, umb, lmb, lsb])
    }

    /// Derive a new address `offset` slots further on, carrying into the
    /// upper bytes with Roland's 7-bits-per-byte arithmetic.
    pub const fn offset_by(self, offset: u8) -> Address {
        let [msb, umb, lmb, lsb] = self.0;
        let lsb_sum = lsb as u16 + offset as u16;
        let lmb_sum = lmb as u16 + (lsb_sum >> 7);
        let umb_sum = umb as u16 + (lmb_sum >> 7);
        // A u8 offset can never carry past the UMB.
        assert!(umb_sum < 0x80);
        Address([
            msb,
            umb_sum as u8,
            (lmb_sum & 0x7F) as u8,
            (lsb_sum & 0x7F) as u8,
        ])
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", format_bytes(&self.0))
    }
}

/// One row of a parameter address map: a named control within a block.
///
/// `min` and `max` bound the *device* value (what actually travels on the
/// wire), not the display rendering; signed and percentage renderings are
/// the business of [maps::display_value].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter {
    /// Address LSB of this parameter within its block.
    pub offset: u8,
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub kind: ParamKind,
}

/// How a parameter's value is carried on the wire and shown to people.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Single data byte, used at face value.
    Byte,
    /// Single data byte; the display subtracts `center` (64 for most
    /// bipolar controls, so 0..=127 reads as -64..=+63).
    Centered { center: i32 },
    /// Single data byte indexing a display-name table.
    Enum { names: &'static [&'static str] },
    /// 0 = OFF, 1 = ON.
    Switch,
    /// Four data bytes holding one nibble each, high to low, for values
    /// wider than 7 bits. The display subtracts `center`.
    Nibble4 { center: i32 },
    /// Run of ASCII bytes (tone, program and kit names).
    Name { len: u8 },
}

impl Parameter {
    /// Number of data bytes this parameter occupies on the wire.
    pub const fn byte_len(&self) -> usize {
        match self.kind {
            ParamKind::Nibble4 { .. } => 4,
            ParamKind::Name { len } => len as usize,
            _ => 1,
        }
    }
}

/// A decoded parameter value: a raw device integer, or text for name blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i32),
    Text(String),
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            ParamValue::Int(value) => write!(f, "{}", value),
            ParamValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// The structured result of decoding one DT1 dump.
///
/// Produced fresh per message and never retained by the codec; the embedding
/// application reads what it wants and drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSysExData {
    pub address: Address,
    /// Which temporary area the address landed in, if recognised.
    pub temporary_area: Option<maps::TemporaryArea>,
    /// Which block within the area (common, a partial, ...), if recognised.
    pub synth_tone: Option<maps::SynthTone>,
    /// Whether the trailing checksum byte was correct. Mismatches are
    /// tolerated: real hardware has been seen emitting edge-case checksums,
    /// and half a dump is more useful than none when debugging.
    pub valid_checksum: bool,
    /// Decoded parameter name -> device value.
    pub params: BTreeMap<String, ParamValue>,
}

impl ParsedSysExData {
    /// Flatten into a single string-keyed map (JSON-friendly) with the
    /// reserved `ADDRESS` / `TEMPORARY_AREA` / `SYNTH_TONE` keys alongside
    /// the decoded parameters.
    pub fn to_map(&self) -> BTreeMap<String, ParamValue> {
        let mut map = self.params.clone();
        map.insert(
            KEY_ADDRESS.to_string(),
            ParamValue::Text(self.address.to_string()),
        );
        if let Some(area) = self.temporary_area {
            map.insert(
                KEY_TEMPORARY_AREA.to_string(),
                ParamValue::Text(area.to_string()),
            );
        }
        if let Some(tone) = self.synth_tone {
            map.insert(
                KEY_SYNTH_TONE.to_string(),
                ParamValue::Text(tone.to_string()),
            );
        }
        map
    }
}

/// Why a message could not be composed. These surface before any bytes are
/// built: a wrong value is rejected, never clamped, so a UI bug cannot send
/// a plausible-but-wrong value to the hardware.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("value {value} for {name} is outside {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("{name} is a text parameter; use compose_text_message")]
    NotNumeric { name: &'static str },
    #[error("text for {name} must be ASCII and at most {len} characters")]
    BadText { name: &'static str, len: u8 },
    #[error("request size {size} does not fit in 28 bits")]
    RequestTooLarge { size: u32 },
}

/// Roland checksum over an address + data span:
/// `(80h - (sum % 80h)) % 80h`, so that the span plus the checksum byte sums
/// to zero mod 128. The hardware silently drops messages that get this
/// wrong.
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum: u32 = bytes.iter().map(|&byte| byte as u32).sum();
    ((0x80 - (sum % 0x80)) % 0x80) as u8
}

/// Check a span that already includes its trailing checksum byte.
pub fn validate_checksum(data_including_checksum: &[u8]) -> bool {
    let mut sum: u8 = 0;
    for &byte in data_including_checksum {
        sum = (sum + byte) & 0x7F;
    }
    sum == 0
}

fn message_around(command: CommandId, address: Address, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(10 + address.0.len() + data.len());
    out.push(0xF0);
    out.push(MF_ID_ROLAND);
    out.push(DV_ID_JD_XI);
    out.extend_from_slice(&MODEL_ID_JD_XI);
    out.push(command);
    let sum_start = out.len();
    out.extend_from_slice(&address.0);
    out.extend_from_slice(data);
    let sum = checksum(&out[sum_start..]);
    out.push(sum);
    out.push(0xF7);
    out
}

/// Compose a DT1 parameter change: the exact bytes to hand to the MIDI
/// output for setting `param` (within the block at `address`) to `value`.
///
/// `address` is the block's base address; the parameter's own offset is
/// folded into the LSB here. `value` is the device value and must lie within
/// the parameter's declared bounds.
pub fn compose_message(
    address: Address,
    param: &Parameter,
    value: i32,
) -> Result<Vec<u8>, ComposeError> {
    // Text parameters have no numeric bounds; reject them before the range
    // check so the caller gets pointed at compose_text_message.
    if let ParamKind::Name { .. } = param.kind {
        return Err(ComposeError::NotNumeric { name: param.name });
    }
    if value < param.min || value > param.max {
        return Err(ComposeError::OutOfRange {
            name: param.name,
            value,
            min: param.min,
            max: param.max,
        });
    }
    let data: Vec<u8> = match param.kind {
        ParamKind::Name { .. } => unreachable!(),
        ParamKind::Nibble4 { .. } => vec![
            ((value >> 12) & 0x0F) as u8,
            ((value >> 8) & 0x0F) as u8,
            ((value >> 4) & 0x0F) as u8,
            (value & 0x0F) as u8,
        ],
        _ => vec![value as u8],
    };
    Ok(message_around(
        CM_ID_DT1,
        address.offset_by(param.offset),
        &data,
    ))
}

/// Compose a DT1 write of a name block (tone name, program name, kit name).
/// `text` must be ASCII and no longer than the block; it is space-padded to
/// the full declared length, which is also how the hardware stores names.
pub fn compose_text_message(
    address: Address,
    param: &Parameter,
    text: &str,
) -> Result<Vec<u8>, ComposeError> {
    let ParamKind::Name { len } = param.kind else {
        return Err(ComposeError::BadText {
            name: param.name,
            len: 0,
        });
    };
    if !text.is_ascii() || text.len() > len as usize {
        return Err(ComposeError::BadText {
            name: param.name,
            len,
        });
    }
    let mut data = text.as_bytes().to_vec();
    data.resize(len as usize, b' ');
    Ok(message_around(
        CM_ID_DT1,
        address.offset_by(param.offset),
        &data,
    ))
}

/// Compose an RQ1 data request asking the device to dump `size` bytes
/// starting at `address`. The reply arrives as one or more DT1 messages.
pub fn compose_request(address: Address, size: u32) -> Result<Vec<u8>, ComposeError> {
    if size >= 1 << 28 {
        return Err(ComposeError::RequestTooLarge { size });
    }
    let data = [
        ((size >> 21) & 0x7F) as u8,
        ((size >> 14) & 0x7F) as u8,
        ((size >> 7) & 0x7F) as u8,
        (size & 0x7F) as u8,
    ];
    Ok(message_around(CM_ID_RQ1, address, &data))
}

/// Parse the body of a Roland SysEx (everything between the manufacturer ID
/// and the trailing F7h).
pub(super) fn parse_sysex_body(body: &[u8]) -> Result<ParsedSysEx, ParseError> {
    let &[_device_id, m0, m1, m2, m3, command_id, ref body @ ..] = body else {
        return Err(ParseError::TooShort);
    };
    if [m0, m1, m2, m3] != MODEL_ID_JD_XI {
        // Some other Roland box sharing the bus. Skippable, not broken.
        return Err(ParseError::NotJdxi {
            manufacturer: MF_ID_ROLAND,
        });
    }

    match command_id {
        CM_ID_DT1 => {
            // The body must hold at least an address and a checksum byte.
            // Zero data bytes is legal, if pointless.
            if body.len() < 5 {
                return Err(ParseError::TooShort);
            }
            let address = Address([body[0], body[1], body[2], body[3]]);
            let data = &body[4..body.len() - 1];

            let valid_checksum = validate_checksum(body);
            if !valid_checksum {
                log::warn!(
                    "checksum mismatch in DT1 at {}; decoding anyway",
                    address
                );
            }

            Ok(ParsedSysEx::Dump(decode_dt1(address, data, valid_checksum)))
        }
        CM_ID_RQ1 => {
            let &[a0, a1, a2, a3, s0, s1, s2, s3, _checksum] = body else {
                return Err(ParseError::TooShort);
            };
            let size = ((s0 as u32) << 21) | ((s1 as u32) << 14) | ((s2 as u32) << 7) | s3 as u32;
            Ok(ParsedSysEx::DataRequest {
                address: Address([a0, a1, a2, a3]),
                size,
            })
        }
        other => {
            log::debug!("unsupported Roland command {:02X}h", other);
            Err(ParseError::NotJdxi {
                manufacturer: MF_ID_ROLAND,
            })
        }
    }
}

/// Decode the data bytes of a DT1 against the parameter table its address
/// selects. Best-effort by design: an unknown address still yields a result
/// with the raw `ADDRESS`, and a partial dump decodes every parameter that
/// fits and stops silently, because querying a subset of a block is normal.
fn decode_dt1(address: Address, data: &[u8], valid_checksum: bool) -> ParsedSysExData {
    let block = maps::resolve_block(address);
    let mut params = BTreeMap::new();

    if let Some(block) = &block {
        // A single-parameter DT1 addresses the parameter directly, so the
        // payload starts at the address LSB rather than the block base.
        let start = address.0[3] as usize;
        for param in block.params {
            let offset = param.offset as usize;
            if offset < start {
                continue;
            }
            let rel = offset - start;
            let len = param.byte_len();
            if rel + len > data.len() {
                continue;
            }
            let bytes = &data[rel..rel + len];
            let value = match param.kind {
                ParamKind::Name { .. } => ParamValue::Text(decode_name(bytes)),
                ParamKind::Nibble4 { .. } => {
                    if bytes.iter().any(|&byte| byte > 0x0F) {
                        log::debug!("non-nibble byte in {} at {}", param.name, address);
                        continue;
                    }
                    ParamValue::Int(
                        ((bytes[0] as i32) << 12)
                            | ((bytes[1] as i32) << 8)
                            | ((bytes[2] as i32) << 4)
                            | bytes[3] as i32,
                    )
                }
                _ => ParamValue::Int(bytes[0] as i32),
            };
            params.insert(param.name.to_string(), value);
        }
    } else {
        log::debug!("no parameter table for address {}", address);
    }

    ParsedSysExData {
        address,
        temporary_area: block.as_ref().map(|block| block.area),
        synth_tone: block.as_ref().map(|block| block.tone),
        valid_checksum,
        params,
    }
}

/// Names are fixed-width ASCII, space-padded. Anything unprintable is
/// replaced rather than propagated, and trailing padding is trimmed.
fn decode_name(bytes: &[u8]) -> String {
    let text: String = bytes
        .iter()
        .map(|&byte| {
            if (0x20..0x7F).contains(&byte) {
                byte as char
            } else {
                ' '
            }
        })
        .collect();
    text.trim_end().to_string()
}

pub mod maps;

#[cfg(test)]
mod tests {
    use super::maps::jd_xi;
    use super::*;
    use crate::sysex::parse_sysex;

    fn parse_dump(message: &[u8]) -> ParsedSysExData {
        match parse_sysex(message) {
            Ok(ParsedSysEx::Dump(dump)) => dump,
            other => panic!("expected dump, got {:?}", other),
        }
    }

    #[test]
    fn test_checksum() {
        // Worked example from the SC-7 owner's manual style: address + data
        // plus the checksum must sum to zero mod 128.
        assert_eq!(checksum(&[0x18, 0x00, 0x00, 0x10, 0x64]), 0x74);
        assert!(validate_checksum(&[0x18, 0x00, 0x00, 0x10, 0x64, 0x74]));
        assert!(!validate_checksum(&[0x18, 0x00, 0x00, 0x10, 0x64, 0x75]));
        assert_eq!(checksum(&[]), 0x00);
        assert_eq!(checksum(&[0x80 - 1, 1]), 0x00);
    }

    #[test]
    fn test_address_offset_carry() {
        let base = Address::new(0x19, 0x70, 0x2E, 0x00);
        assert_eq!(base.offset_by(0x0C), Address::new(0x19, 0x70, 0x2E, 0x0C));
        // 7-bit carry into the LMB, not 8-bit.
        let near_end = Address::new(0x19, 0x01, 0x20, 0x7F);
        assert_eq!(near_end.offset_by(1), Address::new(0x19, 0x01, 0x21, 0x00));
        // A carry out of the LMB propagates into the UMB.
        let block_end = Address::new(0x19, 0x01, 0x7F, 0x7F);
        assert_eq!(block_end.offset_by(1), Address::new(0x19, 0x02, 0x00, 0x00));
    }

    #[test]
    fn test_golden_program_level() {
        let param = jd_xi::PROGRAM_COMMON
            .iter()
            .find(|param| param.name == "PROGRAM_LEVEL")
            .unwrap();
        let message = compose_message(jd_xi::TEMPORARY_PROGRAM, param, 100).unwrap();
        assert_eq!(
            message,
            [0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x12, 0x18, 0x00, 0x00, 0x10, 0x64, 0x74,
             0xF7]
        );
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let duration = jd_xi::PROGRAM_ARPEGGIO_PARAMS
            .iter()
            .find(|param| param.name == "ARPEGGIO_DURATION")
            .unwrap();
        assert_eq!(duration.max, 9);
        let err = compose_message(jd_xi::PROGRAM_ARPEGGIO, duration, 10).unwrap_err();
        assert_eq!(
            err,
            ComposeError::OutOfRange {
                name: "ARPEGGIO_DURATION",
                value: 10,
                min: 0,
                max: 9,
            }
        );
        // Lower bound too: centered parameters do not accept their display
        // values.
        let octave = jd_xi::PROGRAM_ARPEGGIO_PARAMS
            .iter()
            .find(|param| param.name == "ARPEGGIO_OCTAVE_RANGE")
            .unwrap();
        assert!(compose_message(jd_xi::PROGRAM_ARPEGGIO, octave, -3).is_err());
    }

    #[test]
    fn test_single_parameter_round_trip() {
        let param = jd_xi::PROGRAM_ARPEGGIO_PARAMS
            .iter()
            .find(|param| param.name == "ARPEGGIO_DURATION")
            .unwrap();
        let message = compose_message(jd_xi::PROGRAM_ARPEGGIO, param, 7).unwrap();
        let dump = parse_dump(&message);
        assert!(dump.valid_checksum);
        assert_eq!(dump.params["ARPEGGIO_DURATION"], ParamValue::Int(7));
        assert_eq!(
            dump.temporary_area,
            Some(maps::TemporaryArea::Program)
        );
        assert_eq!(dump.synth_tone, Some(maps::SynthTone::Arpeggio));
    }

    #[test]
    fn test_nibble_round_trip() {
        let tune = jd_xi::SYSTEM_COMMON
            .iter()
            .find(|param| param.name == "MASTER_TUNE")
            .unwrap();
        for value in [tune.min, 1024, tune.max] {
            let message = compose_message(jd_xi::SYSTEM_COMMON_ADDRESS, tune, value).unwrap();
            let dump = parse_dump(&message);
            assert_eq!(dump.params["MASTER_TUNE"], ParamValue::Int(value));
        }
    }

    #[test]
    fn test_tone_name_block() {
        let name = jd_xi::DIGITAL_TONE_COMMON
            .iter()
            .find(|param| param.name == "TONE_NAME")
            .unwrap();
        let message =
            compose_text_message(jd_xi::DIGITAL_SYNTH_1_COMMON, name, "INIT PATCH").unwrap();
        let dump = parse_dump(&message);
        assert_eq!(
            dump.params["TONE_NAME"],
            ParamValue::Text("INIT PATCH".to_string())
        );
        let map = dump.to_map();
        assert_eq!(
            map[KEY_TEMPORARY_AREA],
            ParamValue::Text("DIGITAL_SYNTH_1".to_string())
        );
        assert_eq!(map[KEY_SYNTH_TONE], ParamValue::Text("COMMON".to_string()));
    }

    #[test]
    fn test_text_validation() {
        let name = jd_xi::DIGITAL_TONE_COMMON
            .iter()
            .find(|param| param.name == "TONE_NAME")
            .unwrap();
        assert!(compose_text_message(jd_xi::DIGITAL_SYNTH_1_COMMON, name, "WAY TOO LONG NAME")
            .is_err());
        assert!(compose_text_message(jd_xi::DIGITAL_SYNTH_1_COMMON, name, "héllo").is_err());
        let level = jd_xi::PROGRAM_COMMON
            .iter()
            .find(|param| param.name == "PROGRAM_LEVEL")
            .unwrap();
        // Numeric compose of a text parameter reports NotNumeric whether or
        // not the value happens to sit inside the declared bounds.
        assert_eq!(
            compose_message(jd_xi::DIGITAL_SYNTH_1_COMMON, name, 1).unwrap_err(),
            ComposeError::NotNumeric { name: "TONE_NAME" }
        );
        assert_eq!(
            compose_message(jd_xi::DIGITAL_SYNTH_1_COMMON, name, 0).unwrap_err(),
            ComposeError::NotNumeric { name: "TONE_NAME" }
        );
        assert!(compose_text_message(jd_xi::TEMPORARY_PROGRAM, level, "NOPE").is_err());
    }

    #[test]
    fn test_checksum_mismatch_is_tolerated() {
        let param = jd_xi::PROGRAM_COMMON
            .iter()
            .find(|param| param.name == "PROGRAM_LEVEL")
            .unwrap();
        let mut message = compose_message(jd_xi::TEMPORARY_PROGRAM, param, 100).unwrap();
        let checksum_idx = message.len() - 2;
        message[checksum_idx] ^= 0x01;
        let dump = parse_dump(&message);
        assert!(!dump.valid_checksum);
        assert_eq!(dump.params["PROGRAM_LEVEL"], ParamValue::Int(100));
    }

    #[test]
    fn test_unknown_address_still_yields_address() {
        // Address in no table: decode nothing, error on nothing.
        let message = message_around(CM_ID_DT1, Address::new(0x7D, 0x00, 0x00, 0x00), &[0x42]);
        let dump = parse_dump(&message);
        assert_eq!(dump.temporary_area, None);
        assert_eq!(dump.synth_tone, None);
        assert!(dump.params.is_empty());
        assert!(dump.to_map().contains_key(KEY_ADDRESS));
    }

    #[test]
    fn test_partial_dump_decodes_what_fits() {
        // A dump of the first three bytes of the arpeggio block: parameters
        // beyond the payload are skipped, not errors.
        let data = [0x00, 0x01, 0x07];
        let message = message_around(CM_ID_DT1, jd_xi::PROGRAM_ARPEGGIO, &data);
        let dump = parse_dump(&message);
        assert_eq!(dump.params["ARPEGGIO_DURATION"], ParamValue::Int(7));
        assert!(!dump.params.contains_key("ARPEGGIO_STYLE"));
    }

    #[test]
    fn test_request_wire_format() {
        let message = compose_request(jd_xi::DIGITAL_SYNTH_1_COMMON, 0x40).unwrap();
        assert_eq!(
            message,
            [0xF0, 0x41, 0x10, 0x00, 0x00, 0x00, 0x0E, 0x11, 0x19, 0x01, 0x00, 0x00, 0x00, 0x00,
             0x00, 0x40, 0x26, 0xF7]
        );
        match parse_sysex(&message) {
            Ok(ParsedSysEx::DataRequest { address, size }) => {
                assert_eq!(address, jd_xi::DIGITAL_SYNTH_1_COMMON);
                assert_eq!(size, 0x40);
            }
            other => panic!("expected data request, got {:?}", other),
        }
        assert!(compose_request(jd_xi::DIGITAL_SYNTH_1_COMMON, 1 << 28).is_err());
    }

    #[test]
    fn test_other_roland_model_is_foreign() {
        // A GS reset (model 42h) must be skippable, not a parse fault.
        let gs_reset = [
            0xF0, 0x41, 0x10, 0x42, 0x12, 0x40, 0x00, 0x7F, 0x00, 0x41, 0xF7,
        ];
        let err = parse_sysex(&gs_reset).unwrap_err();
        assert!(err.is_foreign());
    }

    #[test]
    fn test_decode_is_deterministic() {
        let name = jd_xi::DIGITAL_TONE_COMMON
            .iter()
            .find(|param| param.name == "TONE_NAME")
            .unwrap();
        let message =
            compose_text_message(jd_xi::DIGITAL_SYNTH_1_COMMON, name, "Trance Pad").unwrap();
        let first = parse_dump(&message);
        let second = parse_dump(&message);
        assert_eq!(first, second);
        assert_eq!(first.to_map(), second.to_map());
    }
}
