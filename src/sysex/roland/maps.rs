//! Parameter address map machinery: which temporary area and block a 4-byte
//! address lands in, and how a raw device value is rendered for people.
//!
//! The tables themselves are declarative, immutable and built entirely at
//! compile time in the [jd_xi] child module; nothing mutates them after
//! load, so they are safe to read from any thread.

use super::{Address, ParamKind, Parameter};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub mod jd_xi;

/// All the rows of one block's parameter address map.
pub type ParameterAddressMap = &'static [Parameter];

/// The major regions of the JD-Xi's temporary parameter memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporaryArea {
    Program,
    DigitalSynth1,
    DigitalSynth2,
    AnalogSynth,
    DrumKit,
    System,
}

impl TemporaryArea {
    pub const fn as_str(self) -> &'static str {
        match self {
            TemporaryArea::Program => "PROGRAM",
            TemporaryArea::DigitalSynth1 => "DIGITAL_SYNTH_1",
            TemporaryArea::DigitalSynth2 => "DIGITAL_SYNTH_2",
            TemporaryArea::AnalogSynth => "ANALOG_SYNTH",
            TemporaryArea::DrumKit => "DRUM_KIT",
            TemporaryArea::System => "SYSTEM",
        }
    }
}

impl Display for TemporaryArea {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// The block within an area an address selects: the common parameters, one
/// of the sound-generating partials, or a special block like the arpeggiator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthTone {
    Common,
    Partial1,
    Partial2,
    Partial3,
    Modify,
    VocalEffect,
    Arpeggio,
    /// Drum partials are numbered 1..=38 on the JD-Xi (BD1 through RIDE).
    DrumPartial(u8),
}

impl Display for SynthTone {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            SynthTone::Common => write!(f, "COMMON"),
            SynthTone::Partial1 => write!(f, "PARTIAL_1"),
            SynthTone::Partial2 => write!(f, "PARTIAL_2"),
            SynthTone::Partial3 => write!(f, "PARTIAL_3"),
            SynthTone::Modify => write!(f, "MODIFY"),
            SynthTone::VocalEffect => write!(f, "VOCAL_EFFECT"),
            SynthTone::Arpeggio => write!(f, "ARPEGGIO"),
            SynthTone::DrumPartial(n) => write!(f, "DRUM_PARTIAL_{}", n),
        }
    }
}

/// The result of resolving an address: where it landed and which table
/// decodes the payload.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub area: TemporaryArea,
    pub tone: SynthTone,
    pub params: ParameterAddressMap,
}

/// Map an address to its area, block and parameter table. `None` for
/// addresses outside the tables; the caller still reports the raw address.
pub fn resolve_block(address: Address) -> Option<Block> {
    jd_xi::resolve_block(address)
}

// Table row constructors, so the maps in [jd_xi] read like the parameter
// address map pages of the MIDI implementation chart.

/// Plain one-byte parameter, 0..=max.
pub const fn param(offset: u8, name: &'static str, max: i32) -> Parameter {
    Parameter {
        offset,
        name,
        min: 0,
        max,
        kind: ParamKind::Byte,
    }
}

/// One-byte bipolar parameter stored around `center`.
pub const fn param_centered(
    offset: u8,
    name: &'static str,
    min: i32,
    max: i32,
    center: i32,
) -> Parameter {
    Parameter {
        offset,
        name,
        min,
        max,
        kind: ParamKind::Centered { center },
    }
}

/// One-byte parameter whose values have display names.
pub const fn param_enum(
    offset: u8,
    name: &'static str,
    names: &'static [&'static str],
) -> Parameter {
    Parameter {
        offset,
        name,
        min: 0,
        max: names.len() as i32 - 1,
        kind: ParamKind::Enum { names },
    }
}

/// OFF/ON switch.
pub const fn param_switch(offset: u8, name: &'static str) -> Parameter {
    Parameter {
        offset,
        name,
        min: 0,
        max: 1,
        kind: ParamKind::Switch,
    }
}

/// Wide parameter carried as four nibbles, one per byte, high to low.
pub const fn param_nibble(
    offset: u8,
    name: &'static str,
    min: i32,
    max: i32,
    center: i32,
) -> Parameter {
    Parameter {
        offset,
        name,
        min,
        max,
        kind: ParamKind::Nibble4 { center },
    }
}

/// Fixed-width ASCII name block.
pub const fn param_name(offset: u8, name: &'static str, len: u8) -> Parameter {
    Parameter {
        offset,
        name,
        min: 0,
        max: 0,
        kind: ParamKind::Name { len },
    }
}

/// Render a raw device value the way the JD-Xi's display would: enum values
/// by name, bipolar values relative to their centre, switches as OFF/ON.
/// Pure lookup; the decoded map keeps the raw value untouched.
pub fn display_value(param: &Parameter, raw: i32) -> String {
    match param.kind {
        ParamKind::Byte | ParamKind::Name { .. } => raw.to_string(),
        ParamKind::Centered { center } | ParamKind::Nibble4 { center } => {
            let value = raw - center;
            // Unipolar wide values (centre 0, e.g. tempo) read as plain
            // numbers; bipolar ones carry an explicit sign.
            if center != 0 && value > 0 {
                format!("+{}", value)
            } else {
                value.to_string()
            }
        }
        ParamKind::Enum { names } => match usize::try_from(raw).ok().and_then(|i| names.get(i)) {
            Some(name) => (*name).to_string(),
            None => raw.to_string(),
        },
        ParamKind::Switch => if raw != 0 { "ON" } else { "OFF" }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value() {
        let duration = jd_xi::PROGRAM_ARPEGGIO_PARAMS
            .iter()
            .find(|param| param.name == "ARPEGGIO_DURATION")
            .unwrap();
        assert_eq!(display_value(duration, 7), "100%");
        assert_eq!(display_value(duration, 9), "FUL");
        assert_eq!(display_value(duration, 99), "99"); // out of table: raw

        let pan = jd_xi::DIGITAL_TONE_PARTIAL
            .iter()
            .find(|param| param.name == "AMP_PAN")
            .unwrap();
        assert_eq!(display_value(pan, 64), "0");
        assert_eq!(display_value(pan, 0), "-64");
        assert_eq!(display_value(pan, 127), "+63");

        let switch = jd_xi::PROGRAM_ARPEGGIO_PARAMS
            .iter()
            .find(|param| param.name == "ARPEGGIO_SWITCH")
            .unwrap();
        assert_eq!(display_value(switch, 0), "OFF");
        assert_eq!(display_value(switch, 1), "ON");
    }

    #[test]
    fn test_resolution() {
        let digital1 = resolve_block(jd_xi::DIGITAL_SYNTH_1_COMMON).unwrap();
        assert_eq!(digital1.area, TemporaryArea::DigitalSynth1);
        assert_eq!(digital1.tone, SynthTone::Common);

        let partial2 = resolve_block(Address::new(0x19, 0x01, 0x21, 0x00)).unwrap();
        assert_eq!(partial2.tone, SynthTone::Partial2);

        let digital2 = resolve_block(Address::new(0x19, 0x21, 0x22, 0x00)).unwrap();
        assert_eq!(digital2.area, TemporaryArea::DigitalSynth2);
        assert_eq!(digital2.tone, SynthTone::Partial3);

        let drum = resolve_block(jd_xi::drum_partial(5)).unwrap();
        assert_eq!(drum.area, TemporaryArea::DrumKit);
        assert_eq!(drum.tone, SynthTone::DrumPartial(5));
        assert_eq!(drum.tone.to_string(), "DRUM_PARTIAL_5");

        assert!(resolve_block(Address::new(0x7D, 0x00, 0x00, 0x00)).is_none());
        // Odd LMB between drum partial slots is not a block.
        assert!(resolve_block(Address::new(0x19, 0x70, 0x2F, 0x00)).is_none());
    }
}
