//! (N)RPN translation for continuous controllers.
//!
//! The JD-Xi exposes a handful of per-part controls (vibrato, filter cutoff
//! and resonance, envelope times) through Registered / Non-Registered
//! Parameter Numbers rather than plain Control Change numbers. Selecting a
//! parameter and moving it takes a run of CC messages: CC 99/98 (or 101/100
//! for RPNs) to select, CC 6 (and optionally 38) to set, and a null
//! selection to close. This module builds those runs and reassembles them
//! back into named control changes.
//!
//! Like the SysEx codec, everything here is a pure data transformation over
//! the caller's buffers; [NrpnDecoder] is the one piece of state and it is
//! owned entirely by the caller, one per MIDI channel.

use std::fmt::{Display, Formatter, Result as FmtResult};

pub const CC_DATA_ENTRY_MSB: u8 = 0x06;
pub const CC_DATA_ENTRY_LSB: u8 = 0x26;
pub const CC_NRPN_LSB: u8 = 0x62;
pub const CC_NRPN_MSB: u8 = 0x63;
pub const CC_RPN_LSB: u8 = 0x64;
pub const CC_RPN_MSB: u8 = 0x65;

/// MSB/LSB pair meaning "no parameter selected".
pub const NULL_SELECTION: (u8, u8) = (0x7F, 0x7F);

/// A selected (N)RPN parameter number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterNumber {
    Nrpn { msb: u8, lsb: u8 },
    Rpn { msb: u8, lsb: u8 },
}

impl ParameterNumber {
    /// Name of the control, if the JD-Xi documents it.
    pub fn name(self) -> Option<&'static str> {
        let (table, msb, lsb) = match self {
            ParameterNumber::Nrpn { msb, lsb } => (NRPN_CONTROLS, msb, lsb),
            ParameterNumber::Rpn { msb, lsb } => (RPN_CONTROLS, msb, lsb),
        };
        table
            .iter()
            .find(|control| control.msb == msb && control.lsb == lsb)
            .map(|control| control.name)
    }
}

impl Display for ParameterNumber {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if let Some(name) = self.name() {
            return write!(f, "{}", name);
        }
        match self {
            ParameterNumber::Nrpn { msb, lsb } => write!(f, "NRPN {:02X}h {:02X}h", msb, lsb),
            ParameterNumber::Rpn { msb, lsb } => write!(f, "RPN {:02X}h {:02X}h", msb, lsb),
        }
    }
}

/// One row of the (N)RPN assignment table.
#[derive(Debug)]
pub struct ControlInfo {
    pub msb: u8,
    pub lsb: u8,
    pub name: &'static str,
}

const fn control(msb: u8, lsb: u8, name: &'static str) -> ControlInfo {
    ControlInfo { msb, lsb, name }
}

/// The NRPN controls the JD-Xi's parts answer to (the standard Roland set).
pub const NRPN_CONTROLS: &[ControlInfo] = &[
    control(0x01, 0x08, "VIBRATO_RATE"),
    control(0x01, 0x09, "VIBRATO_DEPTH"),
    control(0x01, 0x0A, "VIBRATO_DELAY"),
    control(0x01, 0x20, "FILTER_CUTOFF"),
    control(0x01, 0x21, "FILTER_RESONANCE"),
    control(0x01, 0x63, "ENV_ATTACK_TIME"),
    control(0x01, 0x64, "ENV_DECAY_TIME"),
    control(0x01, 0x66, "ENV_RELEASE_TIME"),
];

/// The registered parameter numbers from the MIDI spec the JD-Xi receives.
pub const RPN_CONTROLS: &[ControlInfo] = &[
    control(0x00, 0x00, "PITCH_BEND_SENSITIVITY"),
    control(0x00, 0x01, "CHANNEL_FINE_TUNE"),
    control(0x00, 0x02, "CHANNEL_COARSE_TUNE"),
];

fn cc(channel: u8, control: u8, value: u8) -> [u8; 3] {
    [0xB0 | (channel & 0x0F), control, value]
}

/// Build the Control Change run that sets an NRPN control: select, data
/// entry, null terminator. Each element is one complete 3-byte CC message.
pub fn encode_nrpn(channel: u8, msb: u8, lsb: u8, value: u8) -> Vec<[u8; 3]> {
    vec![
        cc(channel, CC_NRPN_MSB, msb),
        cc(channel, CC_NRPN_LSB, lsb),
        cc(channel, CC_DATA_ENTRY_MSB, value),
        cc(channel, CC_NRPN_MSB, NULL_SELECTION.0),
        cc(channel, CC_NRPN_LSB, NULL_SELECTION.1),
    ]
}

/// Build the Control Change run that sets an RPN control.
pub fn encode_rpn(channel: u8, msb: u8, lsb: u8, value: u8) -> Vec<[u8; 3]> {
    vec![
        cc(channel, CC_RPN_MSB, msb),
        cc(channel, CC_RPN_LSB, lsb),
        cc(channel, CC_DATA_ENTRY_MSB, value),
        cc(channel, CC_RPN_MSB, NULL_SELECTION.0),
        cc(channel, CC_RPN_LSB, NULL_SELECTION.1),
    ]
}

/// A reassembled (N)RPN change. `value` is 14-bit; receivers that only care
/// about the coarse 7 bits take `value >> 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NrpnEvent {
    pub parameter: ParameterNumber,
    pub value: u16,
}

/// Accumulates the multi-message (N)RPN select/data-entry convention back
/// into discrete events. Feed it every Control Change for one channel; it
/// reports an event on each Data Entry while a parameter is selected and
/// ignores unrelated controllers.
#[derive(Debug, Default)]
pub struct NrpnDecoder {
    selected: Option<ParameterNumber>,
    data_msb: Option<u8>,
}

impl NrpnDecoder {
    pub fn new() -> NrpnDecoder {
        NrpnDecoder::default()
    }

    pub fn feed(&mut self, control: u8, value: u8) -> Option<NrpnEvent> {
        match control {
            CC_NRPN_MSB => self.select(ParameterNumber::Nrpn { msb: value, lsb: 0 }, true),
            CC_NRPN_LSB => self.select(ParameterNumber::Nrpn { msb: 0, lsb: value }, false),
            CC_RPN_MSB => self.select(ParameterNumber::Rpn { msb: value, lsb: 0 }, true),
            CC_RPN_LSB => self.select(ParameterNumber::Rpn { msb: 0, lsb: value }, false),
            CC_DATA_ENTRY_MSB => {
                self.data_msb = Some(value);
                Some(NrpnEvent {
                    parameter: self.selected?,
                    value: (value as u16) << 7,
                })
            }
            CC_DATA_ENTRY_LSB => Some(NrpnEvent {
                parameter: self.selected?,
                value: ((self.data_msb? as u16) << 7) | value as u16,
            }),
            _ => None,
        }
    }

    fn select(&mut self, half: ParameterNumber, is_msb: bool) -> Option<NrpnEvent> {
        // A new selection begins a new data entry.
        self.data_msb = None;

        let merged = match (self.selected, half) {
            // Merging only applies while the same kind of selection is open.
            (
                Some(ParameterNumber::Nrpn { msb, lsb }),
                ParameterNumber::Nrpn {
                    msb: new_msb,
                    lsb: new_lsb,
                },
            ) => {
                if is_msb {
                    ParameterNumber::Nrpn { msb: new_msb, lsb }
                } else {
                    ParameterNumber::Nrpn { msb, lsb: new_lsb }
                }
            }
            (
                Some(ParameterNumber::Rpn { msb, lsb }),
                ParameterNumber::Rpn {
                    msb: new_msb,
                    lsb: new_lsb,
                },
            ) => {
                if is_msb {
                    ParameterNumber::Rpn { msb: new_msb, lsb }
                } else {
                    ParameterNumber::Rpn { msb, lsb: new_lsb }
                }
            }
            (_, half) => half,
        };

        let (msb, lsb) = match merged {
            ParameterNumber::Nrpn { msb, lsb } | ParameterNumber::Rpn { msb, lsb } => (msb, lsb),
        };
        self.selected = if (msb, lsb) == NULL_SELECTION {
            None
        } else {
            Some(merged)
        };
        None
    }
}
