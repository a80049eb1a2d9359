//! Roland JD-Xi parameter address maps.
//!
//! Reference: JD-Xi MIDI implementation chart. Layout mirrors the chart:
//! an address block map from `(MSB, UMB)` prefixes to temporary areas, then
//! per-block parameter address maps keyed by address LSB. Everything here is
//! `const` data; the tables are never built or modified at runtime.

use super::{
    param, param_centered, param_enum, param_name, param_nibble, param_switch, Block,
    ParameterAddressMap, SynthTone, TemporaryArea,
};
use crate::sysex::roland::Address;

// Block base addresses. Partial-sized blocks are derived, never mutated.

pub const SYSTEM_COMMON_ADDRESS: Address = Address::new(0x02, 0x00, 0x00, 0x00);
pub const TEMPORARY_PROGRAM: Address = Address::new(0x18, 0x00, 0x00, 0x00);
pub const PROGRAM_VOCAL_EFFECT: Address = Address::new(0x18, 0x00, 0x01, 0x00);
pub const PROGRAM_ARPEGGIO: Address = Address::new(0x18, 0x00, 0x40, 0x00);
pub const DIGITAL_SYNTH_1_COMMON: Address = Address::new(0x19, 0x01, 0x00, 0x00);
pub const DIGITAL_SYNTH_2_COMMON: Address = Address::new(0x19, 0x21, 0x00, 0x00);
pub const ANALOG_SYNTH_TONE: Address = Address::new(0x19, 0x42, 0x00, 0x00);
pub const DRUM_KIT_COMMON_ADDRESS: Address = Address::new(0x19, 0x70, 0x00, 0x00);

/// LMB of the first drum partial block (BD1). Partials sit two LMB slots
/// apart.
const DRUM_PARTIAL_BASE_LMB: u8 = 0x2E;
const DRUM_PARTIAL_COUNT: u8 = 38;

/// Base address of drum partial `n` (1..=38).
pub const fn drum_partial(n: u8) -> Address {
    assert!(n >= 1 && n <= DRUM_PARTIAL_COUNT);
    Address::new(0x19, 0x70, DRUM_PARTIAL_BASE_LMB + (n - 1) * 2, 0x00)
}

/// Base address of digital partial `n` (1..=3) of the tone whose common
/// block is at `common` (either digital synth area).
pub const fn digital_partial(common: Address, n: u8) -> Address {
    assert!(n >= 1 && n <= 3);
    Address::new(common.0[0], common.0[1], 0x1F + n, 0x00)
}

pub(super) fn resolve_block(address: Address) -> Option<Block> {
    let [msb, umb, lmb, _lsb] = address.0;
    let (area, tone, params) = match (msb, umb) {
        (0x02, 0x00) => match lmb {
            0x00 => (TemporaryArea::System, SynthTone::Common, SYSTEM_COMMON),
            _ => return None,
        },
        (0x18, 0x00) => match lmb {
            0x00 => (TemporaryArea::Program, SynthTone::Common, PROGRAM_COMMON),
            0x01 => (
                TemporaryArea::Program,
                SynthTone::VocalEffect,
                PROGRAM_VOCAL_EFFECT_PARAMS,
            ),
            0x40 => (
                TemporaryArea::Program,
                SynthTone::Arpeggio,
                PROGRAM_ARPEGGIO_PARAMS,
            ),
            _ => return None,
        },
        (0x19, 0x01) => digital_tone_block(TemporaryArea::DigitalSynth1, lmb)?,
        (0x19, 0x21) => digital_tone_block(TemporaryArea::DigitalSynth2, lmb)?,
        (0x19, 0x42) => match lmb {
            0x00 => (TemporaryArea::AnalogSynth, SynthTone::Common, ANALOG_TONE),
            _ => return None,
        },
        (0x19, 0x70) => match lmb {
            0x00 => (TemporaryArea::DrumKit, SynthTone::Common, DRUM_COMMON),
            lmb if lmb >= DRUM_PARTIAL_BASE_LMB
                && (lmb - DRUM_PARTIAL_BASE_LMB) % 2 == 0
                && (lmb - DRUM_PARTIAL_BASE_LMB) / 2 < DRUM_PARTIAL_COUNT =>
            {
                (
                    TemporaryArea::DrumKit,
                    SynthTone::DrumPartial((lmb - DRUM_PARTIAL_BASE_LMB) / 2 + 1),
                    DRUM_PARTIAL,
                )
            }
            _ => return None,
        },
        _ => return None,
    };
    Some(Block { area, tone, params })
}

fn digital_tone_block(
    area: TemporaryArea,
    lmb: u8,
) -> Option<(TemporaryArea, SynthTone, ParameterAddressMap)> {
    let (tone, params) = match lmb {
        0x00 => (SynthTone::Common, DIGITAL_TONE_COMMON),
        0x20 => (SynthTone::Partial1, DIGITAL_TONE_PARTIAL),
        0x21 => (SynthTone::Partial2, DIGITAL_TONE_PARTIAL),
        0x22 => (SynthTone::Partial3, DIGITAL_TONE_PARTIAL),
        0x50 => (SynthTone::Modify, DIGITAL_TONE_MODIFY),
        _ => return None,
    };
    Some((area, tone, params))
}

// Shared display-name tables.

const LFO_SHAPES: &[&str] = &["TRI", "SIN", "SAW", "SQR", "S&H", "RND"];
const SYNC_NOTE_MAX: i32 = 19; // 16 .. 1/32, per the chart
const OUTPUT_ASSIGNS: &[&str] = &["EFX1", "EFX2", "DLY", "REV", "DIR"];

pub const SYSTEM_COMMON: ParameterAddressMap = &[
    param_nibble(0x00, "MASTER_TUNE", 24, 2024, 1024),
    param_centered(0x04, "MASTER_KEY_SHIFT", 40, 88, 64),
    param(0x05, "MASTER_LEVEL", 127),
    param(0x11, "PROGRAM_CONTROL_CHANNEL", 16),
    param_switch(0x29, "RECEIVE_PROGRAM_CHANGE"),
    param_switch(0x2A, "RECEIVE_BANK_SELECT"),
];

pub const PROGRAM_COMMON: ParameterAddressMap = &[
    param_name(0x00, "PROGRAM_NAME", 12),
    param(0x10, "PROGRAM_LEVEL", 127),
    param_nibble(0x11, "PROGRAM_TEMPO", 500, 30000, 0),
    param_enum(0x16, "VOCAL_EFFECT", &["OFF", "VOCODER", "AUTO_PITCH"]),
    param(0x1C, "VOCAL_EFFECT_NUMBER", 20),
    param(0x1D, "VOCAL_EFFECT_PART", 1),
    param_switch(0x1E, "AUTO_NOTE_SWITCH"),
];

pub const PROGRAM_VOCAL_EFFECT_PARAMS: ParameterAddressMap = &[
    param(0x00, "LEVEL", 127),
    param_centered(0x01, "PAN", 0, 127, 64),
    param(0x02, "DELAY_SEND_LEVEL", 127),
    param(0x03, "REVERB_SEND_LEVEL", 127),
    param_enum(0x04, "OUTPUT_ASSIGN", OUTPUT_ASSIGNS),
    param_switch(0x05, "AUTO_PITCH_SWITCH"),
    param_enum(
        0x06,
        "AUTO_PITCH_TYPE",
        &["SOFT", "HARD", "ELECTRIC1", "ELECTRIC2"],
    ),
    param_enum(0x07, "AUTO_PITCH_SCALE", &["CHROMATIC", "MAJ(MIN)"]),
    param(0x08, "AUTO_PITCH_KEY", 23),
    param_centered(0x0A, "AUTO_PITCH_GENDER", 0, 20, 10),
    param_centered(0x0B, "AUTO_PITCH_OCTAVE", 0, 2, 1),
    param(0x0C, "AUTO_PITCH_BALANCE", 100),
    param_switch(0x0D, "VOCODER_SWITCH"),
    param_enum(0x0E, "VOCODER_ENVELOPE", &["SHARP", "SOFT", "LONG"]),
    param(0x0F, "VOCODER_LEVEL", 127),
    param(0x10, "VOCODER_MIC_SENS", 127),
    param(0x11, "VOCODER_SYNTH_LEVEL", 127),
    param(0x12, "VOCODER_MIC_MIX_LEVEL", 127),
    param_enum(
        0x13,
        "VOCODER_MIC_HPF",
        &[
            "BYPASS", "1000", "1250", "1600", "2000", "2500", "3150", "4000", "5000", "6300",
            "8000", "10000", "12500", "16000",
        ],
    ),
];

pub const PROGRAM_ARPEGGIO_PARAMS: ParameterAddressMap = &[
    param_enum(
        0x01,
        "ARPEGGIO_GRID",
        &["04_", "08_", "08L", "08H", "08t", "16_", "16L", "16H", "16t"],
    ),
    param_enum(
        0x02,
        "ARPEGGIO_DURATION",
        &[
            "30%", "40%", "50%", "60%", "70%", "80%", "90%", "100%", "120%", "FUL",
        ],
    ),
    param_switch(0x03, "ARPEGGIO_SWITCH"),
    param(0x05, "ARPEGGIO_STYLE", 127),
    param_enum(
        0x06,
        "ARPEGGIO_MOTIF",
        &[
            "UP/L", "UP/H", "UP/_", "dn/L", "dn/H", "dn/_", "Ud/L", "Ud/H", "Ud/_", "rn/L",
            "rn/_", "PHRASE",
        ],
    ),
    param_centered(0x07, "ARPEGGIO_OCTAVE_RANGE", 61, 67, 64),
    param(0x09, "ARPEGGIO_ACCENT_RATE", 100),
    // 0 is REAL (play-through velocity).
    param(0x0A, "ARPEGGIO_VELOCITY", 127),
];

pub const DIGITAL_TONE_COMMON: ParameterAddressMap = &[
    param_name(0x00, "TONE_NAME", 12),
    param(0x0C, "TONE_LEVEL", 127),
    param_switch(0x12, "PORTAMENTO_SWITCH"),
    param(0x13, "PORTAMENTO_TIME", 127),
    param_switch(0x14, "MONO_SWITCH"),
    param_centered(0x15, "OCTAVE_SHIFT", 61, 67, 64),
    param(0x16, "PITCH_BEND_RANGE_UP", 24),
    param(0x17, "PITCH_BEND_RANGE_DOWN", 24),
    param_switch(0x19, "PARTIAL_1_SWITCH"),
    param_switch(0x1A, "PARTIAL_1_SELECT"),
    param_switch(0x1B, "PARTIAL_2_SWITCH"),
    param_switch(0x1C, "PARTIAL_2_SELECT"),
    param_switch(0x1D, "PARTIAL_3_SWITCH"),
    param_switch(0x1E, "PARTIAL_3_SELECT"),
    param_switch(0x1F, "RING_SWITCH"),
    param_switch(0x2E, "UNISON_SWITCH"),
    param_enum(0x31, "PORTAMENTO_MODE", &["NORMAL", "LEGATO"]),
    param_switch(0x32, "LEGATO_SWITCH"),
    param(0x34, "ANALOG_FEEL", 127),
    param(0x35, "WAVE_SHAPE", 127),
    param(0x36, "TONE_CATEGORY", 127),
    param_enum(0x3C, "UNISON_SIZE", &["2", "4", "6", "8"]),
];

pub const DIGITAL_TONE_PARTIAL: ParameterAddressMap = &[
    param_enum(
        0x00,
        "OSC_WAVE",
        &[
            "SAW", "SQR", "PW-SQR", "TRI", "SINE", "NOISE", "SUPER-SAW", "PCM",
        ],
    ),
    param_enum(0x01, "OSC_WAVE_VARIATION", &["A", "B", "C"]),
    param_centered(0x03, "OSC_PITCH", 40, 88, 64),
    param_centered(0x04, "OSC_DETUNE", 14, 114, 64),
    param(0x05, "OSC_PULSE_WIDTH_MOD_DEPTH", 127),
    param(0x06, "OSC_PULSE_WIDTH", 127),
    param(0x07, "OSC_PITCH_ENV_ATTACK_TIME", 127),
    param(0x08, "OSC_PITCH_ENV_DECAY", 127),
    param_centered(0x09, "OSC_PITCH_ENV_DEPTH", 1, 127, 64),
    param_enum(
        0x0A,
        "FILTER_MODE",
        &["BYPASS", "LPF", "HPF", "BPF", "PKG", "LPF2", "LPF3", "LPF4"],
    ),
    param_enum(0x0B, "FILTER_SLOPE", &["-12dB", "-24dB"]),
    param(0x0C, "FILTER_CUTOFF", 127),
    param_centered(0x0D, "FILTER_CUTOFF_KEYFOLLOW", 54, 74, 64),
    param_centered(0x0E, "FILTER_ENV_VELOCITY_SENS", 1, 127, 64),
    param(0x0F, "FILTER_RESONANCE", 127),
    param(0x10, "FILTER_ENV_ATTACK_TIME", 127),
    param(0x11, "FILTER_ENV_DECAY_TIME", 127),
    param(0x12, "FILTER_ENV_SUSTAIN_LEVEL", 127),
    param(0x13, "FILTER_ENV_RELEASE_TIME", 127),
    param_centered(0x14, "FILTER_ENV_DEPTH", 1, 127, 64),
    param(0x15, "AMP_LEVEL", 127),
    param_centered(0x16, "AMP_VELOCITY_SENS", 1, 127, 64),
    param(0x17, "AMP_ENV_ATTACK_TIME", 127),
    param(0x18, "AMP_ENV_DECAY_TIME", 127),
    param(0x19, "AMP_ENV_SUSTAIN_LEVEL", 127),
    param(0x1A, "AMP_ENV_RELEASE_TIME", 127),
    param_centered(0x1B, "AMP_PAN", 0, 127, 64),
    param_enum(0x1C, "LFO_SHAPE", LFO_SHAPES),
    param(0x1D, "LFO_RATE", 127),
    param_switch(0x1E, "LFO_TEMPO_SYNC_SWITCH"),
    param(0x1F, "LFO_TEMPO_SYNC_NOTE", SYNC_NOTE_MAX),
    param(0x20, "LFO_FADE_TIME", 127),
    param_switch(0x21, "LFO_KEY_TRIGGER"),
    param_centered(0x22, "LFO_PITCH_DEPTH", 1, 127, 64),
    param_centered(0x23, "LFO_FILTER_DEPTH", 1, 127, 64),
    param_centered(0x24, "LFO_AMP_DEPTH", 1, 127, 64),
    param_centered(0x25, "LFO_PAN_DEPTH", 1, 127, 64),
];

pub const DIGITAL_TONE_MODIFY: ParameterAddressMap = &[
    param(0x01, "ATTACK_TIME_INTERVAL_SENS", 127),
    param(0x02, "RELEASE_TIME_INTERVAL_SENS", 127),
    param(0x03, "PORTAMENTO_TIME_INTERVAL_SENS", 127),
    param_enum(
        0x04,
        "ENVELOPE_LOOP_MODE",
        &["OFF", "FREE-RUN", "TEMPO-SYNC"],
    ),
    param(0x05, "ENVELOPE_LOOP_SYNC_NOTE", SYNC_NOTE_MAX),
    param_switch(0x06, "CHROMATIC_PORTAMENTO"),
];

pub const ANALOG_TONE: ParameterAddressMap = &[
    param_name(0x00, "TONE_NAME", 12),
    param_enum(0x0D, "LFO_SHAPE", LFO_SHAPES),
    param(0x0E, "LFO_RATE", 127),
    param(0x0F, "LFO_FADE_TIME", 127),
    param_switch(0x10, "LFO_TEMPO_SYNC_SWITCH"),
    param(0x11, "LFO_TEMPO_SYNC_NOTE", SYNC_NOTE_MAX),
    param_centered(0x12, "LFO_PITCH_DEPTH", 1, 127, 64),
    param_centered(0x13, "LFO_FILTER_DEPTH", 1, 127, 64),
    param_centered(0x14, "LFO_AMP_DEPTH", 1, 127, 64),
    param_switch(0x15, "LFO_KEY_TRIGGER"),
    param_enum(0x16, "OSC_WAVE", &["SAW", "TRI", "PW-SQR"]),
    param_centered(0x17, "OSC_PITCH_COARSE", 40, 88, 64),
    param_centered(0x18, "OSC_PITCH_FINE", 14, 114, 64),
    param(0x19, "OSC_PULSE_WIDTH", 127),
    param(0x1A, "OSC_PULSE_WIDTH_MOD_DEPTH", 127),
    param_centered(0x1B, "OSC_PITCH_ENV_VELOCITY_SENS", 1, 127, 64),
    param(0x1C, "OSC_PITCH_ENV_ATTACK_TIME", 127),
    param(0x1D, "OSC_PITCH_ENV_DECAY", 127),
    param_centered(0x1E, "OSC_PITCH_ENV_DEPTH", 1, 127, 64),
    param_enum(0x1F, "SUB_OSCILLATOR_TYPE", &["OFF", "OCT-1", "OCT-2"]),
    param_enum(0x20, "FILTER_SWITCH", &["BYPASS", "LPF"]),
    param(0x21, "FILTER_CUTOFF", 127),
    param_centered(0x22, "FILTER_CUTOFF_KEYFOLLOW", 54, 74, 64),
    param(0x23, "FILTER_RESONANCE", 127),
    param_centered(0x24, "FILTER_ENV_VELOCITY_SENS", 1, 127, 64),
    param(0x25, "FILTER_ENV_ATTACK_TIME", 127),
    param(0x26, "FILTER_ENV_DECAY_TIME", 127),
    param(0x27, "FILTER_ENV_SUSTAIN_LEVEL", 127),
    param(0x28, "FILTER_ENV_RELEASE_TIME", 127),
    param_centered(0x29, "FILTER_ENV_DEPTH", 1, 127, 64),
    param(0x2A, "AMP_LEVEL", 127),
    param_centered(0x2B, "AMP_LEVEL_KEYFOLLOW", 54, 74, 64),
    param_centered(0x2C, "AMP_LEVEL_VELOCITY_SENS", 1, 127, 64),
    param(0x2D, "AMP_ENV_ATTACK_TIME", 127),
    param(0x2E, "AMP_ENV_DECAY_TIME", 127),
    param(0x2F, "AMP_ENV_SUSTAIN_LEVEL", 127),
    param(0x30, "AMP_ENV_RELEASE_TIME", 127),
    param_switch(0x31, "PORTAMENTO_SWITCH"),
    param(0x32, "PORTAMENTO_TIME", 127),
    param_switch(0x33, "LEGATO_SWITCH"),
    param_centered(0x34, "OCTAVE_SHIFT", 61, 67, 64),
    param(0x35, "PITCH_BEND_RANGE_UP", 24),
    param(0x36, "PITCH_BEND_RANGE_DOWN", 24),
];

pub const DRUM_COMMON: ParameterAddressMap = &[
    param_name(0x00, "KIT_NAME", 12),
    param(0x0C, "KIT_LEVEL", 127),
];

pub const DRUM_PARTIAL: ParameterAddressMap = &[
    param_name(0x00, "PARTIAL_NAME", 12),
    param_enum(0x0C, "ASSIGN_TYPE", &["MULTI", "SINGLE"]),
    param(0x0D, "MUTE_GROUP", 31),
    param(0x0E, "PARTIAL_LEVEL", 127),
    param(0x0F, "PARTIAL_COARSE_TUNE", 127),
    param_centered(0x10, "PARTIAL_FINE_TUNE", 14, 114, 64),
    param(0x11, "RANDOM_PITCH_DEPTH", 30),
    param_centered(0x12, "PARTIAL_PAN", 0, 127, 64),
    param(0x13, "RANDOM_PAN_DEPTH", 63),
    param_centered(0x14, "ALTERNATE_PAN_DEPTH", 1, 127, 64),
    param_enum(0x15, "PARTIAL_ENV_MODE", &["NO-SUS", "SUSTAIN"]),
    param(0x16, "OUTPUT_LEVEL", 127),
    param(0x19, "CHORUS_SEND_LEVEL", 127),
    param(0x1A, "REVERB_SEND_LEVEL", 127),
    param_enum(0x1B, "OUTPUT_ASSIGN", OUTPUT_ASSIGNS),
    param(0x1C, "PITCH_BEND_RANGE", 48),
    param_switch(0x1D, "RECEIVE_EXPRESSION"),
    param_switch(0x1E, "RECEIVE_HOLD_1"),
    param_enum(0x20, "WMT_VELOCITY_CONTROL", &["OFF", "ON", "RANDOM"]),
];
