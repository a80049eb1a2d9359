//! Codec for the Roland JD-Xi's System Exclusive protocol.
//!
//! This crate builds and decodes the SysEx messages the JD-Xi uses for
//! parameter editing: Roland "Type IV" framing with a 4-byte address, the
//! two's-complement-mod-128 checksum, one-byte and 4-nibble value encodings,
//! and the universal identity request/reply handshake used to confirm that
//! the device on the other end of the cable is actually a JD-Xi. It also
//! translates the (N)RPN Control Change sequences the instrument uses for
//! continuous controllers.
//!
//! The crate never touches a MIDI port. The embedding application hands
//! [sysex::parse_sysex] complete `F0h..F7h` buffers received from its MIDI
//! input and sends the buffers returned by [sysex::roland::compose_message]
//! out of its MIDI output.
//!
//! The main references were the _MIDI 1.0 Detailed Specification_ and the
//! JD-Xi MIDI implementation chart.

pub mod nrpn;
pub mod sysex;

use std::fmt::Write;

/// Format bytes like "12h 34h 56h", the notation Roland manuals use.
pub fn format_bytes(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 4);
    for (i, byte) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        write!(s, "{:02X}h", byte).unwrap();
    }
    s
}
