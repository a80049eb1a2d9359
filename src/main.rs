//! Command-line decoder for JD-Xi SysEx traffic: feed it a `.syx` capture or
//! a hex string and it prints one JSON object per decoded message.

use jdxi_sysex::sysex::{parse_sysex, ParsedSysEx};

use std::error::Error;
use std::path::PathBuf;

const USAGE: &str = "\
jdxi-sysex: decode Roland JD-Xi System Exclusive messages

Usage:

    jdxi-sysex capture.syx
    jdxi-sysex --hex \"F0 41 10 00 00 00 0E 12 18 00 00 10 64 74 F7\"

The input may contain several F0h..F7h messages back to back; each is
decoded to one line of JSON. SysEx belonging to other devices is skipped
silently, and malformed messages are reported on stderr without stopping
the run.

Options:

    -h
    --help
        Print this help text.

    --hex <string>
        Decode hex bytes given on the command line instead of a file.
        Whitespace and a trailing 'h' on each byte are accepted.
";

fn parse_hex(text: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut bytes = Vec::new();
    for token in text.split_whitespace() {
        let token = token.strip_suffix(['h', 'H']).unwrap_or(token);
        bytes.push(u8::from_str_radix(token, 16).map_err(|_| {
            format!("not a hex byte: {:?}", token)
        })?);
    }
    Ok(bytes)
}

/// Split a byte stream into individual F0h..F7h messages, ignoring anything
/// between them (captures often interleave realtime status bytes).
fn split_messages(bytes: &[u8]) -> Vec<&[u8]> {
    let mut messages = Vec::new();
    let mut start = None;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            0xF0 => start = Some(i),
            0xF7 => {
                if let Some(begin) = start.take() {
                    messages.push(&bytes[begin..=i]);
                }
            }
            _ => {}
        }
    }
    messages
}

fn print_message(message: &[u8]) {
    match parse_sysex(message) {
        Ok(ParsedSysEx::Dump(dump)) => {
            println!("{}", serde_json::to_string(&dump.to_map()).unwrap());
        }
        Ok(ParsedSysEx::IdentityReply(reply)) => {
            println!("{{\"IDENTITY_REPLY\":{}}}", serde_json::to_string(&reply.to_string()).unwrap());
        }
        Ok(ParsedSysEx::IdentityRequest { device_id }) => {
            println!("{{\"IDENTITY_REQUEST\":{}}}", device_id);
        }
        Ok(ParsedSysEx::DataRequest { address, size }) => {
            println!(
                "{{\"DATA_REQUEST\":{},\"SIZE\":{}}}",
                serde_json::to_string(&address.to_string()).unwrap(),
                size
            );
        }
        Err(err) if err.is_foreign() => {
            log::debug!("skipping foreign SysEx: {}", err);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args_os();
    let _ = args.next(); // ignore argv[0]

    let mut in_path = None;
    let mut hex = None;
    while let Some(arg) = args.next() {
        if arg == "-h" || arg == "--help" {
            eprintln!("{}", USAGE);
            return Ok(());
        } else if arg == "--hex" {
            if hex.is_some() {
                return Err("Only one --hex string can be specified".into());
            }
            hex = args
                .next()
                .map(|s| s.to_string_lossy().into_owned());
            if hex.is_none() {
                return Err("Missing hex string after --hex".into());
            }
        } else if in_path.is_none() {
            in_path = Some(PathBuf::from(arg));
        } else {
            return Err(format!("Unexpected argument: {:?}", arg).into());
        }
    }

    let bytes = match (in_path, hex) {
        (None, Some(hex)) => parse_hex(&hex)?,
        (Some(path), None) => std::fs::read(path)?,
        _ => {
            eprintln!("{}", USAGE);
            return Err("Specify either an input file or --hex".into());
        }
    };

    let messages = split_messages(&bytes);
    if messages.is_empty() {
        return Err("No SysEx messages in input".into());
    }
    for message in messages {
        print_message(message);
    }

    Ok(())
}
