use anyhow::{Context, Result};
use serialport::{DataBits, Parity};
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use node_codec::telemetry::{render_status, Register, RegisterSource, TelemetryFrame};
use node_codec::{byte_array_to_hex_string, Buffer};

/// Register values given on the command line as `NAME=value`.
struct StaticNode {
    values: HashMap<Register, i32>,
}

#[derive(Debug)]
struct NotMeasured;

impl RegisterSource for StaticNode {
    type Error = NotMeasured;

    fn read(&self, register: Register) -> Result<i32, NotMeasured> {
        self.values.get(&register).copied().ok_or(NotMeasured)
    }
}

fn parse_assignment(arg: &str) -> Result<(Register, i32)> {
    let (name, value) = arg.split_once('=').context("Expected NAME=value")?;
    let register = Register::ALL
        .iter()
        .copied()
        .find(|r| r.name().trim_end_matches('=').eq_ignore_ascii_case(name))
        .with_context(|| format!("Unknown register {}", name))?;
    Ok((register, value.parse().context("Parse error")?))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args();
    args.next(); // Skip program name
    let port = args.next().unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let values = args
        .map(|arg| parse_assignment(&arg))
        .collect::<Result<HashMap<_, _>>>()?;
    let node = StaticNode { values };

    let mut status = Buffer::<128>::new();
    render_status(&node, &mut status)?;
    println!("{}", status.as_str()?);

    let frame = TelemetryFrame::collect(&node).to_bytes();
    let mut hex = [0; 2 * node_codec::telemetry::FRAME_SIZE + 1];
    let len = byte_array_to_hex_string(&frame, false, &mut hex)?;
    println!("{}", std::str::from_utf8(&hex[..len])?);

    let mut serial = serialport::new(&port, 9600)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .timeout(Duration::from_millis(100))
        .open()
        .with_context(|| format!("Failed to open serial port {}", port))?;
    serial.write_all(&frame)?;
    serial.flush()?;
    Ok(())
}
