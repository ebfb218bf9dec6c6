//! Named node registers, their status line rendering and the binary uplink
//! frame.
//!
//! Register values come from a [`RegisterSource`], implemented by whatever
//! reads the ADC and the node registry. A failed read never aborts a status
//! line: the register's sentinel is rendered instead, followed by
//! [`ERROR_MARKER`].

use core::fmt::Debug;

use log::warn;

use crate::buffer::Buffer;
use crate::convert::{value_to_string, ValueString};
use crate::fractional::value_to_5_digits_string;
use crate::types::{Error, Format};

/// Replaces the unit of a register that couldn't be read or formatted.
pub const ERROR_MARKER: &str = "ERROR";

/// Size of an encoded [`TelemetryFrame`].
pub const FRAME_SIZE: usize = 10;

/// A named integer telemetry slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Register {
    /// Microcontroller supply, mV.
    McuVoltage,
    /// Microcontroller die temperature, °C.
    McuTemperature,
    /// Field bus voltage, mV.
    BusVoltage,
    UsbVoltage,
    /// Regulated supply voltage, mV.
    RsVoltage,
    /// Human interface supply voltage, mV.
    HmiVoltage,
    /// Nodes currently registered on the bus.
    NodeCount,
    /// Seconds between uplink frames.
    UplinkPeriod,
    /// Seconds between downlink polls.
    DownlinkPeriod,
}

/// How a register value is shown on a status line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Render {
    Integer(Format),
    /// Value scaled by 1000, see [`value_to_5_digits_string()`].
    Fractional,
}

/// Static description of a register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub unit: &'static str,
    pub render: Render,
    /// Used in place of the value when it can't be read.
    pub sentinel: i32,
}

const VOLTAGE_SENTINEL: i32 = 0xFFFF;

const fn voltage(name: &'static str) -> Descriptor {
    Descriptor {
        name,
        unit: "V",
        render: Render::Fractional,
        sentinel: VOLTAGE_SENTINEL,
    }
}

const fn period(name: &'static str) -> Descriptor {
    Descriptor {
        name,
        unit: "s",
        render: Render::Integer(Format::Decimal),
        sentinel: -1,
    }
}

static DESCRIPTORS: [Descriptor; 9] = [
    voltage("VMCU="),
    Descriptor {
        name: "TMCU=",
        unit: "C",
        render: Render::Integer(Format::Decimal),
        sentinel: i8::MIN as i32,
    },
    voltage("VBUS="),
    voltage("VUSB="),
    voltage("VRS="),
    voltage("VHMI="),
    Descriptor {
        name: "NODES=",
        unit: "",
        render: Render::Integer(Format::Decimal),
        sentinel: 0xFF,
    },
    period("UL="),
    period("DL="),
];

impl Register {
    /// Every register, in status line order.
    pub const ALL: [Register; 9] = [
        Register::McuVoltage,
        Register::McuTemperature,
        Register::BusVoltage,
        Register::UsbVoltage,
        Register::RsVoltage,
        Register::HmiVoltage,
        Register::NodeCount,
        Register::UplinkPeriod,
        Register::DownlinkPeriod,
    ];

    pub fn descriptor(self) -> &'static Descriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn unit(self) -> &'static str {
        self.descriptor().unit
    }

    pub fn sentinel(self) -> i32 {
        self.descriptor().sentinel
    }
}

/// Access to the current register values of a node.
pub trait RegisterSource {
    type Error: Debug;

    /// Read the current value of `register`.
    /// # Errors
    /// Returns an error if the value can't be acquired.
    fn read(&self, register: Register) -> Result<i32, Self::Error>;
}

fn render_value(value: i32, render: Render) -> Result<ValueString, Error> {
    match render {
        Render::Integer(format) => value_to_string(value, format, false),
        Render::Fractional => Ok(ValueString::from_truncated(
            value_to_5_digits_string(value).as_bytes(),
        )),
    }
}

/// Append `<name><value><unit>` for `register` to `status`, or
/// `<name><sentinel>ERROR` if the value can't be read or formatted.
/// # Errors
/// Returns [`Error::AppendOverflow`] if `status` is full. The part of the line
/// that fit is kept.
pub fn render_register<S, const N: usize>(
    source: &S,
    register: Register,
    status: &mut Buffer<N>,
) -> Result<(), Error>
where
    S: RegisterSource + ?Sized,
{
    let desc = register.descriptor();
    status.append_str(desc.name)?;

    let rendered = match source.read(register) {
        Ok(value) => render_value(value, desc.render).map_err(|err| {
            warn!("Formatting {:?} value {} failed: {}", register, value, err);
        }),
        Err(err) => {
            warn!("Reading {:?} failed: {:?}", register, err);
            Err(())
        }
    };

    match rendered {
        Ok(text) => {
            status.append(text.as_bytes())?;
            status.append_str(desc.unit)
        }
        Err(()) => {
            status.append(render_value(desc.sentinel, desc.render)?.as_bytes())?;
            status.append_str(ERROR_MARKER)
        }
    }
}

/// Render every register, separated by spaces.
pub fn render_status<S, const N: usize>(source: &S, status: &mut Buffer<N>) -> Result<(), Error>
where
    S: RegisterSource + ?Sized,
{
    for (i, register) in Register::ALL.iter().enumerate() {
        if i > 0 {
            status.append_str(" ")?;
        }
        render_register(source, *register, status)?;
    }
    Ok(())
}

/// Compact register snapshot for constrained uplinks.
///
/// Encoded big-endian as
/// `mcu_voltage(2) mcu_temperature(1) usb_voltage(2) rs_voltage(2) hmi_voltage(2) node_count(1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TelemetryFrame {
    pub mcu_voltage: u16,
    pub mcu_temperature: i8,
    pub usb_voltage: u16,
    pub rs_voltage: u16,
    pub hmi_voltage: u16,
    pub node_count: u8,
}

impl TelemetryFrame {
    /// Read the frame registers from `source`. Failed reads are replaced by the
    /// register's sentinel, and values are clamped to their field.
    pub fn collect<S: RegisterSource + ?Sized>(source: &S) -> Self {
        let read = |register: Register, min: i32, max: i32| {
            source
                .read(register)
                .unwrap_or_else(|err| {
                    warn!("Reading {:?} failed: {:?}", register, err);
                    register.sentinel()
                })
                .clamp(min, max)
        };
        let u16_field = |register| read(register, 0, u16::MAX.into()) as u16;

        Self {
            mcu_voltage: u16_field(Register::McuVoltage),
            mcu_temperature: read(Register::McuTemperature, i8::MIN.into(), i8::MAX.into()) as i8,
            usb_voltage: u16_field(Register::UsbVoltage),
            rs_voltage: u16_field(Register::RsVoltage),
            hmi_voltage: u16_field(Register::HmiVoltage),
            node_count: read(Register::NodeCount, 0, u8::MAX.into()) as u8,
        }
    }

    pub fn to_bytes(&self) -> [u8; FRAME_SIZE] {
        let mut frame = [0; FRAME_SIZE];
        put_u16(&mut frame[0..2], self.mcu_voltage);
        frame[2] = self.mcu_temperature as u8;
        put_u16(&mut frame[3..5], self.usb_voltage);
        put_u16(&mut frame[5..7], self.rs_voltage);
        put_u16(&mut frame[7..9], self.hmi_voltage);
        frame[9] = self.node_count;
        frame
    }

    pub fn from_bytes(frame: &[u8; FRAME_SIZE]) -> Self {
        Self {
            mcu_voltage: get_u16(&frame[0..2]),
            mcu_temperature: frame[2] as i8,
            usb_voltage: get_u16(&frame[3..5]),
            rs_voltage: get_u16(&frame[5..7]),
            hmi_voltage: get_u16(&frame[7..9]),
            node_count: frame[9],
        }
    }
}

fn put_u16(field: &mut [u8], value: u16) {
    field[0] = (value >> 8) as u8;
    field[1] = (value & 0xFF) as u8;
}

fn get_u16(field: &[u8]) -> u16 {
    u16::from(field[0]) << 8 | u16::from(field[1])
}
