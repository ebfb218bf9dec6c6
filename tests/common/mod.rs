#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use node_codec::telemetry::{Register, RegisterSource};

#[derive(Debug, PartialEq)]
pub struct AdcTimeout(pub Register);

impl fmt::Display for AdcTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ADC timeout reading {:?}", self.0)
    }
}

/// Register values of a simulated node. Registers without a value fail to read.
#[derive(Default)]
pub struct SimulatedNode {
    values: HashMap<Register, i32>,
    reads: RefCell<Vec<Register>>,
}

impl SimulatedNode {
    pub fn new() -> Self {
        Default::default()
    }

    /// A healthy node with plausible readings.
    pub fn healthy() -> Self {
        let mut node = Self::new();
        node.set(Register::McuVoltage, 3_300)
            .set(Register::McuTemperature, 31)
            .set(Register::BusVoltage, 24_150)
            .set(Register::UsbVoltage, 5_012)
            .set(Register::RsVoltage, 12_004)
            .set(Register::HmiVoltage, 3_298)
            .set(Register::NodeCount, 4)
            .set(Register::UplinkPeriod, 60)
            .set(Register::DownlinkPeriod, 300);
        node
    }

    pub fn set(&mut self, register: Register, value: i32) -> &mut Self {
        self.values.insert(register, value);
        self
    }

    pub fn fail(&mut self, register: Register) -> &mut Self {
        self.values.remove(&register);
        self
    }

    pub fn reads(&self) -> Vec<Register> {
        self.reads.borrow().clone()
    }
}

impl RegisterSource for SimulatedNode {
    type Error = AdcTimeout;

    fn read(&self, register: Register) -> Result<i32, AdcTimeout> {
        self.reads.borrow_mut().push(register);
        self.values
            .get(&register)
            .copied()
            .ok_or(AdcTimeout(register))
    }
}
