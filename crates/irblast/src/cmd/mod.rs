use clap::{Args, Subcommand};
use std::path::PathBuf;

use irblast_device::{DEFAULT_CARRIER_HZ, DEFAULT_DEVICE, DEFAULT_DUTY_CYCLE_PCT};

use crate::exit::CliResult;

pub mod encode;
pub mod send;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transmit a hex command through the IR device.
    Send(SendArgs),
    /// Encode a hex command and print the driver buffer without hardware.
    Encode(EncodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command) -> CliResult<i32> {
    match command {
        Command::Send(args) => send::run(args),
        Command::Encode(args) => encode::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Hex-encoded IR command (e.g. 20DF10EF).
    pub payload: String,
    /// Path to the LIRC character device.
    #[arg(long, env = "IR_DRIVER", default_value = DEFAULT_DEVICE)]
    pub device: PathBuf,
    /// Carrier frequency in Hz.
    #[arg(long, env = "IR_FREQ", default_value_t = DEFAULT_CARRIER_HZ)]
    pub carrier: u32,
    /// Duty cycle in percent.
    #[arg(long, env = "IR_DUTYCYCLE", default_value_t = DEFAULT_DUTY_CYCLE_PCT)]
    pub duty_cycle: u32,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Hex-encoded IR command.
    pub payload: String,
    /// Write the raw buffer bytes to stdout instead of a hex dump.
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
