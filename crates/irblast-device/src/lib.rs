//! Direct transmission of encoded IR commands through a LIRC character
//! device.
//!
//! The device surface is deliberately narrow: two ioctl control calls
//! (carrier frequency, duty cycle) followed by one buffer write, all
//! blocking, all against a handle that lives for exactly one transmission.
//! The [`DeviceBackend`] trait isolates that surface so the sequencing in
//! [`transmit_with`] can be exercised without hardware.

pub mod backend;
pub mod error;
pub mod transmitter;

#[cfg(unix)]
pub mod lirc;

pub use backend::{DeviceBackend, LIRC_SET_SEND_CARRIER, LIRC_SET_SEND_DUTY_CYCLE};
pub use error::{Result, TransmitError};
pub use transmitter::{
    transmit_with, DeviceConfig, DEFAULT_CARRIER_HZ, DEFAULT_DEVICE, DEFAULT_DUTY_CYCLE_PCT,
};

#[cfg(unix)]
pub use lirc::LircDevice;
#[cfg(unix)]
pub use transmitter::transmit;
