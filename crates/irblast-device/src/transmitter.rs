use std::path::PathBuf;

use tracing::info;

use irblast_encode::encode_command;

use crate::backend::{DeviceBackend, LIRC_SET_SEND_CARRIER, LIRC_SET_SEND_DUTY_CYCLE};
use crate::error::{Result, TransmitError};

/// Default LIRC character device path.
pub const DEFAULT_DEVICE: &str = "/dev/lirc0";

/// Default carrier frequency in Hz.
pub const DEFAULT_CARRIER_HZ: u32 = 38_000;

/// Default duty cycle in percent.
pub const DEFAULT_DUTY_CYCLE_PCT: u32 = 50;

/// Transmission parameters, supplied by the caller and never mutated here.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Path to the LIRC character device.
    pub device: PathBuf,
    /// Carrier frequency in Hz.
    pub carrier_hz: u32,
    /// Duty cycle in percent.
    pub duty_cycle_pct: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            carrier_hz: DEFAULT_CARRIER_HZ,
            duty_cycle_pct: DEFAULT_DUTY_CYCLE_PCT,
        }
    }
}

/// Transmit one hex command through the configured character device.
///
/// Encodes first, so a malformed payload fails before the device is even
/// opened. Then opens the device, configures carrier and duty cycle,
/// writes the buffer, and closes the device — in that order, with the
/// handle released on every path. Blocking throughout; the physical
/// transmitter is exclusive, so concurrent calls against the same device
/// must be serialized by the caller.
#[cfg(unix)]
pub fn transmit(payload: &str, config: &DeviceConfig) -> Result<()> {
    let buffer = encode_command(payload)?;
    let mut device =
        crate::lirc::LircDevice::open(&config.device).map_err(|source| TransmitError::Open {
            path: config.device.clone(),
            source,
        })?;
    // `device` drops (closes) when this frame unwinds, success or error.
    configure_and_send(&mut device, payload, &buffer, config)
}

/// Transmit through an already-open backend.
///
/// Same contract as [`transmit`] minus the open: a decode failure returns
/// before any control call or write reaches the backend.
pub fn transmit_with<B: DeviceBackend>(
    backend: &mut B,
    payload: &str,
    config: &DeviceConfig,
) -> Result<()> {
    let buffer = encode_command(payload)?;
    configure_and_send(backend, payload, &buffer, config)
}

/// Control calls in driver-mandated order (carrier, then duty cycle), then
/// one write of the complete buffer.
fn configure_and_send<B: DeviceBackend>(
    backend: &mut B,
    payload: &str,
    buffer: &[u8],
    config: &DeviceConfig,
) -> Result<()> {
    backend
        .control(LIRC_SET_SEND_CARRIER, &config.carrier_hz)
        .map_err(|source| TransmitError::Control {
            operation: "carrier",
            source,
        })?;
    backend
        .control(LIRC_SET_SEND_DUTY_CYCLE, &config.duty_cycle_pct)
        .map_err(|source| TransmitError::Control {
            operation: "duty_cycle",
            source,
        })?;

    backend
        .send(buffer)
        .map_err(|source| TransmitError::Write { source })?;

    info!(
        payload,
        buffer_bytes = buffer.len(),
        carrier_hz = config.carrier_hz,
        duty_cycle_pct = config.duty_cycle_pct,
        "transmitted"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Default)]
    struct FakeDevice {
        controls: Vec<(u64, u32)>,
        writes: Vec<Vec<u8>>,
        fail_control: Option<u64>,
        fail_write: bool,
    }

    impl DeviceBackend for FakeDevice {
        fn control(&mut self, request: u64, value: &u32) -> io::Result<()> {
            if self.fail_control == Some(request) {
                return Err(io::Error::from(io::ErrorKind::InvalidInput));
            }
            self.controls.push((request, *value));
            Ok(())
        }

        fn send(&mut self, buffer: &[u8]) -> io::Result<()> {
            if self.fail_write {
                return Err(io::Error::other("simulated driver write failure"));
            }
            self.writes.push(buffer.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_control_calls_ordered_before_write() {
        let mut device = FakeDevice::default();
        let config = DeviceConfig::default();

        transmit_with(&mut device, "00", &config).unwrap();

        assert_eq!(
            device.controls,
            vec![
                (LIRC_SET_SEND_CARRIER, 38_000),
                (LIRC_SET_SEND_DUTY_CYCLE, 50),
            ]
        );
        assert_eq!(device.writes.len(), 1);
        assert_eq!(device.writes[0].len(), 76);
        assert_eq!(&device.writes[0][72..], &[0xCA, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_carrier_failure_aborts_before_duty_cycle() {
        let mut device = FakeDevice {
            fail_control: Some(LIRC_SET_SEND_CARRIER),
            ..FakeDevice::default()
        };

        let err = transmit_with(&mut device, "00", &DeviceConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            TransmitError::Control {
                operation: "carrier",
                ..
            }
        ));
        assert!(device.controls.is_empty());
        assert!(device.writes.is_empty());
    }

    #[test]
    fn test_duty_cycle_failure_aborts_before_write() {
        let mut device = FakeDevice {
            fail_control: Some(LIRC_SET_SEND_DUTY_CYCLE),
            ..FakeDevice::default()
        };

        let err = transmit_with(&mut device, "00", &DeviceConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            TransmitError::Control {
                operation: "duty_cycle",
                ..
            }
        ));
        assert_eq!(device.controls.len(), 1);
        assert!(device.writes.is_empty());
    }

    #[test]
    fn test_decode_failure_never_touches_device() {
        let mut device = FakeDevice::default();

        let err = transmit_with(&mut device, "G1", &DeviceConfig::default()).unwrap_err();

        assert!(matches!(err, TransmitError::Encode(_)));
        assert!(device.controls.is_empty());
        assert!(device.writes.is_empty());
    }

    #[test]
    fn test_write_failure_reported() {
        let mut device = FakeDevice {
            fail_write: true,
            ..FakeDevice::default()
        };

        let err = transmit_with(&mut device, "80", &DeviceConfig::default()).unwrap_err();

        assert!(matches!(err, TransmitError::Write { .. }));
    }

    #[test]
    fn test_custom_config_values_passed_by_value() {
        let mut device = FakeDevice::default();
        let config = DeviceConfig {
            device: PathBuf::from("/dev/lirc1"),
            carrier_hz: 36_000,
            duty_cycle_pct: 33,
        };

        transmit_with(&mut device, "", &config).unwrap();

        assert_eq!(
            device.controls,
            vec![
                (LIRC_SET_SEND_CARRIER, 36_000),
                (LIRC_SET_SEND_DUTY_CYCLE, 33),
            ]
        );
        // empty payload still carries the leader and trailer.
        assert_eq!(device.writes[0].len(), 12);
    }

    #[cfg(unix)]
    #[test]
    fn test_open_failure_reports_path() {
        let config = DeviceConfig {
            device: PathBuf::from("/dev/irblast-does-not-exist"),
            ..DeviceConfig::default()
        };

        let err = transmit("00", &config).unwrap_err();

        match err {
            TransmitError::Open { path, .. } => {
                assert_eq!(path, config.device);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
