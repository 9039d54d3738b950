use std::io;

/// Set the carrier frequency (Hz) for subsequent sends.
pub const LIRC_SET_SEND_CARRIER: u64 = 0x4004_6913;

/// Set the duty cycle (percent) for subsequent sends.
pub const LIRC_SET_SEND_DUTY_CYCLE: u64 = 0x4004_6915;

/// The narrow surface a transmitter needs from an open IR device.
///
/// The LIRC driver ABI takes control parameters by address (a pointer to a
/// 32-bit integer), so `control` borrows the value rather than taking it.
/// Implemented by the real character device on Unix and by recording fakes
/// in tests; the encode pipeline never touches this trait.
pub trait DeviceBackend {
    /// Issue a control call against the open device.
    fn control(&mut self, request: u64, value: &u32) -> io::Result<()>;

    /// Write one complete encoded buffer to the device.
    ///
    /// A single write: no retry, no chunking. A short write is an error.
    fn send(&mut self, buffer: &[u8]) -> io::Result<()>;
}
