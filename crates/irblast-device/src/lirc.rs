use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::fd::AsRawFd;
use std::path::Path;

use tracing::debug;

use crate::backend::DeviceBackend;

/// An open LIRC character device (e.g. `/dev/lirc0`).
///
/// Exclusive, per-transmission resource: opened for one send and closed by
/// `Drop` on every exit path. Never cached or shared between calls.
pub struct LircDevice {
    file: File,
}

impl LircDevice {
    /// Open the device read/write.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        debug!(?path, "opened lirc device");
        Ok(Self { file })
    }
}

impl DeviceBackend for LircDevice {
    fn control(&mut self, request: u64, value: &u32) -> io::Result<()> {
        let fd = self.file.as_raw_fd();
        // SAFETY: `fd` is an open descriptor owned by `self.file`, and
        // `value` is a valid pointer to a u32 for the duration of the call,
        // which is what these LIRC requests expect.
        let rc = unsafe { libc::ioctl(fd, request as _, value as *const u32) };
        if rc == -1 {
            return Err(io::Error::last_os_error());
        }
        debug!(request = format_args!("{request:#010x}"), value, "ioctl ok");
        Ok(())
    }

    fn send(&mut self, buffer: &[u8]) -> io::Result<()> {
        let written = self.file.write(buffer)?;
        if written != buffer.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write ({written} of {} bytes)", buffer.len()),
            ));
        }
        debug!(bytes = written, "buffer written to device");
        Ok(())
    }
}

impl std::fmt::Debug for LircDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LircDevice")
            .field("fd", &self.file.as_raw_fd())
            .finish()
    }
}
