use crate::cmd::SendArgs;
use crate::exit::CliResult;

#[cfg(unix)]
pub fn run(args: SendArgs) -> CliResult<i32> {
    use irblast_device::{transmit, DeviceConfig};
    use tracing::info;

    use crate::exit::{transmit_error, SUCCESS};

    let config = DeviceConfig {
        device: args.device,
        carrier_hz: args.carrier,
        duty_cycle_pct: args.duty_cycle,
    };

    info!(device = %config.device.display(), payload = %args.payload, "sending");
    transmit(&args.payload, &config).map_err(|err| transmit_error("send failed", err))?;

    Ok(SUCCESS)
}

#[cfg(not(unix))]
pub fn run(_args: SendArgs) -> CliResult<i32> {
    use crate::exit::{CliError, FAILURE};

    Err(CliError::new(
        FAILURE,
        "send requires a LIRC character device, which only exists on unix",
    ))
}
