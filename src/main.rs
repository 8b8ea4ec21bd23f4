//! Takes one MPL3115A2 reading on `/dev/i2c-1` and prints it.
//!
//! Build with `cargo run --features linux`.

use anyhow::{Context, Result};
use linux_embedded_hal::{Delay, I2cdev};
use log::info;
use mpl3115a2::Mpl3115a2;

const I2C_BUS: &str = "/dev/i2c-1";

fn main() -> Result<()> {
    env_logger::init();

    let dev = I2cdev::new(I2C_BUS).with_context(|| format!("failed to open {I2C_BUS}"))?;
    info!("Opened {}", I2C_BUS);

    let mut sensor = Mpl3115a2::new(dev, Delay);
    let reading = sensor.read().context("failed to read MPL3115A2")?;

    print!("{reading}");
    Ok(())
}
