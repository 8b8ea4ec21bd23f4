//! Blocking one-shot driver for the NXP MPL3115A2 pressure/altitude/temperature
//! sensor, built on the `embedded-hal` 1.0 traits.
//!
//! A single [`Mpl3115a2::read`] runs one altimeter conversion and one
//! barometer conversion and returns both as a [`Reading`]:
//!
//! ```rust,ignore
//! use linux_embedded_hal::{Delay, I2cdev};
//!
//! let i2c = I2cdev::new("/dev/i2c-1")?;
//! let mut sensor = mpl3115a2::Mpl3115a2::new(i2c, Delay);
//! let reading = sensor.read()?;
//! print!("{reading}");
//! ```

#![cfg_attr(not(test), no_std)]

pub mod reading;
pub mod registers;

use core::fmt;

use embedded_hal::{delay::DelayNs, i2c::I2c};
use log::{debug, info};

pub use reading::{AltimeterSample, BarometerSample, Reading};
use registers::{
    Register, ALTIMETER_SAMPLE_LEN, BAROMETER_SAMPLE_LEN, CTRL_REG1_ALTIMETER,
    CTRL_REG1_BAROMETER, DEVICE_ADDRESS, PT_DATA_CFG_ALL_EVENTS,
};

/// Fixed wait for a conversion at OSR = 128. The data-ready flag is not polled.
pub const CONVERSION_DELAY_MS: u32 = 1000;

#[derive(Debug)]
pub enum Error<E> {
    /// I²C bus error
    I2c(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C bus error: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

pub struct Mpl3115a2<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> Mpl3115a2<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Wraps the bus and delay provider. No bus traffic happens until [`read`](Self::read).
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Gives back the bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Runs an altimeter cycle followed by a barometer cycle.
    ///
    /// Any bus error aborts immediately; nothing after the failing
    /// transaction is attempted.
    pub fn read(&mut self) -> Result<Reading, Error<I2C::Error>> {
        let altimeter = self.sample_altimeter()?;
        let barometer = self.sample_barometer()?;

        let reading = Reading::from_samples(&altimeter, &barometer);
        info!(
            "MPL3115A2: {:.2} kPa, {:.2} m, {:.2} C",
            reading.pressure_kpa, reading.altitude_m, reading.temperature_c
        );
        Ok(reading)
    }

    /// Arms altimeter mode, waits one conversion and reads status + OUT_P + OUT_T.
    pub fn sample_altimeter(&mut self) -> Result<AltimeterSample, Error<I2C::Error>> {
        self.write_register(Register::CtrlReg1, CTRL_REG1_ALTIMETER)?;
        self.write_register(Register::PtDataCfg, PT_DATA_CFG_ALL_EVENTS)?;
        // The device needs CTRL_REG1 written again after PT_DATA_CFG.
        self.write_register(Register::CtrlReg1, CTRL_REG1_ALTIMETER)?;
        self.delay.delay_ms(CONVERSION_DELAY_MS);

        let mut raw = [0u8; ALTIMETER_SAMPLE_LEN];
        self.read_registers(Register::Status, &mut raw)?;
        Ok(AltimeterSample(raw))
    }

    /// Switches to barometer mode, waits one conversion and reads status + OUT_P.
    pub fn sample_barometer(&mut self) -> Result<BarometerSample, Error<I2C::Error>> {
        self.write_register(Register::CtrlReg1, CTRL_REG1_BAROMETER)?;
        self.delay.delay_ms(CONVERSION_DELAY_MS);

        let mut raw = [0u8; BAROMETER_SAMPLE_LEN];
        self.read_registers(Register::Status, &mut raw)?;
        Ok(BarometerSample(raw))
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        debug!("MPL3115A2: write {:?} <- {:#04x}", reg, value);
        self.i2c
            .write(DEVICE_ADDRESS, &[reg.addr(), value])
            .map_err(Error::I2c)
    }

    fn read_registers(&mut self, reg: Register, buf: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(DEVICE_ADDRESS, &[reg.addr()], buf)
            .map_err(Error::I2c)?;
        debug!("MPL3115A2: read {:?} -> {:02x?}", reg, buf);
        Ok(())
    }
}
