//! Raw sample decoding and the converted [`Reading`].

use core::fmt;

use byteorder::{BigEndian, ByteOrder};

use crate::registers::{ALTIMETER_SAMPLE_LEN, BAROMETER_SAMPLE_LEN};

/// Block read taken in altimeter mode: status, OUT_P (altitude), OUT_T.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AltimeterSample(pub [u8; ALTIMETER_SAMPLE_LEN]);

/// Block read taken in barometer mode: status, OUT_P (pressure).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarometerSample(pub [u8; BAROMETER_SAMPLE_LEN]);

/// Physical values from one altimeter + barometer cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Pressure in kPa
    pub pressure_kpa: f64,
    /// Altitude in metres
    pub altitude_m: f64,
    /// Temperature in °C
    pub temperature_c: f64,
    /// Temperature in °F
    pub temperature_f: f64,
}

/// Upper 20 bits of the OUT_P_MSB/CSB/LSB triple, treated as unsigned.
fn out_p_20bit(bytes: &[u8]) -> u32 {
    (BigEndian::read_u24(bytes) & 0x00FF_FFF0) >> 4
}

/// 12-bit temperature from OUT_T_MSB/LSB in 1/16 °C.
///
/// The MSB is taken as signed while the LSB keeps only its upper nibble, so
/// temperatures below zero sign-extend.
fn out_t_12bit(bytes: &[u8]) -> i16 {
    (BigEndian::read_i16(bytes) & !0x000F) >> 4
}

/// Decodes an altimeter-mode sample into `(altitude_m, temperature_c)`.
pub fn decode_altimeter(sample: &AltimeterSample) -> (f64, f64) {
    let t_height = out_p_20bit(&sample.0[1..4]);
    let temp = out_t_12bit(&sample.0[4..6]);
    (f64::from(t_height) / 16.0, f64::from(temp) / 16.0)
}

/// Decodes a barometer-mode sample into kPa.
pub fn decode_barometer(sample: &BarometerSample) -> f64 {
    let pres = out_p_20bit(&sample.0[1..4]);
    (f64::from(pres) / 4.0) / 1000.0
}

/// Converts °C to °F.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

impl Reading {
    /// Decodes both cycles of one read into physical units.
    pub fn from_samples(altimeter: &AltimeterSample, barometer: &BarometerSample) -> Self {
        let (altitude_m, temperature_c) = decode_altimeter(altimeter);
        Self {
            pressure_kpa: decode_barometer(barometer),
            altitude_m,
            temperature_c,
            temperature_f: celsius_to_fahrenheit(temperature_c),
        }
    }
}

/// Console report, one value per line in the order pressure, altitude, °C, °F.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pressure : {:.2} kPa ", self.pressure_kpa)?;
        writeln!(f, "Altitude : {:.2} m ", self.altitude_m)?;
        writeln!(f, "Temperature in Celsius : {:.2} C ", self.temperature_c)?;
        writeln!(f, "Temperature in Fahrenheit : {:.2} F ", self.temperature_f)
    }
}
