//! MPL3115A2 register map and the control values written during a one-shot read.
//!
//! Only the registers touched by [`Mpl3115a2::read`](crate::Mpl3115a2::read) are
//! listed. Data registers auto-increment, so a block read starting at
//! [`Register::Status`] returns the status byte followed by
//! OUT_P_MSB, OUT_P_CSB, OUT_P_LSB, OUT_T_MSB and OUT_T_LSB.

/// 7-bit I²C address of the MPL3115A2 (fixed, no address pin).
pub const DEVICE_ADDRESS: u8 = 0x60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Data-ready status, first byte of every block read.
    Status = 0x00,
    /// Data event flag configuration (PT_DATA_CFG).
    PtDataCfg = 0x13,
    /// Control register 1 (CTRL_REG1): mode, oversampling, standby.
    CtrlReg1 = 0x26,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

// CTRL_REG1 bits
const CTRL_ALT: u8 = 1 << 7;
const CTRL_OS_128: u8 = 0b111 << 3;
const CTRL_SBYB: u8 = 1 << 0;

// PT_DATA_CFG bits
const PT_DREM: u8 = 1 << 2;
const PT_PDEFE: u8 = 1 << 1;
const PT_TDEFE: u8 = 1 << 0;

/// Active, OSR = 128, altimeter mode (0xB9).
pub const CTRL_REG1_ALTIMETER: u8 = CTRL_ALT | CTRL_OS_128 | CTRL_SBYB;

/// Active, OSR = 128, barometer mode (0x39).
pub const CTRL_REG1_BAROMETER: u8 = CTRL_OS_128 | CTRL_SBYB;

/// Data-ready events enabled for altitude/pressure and temperature (0x07).
pub const PT_DATA_CFG_ALL_EVENTS: u8 = PT_DREM | PT_PDEFE | PT_TDEFE;

/// Status + 20-bit altitude + 12-bit temperature.
pub const ALTIMETER_SAMPLE_LEN: usize = 6;

/// Status + 20-bit pressure.
pub const BAROMETER_SAMPLE_LEN: usize = 4;
