//! Linux spidev-backed SPI transport.
//!
//! Drives the SX1276 through the kernel SPI character device
//! (`/dev/spidevB.C`). A register access is one full-duplex two-byte
//! transfer: the first byte carries the 7-bit address with the direction
//! flag in bit 7, the second byte carries the data. The SX1276 expects the
//! address and data phases to belong to one continuous transfer, so both
//! bytes are issued as a single kernel transfer and chip select stays
//! asserted across them.

use std::io;

use spidev::{SpiModeFlags, Spidev, SpidevOptions, SpidevTransfer};
use tracing::{debug, trace};

use crate::hw_trait::{Error, Result, Spi};

/// Bus clock ceiling. The SX1276 SPI interface is rated to 10 MHz; stay
/// comfortably below it.
const MAX_SPEED_HZ: u32 = 5_000_000;

/// Bit 7 of the address byte selects the transfer direction.
const READ_FLAG: u8 = 0x80;

/// The low seven bits of the address byte carry the register number.
const ADDR_MASK: u8 = 0x7f;

/// Address byte + don't-care pad; the reply arrives in the second byte.
fn read_frame(reg: u8) -> [u8; 2] {
    [READ_FLAG | reg, 0x00]
}

/// Address byte with the direction flag cleared, then the value.
fn write_frame(reg: u8, value: u8) -> [u8; 2] {
    [ADDR_MASK & reg, value]
}

/// SPI transport backed by a Linux spidev character device.
///
/// Starts closed; [`open`](Self::open) acquires and configures the device
/// node. The handle is released on [`close`](Self::close) or drop,
/// whichever comes first.
pub struct SpidevSpi {
    path: Option<String>,
    dev: Option<Spidev>,
}

impl SpidevSpi {
    /// Create a closed transport.
    pub fn new() -> Self {
        Self {
            path: None,
            dev: None,
        }
    }

    /// Open and configure the device node at `path`.
    ///
    /// Configures SPI mode 0, 8-bit words, MSB-first bit order, and a
    /// fixed clock ceiling. Either fully succeeds or leaves the transport
    /// closed; a handle that opened but failed configuration is dropped
    /// before this returns. Opening an already-open transport closes the
    /// prior handle first, so it cannot leak.
    pub fn open(&mut self, path: &str) -> Result<()> {
        self.close();

        let mut dev = Spidev::open(path).map_err(Error::Open)?;
        configure(&mut dev).map_err(Error::Configure)?;

        debug!(device = path, "opened SPI device");
        self.path = Some(path.to_string());
        self.dev = Some(dev);
        Ok(())
    }

    /// Release the device handle. Idempotent.
    pub fn close(&mut self) {
        if self.dev.take().is_some() {
            debug!(device = ?self.path, "closed SPI device");
        }
    }

    /// Path of the device node from the most recent successful open, if
    /// there has been one.
    pub fn device(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// One two-byte transaction with chip select held for both bytes.
    fn transfer(&mut self, tx: &[u8; 2], rx: &mut [u8; 2]) -> Result<()> {
        let dev = self.dev.as_mut().ok_or(Error::NotOpen)?;
        let mut xfer = SpidevTransfer::read_write(tx, rx);
        dev.transfer(&mut xfer).map_err(Error::Transfer)
    }
}

impl Default for SpidevSpi {
    fn default() -> Self {
        Self::new()
    }
}

fn configure(dev: &mut Spidev) -> io::Result<()> {
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .lsb_first(false)
        .max_speed_hz(MAX_SPEED_HZ)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    dev.configure(&options)
}

impl Spi for SpidevSpi {
    fn is_open(&self) -> bool {
        self.dev.is_some()
    }

    fn read_register(&mut self, reg: u8) -> Result<u8> {
        let tx = read_frame(reg);
        let mut rx = [0u8; 2];
        self.transfer(&tx, &mut rx)?;

        trace!(
            reg = %format!("{:#04x}", reg),
            value = %format!("{:#04x}", rx[1]),
            "read register"
        );
        Ok(rx[1])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        let tx = write_frame(reg, value);
        let mut rx = [0u8; 2];
        self.transfer(&tx, &mut rx)?;

        trace!(
            reg = %format!("{:#04x}", reg),
            value = %format!("{:#04x}", value),
            "wrote register"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::regs;

    #[test_case(0x00, [0x80, 0x00]; "fifo")]
    #[test_case(0x01, [0x81, 0x00]; "op_mode")]
    #[test_case(0x42, [0xc2, 0x00]; "version")]
    #[test_case(0x7f, [0xff, 0x00]; "top_address")]
    fn read_frame_sets_direction_bit(reg: u8, expect: [u8; 2]) {
        assert_eq!(read_frame(reg), expect);
    }

    #[test_case(0x01, 0x5a, [0x01, 0x5a]; "op_mode")]
    #[test_case(0x7f, 0xff, [0x7f, 0xff]; "top_address")]
    #[test_case(0x81, 0x00, [0x01, 0x00]; "direction_bit_stripped")]
    fn write_frame_clears_direction_bit(reg: u8, value: u8, expect: [u8; 2]) {
        assert_eq!(write_frame(reg, value), expect);
    }

    // Pins the is_open contract: true iff the transport holds a usable
    // handle, never the other way around.
    #[test]
    fn new_transport_is_closed() {
        let spi = SpidevSpi::new();
        assert!(!spi.is_open());
        assert_eq!(spi.device(), None);
    }

    #[test]
    fn open_missing_device_fails_closed() {
        let mut spi = SpidevSpi::new();
        let err = spi.open("/dev/does-not-exist").unwrap_err();
        assert!(matches!(err, Error::Open(_)));
        assert!(!spi.is_open());

        // A failed open leaves nothing behind; register ops refuse to
        // touch the bus.
        assert!(matches!(
            spi.read_register(regs::VERSION),
            Err(Error::NotOpen)
        ));
        assert!(matches!(
            spi.write_register(regs::OP_MODE, 0x00),
            Err(Error::NotOpen)
        ));
    }

    #[test]
    fn close_is_idempotent() {
        let mut spi = SpidevSpi::new();
        spi.close();
        spi.close();
        assert!(!spi.is_open());
    }
}
