//! Register-level SPI access to the Semtech SX1276 LoRa transceiver.
//!
//! The [`hw_trait::Spi`] trait is the contract: three operations, each a
//! single blocking two-byte bus transaction. [`transport::SpidevSpi`] is the
//! shipped backend and drives the Linux SPI character device
//! (`/dev/spidevB.C`); swapping in another backend does not change callers.
//! [`transport::MockSpi`] is an in-memory backend for tests.
//!
//! Modem control, packet framing, and chip reset sequencing live above this
//! crate and consume only the trait.
//!
//! ```no_run
//! use sx1276_spi::{regs, Spi, SpidevSpi};
//!
//! fn main() -> sx1276_spi::Result<()> {
//!     let mut spi = SpidevSpi::new();
//!     spi.open("/dev/spidev0.0")?;
//!     let version = spi.read_register(regs::VERSION)?;
//!     println!("silicon revision: {version:#04x}");
//!     Ok(())
//! }
//! ```

pub mod hw_trait;
pub mod regs;
pub mod transport;

pub use hw_trait::{Error, Result, Spi};
pub use transport::{MockSpi, SpidevSpi};
