//! Concrete SPI transport backends.
//!
//! Each backend implements the [`Spi`](crate::hw_trait::Spi) contract. The
//! spidev backend drives real hardware through the Linux SPI character
//! device; the mock backend keeps the register space in memory and exists
//! for tests that need fault injection or a transfer count.

pub mod mock;
pub mod spidev;

// Re-export transport implementations
pub use mock::MockSpi;
pub use spidev::SpidevSpi;
