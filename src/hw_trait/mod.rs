//! Hardware abstraction layer traits.
//!
//! This module defines the SPI bus contract that lets the SX1276 register
//! protocol run over different underlying transports, whether the Linux
//! spidev character device or a software test double.

pub mod spi;

// Re-export traits
pub use spi::Spi;

use std::io;

/// Common error type for bus operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Operation attempted on a transport that is not open
    #[error("transport is not open")]
    NotOpen,

    /// The device node could not be opened
    #[error("failed to open SPI device: {0}")]
    Open(#[source] io::Error),

    /// The device opened but bus configuration failed
    #[error("failed to configure SPI device: {0}")]
    Configure(#[source] io::Error),

    /// The underlying bus transfer failed
    #[error("SPI transfer failed: {0}")]
    Transfer(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
