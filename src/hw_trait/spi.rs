//! SPI bus abstraction trait.

use super::Result;

/// SPI register bus abstraction.
///
/// One implementor drives one SX1276. Each call performs a single blocking
/// two-byte transaction and returns when the wire settles. Implementations
/// do not retry and do not lock; callers needing either build it above this
/// trait.
pub trait Spi: Send {
    /// Report whether the transport currently holds a usable handle.
    /// No side effects.
    fn is_open(&self) -> bool;

    /// Read one register.
    ///
    /// Fails if the transport is not open or the underlying transfer
    /// fails; no value is produced on failure.
    fn read_register(&mut self, reg: u8) -> Result<u8>;

    /// Write one register. Fails under the same conditions as a read.
    fn write_register(&mut self, reg: u8, value: u8) -> Result<()>;
}
