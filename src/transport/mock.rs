//! In-memory SPI transport for tests.
//!
//! Backs the register space with a 128-entry array and counts every
//! transaction that reaches the (simulated) bus, so tests can assert that a
//! closed transport never attempts a transfer. Faults are injected per call
//! or switched on for every call.

use std::io;

use crate::hw_trait::{Error, Result, Spi};

/// Software SPI backend with a register file and fault injection.
pub struct MockSpi {
    regs: [u8; 128],
    open: bool,
    transfers: usize,
    fail_next: bool,
    fail_all: bool,
}

impl MockSpi {
    /// Create an open mock with all registers zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; 128],
            open: true,
            transfers: 0,
            fail_next: false,
            fail_all: false,
        }
    }

    /// Create a closed mock.
    pub fn closed() -> Self {
        Self {
            open: false,
            ..Self::new()
        }
    }

    /// Toggle the simulated open state.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Fail only the next transfer.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    /// Fail every transfer until switched off again.
    pub fn fail_all(&mut self, fail: bool) {
        self.fail_all = fail;
    }

    /// Number of transactions that reached the simulated bus.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// Peek a register without a bus transaction.
    pub fn register(&self, reg: u8) -> u8 {
        self.regs[usize::from(reg & 0x7f)]
    }

    /// Common transaction gate: refuse while closed (before the transfer
    /// counter moves), then account for the bus access, then inject any
    /// pending fault.
    fn transact(&mut self) -> Result<()> {
        if !self.open {
            return Err(Error::NotOpen);
        }
        self.transfers += 1;
        if self.fail_all || std::mem::take(&mut self.fail_next) {
            return Err(Error::Transfer(io::Error::other("injected fault")));
        }
        Ok(())
    }
}

impl Default for MockSpi {
    fn default() -> Self {
        Self::new()
    }
}

impl Spi for MockSpi {
    fn is_open(&self) -> bool {
        self.open
    }

    fn read_register(&mut self, reg: u8) -> Result<u8> {
        self.transact()?;
        Ok(self.regs[usize::from(reg & 0x7f)])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        self.transact()?;
        self.regs[usize::from(reg & 0x7f)] = value;
        Ok(())
    }
}
