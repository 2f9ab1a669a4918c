//! SX1276 register addresses.
//!
//! Addresses only. Interpreting register contents is the modem layer's
//! job, not this crate's.

/// FIFO read/write access
pub const FIFO: u8 = 0x00;
/// Operating mode and modulation selection
pub const OP_MODE: u8 = 0x01;
/// Carrier frequency, most significant byte
pub const FRF_MSB: u8 = 0x06;
/// Carrier frequency, middle byte
pub const FRF_MID: u8 = 0x07;
/// Carrier frequency, least significant byte
pub const FRF_LSB: u8 = 0x08;
/// PA selection and output power
pub const PA_CONFIG: u8 = 0x09;
/// Over-current protection control
pub const OCP: u8 = 0x0b;
/// LNA gain and boost settings
pub const LNA: u8 = 0x0c;
/// FIFO SPI pointer
pub const FIFO_ADDR_PTR: u8 = 0x0d;
/// Start address of the TX buffer
pub const FIFO_TX_BASE_ADDR: u8 = 0x0e;
/// Start address of the RX buffer
pub const FIFO_RX_BASE_ADDR: u8 = 0x0f;
/// Interrupt flags
pub const IRQ_FLAGS: u8 = 0x12;
/// Number of bytes in the last received payload
pub const RX_NB_BYTES: u8 = 0x13;
/// Modem bandwidth, coding rate, and header mode
pub const MODEM_CONFIG_1: u8 = 0x1d;
/// Spreading factor and CRC settings
pub const MODEM_CONFIG_2: u8 = 0x1e;
/// Payload length in bytes
pub const PAYLOAD_LENGTH: u8 = 0x22;
/// DIO pin mapping, first half
pub const DIO_MAPPING_1: u8 = 0x40;
/// Silicon revision (0x12 on production SX1276)
pub const VERSION: u8 = 0x42;
