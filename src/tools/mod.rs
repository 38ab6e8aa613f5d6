//! # Tools
//!
//! The pure leaves behind each screen. Nothing in here knows about the
//! navigation shell, the event loop, or ratatui. Functions take plain values
//! (and, where randomness is involved, an injected `RngCore`) and return plain
//! values or errors.
//!
//! - [`units`]: unit tables and conversion math
//! - [`codec`]: base64 encode/decode
//! - [`dice`]: die types and rolls
//! - [`character`]: ability scores, class tables, gear, gold, sheet export
//! - [`qr`]: QR encoding to text rows and PNG
//! - [`clipboard`]: copying an image file to the system clipboard
//! - [`host`]: system and network interface snapshots

pub mod character;
pub mod clipboard;
pub mod codec;
pub mod dice;
pub mod host;
pub mod qr;
pub mod units;
