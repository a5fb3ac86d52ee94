//! Pin to peripheral mapping for Nuvoton microcontrollers
//!
//! Some pins on these parts can be routed to more than one instance of the same
//! peripheral kind, and the same pin may appear several times in one pin map.
//! A first-match lookup then picks an arbitrary instance. This crate lets a
//! driver collect the *whole* candidate set for every pin it owns, intersect
//! those sets down to the instances all pins agree on, and finally commit each
//! pin's function for the chosen instance.
//!
//! ## Usage
//!
//! ```
//! use nu_pinmap::{
//!     mx, pinmap, Peripheral, PeripheralList, PinConfig, PinFunction, PinName, PullType,
//!     pin::{PA_0, PA_1},
//! };
//!
//! const SPI_0: Peripheral = Peripheral::new(0x20);
//! const SPI_1: Peripheral = Peripheral::new(0x21);
//!
//! pinmap! {
//!     static PINMAP_SPI_MOSI = [
//!         (PA_0, SPI_0, 0x4),
//!         (PA_0, SPI_1, 0x6),
//!     ];
//!     static PINMAP_SPI_SCLK = [
//!         (PA_1, SPI_1, 0x6),
//!     ];
//! }
//!
//! struct Board;
//! impl PinConfig for Board {
//!     fn set_function(&mut self, _pin: PinName, _function: PinFunction) {}
//!     fn set_pull(&mut self, _pin: PinName, _pull: PullType) {}
//! }
//!
//! let mosi: PeripheralList<2> = PeripheralList::resolve(PA_0, PINMAP_SPI_MOSI)?;
//! let sclk: PeripheralList<2> = PeripheralList::resolve(PA_1, PINMAP_SPI_SCLK)?;
//! let spi: PeripheralList<2> = PeripheralList::intersection(&mosi, &sclk)?;
//! assert_eq!(spi.as_slice(), &[SPI_1]);
//!
//! let mut board = Board;
//! mx::commit_pinout(PA_0, PINMAP_SPI_MOSI, spi[0], &mut board)?;
//! mx::commit_pinout(PA_1, PINMAP_SPI_SCLK, spi[0], &mut board)?;
//! # Ok::<(), nu_pinmap::Error>(())
//! ```
//!
//! # Crate features
//!
//! * **defmt** -
//!   Implement `defmt::Format` for several types and log resolution results.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[macro_use]
mod fmt;

pub mod error;
pub mod map;
pub mod mx;
pub mod perlist;
pub mod pin;
pub mod single;

pub use error::{Error, ErrorKind, Result};
pub use map::PinMap;
pub use perlist::PeripheralList;
pub use pin::{Peripheral, PinConfig, PinFunction, PinName, PullType};
