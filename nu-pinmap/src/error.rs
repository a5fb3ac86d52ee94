//! Pin map errors
//!
//! Every error here points at a static configuration defect: a pin passed
//! with the wrong table, or pins that can never share one peripheral. Whether
//! that halts the system is up to the caller.

use core::fmt;

use crate::pin::{Peripheral, PinName};

/// Result type for pin map operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Pin map error.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No table entry for the pin.
    PinNotMapped(PinName),
    /// No table entry for the pin and peripheral combination.
    PinoutUnavailable {
        /// Pin that could not be routed.
        pin: PinName,
        /// Requested peripheral, `NC` if any was acceptable.
        peripheral: Peripheral,
    },
    /// Candidate sets share no peripheral instance.
    Mismatch,
}

/// Coarse classification of an [`Error`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The table has no entry for what was asked.
    NotFound,
    /// Pins requested together cannot share a peripheral.
    Mismatch,
}

impl Error {
    /// Kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PinNotMapped(_) | Error::PinoutUnavailable { .. } => ErrorKind::NotFound,
            Error::Mismatch => ErrorKind::Mismatch,
        }
    }

    /// The offending pin, if the error concerns a single pin.
    pub fn pin(&self) -> Option<PinName> {
        match *self {
            Error::PinNotMapped(pin) | Error::PinoutUnavailable { pin, .. } => Some(pin),
            Error::Mismatch => None,
        }
    }

    /// Short description, without the pin.
    pub fn message(&self) -> &'static str {
        match self {
            Error::PinNotMapped(_) => "pinmap not found for pin",
            Error::PinoutUnavailable { .. } => "could not pinout",
            Error::Mismatch => "pinmap mis-match",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PinNotMapped(pin) => write!(f, "{} {}", self.message(), pin),
            Error::PinoutUnavailable { pin, peripheral } if peripheral.is_nc() => {
                write!(f, "{} {}", self.message(), pin)
            }
            Error::PinoutUnavailable { pin, peripheral } => {
                write!(f, "{} {} to {}", self.message(), pin, peripheral)
            }
            Error::Mismatch => f.write_str(self.message()),
        }
    }
}
