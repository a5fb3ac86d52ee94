//! First-match pin map lookups
//!
//! For drivers whose pins each reach exactly one peripheral instance, eg an
//! analog input with a fixed converter. Tables where a pin appears more than
//! once should go through [`crate::mx`] instead.

use crate::error::{Error, Result};
use crate::map::{entries, PinMap};
use crate::mx;
use crate::pin::{Peripheral, PinConfig, PinFunction, PinName};

/// Peripheral of the first entry for `pin`.
///
/// An `NC` pin maps to [`Peripheral::NC`].
pub fn lookup_single(pin: PinName, map: &[PinMap]) -> Result<Peripheral> {
    if pin.is_nc() {
        return Ok(Peripheral::NC);
    }
    entries(map)
        .find(|entry| entry.pin == pin)
        .map(|entry| entry.peripheral)
        .ok_or(Error::PinNotMapped(pin))
}

/// Function of the first entry routing `pin` to `peripheral`.
///
/// [`Peripheral::NC`] accepts any peripheral.
pub fn lookup_function(
    pin: PinName,
    map: &[PinMap],
    peripheral: Peripheral,
) -> Result<PinFunction> {
    if pin.is_nc() {
        return Err(Error::PinNotMapped(pin));
    }
    entries(map)
        .find(|entry| entry.matches(pin, peripheral))
        .map(|entry| entry.function)
        .ok_or(Error::PinoutUnavailable { pin, peripheral })
}

/// Merge the peripherals of two pins that must share one instance.
///
/// `NC` on either side places no constraint.
pub fn merge_single(a: Peripheral, b: Peripheral) -> Result<Peripheral> {
    if a == b || b.is_nc() {
        Ok(a)
    } else if a.is_nc() {
        Ok(b)
    } else {
        warn!("pinmap mis-match {} / {}", a, b);
        Err(Error::Mismatch)
    }
}

/// Route `pin` to the function of its first entry in `map`.
pub fn pinout_single<C: PinConfig>(pin: PinName, map: &[PinMap], cfg: C) -> Result<()> {
    mx::commit_pinout(pin, map, Peripheral::NC, cfg)
}
