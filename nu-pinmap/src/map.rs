//! Static pin maps
//!
//! A pin map is an ordered slice of [`PinMap`] entries. The same pin may appear
//! in several entries with different peripherals, and order matters: lookups
//! that stop at the first match expect preferred entries first.
//!
//! Vendor tables end with a sentinel row whose pin is `NC`. Such a row is
//! accepted and stops every scan, so a table reads the same with or without it.

use crate::pin::{Peripheral, PinFunction, PinName};

/// One legal pin/peripheral pairing and the pin function selecting it.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinMap {
    /// The pin.
    pub pin: PinName,
    /// Peripheral instance reachable from `pin`.
    pub peripheral: Peripheral,
    /// Function to select on `pin` to reach `peripheral`.
    pub function: PinFunction,
}

impl PinMap {
    /// Create a new entry.
    pub const fn new(pin: PinName, peripheral: Peripheral, function: PinFunction) -> Self {
        Self {
            pin,
            peripheral,
            function,
        }
    }

    /// Sentinel row terminating a vendor-style table.
    pub const END: PinMap = PinMap::new(PinName::NC, Peripheral::NC, PinFunction::new(0));

    /// Whether this entry routes `pin` to `peripheral`, with [`Peripheral::NC`]
    /// accepting any instance.
    pub fn matches(&self, pin: PinName, peripheral: Peripheral) -> bool {
        self.pin == pin && (peripheral.is_nc() || self.peripheral == peripheral)
    }
}

/// Entries of `map` up to its end or its `NC` sentinel row.
pub(crate) fn entries(map: &[PinMap]) -> impl Iterator<Item = &PinMap> + '_ {
    map.iter().take_while(|entry| !entry.pin.is_nc())
}

/// Declare one or more static pin maps.
///
/// Each row is `(pin, peripheral, function)`, where `function` is the raw
/// multi-function pin selector.
///
/// ```
/// use nu_pinmap::{pinmap, Peripheral, pin::{PB_0, PB_1}};
///
/// const ADC_0_0: Peripheral = Peripheral::new(0x100);
/// const ADC_0_1: Peripheral = Peripheral::new(0x101);
///
/// pinmap! {
///     pub static PINMAP_ADC = [
///         (PB_0, ADC_0_0, 0x1),
///         (PB_1, ADC_0_1, 0x1),
///     ];
/// }
///
/// assert_eq!(PINMAP_ADC.len(), 2);
/// ```
#[macro_export]
macro_rules! pinmap {
    ($($vis:vis static $name:ident = [$(($pin:expr, $per:expr, $func:expr)),* $(,)?];)*) => {
        $(
            $vis static $name: &[$crate::PinMap] = &[
                $($crate::PinMap::new($pin, $per, $crate::PinFunction::new($func)),)*
            ];
        )*
    };
}
