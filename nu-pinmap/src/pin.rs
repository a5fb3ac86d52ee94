//! Pin, peripheral and pin function identifiers
//!
//! [`PinName`] and [`Peripheral`] are plain integer tokens, as laid out in the
//! vendor pin maps. Both reserve the value `-1` as `NC`: "no connection" for a
//! pin, "empty slot" or "any instance" for a peripheral.
//!
//! Pin names encode the GPIO port in bits `[7:4]` and the pin number in bits
//! `[3:0]`. Named constants `PA_0` to `PH_15` are provided.

use core::fmt;

/// Raw value reserved for "no connection".
const NC_RAW: i32 = -1;

const PIN_MASK: i32 = 0xF;
const PORT_POS: i32 = 4;
const PORT_MASK: i32 = 0xF << PORT_POS;

/// Identifier of one physical I/O pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinName(i32);

impl PinName {
    /// No connection.
    pub const NC: PinName = PinName(NC_RAW);

    /// Pin `pin` of GPIO port `port` (port A is 0).
    pub const fn new(port: u8, pin: u8) -> Self {
        PinName((((port as i32) << PORT_POS) & PORT_MASK) | ((pin as i32) & PIN_MASK))
    }

    /// Wrap a raw pin name as found in vendor tables.
    pub const fn from_raw(raw: i32) -> Self {
        PinName(raw)
    }

    /// The raw pin name.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whether this is [`PinName::NC`].
    pub const fn is_nc(self) -> bool {
        self.0 == NC_RAW
    }

    /// GPIO port number (port A is 0).
    pub const fn port(self) -> u8 {
        ((self.0 & PORT_MASK) >> PORT_POS) as u8
    }

    /// Pin number within the port.
    pub const fn pin(self) -> u8 {
        (self.0 & PIN_MASK) as u8
    }
}

impl fmt::Display for PinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nc() {
            f.write_str("NC")
        } else {
            write!(f, "P{}.{}", (b'A' + self.port()) as char, self.pin())
        }
    }
}

/// Opaque token identifying one peripheral instance, eg one SPI or ADC unit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Peripheral(i32);

impl Peripheral {
    /// Empty slot, or "any instance" where a constraint is expected.
    pub const NC: Peripheral = Peripheral(NC_RAW);

    /// Wrap a raw peripheral token.
    pub const fn new(raw: i32) -> Self {
        Peripheral(raw)
    }

    /// The raw token.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whether this is [`Peripheral::NC`].
    pub const fn is_nc(self) -> bool {
        self.0 == NC_RAW
    }
}

impl Default for Peripheral {
    fn default() -> Self {
        Peripheral::NC
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nc() {
            f.write_str("NC")
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}

/// Multi-function pin selector value written when a pin is committed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PinFunction(u32);

impl PinFunction {
    /// Wrap a raw selector value.
    pub const fn new(raw: u32) -> Self {
        PinFunction(raw)
    }

    /// The raw selector value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Value-level `enum` for pull resistor types.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullType {
    #[allow(missing_docs)]
    None,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
}

/// Register-level pin configuration, provided by the board or HAL.
///
/// This crate only decides *which* function goes to *which* pin.
pub trait PinConfig {
    /// Route `pin` to `function`.
    fn set_function(&mut self, pin: PinName, function: PinFunction);

    /// Set the pull resistor of `pin`.
    fn set_pull(&mut self, pin: PinName, pull: PullType);
}

impl<T: PinConfig + ?Sized> PinConfig for &mut T {
    fn set_function(&mut self, pin: PinName, function: PinFunction) {
        (**self).set_function(pin, function)
    }

    fn set_pull(&mut self, pin: PinName, pull: PullType) {
        (**self).set_pull(pin, pull)
    }
}

macro_rules! pin_names {
    (@port $port:ident, $num:expr, [$($pin:tt),*]) => {
        paste::paste! {
            $(
                #[doc = "Pin `" $pin "` of GPIO port `" $port "`."]
                pub const [<P $port _ $pin>]: PinName = PinName::new($num, $pin);
            )*
        }
    };
    ($($port:ident = $num:expr),*) => {
        $(pin_names!(@port $port, $num, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);)*
    };
}
pin_names!(A = 0, B = 1, C = 2, D = 3, E = 4, F = 5, G = 6, H = 7);

/// No connection.
pub const NC: PinName = PinName::NC;
