//! One-to-many pin map resolution
//!
//! Drivers whose pins may each reach several instances of a peripheral use
//! these in three steps:
//!
//! 1. [`resolve_peripheral`] once per pin, giving that pin's candidates.
//! 2. [`intersect`] to fold the candidate lists of all pins into the set of
//!    instances every pin can reach.
//! 3. [`commit_pinout`] once per pin, with the instance picked from the
//!    intersection.
//!
//! Output lists are always packed and `NC`-padded on success. On error their
//! content is unspecified.

use crate::error::{Error, Result};
use crate::map::{entries, PinMap};
use crate::perlist::PeripheralList;
use crate::pin::{Peripheral, PinConfig, PinName, PullType};

/// Collect every peripheral `pin` can be routed to in `map`.
///
/// Candidates are stored in table order until `list` is full. An `NC` pin
/// clears `list` and succeeds.
pub fn resolve_peripheral<const N: usize>(
    pin: PinName,
    map: &[PinMap],
    list: &mut PeripheralList<N>,
) -> Result<()> {
    list.clear(..);
    if pin.is_nc() {
        return Ok(());
    }

    for entry in entries(map).filter(|entry| entry.pin == pin) {
        if list.push(entry.peripheral).is_err() {
            break;
        }
    }
    list.fill_remaining();

    if list.is_all_nc() {
        warn!("pinmap not found for pin {}", pin);
        return Err(Error::PinNotMapped(pin));
    }
    trace!("pin {} candidates {}", pin, list.as_slice());
    Ok(())
}

/// Intersect candidate lists `a` and `b` into `out`.
///
/// `out` keeps the order of `a` and is truncated to its capacity. A list
/// without candidates places no constraint: the other list is copied as is,
/// and two such lists give an empty `out`.
///
/// Each entry of `a` is kept once if it appears anywhere in `b`. Repeated
/// entries in `a` are repeated in `out`.
pub fn intersect<const A: usize, const B: usize, const C: usize>(
    a: &PeripheralList<A>,
    b: &PeripheralList<B>,
    out: &mut PeripheralList<C>,
) -> Result<()> {
    match (a.is_all_nc(), b.is_all_nc()) {
        (true, true) => {
            out.clear(..);
            return Ok(());
        }
        (true, false) => {
            out.truncated_copy_from(b);
            return Ok(());
        }
        (false, true) => {
            out.truncated_copy_from(a);
            return Ok(());
        }
        (false, false) => {}
    }

    out.clear(..);
    for &candidate in a.iter() {
        if out.is_full() {
            break;
        }
        if b.iter().any(|&other| other == candidate) {
            // `out` has room, checked above
            let _ = out.push(candidate);
        }
    }
    out.fill_remaining();

    if out.is_all_nc() {
        warn!("pinmap mis-match {} / {}", a.as_slice(), b.as_slice());
        return Err(Error::Mismatch);
    }
    trace!("merged candidates {}", out.as_slice());
    Ok(())
}

/// Route `pin` to its function for `peripheral`.
///
/// The first entry of `map` for `pin` whose peripheral is `peripheral` is
/// applied through `cfg`, with pulls disabled. [`Peripheral::NC`] accepts
/// the first entry for `pin` whatever its peripheral. An `NC` pin is left
/// alone.
pub fn commit_pinout<C: PinConfig>(
    pin: PinName,
    map: &[PinMap],
    peripheral: Peripheral,
    mut cfg: C,
) -> Result<()> {
    if pin.is_nc() {
        return Ok(());
    }

    match entries(map).find(|entry| entry.matches(pin, peripheral)) {
        Some(entry) => {
            debug!(
                "pinout {} -> {} (function {})",
                pin, entry.peripheral, entry.function
            );
            cfg.set_function(pin, entry.function);
            cfg.set_pull(pin, PullType::None);
            Ok(())
        }
        None => {
            warn!("could not pinout {} to {}", pin, peripheral);
            Err(Error::PinoutUnavailable { pin, peripheral })
        }
    }
}

impl<const N: usize> PeripheralList<N> {
    /// Candidates of `pin` in `map`. See [`resolve_peripheral`].
    pub fn resolve(pin: PinName, map: &[PinMap]) -> Result<Self> {
        let mut list = Self::new();
        resolve_peripheral(pin, map, &mut list)?;
        Ok(list)
    }

    /// Intersection of `a` and `b`. See [`intersect`].
    pub fn intersection<const A: usize, const B: usize>(
        a: &PeripheralList<A>,
        b: &PeripheralList<B>,
    ) -> Result<Self> {
        let mut list = Self::new();
        intersect(a, b, &mut list)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::{PinFunction, PA_0, PA_1, PA_2, PB_0, PB_1};
    use crate::pinmap;

    const A1: Peripheral = Peripheral::new(0x11);
    const A2: Peripheral = Peripheral::new(0x12);
    const A3: Peripheral = Peripheral::new(0x13);
    const X: Peripheral = Peripheral::new(0x21);
    const Y: Peripheral = Peripheral::new(0x22);
    const NC: Peripheral = Peripheral::NC;

    pinmap! {
        static PINMAP_ONE_TO_MANY = [
            (PA_0, A1, 1),
            (PA_1, A2, 1),
            (PA_0, A2, 2),
            (PA_0, A3, 3),
        ];
        static PINMAP_PINOUT = [
            (PB_0, X, 0x10),
            (PB_0, Y, 0x20),
            (PB_1, Y, 0x30),
        ];
    }

    #[derive(Default)]
    struct Recorder {
        functions: Vec<(PinName, PinFunction)>,
        pulls: Vec<(PinName, PullType)>,
    }

    impl PinConfig for Recorder {
        fn set_function(&mut self, pin: PinName, function: PinFunction) {
            self.functions.push((pin, function));
        }

        fn set_pull(&mut self, pin: PinName, pull: PullType) {
            self.pulls.push((pin, pull));
        }
    }

    #[test]
    fn resolve_collects_in_table_order() {
        let mut list = PeripheralList::<4>::new();
        resolve_peripheral(PA_0, PINMAP_ONE_TO_MANY, &mut list).unwrap();
        assert_eq!(list.slots(), &[A1, A2, A3, NC]);
    }

    #[test]
    fn resolve_truncates_to_capacity() {
        let mut list = PeripheralList::<2>::new();
        resolve_peripheral(PA_0, PINMAP_ONE_TO_MANY, &mut list).unwrap();
        assert_eq!(list.slots(), &[A1, A2]);
    }

    #[test]
    fn resolve_nc_pin_clears_list() {
        let mut list = PeripheralList::from_slots([X, Y, X]);
        resolve_peripheral(PinName::NC, PINMAP_ONE_TO_MANY, &mut list).unwrap();
        assert_eq!(list.slots(), &[NC, NC, NC]);
    }

    #[test]
    fn resolve_unknown_pin() {
        let mut list = PeripheralList::<2>::new();
        assert_eq!(
            resolve_peripheral(PA_2, PINMAP_ONE_TO_MANY, &mut list),
            Err(Error::PinNotMapped(PA_2))
        );
    }

    #[test]
    fn resolve_into_zero_capacity_is_not_found() {
        let mut list = PeripheralList::<0>::new();
        assert_eq!(
            resolve_peripheral(PA_0, PINMAP_ONE_TO_MANY, &mut list),
            Err(Error::PinNotMapped(PA_0))
        );
    }

    #[test]
    fn resolve_overwrites_stale_content() {
        let mut list = PeripheralList::from_slots([X, Y, X]);
        resolve_peripheral(PA_1, PINMAP_ONE_TO_MANY, &mut list).unwrap();
        assert_eq!(list.slots(), &[A2, NC, NC]);
    }

    #[test]
    fn intersect_general_case() {
        let a = PeripheralList::from_slots([A1, A2, NC]);
        let b = PeripheralList::from_slots([A2, A3, NC]);
        let mut out = PeripheralList::<3>::new();
        intersect(&a, &b, &mut out).unwrap();
        assert_eq!(out.slots(), &[A2, NC, NC]);
    }

    #[test]
    fn intersect_keeps_order_of_a() {
        let a = PeripheralList::from_slots([A3, A1, A2]);
        let b = PeripheralList::from_slots([A1, A2, A3]);
        let out = PeripheralList::<3>::intersection(&a, &b).unwrap();
        assert_eq!(out.slots(), &[A3, A1, A2]);
    }

    #[test]
    fn intersect_mismatch() {
        let a = PeripheralList::from_slots([A1, NC]);
        let b = PeripheralList::from_slots([A2, NC]);
        let mut out = PeripheralList::<2>::new();
        assert_eq!(intersect(&a, &b, &mut out), Err(Error::Mismatch));
    }

    #[test]
    fn intersect_both_empty() {
        let a = PeripheralList::<2>::new();
        let b = PeripheralList::<3>::new();
        let mut out = PeripheralList::from_slots([X, Y]);
        intersect(&a, &b, &mut out).unwrap();
        assert_eq!(out.slots(), &[NC, NC]);
    }

    #[test]
    fn intersect_empty_side_is_identity() {
        let empty = PeripheralList::<2>::new();
        let b = PeripheralList::from_slots([A1, A2, A3]);

        let mut out = PeripheralList::<2>::new();
        intersect(&empty, &b, &mut out).unwrap();
        assert_eq!(out.slots(), &[A1, A2]);

        let mut out = PeripheralList::<4>::new();
        intersect(&b, &empty, &mut out).unwrap();
        assert_eq!(out.slots(), &[A1, A2, A3, NC]);
    }

    #[test]
    fn intersect_zero_capacity_side_is_identity() {
        let empty = PeripheralList::<0>::new();
        let b = PeripheralList::from_slots([X, NC]);
        let out = PeripheralList::<2>::intersection(&empty, &b).unwrap();
        assert_eq!(out.slots(), &[X, NC]);
    }

    #[test]
    fn intersect_duplicates() {
        // duplicates in `b` are matched once per entry of `a`
        let a = PeripheralList::from_slots([A1, A2, NC]);
        let b = PeripheralList::from_slots([A1, A1, A2]);
        let out = PeripheralList::<3>::intersection(&a, &b).unwrap();
        assert_eq!(out.slots(), &[A1, A2, NC]);

        // duplicates in `a` are kept
        let a = PeripheralList::from_slots([A1, A1, A2]);
        let b = PeripheralList::from_slots([A1, NC, NC]);
        let out = PeripheralList::<3>::intersection(&a, &b).unwrap();
        assert_eq!(out.slots(), &[A1, A1, NC]);
    }

    #[test]
    fn intersect_truncates_to_output_capacity() {
        let a = PeripheralList::from_slots([A1, A2, A3]);
        let b = PeripheralList::from_slots([A3, A2, A1]);
        let out = PeripheralList::<1>::intersection(&a, &b).unwrap();
        assert_eq!(out.slots(), &[A1]);
    }

    #[test]
    fn intersect_into_zero_capacity_is_mismatch() {
        let a = PeripheralList::from_slots([A1]);
        let b = PeripheralList::from_slots([A1]);
        assert_eq!(
            PeripheralList::<0>::intersection(&a, &b),
            Err(Error::Mismatch)
        );
    }

    #[test]
    fn pinout_first_match() {
        let mut cfg = Recorder::default();
        commit_pinout(PB_0, PINMAP_PINOUT, NC, &mut cfg).unwrap();
        assert_eq!(cfg.functions, [(PB_0, PinFunction::new(0x10))]);
        assert_eq!(cfg.pulls, [(PB_0, PullType::None)]);
    }

    #[test]
    fn pinout_constrained_match() {
        let mut cfg = Recorder::default();
        commit_pinout(PB_0, PINMAP_PINOUT, Y, &mut cfg).unwrap();
        assert_eq!(cfg.functions, [(PB_0, PinFunction::new(0x20))]);
    }

    #[test]
    fn pinout_not_found() {
        let mut cfg = Recorder::default();
        assert_eq!(
            commit_pinout(PA_0, PINMAP_PINOUT, NC, &mut cfg),
            Err(Error::PinoutUnavailable {
                pin: PA_0,
                peripheral: NC
            })
        );
        assert_eq!(
            commit_pinout(PB_1, PINMAP_PINOUT, X, &mut cfg),
            Err(Error::PinoutUnavailable {
                pin: PB_1,
                peripheral: X
            })
        );
        assert!(cfg.functions.is_empty());
        assert!(cfg.pulls.is_empty());
    }

    #[test]
    fn pinout_nc_pin_is_noop() {
        let mut cfg = Recorder::default();
        commit_pinout(PinName::NC, PINMAP_PINOUT, X, &mut cfg).unwrap();
        assert!(cfg.functions.is_empty());
    }
}
