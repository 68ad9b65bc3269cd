//! The two hooks through which the engine reaches the outside world.

use crate::core::{ActionId, ConditionId};
use std::fmt;

/// Predicate deciding whether a condition currently holds.
///
/// May be called several times per cycle, so it should not accumulate
/// side effects.
pub type ConditionCheck<'a> = Box<dyn FnMut(ConditionId) -> bool + 'a>;

/// Effect run when a transition fires. Receives the action id only.
pub type PerformAction<'a> = Box<dyn FnMut(ActionId) + 'a>;

/// Condition-check and action hooks registered on a machine.
///
/// The closures may borrow caller state for `'a`; the machine only calls
/// them and never inspects what they capture.
///
/// # Example
///
/// ```rust
/// use statetable::engine::Callbacks;
///
/// let threshold = 3;
/// let callbacks = Callbacks::new(move |condition| condition < threshold, |_action| {});
/// # drop(callbacks);
/// ```
pub struct Callbacks<'a> {
    condition_check: ConditionCheck<'a>,
    perform_action: PerformAction<'a>,
}

impl<'a> Callbacks<'a> {
    pub fn new<C, A>(condition_check: C, perform_action: A) -> Self
    where
        C: FnMut(ConditionId) -> bool + 'a,
        A: FnMut(ActionId) + 'a,
    {
        Self {
            condition_check: Box::new(condition_check),
            perform_action: Box::new(perform_action),
        }
    }

    pub(crate) fn check(&mut self, condition: ConditionId) -> bool {
        (self.condition_check)(condition)
    }

    pub(crate) fn perform(&mut self, action: ActionId) {
        (self.perform_action)(action)
    }
}

impl fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn check_forwards_condition() {
        let mut callbacks = Callbacks::new(|condition| condition == 4, |_| {});

        assert!(callbacks.check(4));
        assert!(!callbacks.check(5));
    }

    #[test]
    fn perform_can_borrow_caller_state() {
        let performed = RefCell::new(Vec::new());
        {
            let mut callbacks = Callbacks::new(|_| true, |action| performed.borrow_mut().push(action));
            callbacks.perform(9);
            callbacks.perform(2);
        }

        assert_eq!(*performed.borrow(), vec![9, 2]);
    }
}
