//! Macros for writing transition tables.

/// Build a `Vec<TransitionRecord>` from rows written as
/// `state, condition => action(param) => next_state;`.
///
/// Rows keep the order they are written in.
///
/// # Example
///
/// ```
/// use statetable::core::{ELSE, HALT, NONE};
/// use statetable::transitions;
///
/// const SEEK: i32 = 0;
/// const TURN: i32 = 1;
/// const WALL_AHEAD: i32 = 10;
/// const ROTATE: i32 = 20;
///
/// let table = transitions![
///     SEEK, WALL_AHEAD => ROTATE(90) => TURN;
///     SEEK, ELSE => NONE(0) => SEEK;
///     TURN, ELSE => NONE(0) => HALT;
/// ];
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[0].param, 90);
/// assert_eq!(table[2].next_state, HALT);
/// ```
#[macro_export]
macro_rules! transitions {
    () => {
        ::std::vec::Vec::<$crate::core::TransitionRecord>::new()
    };
    (
        $(
            $state:expr, $condition:expr => $action:ident ( $param:expr ) => $next:expr
        );+ $(;)?
    ) => {
        ::std::vec![
            $(
                $crate::core::TransitionRecord::new($state, $condition, $action, $param, $next)
            ),+
        ]
    };
}
