// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::AsRefStr;

/// What the event loop should do after an action has been reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
pub enum Continuation {
    #[default]
    Continue,
    Exit,
}

/// The only code path that is allowed to write to the state `S`.
///
/// The [`crate::Store`] calls [`Reducer::run`] with the state lock held, once per action,
/// in the exact order that actions were dispatched. Implementations must be
/// deterministic: the same action applied to the same state always yields the same
/// state and the same [`Continuation`].
pub trait Reducer<S, A>: Send + Sync {
    fn run(&self, action: A, state: &mut S) -> Continuation;
}

/// Plain functions and closures can be used as reducers.
impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(A, &mut S) -> Continuation + Send + Sync,
{
    fn run(&self, action: A, state: &mut S) -> Continuation { self(action, state) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_closure_is_a_reducer() {
        let reducer = |action: i32, state: &mut Vec<i32>| {
            state.push(action);
            if action < 0 {
                Continuation::Exit
            } else {
                Continuation::Continue
            }
        };

        let mut state = vec![];
        assert_eq!(reducer.run(1, &mut state), Continuation::Continue);
        assert_eq!(reducer.run(-1, &mut state), Continuation::Exit);
        assert_eq!(state, vec![1, -1]);
    }

    #[test]
    fn test_continuation_name() {
        assert_eq!(Continuation::default().as_ref(), "Continue");
        assert_eq!(Continuation::Exit.as_ref(), "Exit");
    }
}
