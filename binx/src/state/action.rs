// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::IntoStaticStr;

/// User intent, produced by [`crate::translate`] from one raw terminal event, and
/// consumed exactly once by [`crate::AppReducer`].
///
/// The variant name (eg: `"ScrollDown"`) is what shows up as the "last action" in the
/// status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Action {
    Resize { cols: u16, rows: u16 },
    Escape,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Commit,
    KeyS(char),
    KeyF(char),
    OtherKey(char),
    Backspace,
    Noop,
}

impl Action {
    #[must_use]
    pub fn name(&self) -> &'static str { self.into() }

    /// The character that this action types into the prompt, if any.
    #[must_use]
    pub fn typed_char(&self) -> Option<char> {
        match self {
            Action::KeyS(ch) | Action::KeyF(ch) | Action::OtherKey(ch) => Some(*ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(Action::Resize { cols: 80, rows: 24 }, "Resize")]
    #[test_case(Action::ScrollDown, "ScrollDown")]
    #[test_case(Action::KeyS('s'), "KeyS")]
    #[test_case(Action::OtherKey('x'), "OtherKey")]
    #[test_case(Action::Noop, "Noop")]
    fn test_name(action: Action, expected: &str) {
        assert_eq2!(action.name(), expected);
    }

    #[test]
    fn test_typed_char() {
        assert_eq2!(Action::KeyS('s').typed_char(), Some('s'));
        assert_eq2!(Action::KeyF('f').typed_char(), Some('f'));
        assert_eq2!(Action::OtherKey('7').typed_char(), Some('7'));
        assert_eq2!(Action::Commit.typed_char(), None);
        assert_eq2!(Action::Backspace.typed_char(), None);
    }
}
