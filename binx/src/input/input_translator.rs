// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::Action;

/// Convert one raw terminal event into exactly one [`Action`]. Events that carry no
/// intent (key releases, mouse, focus, paste, chords) become [`Action::Noop`].
#[must_use]
pub fn translate(event: Event) -> Action {
    match event {
        Event::Resize(cols, rows) => Action::Resize { cols, rows },
        Event::Key(key_event) => translate_key(key_event),
        _ => Action::Noop,
    }
}

fn translate_key(key_event: KeyEvent) -> Action {
    // Terminals that report key releases would otherwise count a keystroke twice.
    if key_event.kind == KeyEventKind::Release {
        return Action::Noop;
    }

    match key_event.code {
        KeyCode::Esc => Action::Escape,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Enter => Action::Commit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(ch) => translate_char(ch, key_event.modifiers),
        _ => Action::Noop,
    }
}

fn translate_char(ch: char, modifiers: KeyModifiers) -> Action {
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return Action::Noop;
    }
    match ch {
        's' => Action::KeyS(ch),
        'f' => Action::KeyF(ch),
        _ => Action::OtherKey(ch),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn press(code: KeyCode) -> Event { Event::Key(KeyEvent::new(code, KeyModifiers::NONE)) }

    #[test_case(KeyCode::Esc, Action::Escape)]
    #[test_case(KeyCode::Down, Action::ScrollDown)]
    #[test_case(KeyCode::Up, Action::ScrollUp)]
    #[test_case(KeyCode::PageDown, Action::PageDown)]
    #[test_case(KeyCode::PageUp, Action::PageUp)]
    #[test_case(KeyCode::Enter, Action::Commit)]
    #[test_case(KeyCode::Backspace, Action::Backspace)]
    #[test_case(KeyCode::Char('s'), Action::KeyS('s'))]
    #[test_case(KeyCode::Char('f'), Action::KeyF('f'))]
    #[test_case(KeyCode::Char('x'), Action::OtherKey('x'))]
    #[test_case(KeyCode::Char('0'), Action::OtherKey('0'))]
    #[test_case(KeyCode::Char('S'), Action::OtherKey('S') ; "uppercase s is just a char")]
    #[test_case(KeyCode::Left, Action::Noop)]
    #[test_case(KeyCode::F(1), Action::Noop)]
    #[test_case(KeyCode::Tab, Action::Noop)]
    fn test_translate_key_press(code: KeyCode, expected: Action) {
        assert_eq2!(translate(press(code)), expected);
    }

    #[test]
    fn test_translate_resize() {
        assert_eq2!(
            translate(Event::Resize(120, 40)),
            Action::Resize {
                cols: 120,
                rows: 40
            }
        );
    }

    #[test]
    fn test_release_is_noop() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq2!(translate(Event::Key(release)), Action::Noop);
    }

    #[test]
    fn test_repeat_is_translated() {
        let repeat = KeyEvent::new_with_kind_and_state(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );
        assert_eq2!(translate(Event::Key(repeat)), Action::ScrollDown);
    }

    #[test]
    fn test_chords_are_noop() {
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let alt_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::ALT);
        let shift_x = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq2!(translate(Event::Key(ctrl_s)), Action::Noop);
        assert_eq2!(translate(Event::Key(alt_f)), Action::Noop);
        assert_eq2!(translate(Event::Key(shift_x)), Action::OtherKey('X'));
    }

    #[test]
    fn test_non_key_events_are_noop() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq2!(translate(Event::Mouse(mouse)), Action::Noop);
        assert_eq2!(translate(Event::FocusGained), Action::Noop);
        assert_eq2!(translate(Event::Paste("abc".into())), Action::Noop);
    }
}
