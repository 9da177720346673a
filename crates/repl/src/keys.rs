//! Key conversion from crossterm to gap-line.

use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyModifiers};
use gap_line::Key;

/// Convert a crossterm `KeyEvent` to a gap-line `Key`. Anything without a
/// mapping becomes `Key::Unknown`, which the editor ignores.
pub fn convert_key(event: KeyEvent) -> Key {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);

    match event.code {
        CtKeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'a' => Key::CtrlA,
            'c' => Key::CtrlC,
            'd' => Key::CtrlD,
            'e' => Key::CtrlE,
            'k' => Key::CtrlK,
            'l' => Key::CtrlL,
            'o' => Key::CtrlO,
            'u' => Key::CtrlU,
            'w' => Key::CtrlW,
            _ => Key::Unknown,
        },
        // Some terminals report a modified Enter as a bare newline char.
        CtKeyCode::Char('\n') => Key::ShiftEnter,
        CtKeyCode::Char(c) if !alt => Key::Char(c),
        // Terminals report Shift+Enter differently: some with SHIFT, some
        // (e.g. macOS Terminal/iTerm) with ALT.
        CtKeyCode::Enter if shift => Key::ShiftEnter,
        CtKeyCode::Enter if alt => Key::AltEnter,
        CtKeyCode::Enter => Key::Enter,
        CtKeyCode::Backspace => Key::Backspace,
        CtKeyCode::Delete => Key::Delete,
        CtKeyCode::Tab => Key::Tab,
        CtKeyCode::Esc => Key::Escape,
        CtKeyCode::Up => Key::Up,
        CtKeyCode::Down => Key::Down,
        CtKeyCode::Left if ctrl => Key::CtrlLeft,
        CtKeyCode::Left => Key::Left,
        CtKeyCode::Right if ctrl => Key::CtrlRight,
        CtKeyCode::Right => Key::Right,
        CtKeyCode::Home => Key::Home,
        CtKeyCode::End => Key::End,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: CtKeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn plain_chars_pass_through() {
        assert_eq!(
            convert_key(key(CtKeyCode::Char('x'), KeyModifiers::NONE)),
            Key::Char('x')
        );
        // Shifted letters arrive as uppercase chars.
        assert_eq!(
            convert_key(key(CtKeyCode::Char('X'), KeyModifiers::SHIFT)),
            Key::Char('X')
        );
    }

    #[test]
    fn control_combos() {
        assert_eq!(
            convert_key(key(CtKeyCode::Char('a'), KeyModifiers::CONTROL)),
            Key::CtrlA
        );
        assert_eq!(
            convert_key(key(CtKeyCode::Char('w'), KeyModifiers::CONTROL)),
            Key::CtrlW
        );
        assert_eq!(
            convert_key(key(CtKeyCode::Left, KeyModifiers::CONTROL)),
            Key::CtrlLeft
        );
        // Unmapped control chord.
        assert_eq!(
            convert_key(key(CtKeyCode::Char('z'), KeyModifiers::CONTROL)),
            Key::Unknown
        );
    }

    #[test]
    fn modified_enter_variants() {
        assert_eq!(
            convert_key(key(CtKeyCode::Enter, KeyModifiers::NONE)),
            Key::Enter
        );
        assert_eq!(
            convert_key(key(CtKeyCode::Enter, KeyModifiers::SHIFT)),
            Key::ShiftEnter
        );
        assert_eq!(
            convert_key(key(CtKeyCode::Enter, KeyModifiers::ALT)),
            Key::AltEnter
        );
        assert_eq!(
            convert_key(key(CtKeyCode::Char('\n'), KeyModifiers::NONE)),
            Key::ShiftEnter
        );
    }

    #[test]
    fn unmapped_keys_become_unknown() {
        assert_eq!(
            convert_key(key(CtKeyCode::F(5), KeyModifiers::NONE)),
            Key::Unknown
        );
        assert_eq!(
            convert_key(key(CtKeyCode::PageUp, KeyModifiers::NONE)),
            Key::Unknown
        );
    }
}
