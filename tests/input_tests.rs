use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_stacker::input::{handle_key_event, should_quit};
use tui_stacker::types::GameAction;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

#[test]
fn arrows_and_letters_map_to_the_same_actions() {
    let cases = [
        (KeyCode::Left, KeyCode::Char('h'), GameAction::MoveLeft),
        (KeyCode::Right, KeyCode::Char('l'), GameAction::MoveRight),
        (KeyCode::Down, KeyCode::Char('j'), GameAction::SoftDrop),
        (KeyCode::Up, KeyCode::Char('k'), GameAction::Rotate),
    ];
    for (arrow, letter, action) in cases {
        assert_eq!(handle_key_event(key(arrow)), Some(action));
        assert_eq!(handle_key_event(key(letter)), Some(action));
    }
}

#[test]
fn session_keys() {
    assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Some(GameAction::Start));
    assert_eq!(handle_key_event(key(KeyCode::Esc)), Some(GameAction::Pause));
    assert_eq!(handle_key_event(key(KeyCode::Char('p'))), Some(GameAction::Pause));
    assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Some(GameAction::Restart));
    assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
}

#[test]
fn quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(key(KeyCode::Char('c'))));
}
