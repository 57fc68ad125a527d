use modal_core::{DecodeError, Editor, EditorError, Mode, Step};

fn editor(lines: &[&str]) -> Editor {
    Editor::new(lines.iter().map(|s| s.to_string()).collect(), 24, 80)
}

const CTRL_Q: &[u8] = &[17];
const ESC: &[u8] = &[27];
const BACKSPACE: &[u8] = &[127];

#[test]
fn test_i_enters_insertion() {
    let mut ed = editor(&["abc"]);
    ed.handle_key(b"i").unwrap();
    assert_eq!(ed.mode(), Mode::Insertion);
}

#[test]
fn test_capital_i_enters_insertion_at_line_start() {
    let mut ed = editor(&["abc"]);
    ed.handle_key(b"l").unwrap();
    ed.handle_key(b"l").unwrap();
    ed.handle_key(b"I").unwrap();
    assert_eq!(ed.mode(), Mode::Insertion);
    assert_eq!(ed.cursor().column(), 0);
}

#[test]
fn test_escape_always_returns_to_navigation() {
    let mut ed = editor(&["abc"]);
    ed.handle_key(b"i").unwrap();
    ed.handle_key(b"x").unwrap();
    ed.handle_key(&[27, 91, 67]).unwrap(); // arrow while inserting
    ed.handle_key(ESC).unwrap();
    assert_eq!(ed.mode(), Mode::Navigation);

    // Escape in Navigation mode stays in Navigation.
    ed.handle_key(ESC).unwrap();
    assert_eq!(ed.mode(), Mode::Navigation);
}

#[test]
fn test_quit_chord_from_navigation() {
    let mut ed = editor(&["abc"]);
    assert_eq!(ed.handle_key(CTRL_Q).unwrap(), Step::Quit);
}

#[test]
fn test_quit_chord_from_insertion() {
    let mut ed = editor(&["abc"]);
    ed.handle_key(b"i").unwrap();
    assert_eq!(ed.handle_key(CTRL_Q).unwrap(), Step::Quit);
    // The chord must not have been inserted as a literal.
    assert_eq!(ed.buffer().line(0).unwrap(), "abc");
}

#[test]
fn test_navigation_mode_does_not_insert() {
    let mut ed = editor(&["abc"]);
    for key in [b"x", b"q", b"Z", b"0"] {
        ed.handle_key(key).unwrap();
    }
    assert_eq!(ed.buffer().line(0).unwrap(), "abc");
    assert_eq!(ed.mode(), Mode::Navigation);
}

#[test]
fn test_navigation_mode_backspace_is_ignored() {
    let mut ed = editor(&["abc"]);
    ed.handle_key(b"l").unwrap();
    ed.handle_key(BACKSPACE).unwrap();
    assert_eq!(ed.buffer().line(0).unwrap(), "abc");
    assert_eq!(ed.cursor().column(), 1);
}

#[test]
fn test_insertion_persists_typed_bytes() {
    let mut ed = editor(&["", "tail"]);
    ed.handle_key(b"i").unwrap();
    for key in [b"h", b"e", b"l", b"l", b"o"] {
        ed.handle_key(key).unwrap();
    }
    assert_eq!(ed.buffer().line(0).unwrap(), "hello");
    assert_eq!(ed.cursor().column(), 5);
    assert_eq!(ed.buffer().line(1).unwrap(), "tail");
}

#[test]
fn test_insertion_backspace_deletes_before_cursor() {
    let mut ed = editor(&["abcd"]);
    ed.handle_key(b"l").unwrap();
    ed.handle_key(b"l").unwrap();
    ed.handle_key(b"i").unwrap();
    ed.handle_key(BACKSPACE).unwrap();
    assert_eq!(ed.buffer().line(0).unwrap(), "acd");
    assert_eq!(ed.cursor().column(), 1);
}

#[test]
fn test_insertion_backspace_at_column_zero_is_a_no_op() {
    let mut ed = editor(&["abc", "de"]);
    ed.handle_key(b"j").unwrap();
    ed.handle_key(b"i").unwrap();
    ed.handle_key(BACKSPACE).unwrap();
    // No cross-line join: both lines and the cursor stay put.
    assert_eq!(ed.buffer().line(0).unwrap(), "abc");
    assert_eq!(ed.buffer().line(1).unwrap(), "de");
    assert_eq!(ed.cursor().row(), 1);
    assert_eq!(ed.cursor().column(), 0);
}

#[test]
fn test_arrow_keys_stay_active_while_inserting() {
    let mut ed = editor(&["abc"]);
    ed.handle_key(b"i").unwrap();
    ed.handle_key(&[27, 91, 67]).unwrap(); // right
    ed.handle_key(&[27, 91, 67]).unwrap();
    ed.handle_key(b"X").unwrap();
    assert_eq!(ed.buffer().line(0).unwrap(), "abXc");
    assert_eq!(ed.mode(), Mode::Insertion);
}

#[test]
fn test_hjkl_are_literals_while_inserting() {
    let mut ed = editor(&[""]);
    ed.handle_key(b"i").unwrap();
    for key in [b"h", b"j", b"k", b"l"] {
        ed.handle_key(key).unwrap();
    }
    assert_eq!(ed.buffer().line(0).unwrap(), "hjkl");
    assert_eq!(ed.cursor().row(), 0);
}

#[test]
fn test_unrecognized_escape_code_is_fatal_in_both_modes() {
    for enter_insert in [false, true] {
        let mut ed = editor(&["abc"]);
        if enter_insert {
            ed.handle_key(b"i").unwrap();
        }
        let err = ed.handle_key(&[27, 91, 80]).unwrap_err();
        assert_eq!(err, EditorError::Decode(DecodeError::UnrecognizedEscape(80)));
    }
}
