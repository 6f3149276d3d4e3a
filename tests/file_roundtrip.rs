use minvi::editor::{DEFAULT_TAB_WIDTH, EdgePolicy, EditorBuffer};

fn buffer_from(text: &str) -> EditorBuffer {
    EditorBuffer::from_text(text, DEFAULT_TAB_WIDTH, EdgePolicy::Stop).unwrap()
}

#[test]
fn test_save_reload_is_identity_for_terminated_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let original = "alpha\nbeta\n\ngamma\n";

    let mut buffer = buffer_from(original);
    buffer.save(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, original);

    let reloaded = buffer_from(&written);
    assert_eq!(
        reloaded.lines().collect::<Vec<_>>(),
        buffer.lines().collect::<Vec<_>>()
    );
}

#[test]
fn test_save_terminates_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");

    // Unterminated final line is kept as a line and gains a newline on save.
    let mut buffer = buffer_from("one\ntwo");
    assert_eq!(buffer.line_count(), 2);
    buffer.save(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn test_empty_buffer_saves_single_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");

    let mut buffer = EditorBuffer::default();
    buffer.save(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "\n");
}

#[test]
fn test_trailing_newline_does_not_create_phantom_line() {
    let buffer = buffer_from("only\n");
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line(0), Some("only"));
}

#[test]
fn test_multibyte_content_survives_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let original = "caf\u{e9}\n\u{65e5}\u{672c}\u{8a9e}\n\u{1f980} crab\n";

    let mut buffer = buffer_from(original);
    buffer.save(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_large_file_loads_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.txt");
    let mut original = String::new();
    for i in 0..300_000 {
        original.push_str(&format!("line {i}\n"));
    }

    let mut buffer = buffer_from(&original);
    assert_eq!(buffer.line_count(), 300_000);
    assert_eq!(buffer.line(0), Some("line 0"));
    assert_eq!(buffer.line(299_999), Some("line 299999"));

    buffer.save(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_save_clears_dirty_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");

    let mut buffer = buffer_from("text\n");
    buffer.insert_char('x').unwrap();
    assert!(buffer.is_dirty());

    buffer.save(&path).unwrap();
    assert!(!buffer.is_dirty());
}
