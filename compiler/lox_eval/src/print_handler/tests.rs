use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_appends_newline_per_line() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.println("world");
    assert_eq!(handler.output(), "hello\nworld\n");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.clear();
    assert!(handler.output().is_empty());
}

#[test]
fn shared_buffer_is_visible_through_every_clone() {
    let handler = buffer_handler();
    let reader = Arc::clone(&handler);
    handler.println("1");
    assert_eq!(reader.output(), "1\n");
    reader.clear();
    assert_eq!(handler.output(), "");
}

#[test]
fn silent_and_stdout_capture_nothing() {
    let silent = silent_handler();
    silent.println("dropped");
    assert_eq!(silent.output(), "");
    silent.clear();

    let stdout = PrintHandlerImpl::Stdout(StdoutPrintHandler);
    assert_eq!(stdout.output(), "");
}
