use super::*;

#[test]
fn reads_past_end_as_zero() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), 0);
    cursor.advance_n(5);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn newline_moves_to_next_line() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.advance_n(2);
    assert_eq!(cursor.pos_here(1), Pos::new(1, 2, 2, 1));
    cursor.advance();
    assert_eq!(cursor.pos_here(1), Pos::new(2, 0, 3, 1));
    cursor.advance();
    assert_eq!(cursor.pos_here(0), Pos::new(2, 1, 4, 0));
}

#[test]
fn eat_while_and_slice() {
    let mut cursor = Cursor::new("abc123 rest");
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(0), "abc");
    let start = cursor.offset();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.slice_from(start), "123");
}

#[test]
fn advance_char_skips_multibyte() {
    let mut cursor = Cursor::new("é!");
    assert_eq!(cursor.current_char(), Some('é'));
    cursor.advance_char();
    assert_eq!(cursor.current(), b'!');
    assert_eq!(cursor.offset(), 2);
}
