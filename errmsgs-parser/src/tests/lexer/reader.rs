use super::*;

#[test]
fn test_slice_backward() {
    let source = "hello world";
    let mut reader = SourceReader::new(source);
    reader.next_char();
    reader.next_char();
    reader.next_char();
    assert_eq!(reader.slice_backward(3), "hel");
}

#[test]
fn test_eat_while() {
    let source = "abc123 rest";
    let mut reader = SourceReader::new(source);
    reader.eat_while(|c| c.is_ascii_alphanumeric());
    assert_eq!(reader.index, 6);
    assert_eq!(reader.slice_from(0), "abc123");
    assert_eq!(reader.peek(), Some(' '));
}

#[test]
fn test_multibyte_index() {
    let source = "è1";
    let mut reader = SourceReader::new(source);
    assert_eq!(reader.next_char(), Some('è'));
    assert_eq!(reader.index, 2);
    assert_eq!(reader.next_char(), Some('1'));
    assert_eq!(reader.index, source.len());
    assert_eq!(reader.next_char(), None);
}
