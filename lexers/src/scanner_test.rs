use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("just a test buffer@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('j'));
    assert_eq!(s.curr(), Some('j'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.curr(), None);
    assert_eq!(s.view().len(), 19);
}

#[test]
fn test_extract() {
    let mut s = Scanner::new("just a test".chars());
    for _ in 0..4 { assert!(s.next().is_some()); }
    assert_eq!(s.extract(), vec!['j', 'u', 's', 't']);
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some(' '));
    for _ in 0..6 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), " a test");
    assert_eq!(s.next(), None);
    assert_eq!(s.extract_string(), "");
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("heey  you!".chars());
    assert_eq!(s.accept(&'e'), None);
    assert_eq!(s.buffer_pos(), -1);
    assert_eq!(s.accept_any(&['h', 'e']), Some('h'));
    assert_eq!(s.curr(), Some('h'));
    assert_eq!(s.accept_any(&['h', 'e']), Some('e'));
    assert_eq!(s.accept_any(&['h', 'y', 'e']), Some('e'));
    assert_eq!(s.accept(&'e'), None);
    assert_eq!(s.accept_any(&['h', 'e', 'y']), Some('y'));
    assert!(s.skip_all(&[' ']));
    assert!(!s.skip_all(&[' ']));
    assert_eq!(s.curr(), Some(' '));
    assert_eq!(s.next(), Some('y'));
}

#[test]
fn test_backtrack() {
    let mut s = Scanner::new("abc".chars());
    s.next();
    s.next();
    let backtrack = s.buffer_pos();
    assert_eq!(s.next(), Some('c'));
    assert!(s.set_buffer_pos(backtrack));
    assert_eq!(s.curr(), Some('b'));
    assert!(!s.set_buffer_pos(10));
    assert_eq!(s.next(), Some('c'));
}
