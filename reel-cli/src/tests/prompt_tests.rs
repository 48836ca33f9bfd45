use super::*;
use std::io::Cursor;

fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
    Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(p: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let raw = String::from_utf8(p.into_output()).unwrap();
    strip_ansi_escapes::strip_str(raw)
}

#[test]
fn test_line_trims() {
    let mut p = prompt("  Heat  \n");
    assert_eq!(p.line("Title: ").unwrap(), "Heat");
    assert_eq!(output(p), "Title: ");
}

#[test]
fn test_non_empty_repeats() {
    let mut p = prompt("\n   \nAlien\n");
    assert_eq!(p.non_empty("Title: ").unwrap(), "Alien");
    let out = output(p);
    assert_eq!(out.matches("Title: ").count(), 3);
    assert_eq!(out.matches("must not be empty").count(), 2);
}

#[test]
fn test_parsed_repeats_until_number() {
    let mut p = prompt("nineteen\n1999\n");
    let year: i32 = p.parsed("Year: ").unwrap();
    assert_eq!(year, 1999);
    assert!(output(p).contains("Invalid number"));
}

#[test]
fn test_rating_rejects_nan() {
    let mut p = prompt("NaN\ngood\n7.5\n");
    assert_eq!(p.rating("Rating: ").unwrap(), 7.5);
    assert_eq!(output(p).matches("Please try again").count(), 2);
}

#[test]
fn test_eof() {
    let mut p = prompt("");
    let err = p.line("Title: ").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

    let mut p = prompt("\n");
    let err = p.non_empty("Title: ").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}
