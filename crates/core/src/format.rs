//! Text rendering for book records and shared reading lists

use crate::types::{Author, BookCollection};

/// Renders an author list as a natural-language byline
///
/// Authors keep their original order: `"A"`, `"A and B"`, `"A, B and C"`.
/// An empty list renders as an empty string.
pub fn render_byline(authors: &[Author]) -> String {
    match authors {
        [] => String::new(),
        [only] => only.name.clone(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} and {}", head, last.name)
        }
    }
}

/// Builds the plain-text reading list handed to the share collaborators
///
/// Each book becomes one line, `"{n}) {title}, by {byline}. \n"`, numbered
/// from 1 in insertion order. A single book is written without its number
/// and with leading whitespace trimmed.
/// Returns `None` for an empty collection since there is nothing to share.
pub fn render_share_text(books: &BookCollection) -> Option<String> {
    if books.is_empty() {
        return None;
    }

    if books.len() == 1 {
        return books
            .iter()
            .next()
            .map(|book| {
                format!("{}, by {}. \n", book.title(), book.byline())
                    .trim_start()
                    .to_string()
            });
    }

    let text = books
        .iter()
        .enumerate()
        .map(|(i, book)| format!("{}) {}, by {}. \n", i + 1, book.title(), book.byline()))
        .collect();

    Some(text)
}

/// Percent-encodes text for use inside a URI component
///
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as-is and encodes every other
/// UTF-8 byte, so spaces become `%20` and newlines `%0A`. This is the set
/// browsers leave alone in `encodeURIComponent`.
pub fn encode_uri_component(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookRecord, Isbn};

    fn authors(names: &[&str]) -> Vec<Author> {
        names.iter().map(|n| Author::new(*n)).collect()
    }

    #[test]
    fn test_byline_empty() {
        assert_eq!(render_byline(&[]), "");
    }

    #[test]
    fn test_byline_single() {
        assert_eq!(render_byline(&authors(&["A"])), "A");
    }

    #[test]
    fn test_byline_pair() {
        assert_eq!(render_byline(&authors(&["A", "B"])), "A and B");
    }

    #[test]
    fn test_byline_three() {
        assert_eq!(render_byline(&authors(&["A", "B", "C"])), "A, B and C");
    }

    #[test]
    fn test_byline_keeps_original_order() {
        assert_eq!(
            render_byline(&authors(&["Zadie", "Amy", "Maya", "Bea"])),
            "Zadie, Amy, Maya and Bea"
        );
    }

    #[test]
    fn test_share_text_empty_collection() {
        assert_eq!(render_share_text(&BookCollection::new()), None);
    }

    #[test]
    fn test_share_text_single_book_has_no_number() {
        let mut books = BookCollection::new();
        books.insert_if_absent(BookRecord::new(
            Isbn::parse("1").unwrap(),
            "T",
            authors(&["A"]),
        ));

        assert_eq!(render_share_text(&books).as_deref(), Some("T, by A. \n"));
    }

    #[test]
    fn test_share_text_single_book_is_left_trimmed() {
        let mut books = BookCollection::new();
        books.insert_if_absent(BookRecord::new(
            Isbn::parse("1").unwrap(),
            "  T",
            authors(&["A"]),
        ));

        assert_eq!(render_share_text(&books).as_deref(), Some("T, by A. \n"));
    }

    #[test]
    fn test_share_text_numbers_in_insertion_order() {
        let mut books = BookCollection::new();
        books.insert_if_absent(BookRecord::new(
            Isbn::parse("2").unwrap(),
            "Second Title",
            authors(&["X", "Y"]),
        ));
        books.insert_if_absent(BookRecord::new(
            Isbn::parse("1").unwrap(),
            "First Title",
            authors(&["Z"]),
        ));

        let text = render_share_text(&books).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1) Second Title, by X and Y. ");
        assert_eq!(lines[1], "2) First Title, by Z. ");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-123_~."), "abc-123_~.");
        assert_eq!(encode_uri_component("T, by A. \n"), "T%2C%20by%20A.%20%0A");
        assert_eq!(encode_uri_component("1) x"), "1)%20x");
    }

    #[test]
    fn test_encode_uri_component_keeps_mark_characters() {
        assert_eq!(
            encode_uri_component("1) it's (x)!*"),
            "1)%20it's%20(x)!*"
        );
        assert_eq!(encode_uri_component("a?b&c=d#e"), "a%3Fb%26c%3Dd%23e");
    }

    #[test]
    fn test_encode_uri_component_multibyte() {
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }
}
