//! End-to-end shell sessions over in-memory input.

use std::sync::Arc;

use bookshelf::library::stores;
use bookshelf::shell::{BOOK_AUTHOR_PROMPT, BOOK_TITLE_PROMPT, BOOK_YEAR_PROMPT, COMMAND_PROMPT};
use bookshelf::{Book, CollectingSink, LibraryManager, Notice, SessionEnd, Shell};

struct Session {
    end: SessionEnd,
    manager: LibraryManager,
    sink: Arc<CollectingSink>,
    output: String,
}

fn run_session(store_type: &str, input: &str) -> Session {
    let sink = Arc::new(CollectingSink::new());
    let mut manager = LibraryManager::new(stores::build(store_type).unwrap(), sink.clone());
    let mut shell = Shell::new(input.as_bytes(), Vec::new(), true);
    let end = shell.run(&mut manager).unwrap();
    let output = String::from_utf8(shell.into_output()).unwrap();
    Session { end, manager, sink, output }
}

fn titles(manager: &LibraryManager) -> Vec<String> {
    manager.library().books().map(|b| b.title().to_string()).collect()
}

#[test]
fn duplicate_titles_are_all_removed() {
    let s = run_session(
        "catalog",
        "add\nDune\nHerbert\n1965\n\
         add\nDune\nSomeone\n1970\n\
         remove\nDune\n\
         show\n\
         exit\n",
    );
    assert_eq!(s.end, SessionEnd::Exit);
    assert!(s.manager.library().is_empty());
    assert_eq!(
        s.sink.lines(),
        [
            "Book 'Dune' added to the library.",
            "Book 'Dune' added to the library.",
            "Book 'Dune' removed from the library.",
            "Library is empty.",
        ]
    );
}

#[test]
fn search_hit_and_miss() {
    let s = run_session(
        "catalog",
        "add\n1984\nOrwell\n1949\n\
         search\nOrwell\n\
         search\nTolkien\n\
         exit\n",
    );
    assert_eq!(
        s.sink.lines(),
        [
            "Book '1984' added to the library.",
            "Books by Orwell:",
            "Title: 1984, Author: Orwell, Year: 1949",
            "No books found by Tolkien.",
        ]
    );
}

#[test]
fn basic_store_rejects_search_without_prompting() {
    // "Orwell" is read as the next command, not as an author.
    let s = run_session("basic", "add\n1984\nOrwell\n1949\nsearch\nOrwell\nexit\n");
    assert_eq!(
        s.sink.notices()[1..],
        [Notice::SearchUnsupported, Notice::InvalidCommand]
    );
    assert!(!s.output.contains("Enter author name to search"));
    assert_eq!(s.end, SessionEnd::Exit);
}

#[test]
fn listing_keeps_insertion_order() {
    let s = run_session(
        "basic",
        "add\nC\nx\n3\nadd\nA\ny\n1\nadd\nB\nz\n2\nshow\nexit\n",
    );
    assert_eq!(titles(&s.manager), ["C", "A", "B"]);
    assert_eq!(
        s.sink.lines()[3..],
        [
            "Library books:",
            "Title: C, Author: x, Year: 3",
            "Title: A, Author: y, Year: 1",
            "Title: B, Author: z, Year: 2",
        ]
    );
}

#[test]
fn commands_are_normalised_and_fields_trimmed() {
    let s = run_session("catalog", "  ADD  \n  Dune \n Herbert\n1965  \n Exit\n");
    let books: Vec<Book> = s.manager.library().books().cloned().collect();
    assert_eq!(books, [Book::new("Dune", "Herbert", "1965")]);
    assert_eq!(s.end, SessionEnd::Exit);
}

#[test]
fn empty_fields_are_accepted() {
    let s = run_session("catalog", "add\n\n\n\nshow\nexit\n");
    assert_eq!(s.manager.library().len(), 1);
    assert_eq!(s.sink.lines()[2], "Title: , Author: , Year: ");
}

#[test]
fn unknown_and_blank_commands_loop() {
    let s = run_session("catalog", "list\n\nhelp\nshow\nexit\n");
    assert_eq!(
        s.sink.notices(),
        [
            Notice::InvalidCommand,
            Notice::InvalidCommand,
            Notice::InvalidCommand,
            Notice::Empty,
        ]
    );
}

#[test]
fn remove_twice_reports_not_found() {
    let s = run_session(
        "catalog",
        "add\nDune\nHerbert\n1965\nadd\nEmma\nAusten\n1815\nremove\nDune\nremove\nDune\nexit\n",
    );
    assert_eq!(titles(&s.manager), ["Emma"]);
    assert_eq!(
        s.sink.notices()[2..],
        [
            Notice::Removed { title: "Dune".into() },
            Notice::NotFound { title: "Dune".into() },
        ]
    );
}

fn run_bytes(input: &[u8]) -> (SessionEnd, LibraryManager, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let mut manager = LibraryManager::new(stores::build("catalog").unwrap(), sink.clone());
    let mut shell = Shell::new(input, Vec::new(), false);
    let end = shell.run(&mut manager).unwrap();
    (end, manager, sink)
}

#[test]
fn undecodable_command_is_invalid_not_fatal() {
    let (end, _, sink) = run_bytes(b"caf\xe9\nshow\nexit\n");
    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(sink.notices(), [Notice::InvalidCommand, Notice::Empty]);
}

#[test]
fn undecodable_bytes_keep_the_session_going() {
    let (end, manager, _) = run_bytes(b"caf\xe9\nadd\nDune\xff\nHerbert\n1965\nexit\n");
    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(titles(&manager), ["Dune\u{FFFD}"]);
}

#[test]
fn end_of_input_stops_cleanly() {
    let s = run_session("catalog", "add\nDune\nHerbert\n1965\n");
    assert_eq!(s.end, SessionEnd::InputClosed);
    assert_eq!(s.manager.library().len(), 1);
}

#[test]
fn end_of_input_mid_add_discards_partial_book() {
    let s = run_session("catalog", "add\nDune\n");
    assert_eq!(s.end, SessionEnd::InputClosed);
    assert!(s.manager.library().is_empty());
    assert!(s.sink.notices().is_empty());
}

#[test]
fn prompts_are_written_in_order() {
    let s = run_session("catalog", "add\nDune\nHerbert\n1965\nexit\n");
    let expected = format!(
        "{COMMAND_PROMPT}{BOOK_TITLE_PROMPT}{BOOK_AUTHOR_PROMPT}{BOOK_YEAR_PROMPT}{COMMAND_PROMPT}"
    );
    assert_eq!(s.output, expected);
}

#[test]
fn exit_ignores_remaining_input() {
    let s = run_session("catalog", "exit\nadd\nDune\nHerbert\n1965\n");
    assert_eq!(s.end, SessionEnd::Exit);
    assert!(s.manager.library().is_empty());
}
