//! Scripted end-to-end sessions through the assistant loop.

mod mocks;

use contact_book::cli::Assistant;
use contact_book::repositories::BookRepository;
use mocks::MockBookRepository;

/// Run `script` against the book held by `repo`, saving afterwards the way
/// the binary does. Returns everything written to the terminal.
fn run_session(repo: &MockBookRepository, script: &str) -> String {
    let mut book = repo.load().unwrap();
    let mut out = Vec::new();
    Assistant::new(&mut book)
        .run(script.as_bytes(), &mut out)
        .unwrap();
    repo.save(&book).unwrap();
    String::from_utf8(out).unwrap()
}

/// Replies only, without greeting, prompts or farewell.
fn replies(output: &str) -> Vec<String> {
    output
        .split("Enter a command: ")
        .skip(1)
        .map(|chunk| {
            chunk
                .trim_end_matches('\n')
                .trim_end_matches("Good bye!")
                .trim_matches('\n')
                .to_string()
        })
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

#[test]
fn test_full_session() {
    let repo = MockBookRepository::new();
    let output = run_session(
        &repo,
        "hello\n\
         add John 1234567890\n\
         add John 5555555555\n\
         add John 5555555555\n\
         change John 1234567890 1112223333\n\
         phone John\n\
         add-birthday John 12.03.2020\n\
         show-birthday John\n\
         all\n\
         \n\
         dance\n\
         exit\n\
         hello\n",
    );

    assert!(output.starts_with("Welcome to the assistant bot!\n"));
    assert!(output.ends_with("Good bye!\n"));
    assert_eq!(
        replies(&output),
        vec![
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Phone 5555555555 already exists",
            "Contact updated.",
            "1112223333; 5555555555",
            "Birthday added.",
            "John's birthday: 12.03.2020",
            "Contact name: John, phones: 1112223333; 5555555555, birthday: 12.03.2020",
            "Invalid command.",
        ]
    );

    let saved = repo.stored().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(repo.get_call_count("save"), 1);
}

#[test]
fn test_errors_are_one_line_messages() {
    let repo = MockBookRepository::new();
    let output = run_session(
        &repo,
        "add\n\
         add Ann 12345\n\
         phone Ann\n\
         all\n\
         add Ann 0501234567\n\
         change Ann 0000000000 1111111111\n\
         add-birthday Ann 30.02.1999\n\
         show-birthday Ghost\n\
         close\n",
    );

    assert_eq!(
        replies(&output),
        vec![
            "Not enough arguments provided.",
            "Phone number must contain exactly 10 digits",
            "No phones available.",
            "Contact name: Ann, phones: ",
            "Contact updated.",
            "Phone 0000000000 not found",
            "Invalid date format. Use DD.MM.YYYY",
            "Contact not found.",
        ]
    );
}

#[test]
fn test_book_survives_between_sessions() {
    let repo = MockBookRepository::new();
    run_session(&repo, "add John 1234567890\nadd-birthday John 01.01.1990\nexit\n");

    let output = run_session(&repo, "all\n");
    assert_eq!(
        replies(&output),
        vec!["Contact name: John, phones: 1234567890, birthday: 01.01.1990"]
    );
    assert_eq!(repo.get_call_count("load"), 2);
}

#[test]
fn test_all_on_empty_book() {
    let repo = MockBookRepository::new();
    let output = run_session(&repo, "all\nexit\n");
    assert_eq!(replies(&output), vec!["Address book is empty"]);
}
