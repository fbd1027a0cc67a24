use sanipro_core::filter::Filter;
use sanipro_core::token::Token;
use sanipro_filters::sort_all::{SortAllFilter, SortAllMethod};

fn tokens() -> Vec<Token> {
    vec![
        Token::new("smile", 1.3),
        Token::new("cat ears", 0.9),
        Token::new("blue eyes", 1.0),
    ]
}

fn names(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::name).collect()
}

#[test]
fn lexicographical() {
    let out = SortAllFilter::new(SortAllMethod::Lexicographical, false).apply(tokens());
    assert_eq!(names(&out), vec!["blue eyes", "cat ears", "smile"]);
}

#[test]
fn lexicographical_reversed() {
    let out = SortAllFilter::new(SortAllMethod::Lexicographical, true).apply(tokens());
    assert_eq!(names(&out), vec!["smile", "cat ears", "blue eyes"]);
}

#[test]
fn by_length_is_stable() {
    let out = SortAllFilter::new(SortAllMethod::Length, false).apply(tokens());
    assert_eq!(names(&out), vec!["smile", "cat ears", "blue eyes"]);
}

#[test]
fn by_strength() {
    let out = SortAllFilter::new(SortAllMethod::Strength, false).apply(tokens());
    assert_eq!(names(&out), vec!["cat ears", "blue eyes", "smile"]);
}

#[test]
fn method_names_match_the_command_line() {
    assert_eq!(SortAllMethod::Lexicographical.to_string(), "lexicographical");
    assert_eq!(SortAllMethod::Length.to_string(), "length");
    assert_eq!(SortAllMethod::Strength.to_string(), "strength");
}
