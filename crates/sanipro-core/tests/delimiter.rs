use sanipro_core::delimiter::Delimiter;
use sanipro_core::token::Token;

#[test]
fn default_delimiters() {
    let delim = Delimiter::default();
    assert_eq!(delim.input(), ",");
    assert_eq!(delim.output(), ", ");
}

#[test]
fn empty_input_delimiter_rejected() {
    let err = Delimiter::new("", ", ").unwrap_err();
    assert!(err.to_string().contains("must not be empty"), "got: {err}");
}

#[test]
fn split_trims_and_drops_blanks() {
    let delim = Delimiter::default();
    assert_eq!(delim.split(" a , ,b,, c "), vec!["a", "b", "c"]);
}

#[test]
fn join_uses_output_delimiter() {
    let delim = Delimiter::new(",", " | ").unwrap();
    let tokens = vec![Token::new("a", 1.0), Token::new("b", 1.5)];
    assert_eq!(delim.join(&tokens), "a | (b:1.5)");
}
