use sanipro_core::token::Token;

#[test]
fn neutral_token_renders_bare_name() {
    let token = Token::new("white hair", 1.0);
    assert_eq!(token.to_string(), "white hair");
}

#[test]
fn weighted_token_renders_with_parentheses() {
    let token = Token::new("white hair", 1.2);
    assert_eq!(token.to_string(), "(white hair:1.2)");
}

#[test]
fn name_whitespace_is_collapsed() {
    let token = Token::new("  white \t  hair ", 1.0);
    assert_eq!(token.name(), "white hair");
}

#[test]
fn with_name_keeps_strength() {
    let token = Token::new("white hair", 0.8).with_name("%%%");
    assert_eq!(token.name(), "%%%");
    assert_eq!(token.strength(), 0.8);
}

#[test]
fn length_counts_chars_not_bytes() {
    let token = Token::new("猫耳", 1.0);
    assert_eq!(token.length(), 2);
}
