use super::*;

#[test]
fn basic_tokens() {
    let tokens: Vec<Token> = tokenize("int x = 5;")
        .into_iter()
        .map(|(token, _)| token)
        .collect();

    assert_eq!(
        tokens,
        vec![
            Token::DataType("int".to_string()),
            Token::Identifier("x".to_string()),
            Token::Equal,
            Token::Number("5".to_string()),
            Token::Semicolon,
        ]
    );
}

#[test]
fn data_type_beats_identifier_on_ties() {
    let tokens = tokenize("int intx string? s int[]");
    assert_eq!(tokens[0].0, Token::DataType("int".to_string()));
    // longer identifier match still wins over the shorter data type
    assert_eq!(tokens[1].0, Token::Identifier("intx".to_string()));
    assert_eq!(tokens[2].0, Token::DataType("string?".to_string()));
    assert_eq!(tokens[3].0, Token::Identifier("s".to_string()));
    assert_eq!(tokens[4].0, Token::DataType("int[]".to_string()));
}

#[test]
fn keyword_beats_identifier_but_not_longer_names() {
    let tokens = tokenize("class classic");
    assert_eq!(tokens[0].0, Token::Class);
    assert_eq!(tokens[1].0, Token::Identifier("classic".to_string()));
}

#[test]
fn compound_operators_use_maximal_munch() {
    let tokens: Vec<Token> = tokenize("+= ++ + == = != <=")
        .into_iter()
        .map(|(token, _)| token)
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::PlusEqual,
            Token::DoublePluses,
            Token::Plus,
            Token::DoubleEquals,
            Token::Equal,
            Token::NotEqual,
            Token::LessThanOrEqual,
        ]
    );
}

#[test]
fn single_char_logic_operators_report_their_own_text() {
    let tokens = tokenize("a & b | c");
    assert_eq!(tokens[1].0, Token::And("&".to_string()));
    assert_eq!(tokens[1].0.text(), "&");
    assert_eq!(tokens[1].1, 2..3);
    assert_eq!(tokens[3].0, Token::Or("|".to_string()));
    assert_eq!(tokens[3].0.text(), "|");

    let tokens = tokenize("a && b || c");
    assert_eq!(tokens[1].0.text(), "&&");
    assert_eq!(tokens[3].0.text(), "||");
}

#[test]
fn line_comment_captures_body() {
    let tokens = tokenize("// hello\nx");
    assert_eq!(tokens[0].0, Token::Comment(" hello".to_string()));
    assert_eq!(tokens[1].0, Token::Identifier("x".to_string()));
}

#[test]
fn multiline_comment_captures_body() {
    let tokens = tokenize("/* a\nb */ x");
    assert_eq!(tokens[0].0, Token::MultilineComment(" a\nb ".to_string()));
    assert_eq!(tokens[1].0, Token::Identifier("x".to_string()));
}

#[test]
fn string_token_keeps_quotes() {
    let tokens = tokenize(r#""I am 'Moaz'""#);
    assert_eq!(tokens[0].0, Token::Str("\"I am 'Moaz'\"".to_string()));
}

#[test]
fn numbers() {
    let tokens = tokenize("3.14 .25 42");
    assert_eq!(tokens[0].0, Token::Number("3.14".to_string()));
    assert_eq!(tokens[1].0, Token::Number(".25".to_string()));
    assert_eq!(tokens[2].0, Token::Number("42".to_string()));
}

#[test]
fn uncovered_text_is_discarded() {
    let tokens: Vec<Token> = tokenize("x @ y")
        .into_iter()
        .map(|(token, _)| token)
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("x".to_string()),
            Token::Identifier("y".to_string()),
        ]
    );
}

#[test]
fn tokens_are_ordered_and_never_overlap() {
    let tokens = tokenize("class A { void Main(string[] args) { x += 1; } }");
    let mut previous_end = 0;
    for (_, span) in &tokens {
        assert!(span.start >= previous_end);
        assert!(span.end > span.start);
        previous_end = span.end;
    }
}

#[test]
fn tokenizing_twice_is_identical() {
    let source = "using System;\nclass A { int x = 5; // note\n }";
    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn token_records_serialize_with_snake_case_categories() {
    let records = token_records(&tokenize("int x"));
    let json = serde_json::to_value(&records).expect("token records serialize");
    assert_eq!(json[0]["category"], "data_type");
    assert_eq!(json[0]["text"], "int");
    assert_eq!(json[1]["category"], "identifier");
    assert_eq!(json[1]["start"], 4);
    assert_eq!(json[1]["end"], 5);
}
