pub mod ast;
pub mod lexer;
pub mod locate;
pub mod parser;
pub mod translator;

pub use parser::SyntaxError;

/// Runs the whole pipeline over one in-memory source buffer: tokenize,
/// parse (with positions enabled on errors), translate.
pub fn translate_source(source: &str) -> Result<String, SyntaxError> {
    let tokens = lexer::tokenize(source);
    let program = parser::parse(tokens, Some(source))?;
    Ok(translator::translate(&program))
}
