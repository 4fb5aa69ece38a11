use super::{token::*, Error, LineNumber, MAX_DISTINCT_TOKENS};
use crate::error;
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, Error>;

/// Tokenize source lines. Fails on the first unrecognized word, then on
/// programs using more than [`MAX_DISTINCT_TOKENS`] distinct keywords.
pub fn lex<I, S>(lines: I, dialect: Dialect) -> Result<Vec<Token>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = vec![];
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().to_ascii_uppercase();
        let lexer = VaultLexer::new(&line, Some(index + 1), dialect);
        for token in lexer {
            tokens.push(token?);
        }
    }
    let distinct = distinct_symbols(&tokens);
    if distinct.len() > MAX_DISTINCT_TOKENS {
        return Err(error!(TooManyDistinctTokens; format!(
            "{} OF {} ALLOWED",
            distinct.len(),
            MAX_DISTINCT_TOKENS
        )));
    }
    Ok(tokens)
}

/// The distinct keywords used, integers excluded.
pub fn distinct_symbols(tokens: &[Token]) -> BTreeSet<String> {
    tokens
        .iter()
        .filter(|t| !t.is_integer())
        .map(|t| t.to_string())
        .collect()
}

fn strip_comment(s: &str) -> &str {
    match s.find('#') {
        Some(pos) => &s[..pos],
        None => s,
    }
}

fn is_vault_integer(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

struct VaultLexer<'a> {
    words: std::str::SplitWhitespace<'a>,
    line_number: LineNumber,
    dialect: Dialect,
}

impl<'a> VaultLexer<'a> {
    fn new(s: &'a str, line_number: LineNumber, dialect: Dialect) -> VaultLexer<'a> {
        VaultLexer {
            words: strip_comment(s).split_whitespace(),
            line_number,
            dialect,
        }
    }

    /// Literals past `u32::MAX` saturate.
    fn integer(word: &str) -> Token {
        Token::Integer(word.parse::<u32>().unwrap_or(u32::MAX))
    }
}

impl<'a> Iterator for VaultLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.words.next()?;
        if let Some(token) = Token::from_string(word, self.dialect) {
            return Some(Ok(token));
        }
        if is_vault_integer(word) {
            return Some(Ok(VaultLexer::integer(word)));
        }
        Some(Err(error!(InvalidToken, self.line_number; word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("MOVE # go"), "MOVE ");
        assert_eq!(strip_comment("# only"), "");
        assert_eq!(strip_comment("LEFT"), "LEFT");
    }

    #[test]
    fn test_is_vault_integer() {
        assert!(is_vault_integer("0"));
        assert!(is_vault_integer("10000"));
        assert!(!is_vault_integer("-1"));
        assert!(!is_vault_integer("3X"));
        assert!(!is_vault_integer(""));
    }

    #[test]
    fn test_integer_saturates() {
        assert_eq!(VaultLexer::integer("4294967295"), Token::Integer(u32::MAX));
        assert_eq!(VaultLexer::integer("5000000000"), Token::Integer(u32::MAX));
        assert_eq!(VaultLexer::integer("007"), Token::Integer(7));
    }
}
