use super::{Address, Link};
use crate::lang::{distinct_symbols, lex, Dialect, Error, Token};

type Result<T> = std::result::Result<T, Error>;

/// ## Tokenized and linked program
///
/// Built once, never changed, and shared by every run of an interpreter.

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    tokens: Vec<Token>,
    link: Link,
    dialect: Dialect,
}

/// Structural summary used to score programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub distinct_token_list: Vec<String>,
    pub control_structures: usize,
    pub max_nesting_depth: usize,
    pub complexity_score: usize,
}

impl Program {
    pub fn new<I, S>(lines: I, dialect: Dialect) -> Result<Program>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = lex(lines, dialect)?;
        let link = Link::resolve(&tokens)?;
        Ok(Program {
            tokens,
            link,
            dialect,
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, addr: Address) -> Option<Token> {
        self.tokens.get(addr).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn end_for(&self, opener: Address) -> Result<Address> {
        self.link.end_for(opener)
    }

    pub fn distinct_token_count(&self) -> usize {
        distinct_symbols(&self.tokens).len()
    }

    pub fn report(&self) -> Report {
        let distinct = distinct_symbols(&self.tokens);
        let control_structures = self.tokens.iter().filter(|t| t.is_opener()).count();
        let mut depth: usize = 0;
        let mut max_nesting_depth = 0;
        for token in &self.tokens {
            if token.is_opener() {
                depth += 1;
                max_nesting_depth = max_nesting_depth.max(depth);
            } else if token.is_end() {
                depth = depth.saturating_sub(1);
            }
        }
        Report {
            total_tokens: self.tokens.len(),
            distinct_tokens: distinct.len(),
            distinct_token_list: distinct.into_iter().collect(),
            control_structures,
            max_nesting_depth,
            complexity_score: self.tokens.len() + control_structures * 2 + max_nesting_depth * 3,
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}
