use super::Address;
use crate::error;
use crate::lang::{Error, Token};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// Index of the END closing the block opened at `start`.
///
/// Scans forward counting nested LOOP/WHILE/IF against END until the
/// nesting level returns to zero.
pub fn matching_end(tokens: &[Token], start: Address) -> Result<Address> {
    let mut level = 1;
    for (addr, token) in tokens.iter().enumerate().skip(start + 1) {
        if token.is_opener() {
            level += 1;
        } else if token.is_end() {
            level -= 1;
            if level == 0 {
                return Ok(addr);
            }
        }
    }
    let name = match tokens.get(start) {
        Some(token) => token.to_string(),
        None => String::new(),
    };
    Err(error!(UnmatchedBlock, ..start; name))
}

/// ## Block table
///
/// Every opener's matching END, resolved once when the program is built.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    ends: BTreeMap<Address, Address>,
}

impl Link {
    pub fn resolve(tokens: &[Token]) -> Result<Link> {
        let mut ends = BTreeMap::new();
        for (addr, token) in tokens.iter().enumerate() {
            if token.is_opener() {
                ends.insert(addr, matching_end(tokens, addr)?);
            }
        }
        Ok(Link { ends })
    }

    pub fn end_for(&self, opener: Address) -> Result<Address> {
        match self.ends.get(&opener) {
            Some(end) => Ok(*end),
            None => Err(error!(InternalError, ..opener; "NO END FOR BLOCK")),
        }
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }
}
