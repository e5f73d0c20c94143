//! Name tables: words that stand in for opcode numbers in program text.
//!
//! A name table file holds exactly [`Opcode::COUNT`] whitespace-separated,
//! unique words. The word at position `n` encodes opcode `n`.

use std::collections::HashMap;

use parensor_foundation::{Error, ErrorKind, Result};

use crate::opcode::Opcode;

/// Characters that would be read as group markers.
const RESERVED: [char; 2] = ['(', ')'];

/// An ordered word-to-opcode mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameTable {
    /// Words in opcode order.
    words: Vec<String>,
    /// Word -> opcode lookup.
    index: HashMap<String, Opcode>,
}

impl NameTable {
    /// Parses and validates a name table.
    ///
    /// # Errors
    /// Returns an error if a word contains `(` or `)`, a word repeats, or the
    /// table does not hold exactly one word per opcode.
    pub fn parse(text: &str) -> Result<Self> {
        let mut words = Vec::with_capacity(Opcode::COUNT);
        let mut index = HashMap::with_capacity(Opcode::COUNT);

        for word in text.split_whitespace() {
            if word.contains(RESERVED) {
                return Err(Error::new(ErrorKind::ReservedCharacter(word.to_string())));
            }
            if index.contains_key(word) {
                return Err(Error::new(ErrorKind::DuplicateName(word.to_string())));
            }
            if words.len() < Opcode::COUNT {
                index.insert(word.to_string(), Opcode::ALL[words.len()]);
            }
            words.push(word.to_string());
        }

        if words.len() != Opcode::COUNT {
            return Err(Error::new(ErrorKind::NameCount {
                expected: Opcode::COUNT,
                actual: words.len(),
            }));
        }

        Ok(Self { words, index })
    }

    /// Looks up a token by exact match.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Opcode> {
        self.index.get(word).copied()
    }

    /// The word that encodes `opcode`, if the table is populated.
    #[must_use]
    pub fn name_of(&self, opcode: Opcode) -> Option<&str> {
        self.words.get(opcode as usize).map(String::as_str)
    }

    /// Returns true if the table has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
