use std::fmt;

/// Two-character code bound to one window of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mnemonic {
    /// Lowercase first letter of the process name, or `?`.
    pub first: char,
    /// Occurrence of `first`'s bucket so far, from `a` onwards.
    pub second: char,
}

impl Mnemonic {
    pub fn new(first: char, second: char) -> Self {
        Self { first, second }
    }

    /// True when the two typed characters spell this code, ignoring case.
    pub fn matches(&self, typed: [char; 2]) -> bool {
        same_letter(self.first, typed[0]) && same_letter(self.second, typed[1])
    }
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}
