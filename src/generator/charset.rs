//! Character classes and the alphabets they contribute.

use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One group of characters that can be enabled for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Every class, in the order their alphabets are concatenated.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    /// The characters this class contributes.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Uppercase => 1,
            CharClass::Lowercase => 1 << 1,
            CharClass::Digits => 1 << 2,
            CharClass::Symbols => 1 << 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// A set of enabled character classes.
///
/// `CharClasses::default()` is the empty set; use `CharClasses::all()`
/// for the generator's usual starting point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses(u8);

impl CharClasses {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        CharClass::ALL.into_iter().collect()
    }

    /// Build a set from the four on/off switches the CLI and config expose.
    pub fn from_flags(uppercase: bool, lowercase: bool, digits: bool, symbols: bool) -> Self {
        let mut set = Self::empty();
        for (enabled, class) in [uppercase, lowercase, digits, symbols]
            .into_iter()
            .zip(CharClass::ALL)
        {
            if enabled {
                set.insert(class);
            }
        }
        set
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Enabled classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Concatenate the alphabets of every enabled class.
    pub fn alphabet(&self) -> Vec<u8> {
        self.iter()
            .flat_map(|c| c.alphabet().bytes())
            .collect()
    }
}

impl FromIterator<CharClass> for CharClasses {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = Self::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}
