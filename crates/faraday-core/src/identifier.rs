//! Identifier management using string interning.
//!
//! Terminal names are short strings ("left", "collector", ...) that get
//! looked up on every frame tick, so the [`Id`] type interns them once and
//! compares symbols afterwards.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner shared by every [`Id`].
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Interned identifier for terminals, elements and wires.
///
/// `Id` is `Copy` and compares by symbol, so it can be used freely as a map
/// key and passed around without allocation.
///
/// # Examples
///
/// ```
/// use faraday_core::identifier::Id;
///
/// let left = Id::new("left");
/// assert_eq!(left, Id::new("left"));
/// assert_eq!(left, "left");
/// assert_ne!(left, Id::new("right"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string, interning it if necessary.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("interner lock poisoned");
        Self(interner.get_or_intern(name))
    }

    /// Returns the interned string for this identifier.
    pub fn resolve(&self) -> String {
        let interner = interner().lock().expect("interner lock poisoned");
        interner
            .resolve(self.0)
            .expect("symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("interner lock poisoned");
        let value = interner
            .resolve(self.0)
            .expect("symbol should exist in interner");
        f.write_str(value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("interner lock poisoned");
        interner
            .resolve(self.0)
            .expect("symbol should exist in interner")
            == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
