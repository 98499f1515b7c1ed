//! Naming table model and platform priority lookup.

use std::collections::HashMap;

/// Language tag of the only localized entry consulted during matching.
pub const ENGLISH: &str = "en";

/// Platform that a name record was encoded for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u16)]
pub enum Platform {
    Unicode = 0,
    Macintosh = 1,
    Windows = 3,
}

impl Platform {
    /// Returns the platform for a raw platform identifier. The deprecated
    /// ISO and custom platforms are not consulted.
    pub fn from_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(Self::Unicode),
            1 => Some(Self::Macintosh),
            3 => Some(Self::Windows),
            _ => None,
        }
    }
}

/// Kind of name string consulted by the resolver.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NameType {
    /// Font family name (name id 1).
    FontFamily,
    /// Font subfamily name (name id 2).
    FontSubfamily,
    /// Full font name (name id 4).
    FullName,
    /// Typographic family name (name id 16).
    PreferredFamily,
    /// Typographic subfamily name (name id 17).
    PreferredSubfamily,
}

impl NameType {
    /// Returns the name type for a raw name identifier.
    pub fn from_id(id: u16) -> Option<Self> {
        Some(match id {
            1 => Self::FontFamily,
            2 => Self::FontSubfamily,
            4 => Self::FullName,
            16 => Self::PreferredFamily,
            17 => Self::PreferredSubfamily,
            _ => return None,
        })
    }

    /// Returns the raw name identifier.
    pub fn id(self) -> u16 {
        match self {
            Self::FontFamily => 1,
            Self::FontSubfamily => 2,
            Self::FullName => 4,
            Self::PreferredFamily => 16,
            Self::PreferredSubfamily => 17,
        }
    }
}

/// Strings for a single name type keyed by language tag.
pub type LocalizedNames = HashMap<String, String>;

/// Name strings of a font, grouped by platform and name type.
#[derive(Clone, Default, Debug)]
pub struct NameTable {
    entries: HashMap<(Platform, NameType), LocalizedNames>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a string, replacing any previous value for the same key.
    pub fn insert(
        &mut self,
        platform: Platform,
        name_type: NameType,
        language: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries
            .entry((platform, name_type))
            .or_default()
            .insert(language.into(), value.into());
    }

    /// Builder style variant of [`insert`](Self::insert) for English strings.
    pub fn with_english(
        mut self,
        platform: Platform,
        name_type: NameType,
        value: impl Into<String>,
    ) -> Self {
        self.insert(platform, name_type, ENGLISH, value);
        self
    }

    /// Returns the string for the given platform, name type and language.
    pub fn get(&self, platform: Platform, name_type: NameType, language: &str) -> Option<&str> {
        self.entries
            .get(&(platform, name_type))?
            .get(language)
            .map(|s| s.as_str())
    }

    /// Returns the English string for the name type from the highest
    /// priority platform that carries one.
    pub fn english(&self, name_type: NameType) -> Option<&str> {
        first_present(
            self.get(Platform::Windows, name_type, ENGLISH),
            self.get(Platform::Unicode, name_type, ENGLISH),
            self.get(Platform::Macintosh, name_type, ENGLISH),
        )
    }
}

/// Returns the first present value in platform priority order.
pub fn first_present<T>(windows: Option<T>, unicode: Option<T>, macintosh: Option<T>) -> Option<T> {
    windows.or(unicode).or(macintosh)
}

/// Normalizes a font name for comparison and cache indexing.
///
/// A byte order mark is stripped along with surrounding whitespace.
pub fn normalize(name: &str) -> String {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}
