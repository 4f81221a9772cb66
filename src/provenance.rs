//! Where did a token come from?
//!
//! A [Provenance] is an opaque, human readable description of a token's
//! origin (typically the source snippet it was lexed from). It exists for
//! diagnostics only: it is rendered, but never compared.

use std::fmt::Display;

/// Sentinel used when nothing is known about a token's origin.
pub const NO_INFO: &str = "<noinfo>";

/// Opaque description of a token's origin.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Provenance(String);

impl Provenance {
    /// Is this the [NO_INFO] sentinel?
    pub fn is_unknown(&self) -> bool {
        self.0 == NO_INFO
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Provenance(NO_INFO.to_string())
    }
}

impl Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Provenance {
    fn from(value: String) -> Self {
        Provenance(value)
    }
}

impl From<&str> for Provenance {
    fn from(value: &str) -> Self {
        Provenance(value.to_string())
    }
}

impl From<&Provenance> for Provenance {
    fn from(value: &Provenance) -> Self {
        value.clone()
    }
}

impl From<Provenance> for String {
    fn from(value: Provenance) -> Self {
        value.0
    }
}

/// Every entity that knows where it came from.
pub trait HasProvenance {
    fn provenance(&self) -> &Provenance;
}
