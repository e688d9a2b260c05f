use core::fmt;
use core::str::FromStr;

use crate::Error;

/// How a captured object is referenced by a guarded closure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Don't keep the object alive. Guarded closures fall back once it is
    /// dropped.
    #[default]
    Weak,
    /// Keep the object alive for as long as the closure exists.
    Strong,
    /// Don't keep the object alive, but assume it outlives the closure.
    /// Calling the closure after the object is dropped panics.
    Unowned,
}

impl Strategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::Weak => "weak",
            Strategy::Strong => "strong",
            Strategy::Unowned => "unowned",
        }
    }

    /// Whether objects captured this way are kept alive by the capture.
    pub const fn is_owning(self) -> bool {
        matches!(self, Strategy::Strong)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Strategy::Weak, Strategy::Strong, Strategy::Unowned]
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStrategy(s.to_owned()))
    }
}
