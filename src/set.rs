use crate::Error;

use std::fmt;

/// A card set recognized by PSA, e.g. the 1999 Pokemon base set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Set {
    Original,
    Fossil,
    Jungle,
}

impl Set {
    /// The PSA catalog identifier for this set.
    pub fn id(self) -> Result<&'static str, Error> {
        match self {
            Self::Original => Ok("29137"),
            Self::Fossil | Self::Jungle => Err(Error::UnsupportedSet(self)),
        }
    }

    /// The set name as PSA spells it.
    pub fn name(self) -> Result<&'static str, Error> {
        match self {
            Self::Original => Ok("1999+Nintendo+Pokemon+Game"),
            Self::Fossil | Self::Jungle => Err(Error::UnsupportedSet(self)),
        }
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Original => "Original",
            Self::Fossil => "Fossil",
            Self::Jungle => "Jungle",
        })
    }
}
