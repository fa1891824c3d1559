use derive_more::Display;
use serde::{Serialize, Serializer};
use std::{collections::BTreeSet, str::FromStr};

///
/// GsiIndex
///
/// One of the five secondary indexes of the single-table layout.
/// The primary key occupies slot 1, so numbering starts at 2.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum GsiIndex {
    #[display("gsi2")]
    Gsi2,
    #[display("gsi3")]
    Gsi3,
    #[display("gsi4")]
    Gsi4,
    #[display("gsi5")]
    Gsi5,
    #[display("gsi6")]
    Gsi6,
}

impl GsiIndex {
    /// Every secondary index in ascending order.
    pub const ALL: [Self; 5] = [Self::Gsi2, Self::Gsi3, Self::Gsi4, Self::Gsi5, Self::Gsi6];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Gsi2 => 2,
            Self::Gsi3 => 3,
            Self::Gsi4 => 4,
            Self::Gsi5 => 5,
            Self::Gsi6 => 6,
        }
    }

    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            2 => Some(Self::Gsi2),
            3 => Some(Self::Gsi3),
            4 => Some(Self::Gsi4),
            5 => Some(Self::Gsi5),
            6 => Some(Self::Gsi6),
            _ => None,
        }
    }

    // position in ALL and in Model::indexes
    pub(crate) const fn slot(self) -> usize {
        (self.number() - 2) as usize
    }

    #[must_use]
    pub const fn hash_directive(self) -> Directive {
        Directive::Hash(self)
    }

    #[must_use]
    pub const fn sort_directive(self) -> Directive {
        Directive::Sort(self)
    }
}

///
/// Directive
///
/// A key-schema role a field can hold. `ignore` is not one of them: it
/// removes the field instead of giving it a role.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Directive {
    #[display("id")]
    Id,
    #[display("{_0}h")]
    Hash(GsiIndex),
    #[display("{_0}s")]
    Sort(GsiIndex),
}

impl Directive {
    /// Every directive kind, `id` first then hash/sort per index.
    pub const ALL: [Self; 11] = [
        Self::Id,
        Self::Hash(GsiIndex::Gsi2),
        Self::Sort(GsiIndex::Gsi2),
        Self::Hash(GsiIndex::Gsi3),
        Self::Sort(GsiIndex::Gsi3),
        Self::Hash(GsiIndex::Gsi4),
        Self::Sort(GsiIndex::Gsi4),
        Self::Hash(GsiIndex::Gsi5),
        Self::Sort(GsiIndex::Gsi5),
        Self::Hash(GsiIndex::Gsi6),
        Self::Sort(GsiIndex::Gsi6),
    ];

    #[must_use]
    pub const fn index(self) -> Option<GsiIndex> {
        match self {
            Self::Id => None,
            Self::Hash(index) | Self::Sort(index) => Some(index),
        }
    }
}

///
/// UnknownDirective
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownDirective;

impl FromStr for Directive {
    type Err = UnknownDirective;

    // case-sensitive: `GSI2H` is not a directive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "id" {
            return Ok(Self::Id);
        }

        let rest = s.strip_prefix("gsi").ok_or(UnknownDirective)?;
        let (digit, role) = match rest.as_bytes() {
            [digit, role] => (*digit, *role),
            _ => return Err(UnknownDirective),
        };
        let index = digit
            .checked_sub(b'0')
            .and_then(GsiIndex::from_number)
            .ok_or(UnknownDirective)?;

        match role {
            b'h' => Ok(Self::Hash(index)),
            b's' => Ok(Self::Sort(index)),
            _ => Err(UnknownDirective),
        }
    }
}

impl Serialize for GsiIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Directive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The set of directives one field satisfies.
pub type DirectiveSet = BTreeSet<Directive>;

///
/// TESTS
///
