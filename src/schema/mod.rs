//! Versioned GEDCOM schema model
//!
//! A [`Schema`] answers, per type id: which child tags are allowed and how
//! often, what payload the line's value must carry, and which literals an
//! enumeration permits. Two schemas are built in (GEDCOM 5.5.1 and 7.0);
//! both are embedded JSON parsed once on first use.

mod loader;
mod version;

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use smol_str::SmolStr;

pub use loader::SchemaError;
pub use version::{SchemaVersion, detect_version};

/// Tag letters as written in a GEDCOM line (`HEAD`, `SEX`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(SmolStr);

impl Tag {
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a structure's semantic type, usually a URI
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeId(SmolStr);

impl TypeId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    /// The pseudo-type of the document itself; its rules govern top-level records
    pub fn root() -> Self {
        Self(SmolStr::default())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_str_newtype {
    ($name:ident) => {
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_str_newtype!(Tag);
impl_str_newtype!(TypeId);

/// Occurrence bounds for a child tag; `max: None` means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cardinality {
    pub min: u32,
    pub max: Option<u32>,
}

impl Cardinality {
    /// Parse the `{min:max}` notation, where `max` may be `M`
    pub fn parse(text: &str) -> Option<Self> {
        let inner = text.strip_prefix('{')?.strip_suffix('}')?;
        let (min, max) = inner.split_once(':')?;
        let min = min.parse().ok()?;
        let max = match max {
            "M" => None,
            n => Some(n.parse().ok()?),
        };
        Some(Self { min, max })
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{{{}:{}}}", self.min, max),
            None => write!(f, "{{{}:M}}", self.min),
        }
    }
}

/// One entry of a type's child table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstructureRule {
    pub cardinality: Cardinality,
    /// Type id the child is validated against
    pub type_id: TypeId,
}

/// What a line's value must look like
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum PayloadKind {
    /// No payload check
    #[default]
    None,
    /// `Y` or nothing
    BooleanFlag,
    String,
    StringList,
    NonNegativeInteger,
    /// One literal from the referenced set
    SingleSelect(TypeId),
    /// Comma-separated literals from the referenced set
    MultiSelect(TypeId),
    Date,
    DatePeriod,
    Time,
    /// An xref to a declared pointer, with the record type it should name
    Pointer(Option<TypeId>),
}

impl PayloadKind {
    /// The enumeration set referenced by select kinds
    pub fn set(&self) -> Option<&TypeId> {
        match self {
            Self::SingleSelect(set) | Self::MultiSelect(set) => Some(set),
            _ => None,
        }
    }
}

/// Ordered permitted literals of an enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationSet {
    values: Vec<SmolStr>,
    lookup: FxHashSet<SmolStr>,
}

impl EnumerationSet {
    pub fn values(&self) -> &[SmolStr] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.lookup.contains(value)
    }
}

static NO_PAYLOAD: PayloadKind = PayloadKind::None;

/// Immutable validation tables for one GEDCOM version
#[derive(Debug, Clone)]
pub struct Schema {
    substructures: IndexMap<TypeId, IndexMap<Tag, SubstructureRule>>,
    payloads: FxHashMap<TypeId, PayloadKind>,
    sets: IndexMap<TypeId, EnumerationSet>,
    labels: FxHashMap<TypeId, SmolStr>,
    tags: FxHashMap<TypeId, Tag>,
}

static GEDCOM_70: LazyLock<Result<Schema, SchemaError>> =
    LazyLock::new(|| Schema::from_json(include_str!("data/g7validation.json")));

static GEDCOM_551: LazyLock<Result<Schema, SchemaError>> =
    LazyLock::new(|| Schema::from_json(include_str!("data/g551validation.json")));

impl Schema {
    /// The embedded schema for `version`, parsed on first use
    pub fn builtin(version: SchemaVersion) -> Result<&'static Schema, SchemaError> {
        let cell = match version {
            SchemaVersion::Gedcom551 => &GEDCOM_551,
            SchemaVersion::Gedcom70 => &GEDCOM_70,
        };
        LazyLock::force(cell).as_ref().map_err(Clone::clone)
    }

    /// Child rules for a type; `None` means the type is opaque
    pub fn substructure_rules(&self, type_id: &TypeId) -> Option<&IndexMap<Tag, SubstructureRule>> {
        self.substructures.get(type_id)
    }

    pub fn payload_kind(&self, type_id: &TypeId) -> &PayloadKind {
        self.payloads.get(type_id).unwrap_or(&NO_PAYLOAD)
    }

    /// The enumeration a type's payload is drawn from
    pub fn enumeration(&self, type_id: &TypeId) -> Option<&EnumerationSet> {
        let set = self.payload_kind(type_id).set()?;
        self.sets.get(set)
    }

    pub fn enumeration_set(&self, type_id: &TypeId) -> Option<&[SmolStr]> {
        self.enumeration(type_id).map(EnumerationSet::values)
    }

    pub fn label(&self, type_id: &TypeId) -> Option<&str> {
        self.labels.get(type_id).map(SmolStr::as_str)
    }

    pub fn tag_of(&self, type_id: &TypeId) -> Option<&Tag> {
        self.tags.get(type_id)
    }

    /// Number of types with a child table
    pub fn type_count(&self) -> usize {
        self.substructures.len()
    }
}
