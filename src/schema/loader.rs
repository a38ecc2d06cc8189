//! JSON loading for validation schemas.
//!
//! The on-disk layout mirrors the published GEDCOM validation tables:
//!
//! ```json
//! {
//!   "substructure": { "<type>": { "<TAG>": { "cardinality": "{0:M}", "type": "<type>" } } },
//!   "payload":      { "<type>": { "type": "<uri>" | null, "set": "<set>", "to": "<type>" } },
//!   "set":          { "<set>": { "<VALUE>": "<type>" } },
//!   "label":        { "<type>": { "en-US": "..." } },
//!   "tag":          { "<type>": "<TAG>" }
//! }
//! ```
//!
//! Unknown top-level sections (calendars, tag-in-context tables) are ignored.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use smol_str::SmolStr;
use thiserror::Error;

use super::{Cardinality, EnumerationSet, PayloadKind, Schema, SubstructureRule, Tag, TypeId};

/// Errors raised while loading a schema document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("malformed schema JSON: {0}")]
    Json(String),

    #[error("invalid cardinality {value:?} for {tag} in {type_id:?}")]
    Cardinality {
        type_id: String,
        tag: String,
        value: String,
    },

    #[error("payload of {type_id:?} references unknown enumeration set {set:?}")]
    UnknownSet { type_id: String, set: String },

    #[error("payload of {type_id:?} is an enumeration without a set")]
    MissingSet { type_id: String },
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    substructure: IndexMap<SmolStr, IndexMap<SmolStr, RawRule>>,
    #[serde(default)]
    payload: IndexMap<SmolStr, RawPayload>,
    #[serde(default)]
    set: IndexMap<SmolStr, IndexMap<SmolStr, SmolStr>>,
    #[serde(default)]
    label: IndexMap<SmolStr, RawLabel>,
    #[serde(default)]
    tag: IndexMap<SmolStr, SmolStr>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    cardinality: String,
    #[serde(rename = "type")]
    type_id: SmolStr,
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    #[serde(rename = "type")]
    kind: Option<SmolStr>,
    set: Option<SmolStr>,
    to: Option<SmolStr>,
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    #[serde(rename = "en-US")]
    en_us: Option<SmolStr>,
}

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
const G7_TYPE: &str = "https://gedcom.io/terms/v7/type-";

impl Schema {
    /// Parse a schema document
    pub fn from_json(text: &str) -> Result<Schema, SchemaError> {
        let raw: RawSchema =
            serde_json::from_str(text).map_err(|e| SchemaError::Json(e.to_string()))?;

        let sets = raw
            .set
            .into_iter()
            .map(|(id, values)| {
                let values: Vec<SmolStr> = values.into_keys().collect();
                let lookup: FxHashSet<SmolStr> = values.iter().cloned().collect();
                (TypeId::new(id), EnumerationSet { values, lookup })
            })
            .collect::<IndexMap<_, _>>();

        let mut substructures = IndexMap::with_capacity(raw.substructure.len());
        for (type_id, rules) in raw.substructure {
            let mut table = IndexMap::with_capacity(rules.len());
            for (tag, rule) in rules {
                let cardinality = Cardinality::parse(&rule.cardinality).ok_or_else(|| {
                    SchemaError::Cardinality {
                        type_id: type_id.to_string(),
                        tag: tag.to_string(),
                        value: rule.cardinality.clone(),
                    }
                })?;
                table.insert(
                    Tag::new(tag),
                    SubstructureRule {
                        cardinality,
                        type_id: TypeId::new(rule.type_id),
                    },
                );
            }
            substructures.insert(TypeId::new(type_id), table);
        }

        let mut payloads = FxHashMap::default();
        for (type_id, payload) in raw.payload {
            let kind = payload_kind(&type_id, payload, &sets)?;
            payloads.insert(TypeId::new(type_id), kind);
        }

        let labels = raw
            .label
            .into_iter()
            .filter_map(|(id, label)| Some((TypeId::new(id), label.en_us?)))
            .collect();
        let tags = raw
            .tag
            .into_iter()
            .map(|(id, tag)| (TypeId::new(id), Tag::new(tag)))
            .collect();

        let schema = Schema {
            substructures,
            payloads,
            sets,
            labels,
            tags,
        };
        tracing::debug!(
            types = schema.substructures.len(),
            payloads = schema.payloads.len(),
            sets = schema.sets.len(),
            "loaded schema"
        );
        Ok(schema)
    }
}

/// Map a payload type URI onto the check it implies
fn payload_kind(
    type_id: &str,
    payload: RawPayload,
    sets: &IndexMap<TypeId, EnumerationSet>,
) -> Result<PayloadKind, SchemaError> {
    let Some(uri) = payload.kind else {
        return Ok(PayloadKind::None);
    };

    let resolve_set = || -> Result<TypeId, SchemaError> {
        let set = payload.set.clone().ok_or_else(|| SchemaError::MissingSet {
            type_id: type_id.to_string(),
        })?;
        if !sets.contains_key(set.as_str()) {
            return Err(SchemaError::UnknownSet {
                type_id: type_id.to_string(),
                set: set.to_string(),
            });
        }
        Ok(TypeId::new(set))
    };

    let kind = if uri == "Y|<NULL>" {
        PayloadKind::BooleanFlag
    } else if uri == "pointer" || (uri.len() > 2 && uri.starts_with('@') && uri.ends_with('@')) {
        let target = payload
            .to
            .or_else(|| uri.strip_prefix('@')?.strip_suffix('@').map(SmolStr::new));
        PayloadKind::Pointer(target.map(TypeId::new))
    } else if let Some(xsd) = uri.strip_prefix(XSD) {
        match xsd {
            "string" | "Language" => PayloadKind::String,
            "nonNegativeInteger" => PayloadKind::NonNegativeInteger,
            _ => PayloadKind::None,
        }
    } else if uri == "http://www.w3.org/ns/dcat#mediaType" {
        PayloadKind::String
    } else if let Some(g7) = uri.strip_prefix(G7_TYPE) {
        match g7 {
            "Name" => PayloadKind::String,
            "List#Text" => PayloadKind::StringList,
            "Enum" => PayloadKind::SingleSelect(resolve_set()?),
            "List#Enum" => PayloadKind::MultiSelect(resolve_set()?),
            "Date" | "Date#exact" => PayloadKind::Date,
            "Date#period" => PayloadKind::DatePeriod,
            "Time" => PayloadKind::Time,
            _ => PayloadKind::None,
        }
    } else {
        PayloadKind::None
    };
    Ok(kind)
}
