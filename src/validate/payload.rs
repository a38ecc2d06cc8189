//! Payload checks: does a line's value fit the payload kind of its type?

use crate::base::Span;
use crate::parser::TokenKind;
use crate::schema::{PayloadKind, Schema, TypeId};
use crate::syntax::{Node, PointerIndex};

use super::diagnostics::{Diagnostic, DiagnosticCode};

/// Check one node's value against the payload of `type_id`
pub(crate) fn check_payload(
    schema: &Schema,
    type_id: &TypeId,
    node: &Node,
    pointers: &PointerIndex,
) -> Option<Diagnostic> {
    let tag = node.tag().unwrap_or_default();
    let value = node.value();

    let kind = schema.payload_kind(type_id);
    match kind {
        PayloadKind::None | PayloadKind::Date | PayloadKind::DatePeriod => None,

        PayloadKind::BooleanFlag => {
            let ok = match value {
                Some(v) => v == "Y",
                None => node.has_children(),
            };
            (!ok).then(|| {
                Diagnostic::new(
                    DiagnosticCode::IncorrectValue,
                    format!("Incorrect value {} for {}", quoted(value), tag),
                    value_anchor(node),
                )
                .with_hint("use Y, or leave the value empty and add substructures")
            })
        }

        PayloadKind::String | PayloadKind::StringList => value.is_none().then(|| {
            Diagnostic::new(
                DiagnosticCode::MissingValue,
                format!("Missing value for {}", tag),
                tag_anchor(node),
            )
        }),

        PayloadKind::NonNegativeInteger => {
            let ok = value.is_some_and(|v| v.bytes().all(|b| b.is_ascii_digit()));
            (!ok).then(|| {
                Diagnostic::new(
                    DiagnosticCode::IncorrectValue,
                    format!(
                        "Value for {} should be a non-negative integer, found {}",
                        tag,
                        quoted(value)
                    ),
                    value_anchor(node),
                )
            })
        }

        PayloadKind::SingleSelect(_) | PayloadKind::MultiSelect(_) => {
            let set = schema.enumeration(type_id);
            let member = |v: &str| set.is_some_and(|s| s.contains(v));
            let ok = match value {
                None => false,
                Some(v) if matches!(kind, PayloadKind::MultiSelect(_)) => {
                    v.split(',').all(|part| member(part.trim()))
                }
                Some(v) => member(v),
            };
            (!ok).then(|| {
                let allowed = set.map(|s| s.values().join(", ")).unwrap_or_default();
                Diagnostic::new(
                    DiagnosticCode::ShouldBeSetValue,
                    format!("Value for {} should be in set [{}]", tag, allowed),
                    value_anchor(node),
                )
            })
        }

        PayloadKind::Time => {
            let ok = value.is_some_and(is_time);
            (!ok).then(|| {
                Diagnostic::new(
                    DiagnosticCode::IncorrectValue,
                    format!("Value for {} should be a time, found {}", tag, quoted(value)),
                    value_anchor(node),
                )
                .with_hint("times are written HH:MM or HH:MM:SS on a 24-hour clock")
            })
        }

        PayloadKind::Pointer(_) => {
            let Some(xref) = node.xref() else {
                return Some(Diagnostic::new(
                    DiagnosticCode::MissingRef,
                    format!("Missing ref for {}", tag),
                    tag_anchor(node),
                ));
            };
            let declared = pointers.get(xref).is_some_and(|ids| !ids.is_empty());
            (!declared).then(|| {
                Diagnostic::new(
                    DiagnosticCode::MissingRef,
                    format!("Ref {} for {} does not point to a declared record", xref, tag),
                    xref_anchor(node),
                )
            })
        }
    }
}

/// `HH:MM` or `HH:MM:SS`, 24-hour clock
pub(crate) fn is_time(value: &str) -> bool {
    fn field(text: &str, max: u32) -> bool {
        text.len() == 2
            && text.bytes().all(|b| b.is_ascii_digit())
            && text.parse::<u32>().is_ok_and(|n| n <= max)
    }

    let parts: Vec<&str> = value.split(':').collect();
    match parts.as_slice() {
        [h, m] => field(h, 23) && field(m, 59),
        [h, m, s] => field(h, 23) && field(m, 59) && field(s, 59),
        _ => false,
    }
}

fn quoted(value: Option<&str>) -> String {
    value.map_or_else(|| "<empty>".to_string(), |v| format!("{:?}", v))
}

fn tag_anchor(node: &Node) -> Span {
    node.token(TokenKind::Tag).map_or(node.span(), |t| t.span)
}

fn value_anchor(node: &Node) -> Span {
    node.token(TokenKind::Value)
        .map_or_else(|| tag_anchor(node), |t| t.span)
}

fn xref_anchor(node: &Node) -> Span {
    node.token(TokenKind::Xref)
        .map_or_else(|| tag_anchor(node), |t| t.span)
}
