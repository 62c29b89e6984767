//! # Id Allocation
//!
//! New records get the successor of the largest numeric id currently stored,
//! as a string: ids `{1, 3, 5}` allocate `"6"`, an empty collection `"1"`.
//! Ids that do not start with an integer are skipped.
//!
//! Allocation is a read followed by a separate write, with nothing in between
//! holding the id. Two clients creating at the same moment can pick the same
//! id; the store then refuses the second insert as a duplicate.

use crate::error::Result;
use crate::model::Resource;
use crate::store::RecordStore;
use serde_json::Value;
use tracing::debug;

pub fn next_id<S: RecordStore>(store: &S, resource: Resource) -> Result<String> {
    let records: Vec<Value> = store.list(resource)?;
    let next = successor(records.iter().map(|record| record.get("id")));
    debug!(%resource, %next, "allocated id");
    Ok(next)
}

/// Successor of the largest numeric id, ignoring ids that are absent or not numeric.
///
/// Ids are compared as decimal digit strings, so ids of any length count and
/// the successor never collides with the maximum.
pub fn successor<'a>(ids: impl IntoIterator<Item = Option<&'a Value>>) -> String {
    let max = ids
        .into_iter()
        .filter_map(|id| {
            let digits = match id? {
                Value::String(s) => leading_digits(s).map(str::to_string),
                Value::Number(n) => leading_digits(&n.to_string()).map(str::to_string),
                _ => None,
            };
            if digits.is_none() {
                debug!(?id, "skipping non-numeric id");
            }
            digits
        })
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .unwrap_or_else(|| "0".to_string());
    increment(&max)
}

/// Digits of the integer `id` starts with, without leading zeros. A negative
/// id counts as zero.
fn leading_digits(id: &str) -> Option<&str> {
    let s = id.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let digits = rest[..end].trim_start_matches('0');
    if negative || digits.is_empty() {
        return Some("0");
    }
    Some(digits)
}

fn increment(digits: &str) -> String {
    let mut out: Vec<char> = digits.chars().collect();
    for c in out.iter_mut().rev() {
        if *c == '9' {
            *c = '0';
        } else {
            *c = char::from(*c as u8 + 1);
            return out.into_iter().collect();
        }
    }
    std::iter::once('1').chain(out).collect()
}
