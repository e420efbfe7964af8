//! Qualified name handling
//!
//! This module converts between the three textual forms of a qualified name:
//! universal (`{namespace-uri}local`), prefixed (`prefix:local`) and plain
//! local names. Conversions that need a prefix binding take an explicit
//! namespace map; nothing here keeps state.
//!
//! The extraction functions (`get_namespace`, `get_qname`,
//! `qname_to_prefixed`, `qname_to_extended`) are total: malformed input
//! degrades to "no namespace" instead of failing, since they sit on hot
//! lookup paths. `local_name` is the exception and reports malformed
//! universal names as [`Error::Format`].

use crate::error::{Error, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Mapping from namespace prefix to namespace URI.
///
/// The empty prefix denotes the default namespace binding; an empty URI
/// denotes "no namespace". Insertion order is preserved but resolution in
/// [`qname_to_prefixed`] does not depend on it.
pub type NamespaceMap = IndexMap<String, String>;

// Leading brace-delimited namespace segment of a universal name
static NAMESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{([^}]*)\}").unwrap());

/// Return the namespace URI of a universal name.
///
/// Extracts the substring between the leading `{` and the first `}`.
/// Returns the empty string if `name` is not in universal form.
pub fn get_namespace(name: &str) -> &str {
    NAMESPACE_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Return an expanded (universal) QName from a namespace URI and a name.
///
/// Returns `name` unchanged when either argument is empty or when `name`
/// already starts with a reserved lead character (`{` for an expanded QName,
/// `.`, `/` or `[` for path-like expressions).
pub fn get_qname(uri: &str, name: &str) -> String {
    if uri.is_empty() || name.is_empty() || name.starts_with(['{', '.', '/', '[']) {
        name.to_string()
    } else {
        format!("{{{}}}{}", uri, name)
    }
}

/// Return the local part of an expanded QName or a prefixed name.
///
/// An absent input stays absent and the empty string maps to the empty
/// string. A name containing `{` that does not split into exactly a
/// namespace segment and a local part, or a prefixed name with more than
/// one colon, fails with [`Error::Format`].
pub fn local_name(qname: Option<&str>) -> Result<Option<String>> {
    let Some(qname) = qname else {
        return Ok(None);
    };
    if qname.is_empty() {
        return Ok(Some(String::new()));
    }

    if let Some(rest) = qname.strip_prefix('{') {
        match rest.split_once('}') {
            Some((_, local)) if !local.contains('}') => Ok(Some(local.to_string())),
            _ => Err(Error::Format(format!(
                "the argument 'qname' has a wrong format: {:?}",
                qname
            ))),
        }
    } else if let Some((_, local)) = qname.split_once(':') {
        if local.contains(':') {
            Err(Error::Format(format!(
                "the argument 'qname' has a wrong format: {:?}",
                qname
            )))
        } else {
            Ok(Some(local.to_string()))
        }
    } else {
        Ok(Some(qname.to_string()))
    }
}

/// Transform a universal QName into a prefixed name using a namespace map.
///
/// Entries binding the name's namespace are considered in descending
/// lexicographic `(prefix, uri)` order and the first match wins, so the
/// result is stable when several prefixes alias the same URI. Returns the
/// input unchanged if it is empty or no binding matches.
pub fn qname_to_prefixed(qname: &str, namespaces: &NamespaceMap) -> String {
    if qname.is_empty() {
        return qname.to_string();
    }

    let namespace = get_namespace(qname);
    let mut bindings: Vec<(&str, &str)> = namespaces
        .iter()
        .filter(|(_, uri)| uri.as_str() == namespace)
        .map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
        .collect();
    bindings.sort_unstable_by(|a, b| b.cmp(a));

    match bindings.first() {
        Some((prefix, uri)) if uri.is_empty() => {
            if prefix.is_empty() {
                qname.to_string()
            } else {
                format!("{}:{}", prefix, qname)
            }
        }
        Some((prefix, uri)) if !prefix.is_empty() => {
            qname.replace(&format!("{{{}}}", uri), &format!("{}:", prefix))
        }
        Some((_, uri)) => qname.replace(&format!("{{{}}}", uri), ""),
        None => qname.to_string(),
    }
}

/// Convert a prefixed or local name to the universal (extended) QName form.
///
/// Returns the input unchanged if it is already universal, the map is empty,
/// or the prefix is unknown. A local name picks up the default (empty
/// prefix) binding when one is present. A known prefix bound to the empty
/// URI yields the bare local name, since namespace absence is represented by
/// a brace-less name.
pub fn qname_to_extended(qname: &str, namespaces: &NamespaceMap) -> String {
    if qname.is_empty() || qname.starts_with('{') || namespaces.is_empty() {
        return qname.to_string();
    }

    match qname.split_once(':') {
        None => match namespaces.get("") {
            Some(uri) if !uri.is_empty() => format!("{{{}}}{}", uri, qname),
            _ => qname.to_string(),
        },
        Some((prefix, local)) => match namespaces.get(prefix) {
            None => qname.to_string(),
            Some(uri) if uri.is_empty() => local.to_string(),
            Some(uri) => format!("{{{}}}{}", uri, local),
        },
    }
}
