//! Endpoint and JSON key derivation from resource names.
//!
//! Every resource is identified by its wire name in `PascalCase`
//! (e.g. `IssuingEmbossingRequestLog`). From it:
//!
//! - the endpoint is the kebab-case name, with a trailing `-log` segment
//!   becoming a `/log` sub-path: `issuing-embossing-request/log`
//! - the singular JSON key is the last word of the name: `log`
//! - the plural JSON key pluralizes the singular key: `logs`
//!
//! # Example
//!
//! ```rust
//! use starkinfra::rest::naming::{endpoint, plural_key, singular_key};
//!
//! assert_eq!(endpoint("IssuingEmbossingRequestLog"), "issuing-embossing-request/log");
//! assert_eq!(singular_key("IssuingHolder"), "holder");
//! assert_eq!(plural_key("IssuingHolder"), "holders");
//! ```

/// Splits a `PascalCase` name into lowercase words.
fn words(name: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for c in name.chars() {
        if c.is_ascii_uppercase() || words.is_empty() {
            words.push(c.to_ascii_lowercase().to_string());
        } else if let Some(last) = words.last_mut() {
            last.push(c);
        }
    }
    words
}

/// Returns the endpoint path for a resource name.
#[must_use]
pub fn endpoint(name: &str) -> String {
    let words = words(name);
    match words.split_last() {
        Some((last, rest)) if last == "log" && !rest.is_empty() => {
            format!("{}/log", rest.join("-"))
        }
        _ => words.join("-"),
    }
}

/// Returns the JSON key wrapping a single entity of this resource.
///
/// The key is the last word of the name: `IssuingHolder` is `holder`,
/// `IssuingEmbossingRequest` is `request`, `PixChargebackLog` is `log`.
#[must_use]
pub fn singular_key(name: &str) -> String {
    words(name).pop().unwrap_or_default()
}

/// Returns the JSON key wrapping a list of entities of this resource.
#[must_use]
pub fn plural_key(name: &str) -> String {
    pluralize(&singular_key(name))
}

/// Pluralizes an English noun the way the API names its list keys.
#[must_use]
pub fn pluralize(noun: &str) -> String {
    if noun.ends_with('s') {
        return noun.to_string();
    }
    if let Some(stem) = noun.strip_suffix('y') {
        let before_y = stem.chars().last();
        if before_y.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{noun}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_kebab_case() {
        assert_eq!(endpoint("IssuingHolder"), "issuing-holder");
        assert_eq!(endpoint("IssuingEmbossingRequest"), "issuing-embossing-request");
        assert_eq!(endpoint("IndirectParticipant"), "indirect-participant");
        assert_eq!(endpoint("PixChargeback"), "pix-chargeback");
    }

    #[test]
    fn test_log_endpoints_are_sub_paths() {
        assert_eq!(endpoint("IssuingStockLog"), "issuing-stock/log");
        assert_eq!(endpoint("PixRequestLog"), "pix-request/log");
        assert_eq!(
            endpoint("IssuingEmbossingRequestLog"),
            "issuing-embossing-request/log"
        );
    }

    #[test]
    fn test_singular_keys() {
        assert_eq!(singular_key("IssuingHolder"), "holder");
        assert_eq!(singular_key("IssuingCard"), "card");
        assert_eq!(singular_key("IssuingEmbossingRequest"), "request");
        assert_eq!(singular_key("PixChargeback"), "chargeback");
        assert_eq!(singular_key("PixRequestLog"), "log");
        assert_eq!(singular_key("IndirectParticipant"), "participant");
    }

    #[test]
    fn test_plural_keys() {
        assert_eq!(plural_key("IssuingDesign"), "designs");
        assert_eq!(plural_key("IssuingEmbossingRequestLog"), "logs");
        assert_eq!(plural_key("IndirectParticipant"), "participants");
    }

    #[test]
    fn test_pluralize_rules() {
        assert_eq!(pluralize("stock"), "stocks");
        assert_eq!(pluralize("policy"), "policies");
        assert_eq!(pluralize("key"), "keys");
        assert_eq!(pluralize("status"), "status");
    }
}
