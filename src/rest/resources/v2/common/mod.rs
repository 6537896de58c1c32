//! Embedded types shared by several resources.
//!
//! These types are not resources themselves: they have no endpoint and are
//! only sent or received nested inside other records (holders, cards).

mod rule;

pub use rule::{CardMethod, IssuingRule, MerchantCategory, MerchantCountry};
