//! REST resources for API version `v2`.
//!
//! # Issuing
//!
//! - [`IssuingHolder`] - Card holders, with [`IssuingHolderQuery`] and [`IssuingHolderUpdate`]
//! - [`IssuingCard`] - Cards, with [`IssuingCardQuery`] and [`IssuingCardUpdate`]
//! - [`IssuingRule`] - Spending rules embedded in holders and cards
//! - [`IssuingDesign`] - Card and envelope designs, downloadable as PDF
//! - [`IssuingStock`] and [`IssuingStockLog`] - Blank card inventory
//! - [`IssuingRestock`] - Inventory replenishment orders
//! - [`IssuingEmbossingRequest`] and [`IssuingEmbossingRequestLog`] - Physical card printing
//! - [`IssuingInvoice`] - Balance top-ups (created one at a time)
//! - [`IssuingPurchase`] - Card transactions (read-only)
//!
//! # Pix
//!
//! - [`IndirectParticipant`] - Institutions settling through a direct participant
//! - [`PixRequest`] and [`PixRequestLog`] - Instant payments
//! - [`PixChargeback`] and [`PixChargebackLog`] - Fund return requests
//!
//! Every resource offers the subset of `create`, `get`, `query`, `page`,
//! `update`, `delete`/`cancel` the API supports for it. `query` returns a
//! lazy [`ResourceStream`](crate::rest::ResourceStream); `page` returns one
//! [`Page`](crate::rest::Page) and its cursor.

pub mod common;

mod indirect_participant;
mod issuing_card;
mod issuing_design;
mod issuing_embossing_request;
mod issuing_embossing_request_log;
mod issuing_holder;
mod issuing_invoice;
mod issuing_purchase;
mod issuing_restock;
mod issuing_stock;
mod issuing_stock_log;
mod pix_chargeback;
mod pix_chargeback_log;
mod pix_request;
mod pix_request_log;

pub use common::{CardMethod, IssuingRule, MerchantCategory, MerchantCountry};
pub use indirect_participant::IndirectParticipant;
pub use issuing_card::{IssuingCard, IssuingCardQuery, IssuingCardUpdate};
pub use issuing_design::{IssuingDesign, IssuingDesignQuery};
pub use issuing_embossing_request::{IssuingEmbossingRequest, IssuingEmbossingRequestQuery};
pub use issuing_embossing_request_log::{
    IssuingEmbossingRequestLog, IssuingEmbossingRequestLogQuery,
};
pub use issuing_holder::{IssuingHolder, IssuingHolderQuery, IssuingHolderUpdate};
pub use issuing_invoice::{IssuingInvoice, IssuingInvoiceQuery};
pub use issuing_purchase::{IssuingPurchase, IssuingPurchaseQuery};
pub use issuing_restock::{IssuingRestock, IssuingRestockQuery};
pub use issuing_stock::{IssuingStock, IssuingStockQuery};
pub use issuing_stock_log::{IssuingStockLog, IssuingStockLogQuery};
pub use pix_chargeback::{PixChargeback, PixChargebackQuery, PixChargebackUpdate};
pub use pix_chargeback_log::{PixChargebackLog, PixChargebackLogQuery};
pub use pix_request::{PixRequest, PixRequestQuery};
pub use pix_request_log::{PixRequestLog, PixRequestLogQuery};
