//! Fee derivation engine for licensing Statement of Account forms.
//!
//! A [`form::FieldStore`] holds the form's fields. [`fees::FeeEngine::wire`] attaches the ROC,
//! amateur, and ship station rules plus the statement total to it; from then on every operator
//! edit is followed synchronously by the dependent fee fields and `totalAmount`.

pub mod config;
pub mod error;
pub mod fees;
pub mod form;
pub mod period;
pub mod record;
pub mod telemetry;
