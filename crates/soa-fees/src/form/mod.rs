//! Observable field store the fee rules read from and write back to.

pub mod layout;
mod resolve;
mod store;
mod value;

pub use layout::{standard_form, MONETARY_FIELDS};
pub use resolve::resolve;
pub use store::{FieldChange, FieldStore, StoreError, Subscription, WriterId};
pub use value::FieldValue;

pub(crate) use value::parse_date;
