use crate::form::{FieldStore, FieldValue, Subscription, MONETARY_FIELDS};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

pub const TOTAL_FIELD: &str = "totalAmount";

/// Monetary lines that make up the statement total.
pub const TOTAL_FIELDS: &[&str] = MONETARY_FIELDS;

/// Sum of `fields`, treating absent and non-numeric values as 0.
pub fn sum_fields(store: &FieldStore, fields: &[&str]) -> f64 {
    fields.iter().map(|field| store.number(field)).sum()
}

/// Keeps the total field equal to the sum of a fixed list of monetary fields.
#[derive(Debug)]
pub struct TotalAggregator {
    subscription: Subscription,
    recomputations: Rc<Cell<u64>>,
}

impl TotalAggregator {
    pub fn wire(store: &FieldStore) -> Self {
        Self::wire_fields(store, TOTAL_FIELDS, TOTAL_FIELD)
    }

    /// Wires an aggregator over `fields`, creating any missing field (and the total) as 0.
    pub fn wire_fields(
        store: &FieldStore,
        fields: &'static [&'static str],
        total: &'static str,
    ) -> Self {
        for field in fields {
            store.create_if_missing(field, 0.0);
        }
        store.create_if_missing(total, 0.0);

        let writer = store.allocate_writer();
        let recomputations = Rc::new(Cell::new(0));

        let recompute = {
            let recomputations = recomputations.clone();
            move |store: &FieldStore| {
                recomputations.set(recomputations.get() + 1);
                let sum = sum_fields(store, fields);
                debug!(total = sum, "statement total recomputed");
                store.write(writer, total, FieldValue::Number(sum));
            }
        };

        recompute(store);
        let subscription = store.subscribe(
            writer,
            fields.iter().map(|field| field.to_string()).collect(),
            move |store, _change| recompute(store),
        );

        info!(fields = fields.len(), total, "statement total wired");

        Self {
            subscription,
            recomputations,
        }
    }

    /// Recomputations so far, including the one performed while wiring.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn cancel(&self) {
        self.subscription.cancel();
    }
}
