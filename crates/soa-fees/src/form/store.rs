use super::value::FieldValue;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identity attached to every write so subscribers can ignore their own echoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WriterId(u64);

impl WriterId {
    /// Operator input and initial record loads.
    pub const OPERATOR: WriterId = WriterId(0);

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Notification delivered to subscribers after a field was written.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: String,
    pub value: FieldValue,
    pub origin: WriterId,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
}

type Handler = Rc<dyn Fn(&FieldStore, &FieldChange)>;

struct Subscriber {
    id: u64,
    owner: WriterId,
    fields: Vec<String>,
    active: Rc<Cell<bool>>,
    handler: Handler,
}

#[derive(Default)]
struct StoreState {
    values: BTreeMap<String, FieldValue>,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
    next_writer: u64,
}

/// Observable name → value map backing a single SOA form.
///
/// Cloning yields another handle to the same store. Delivery is synchronous: a write returns
/// only after every interested subscriber (and anything those subscribers wrote) has run.
#[derive(Clone, Default)]
pub struct FieldStore {
    state: Rc<RefCell<StoreState>>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.state.borrow().values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<FieldValue> {
        self.state.borrow().values.get(name).cloned()
    }

    /// Numeric view of a field; absent fields read as 0.
    pub fn number(&self, name: &str) -> f64 {
        self.state
            .borrow()
            .values
            .get(name)
            .map(FieldValue::to_number)
            .unwrap_or(0.0)
    }

    /// Adds the field with `initial` unless it already exists. Never notifies.
    pub fn create_if_missing(&self, name: &str, initial: impl Into<FieldValue>) -> bool {
        let mut state = self.state.borrow_mut();
        if state.values.contains_key(name) {
            return false;
        }
        state.values.insert(name.to_string(), initial.into());
        true
    }

    /// Operator write. Every subscriber of `name` is notified.
    pub fn set(&self, name: &str, value: impl Into<FieldValue>) -> Result<(), StoreError> {
        if self.write(WriterId::OPERATOR, name, value) {
            Ok(())
        } else {
            Err(StoreError::UnknownField(name.to_string()))
        }
    }

    /// Writer-tagged write. Subscriptions owned by `writer` are skipped; returns `false` when the
    /// field does not exist.
    pub fn write(&self, writer: WriterId, name: &str, value: impl Into<FieldValue>) -> bool {
        let value = value.into();

        let pending: Vec<(Rc<Cell<bool>>, Handler)> = {
            let mut state = self.state.borrow_mut();
            match state.values.get_mut(name) {
                Some(slot) => *slot = value.clone(),
                None => return false,
            }

            state
                .subscribers
                .iter()
                .filter(|subscriber| {
                    subscriber.owner != writer
                        && subscriber.fields.iter().any(|field| field == name)
                })
                .map(|subscriber| (subscriber.active.clone(), subscriber.handler.clone()))
                .collect()
        };

        let change = FieldChange {
            field: name.to_string(),
            value,
            origin: writer,
        };

        for (active, handler) in pending {
            // An earlier handler in this delivery may have torn the form down.
            if active.get() {
                handler(self, &change);
            }
        }

        true
    }

    /// Registers `handler` for changes to any of `fields` not written by `owner`.
    pub fn subscribe<F>(&self, owner: WriterId, fields: Vec<String>, handler: F) -> Subscription
    where
        F: Fn(&FieldStore, &FieldChange) + 'static,
    {
        let active = Rc::new(Cell::new(true));
        let mut state = self.state.borrow_mut();
        let id = state.next_subscription;
        state.next_subscription += 1;
        state.subscribers.push(Subscriber {
            id,
            owner,
            fields,
            active: active.clone(),
            handler: Rc::new(handler),
        });

        Subscription {
            id,
            active,
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn allocate_writer(&self) -> WriterId {
        let mut state = self.state.borrow_mut();
        state.next_writer += 1;
        WriterId(state.next_writer)
    }

    pub fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        self.state.borrow().values.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }
}

impl fmt::Debug for FieldStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FieldStore")
            .field("fields", &state.values.len())
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

/// Handle to a live subscription. Dropping the handle leaves the subscription running.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    active: Rc<Cell<bool>>,
    state: Weak<RefCell<StoreState>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn cancel(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .subscribers
                .retain(|subscriber| subscriber.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Seen = Rc<RefCell<Vec<FieldChange>>>;

    fn recording(store: &FieldStore, owner: WriterId, fields: &[&str]) -> (Subscription, Seen) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = store.subscribe(
            owner,
            fields.iter().map(|field| field.to_string()).collect(),
            move |_, change| sink.borrow_mut().push(change.clone()),
        );
        (subscription, seen)
    }

    #[test]
    fn operator_writes_reach_subscribers() {
        let store = FieldStore::new();
        store.create_if_missing("rocYears", FieldValue::Empty);
        let watcher = store.allocate_writer();
        let (_subscription, seen) = recording(&store, watcher, &["rocYears"]);

        store.set("rocYears", 2u32).expect("field exists");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].value, FieldValue::Number(2.0));
        assert_eq!(seen[0].origin, WriterId::OPERATOR);
    }

    #[test]
    fn writers_do_not_hear_their_own_writes() {
        let store = FieldStore::new();
        store.create_if_missing("dst", 0.0);
        let rule = store.allocate_writer();
        let other = store.allocate_writer();
        let (_own, own_seen) = recording(&store, rule, &["dst"]);
        let (_other, other_seen) = recording(&store, other, &["dst"]);

        assert!(store.write(rule, "dst", 30.0));

        assert!(own_seen.borrow().is_empty());
        assert_eq!(other_seen.borrow().len(), 1);
        assert_eq!(store.number("dst"), 30.0);
    }

    #[test]
    fn unknown_fields_are_rejected_without_notification() {
        let store = FieldStore::new();
        let watcher = store.allocate_writer();
        let (_subscription, seen) = recording(&store, watcher, &["ghost"]);

        assert_eq!(
            store.set("ghost", 1.0),
            Err(StoreError::UnknownField("ghost".to_string()))
        );
        assert!(!store.write(watcher, "ghost", 1.0));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn create_if_missing_keeps_existing_values() {
        let store = FieldStore::new();
        assert!(store.create_if_missing("licSUF", 125.0));
        assert!(!store.create_if_missing("licSUF", 0.0));
        assert_eq!(store.get("licSUF"), Some(FieldValue::Number(125.0)));
    }

    #[test]
    fn cancel_is_idempotent_and_stops_delivery() {
        let store = FieldStore::new();
        store.create_if_missing("dst", 0.0);
        let watcher = store.allocate_writer();
        let (subscription, seen) = recording(&store, watcher, &["dst"]);

        subscription.cancel();
        subscription.cancel();
        store.set("dst", 30.0).expect("field exists");

        assert!(!subscription.is_active());
        assert!(seen.borrow().is_empty());
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn cancellation_during_delivery_silences_later_handlers() {
        let store = FieldStore::new();
        store.create_if_missing("dst", 0.0);
        let first = store.allocate_writer();
        let second = store.allocate_writer();

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let target = victim.clone();
        let _killer = store.subscribe(first, vec!["dst".to_string()], move |_, _| {
            if let Some(subscription) = target.borrow().as_ref() {
                subscription.cancel();
            }
        });
        let (subscription, seen) = recording(&store, second, &["dst"]);
        *victim.borrow_mut() = Some(subscription);

        store.set("dst", 30.0).expect("field exists");

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn handlers_may_write_other_fields() {
        let store = FieldStore::new();
        store.create_if_missing("amRadioOperatorsCert", 0.0);
        store.create_if_missing("totalAmount", 0.0);
        let rule = store.allocate_writer();
        let _doubler = store.subscribe(
            rule,
            vec!["amRadioOperatorsCert".to_string()],
            move |store, change| {
                store.write(rule, "totalAmount", change.value.to_number() * 2.0);
            },
        );

        store.set("amRadioOperatorsCert", 195.0).expect("field exists");

        assert_eq!(store.number("totalAmount"), 390.0);
    }
}
