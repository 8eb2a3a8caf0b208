use crate::form::{resolve, FieldStore, FieldValue, Subscription, WriterId};
use chrono::NaiveDate;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Input,
    Output,
}

/// Logical rule field together with the concrete names it may appear under.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub key: &'static str,
    pub kind: BindingKind,
    pub optional: bool,
    pub aliases: &'static [&'static str],
}

impl Binding {
    /// Input the rule cannot be wired without.
    pub const fn required(key: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: BindingKind::Input,
            optional: false,
            aliases,
        }
    }

    /// Input read live when present; absent fields read as empty.
    pub const fn watched(key: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: BindingKind::Input,
            optional: true,
            aliases,
        }
    }

    pub const fn output(key: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: BindingKind::Output,
            optional: false,
            aliases,
        }
    }

    pub const fn optional_output(key: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: BindingKind::Output,
            optional: true,
            aliases,
        }
    }
}

/// Whether an evaluation is the one performed while wiring or a reaction to a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Change,
}

/// Live view over the fields a rule resolved at wiring time.
pub struct RuleInputs<'a> {
    store: &'a FieldStore,
    fields: &'a BTreeMap<&'static str, String>,
}

impl RuleInputs<'_> {
    pub fn value(&self, key: &str) -> FieldValue {
        self.fields
            .get(key)
            .and_then(|field| self.store.get(field))
            .unwrap_or_default()
    }

    pub fn number(&self, key: &str) -> f64 {
        self.value(key).to_number()
    }

    pub fn code(&self, key: &str) -> String {
        self.value(key).as_code()
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.value(key).as_date()
    }
}

/// Output values produced by one evaluation, keyed by binding key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Updates {
    entries: Vec<(&'static str, FieldValue)>,
}

impl Updates {
    pub fn with(mut self, key: &'static str, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Updates {
    type Item = (&'static str, FieldValue);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A fee rule: declared field bindings plus a body evaluated against them.
pub trait Derivation {
    fn name(&self) -> &'static str;

    fn bindings(&self) -> &'static [Binding];

    fn derive(&self, inputs: &RuleInputs<'_>, phase: Phase) -> Updates;
}

/// Returned when a rule's required fields are not all present in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unwired {
    pub rule: &'static str,
    pub missing: Vec<&'static str>,
}

/// A rule that resolved its bindings and is reacting to store changes.
#[derive(Debug)]
pub struct WiredRule {
    name: &'static str,
    subscription: Subscription,
    evaluations: Rc<Cell<u64>>,
}

impl WiredRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluations so far, including the one performed while wiring.
    pub fn evaluations(&self) -> u64 {
        self.evaluations.get()
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn cancel(&self) {
        self.subscription.cancel();
    }
}

struct BoundRule<D> {
    rule: D,
    fields: BTreeMap<&'static str, String>,
    writer: WriterId,
    evaluations: Rc<Cell<u64>>,
}

impl<D: Derivation> BoundRule<D> {
    fn evaluate(&self, store: &FieldStore, phase: Phase) {
        self.evaluations.set(self.evaluations.get() + 1);

        let inputs = RuleInputs {
            store,
            fields: &self.fields,
        };
        let updates = self.rule.derive(&inputs, phase);
        debug!(
            rule = self.rule.name(),
            ?phase,
            writes = updates.len(),
            "fee rule evaluated"
        );

        for (key, value) in updates {
            match self.fields.get(key) {
                Some(field) => {
                    store.write(self.writer, field, value);
                }
                None => debug!(rule = self.rule.name(), key, "skipping unbound output"),
            }
        }
    }
}

/// Resolves the rule's bindings, evaluates it once, and subscribes it to its inputs.
///
/// A rule with any required input or output missing is never wired; this is not retried.
pub fn wire<D>(store: &FieldStore, rule: D) -> Result<WiredRule, Unwired>
where
    D: Derivation + 'static,
{
    let name = rule.name();
    let mut fields = BTreeMap::new();
    let mut missing = Vec::new();

    for binding in rule.bindings() {
        match resolve(store, binding.aliases) {
            Some(field) => {
                fields.insert(binding.key, field);
            }
            None if binding.optional => {}
            None => missing.push(binding.key),
        }
    }

    if !missing.is_empty() {
        debug!(rule = name, ?missing, "fee rule not wired: unresolved fields");
        return Err(Unwired {
            rule: name,
            missing,
        });
    }

    let inputs: Vec<String> = rule
        .bindings()
        .iter()
        .filter(|binding| binding.kind == BindingKind::Input)
        .filter_map(|binding| fields.get(binding.key).cloned())
        .collect();

    let writer = store.allocate_writer();
    let evaluations = Rc::new(Cell::new(0));
    let bound = Rc::new(BoundRule {
        rule,
        fields,
        writer,
        evaluations: evaluations.clone(),
    });

    bound.evaluate(store, Phase::Initial);

    let handle = bound.clone();
    let subscription = store.subscribe(writer, inputs, move |store, _change| {
        handle.evaluate(store, Phase::Change);
    });

    info!(rule = name, writer = writer.get(), "fee rule wired");

    Ok(WiredRule {
        name,
        subscription,
        evaluations,
    })
}
