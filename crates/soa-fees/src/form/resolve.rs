use super::store::FieldStore;

/// Returns the first alias present in the store, honouring the given priority order.
pub fn resolve(store: &FieldStore, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find(|alias| store.has(alias))
        .map(|alias| alias.to_string())
}
