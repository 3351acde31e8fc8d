use serde_json::Value;

/// Merge `update` into `target`. Objects merge key by key, `null` values
/// in `update` leave `target` untouched and everything else overwrites.
pub(crate) fn merge_non_null_json_value(update: Value, target: &mut Value) {
    match (update, target) {
        (Value::Null, _) => {}
        (Value::Object(update), Value::Object(target)) => {
            for (key, value) in update {
                match target.get_mut(&key) {
                    Some(existing) => merge_non_null_json_value(value, existing),
                    None => {
                        if !value.is_null() {
                            target.insert(key, value);
                        }
                    }
                }
            }
        }
        (update, target) => *target = update,
    }
}

/// The parts of `update` that differ from `current`, as a sparse object.
pub(crate) fn json_difference(current: Value, update: &Value) -> Value {
    match (current, update) {
        (Value::Object(current), Value::Object(update)) => {
            let mut diff = serde_json::Map::new();
            for (key, value) in update {
                match current.get(key) {
                    Some(existing) if existing == value => {}
                    Some(existing) if existing.is_object() && value.is_object() => {
                        diff.insert(key.clone(), json_difference(existing.clone(), value));
                    }
                    _ => {
                        diff.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Object(diff)
        }
        (current, update) if &current == update => Value::Object(Default::default()),
        (_, update) => update.clone(),
    }
}
