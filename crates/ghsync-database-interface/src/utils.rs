use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
};

/// Collapse duplicated keys in a batch, keeping the last payload of each key
/// at the position of its first occurrence.
pub fn dedupe_last_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::with_capacity(items.len());
    let mut output: Vec<T> = Vec::with_capacity(items.len());

    for item in items {
        match positions.entry(key(&item)) {
            Entry::Occupied(e) => output[*e.get()] = item,
            Entry::Vacant(e) => {
                e.insert(output.len());
                output.push(item);
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_payload() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        assert_eq!(
            dedupe_last_by_key(items, |(k, _)| *k),
            vec![("a", 3), ("b", 2)]
        );
    }
}
