//! Ordered configuration lists (list columns, search fields, tabs, statuses, widgets).
//!
//! The backend stores these lists in the order it receives them, so the UI
//! reorders a local copy and sends the whole sequence back on save.

use serde::{Deserialize, Serialize};

/// Item of an ordered configuration list, identified by a unique key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Direction of a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Moves the item with `target_key` one position up or down.
///
/// Returns a new sequence; the input is left untouched so callers can keep it
/// for rollback. Unknown keys and moves past either end return an unchanged
/// copy.
pub fn move_item<T: Keyed + Clone>(items: &[T], target_key: &str, direction: MoveDirection) -> Vec<T> {
    let Some(index) = items.iter().position(|item| item.key() == target_key) else {
        log::debug!("move_item: key '{}' not found, order unchanged", target_key);
        return items.to_vec();
    };

    let neighbour = match direction {
        MoveDirection::Up if index > 0 => index - 1,
        MoveDirection::Down if index + 1 < items.len() => index + 1,
        _ => return items.to_vec(),
    };
    let neighbour_key = items[neighbour].key().to_string();
    let target = items[index].clone();

    let mut result: Vec<T> = items
        .iter()
        .filter(|item| item.key() != target_key)
        .cloned()
        .collect();

    // Position of the former neighbour after the target was taken out
    let anchor = result
        .iter()
        .position(|item| item.key() == neighbour_key)
        .unwrap_or(0);
    let insert_at = match direction {
        MoveDirection::Up => anchor,
        MoveDirection::Down => anchor + 1,
    };
    result.insert(insert_at, target);
    result
}

/// Whether the item can move in the given direction (for disabling arrows).
pub fn can_move<T: Keyed>(items: &[T], target_key: &str, direction: MoveDirection) -> bool {
    match items.iter().position(|item| item.key() == target_key) {
        Some(index) => match direction {
            MoveDirection::Up => index > 0,
            MoveDirection::Down => index + 1 < items.len(),
        },
        None => false,
    }
}

/// Keys in their current order.
pub fn ordered_keys<T: Keyed>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.key().to_string()).collect()
}

/// True when both sequences hold the same keys but in a different order,
/// or when the key sets differ.
pub fn is_reordered<T: Keyed>(original: &[T], current: &[T]) -> bool {
    original.len() != current.len()
        || original
            .iter()
            .zip(current.iter())
            .any(|(a, b)| a.key() != b.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: String,
        payload: u32,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.key
        }
    }

    fn items(keys: &[&str]) -> Vec<Item> {
        keys.iter()
            .enumerate()
            .map(|(i, k)| Item {
                key: k.to_string(),
                payload: i as u32,
            })
            .collect()
    }

    fn keys(list: &[Item]) -> Vec<&str> {
        list.iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn test_move_last_up() {
        let s = items(&["a", "b", "c"]);
        let moved = move_item(&s, "c", MoveDirection::Up);
        assert_eq!(keys(&moved), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_move_first_up_is_noop() {
        let s = items(&["a", "b", "c"]);
        assert_eq!(move_item(&s, "a", MoveDirection::Up), s);
    }

    #[test]
    fn test_move_last_down_is_noop() {
        let s = items(&["a", "b", "c"]);
        assert_eq!(move_item(&s, "c", MoveDirection::Down), s);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let s = items(&["a", "b", "c"]);
        assert_eq!(move_item(&s, "zzz", MoveDirection::Down), s);
        assert_eq!(move_item(&s, "zzz", MoveDirection::Up), s);
    }

    #[test]
    fn test_move_down_in_middle() {
        let s = items(&["a", "b", "c", "d"]);
        let moved = move_item(&s, "b", MoveDirection::Down);
        assert_eq!(keys(&moved), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_payload_travels_with_key() {
        let s = items(&["a", "b", "c"]);
        let moved = move_item(&s, "b", MoveDirection::Up);
        assert_eq!(moved[0].payload, 1);
        assert_eq!(moved[1].payload, 0);
    }

    #[test]
    fn test_up_decrements_index_and_keeps_others() {
        let s = items(&["a", "b", "c", "d", "e"]);
        for (index, key) in ["b", "c", "d", "e"].iter().enumerate() {
            let original_index = index + 1;
            let moved = move_item(&s, key, MoveDirection::Up);
            let new_index = moved.iter().position(|i| i.key == *key).unwrap();
            assert_eq!(new_index, original_index - 1);

            let others_before: Vec<_> = keys(&s).into_iter().filter(|k| k != key).collect();
            let others_after: Vec<_> = keys(&moved).into_iter().filter(|k| k != key).collect();
            assert_eq!(others_before, others_after);
        }
    }

    #[test]
    fn test_round_trip_restores_order() {
        let s = items(&["a", "b", "c", "d"]);
        for key in ["b", "c", "d"] {
            let up = move_item(&s, key, MoveDirection::Up);
            let back = move_item(&up, key, MoveDirection::Down);
            assert_eq!(back, s);
        }
        for key in ["a", "b", "c"] {
            let down = move_item(&s, key, MoveDirection::Down);
            let back = move_item(&down, key, MoveDirection::Up);
            assert_eq!(back, s);
        }
    }

    #[test]
    fn test_length_is_preserved() {
        let s = items(&["a", "b", "c"]);
        for key in ["a", "b", "c", "missing"] {
            for direction in [MoveDirection::Up, MoveDirection::Down] {
                assert_eq!(move_item(&s, key, direction).len(), s.len());
            }
        }
    }

    #[test]
    fn test_single_item() {
        let s = items(&["only"]);
        assert_eq!(move_item(&s, "only", MoveDirection::Up), s);
        assert_eq!(move_item(&s, "only", MoveDirection::Down), s);
        assert!(!can_move(&s, "only", MoveDirection::Up));
        assert!(!can_move(&s, "only", MoveDirection::Down));
    }

    #[test]
    fn test_can_move_bounds() {
        let s = items(&["a", "b", "c"]);
        assert!(!can_move(&s, "a", MoveDirection::Up));
        assert!(can_move(&s, "a", MoveDirection::Down));
        assert!(can_move(&s, "c", MoveDirection::Up));
        assert!(!can_move(&s, "c", MoveDirection::Down));
        assert!(!can_move(&s, "x", MoveDirection::Down));
    }

    #[test]
    fn test_is_reordered() {
        let s = items(&["a", "b", "c"]);
        assert!(!is_reordered(&s, &s.clone()));
        let moved = move_item(&s, "b", MoveDirection::Down);
        assert!(is_reordered(&s, &moved));
        assert!(is_reordered(&s, &s[..2]));
        assert_eq!(ordered_keys(&moved), vec!["a", "c", "b"]);
    }
}
