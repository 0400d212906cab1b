use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Membership testing by equality or hash collision.
pub trait ContainsSimilar {
    /// The element type.
    type Item;

    /// Returns `true` if any element equals `item` or hashes to the same
    /// value as `item`.
    ///
    /// The hash comparison makes this a looser test than plain equality:
    /// two unequal values whose hashes collide still count as a match.
    fn contains_similar(&self, item: &Self::Item) -> bool;
}

impl<T> ContainsSimilar for [T]
where
    T: PartialEq + Hash,
{
    type Item = T;

    fn contains_similar(&self, item: &T) -> bool {
        let target = hash_of(item);
        self.iter()
            .any(|candidate| candidate == item || hash_of(candidate) == target)
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_equal_elements() {
        assert!(vec![1, 2, 3].contains_similar(&2));
        assert!(!vec![1, 2, 3].contains_similar(&4));
    }

    #[test]
    fn empty_sequences_contain_nothing() {
        let nothing: Vec<u8> = Vec::new();
        assert!(!nothing.contains_similar(&1));
    }

    /// Unequal values whose hashes collide still count as members.
    #[test]
    fn hash_collision_alone_is_a_match() {
        #[derive(PartialEq)]
        struct Clashing(u8);

        impl Hash for Clashing {
            fn hash<H: Hasher>(&self, state: &mut H) {
                // Every value hashes identically.
                0u8.hash(state);
            }
        }

        let items = [Clashing(1)];
        assert!(items[0] != Clashing(2));
        assert!(items.contains_similar(&Clashing(2)));
    }
}
