//! Tests for candidate set membership and ordering

#[cfg(test)]
mod tests {
    use collapsetile::algorithm::bitset::CandidateSet;

    // Inserts add membership; out-of-range ids are ignored
    // Verified by growing the set on out-of-range inserts
    #[test]
    fn test_insert_contains() {
        let mut set = CandidateSet::new(8);
        assert!(set.is_empty());

        set.insert(0);
        set.insert(5);
        set.insert(8);
        assert!(set.contains(0));
        assert!(set.contains(5));
        assert!(!set.contains(8));
        assert_eq!(set.count(), 2);
        assert!(!set.contains(42));
    }

    // Iteration yields ids in catalog order regardless of insertion order
    // Verified by collecting into insertion order
    #[test]
    fn test_iteration_in_catalog_order() {
        let mut set = CandidateSet::new(10);
        for tile in [7, 2, 9, 0] {
            set.insert(tile);
        }
        assert_eq!(set.to_vec(), vec![0, 2, 7, 9]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 7, 9]);
    }

    // Singleton reports the only member and nothing otherwise
    // Verified by returning the first member of any non-empty set
    #[test]
    fn test_singleton() {
        let mut set = CandidateSet::new(4);
        assert_eq!(set.singleton(), None);

        set.insert(3);
        assert_eq!(set.singleton(), Some(3));

        set.insert(1);
        assert_eq!(set.singleton(), None);
    }

    // Clearing drops every member
    #[test]
    fn test_clear() {
        let mut set = CandidateSet::new(5);
        for tile in 0..5 {
            set.insert(tile);
        }
        assert_eq!(set.count(), 5);

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.singleton(), None);
    }

    // Display lists count and members
    #[test]
    fn test_display() {
        let mut set = CandidateSet::new(4);
        set.insert(1);
        set.insert(3);
        assert_eq!(set.to_string(), "CandidateSet(2 tiles: [1, 3])");
    }
}
