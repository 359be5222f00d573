//! Tests for placement bookkeeping

#[cfg(test)]
mod tests {
    use foursides::algorithm::tracker::GenerationTracker;
    use foursides::spatial::blocks::BlockId;

    // Tests counts accumulate per id and in total
    // Verified by storing placements in a set
    #[test]
    fn test_record_placement_counts() {
        let mut tracker = GenerationTracker::new();
        let grass = BlockId::from("grass");
        let water = BlockId::from("water");

        tracker.record_placement(&grass);
        tracker.record_placement(&grass);
        tracker.record_placement(&water);

        assert_eq!(tracker.count(&grass), 2);
        assert_eq!(tracker.count(&water), 1);
        assert_eq!(tracker.total_placed(), 3);
        assert_eq!(tracker.distinct_placed(), 2);
    }

    // Tests unseen ids report zero
    #[test]
    fn test_unplaced_id() {
        let tracker = GenerationTracker::new();
        let stone = BlockId::from("stone");
        assert_eq!(tracker.count(&stone), 0);
        assert!(!tracker.has_placed(&stone));
        assert_eq!(tracker.iter().count(), 0);
    }

    // Tests iteration exposes every recorded id with its count
    #[test]
    fn test_iter_counts() {
        let mut tracker = GenerationTracker::new();
        let sand = BlockId::from("sand");
        for _ in 0..4 {
            tracker.record_placement(&sand);
        }
        let entries: Vec<(&BlockId, usize)> = tracker.iter().collect();
        assert_eq!(entries, vec![(&sand, 4)]);
        assert!(tracker.has_placed(&sand));
    }
}
