//! # False Positive Bound
//!
//! Insert `capacity` random elements, probe disjoint random elements and
//! compare the observed rate with the configured one.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bloom_filters::{calculate_optimal_parameters, BloomFilter, MembershipFilter};

    use crate::support::{generate_instance_id, new_filter, Variant};

    fn observed_rate(filter: &dyn MembershipFilter, capacity: usize, trials: usize) -> f64 {
        let inserted: HashSet<String> = (0..capacity).map(|_| generate_instance_id(16)).collect();
        for id in &inserted {
            filter.add_str(id).unwrap();
        }

        let mut false_positives = 0;
        let mut probed = 0;
        while probed < trials {
            let probe = generate_instance_id(16);
            if inserted.contains(&probe) {
                continue;
            }
            probed += 1;
            if filter.exists_str(&probe).unwrap() {
                false_positives += 1;
            }
        }
        false_positives as f64 / trials as f64
    }

    #[test]
    fn test_bits_rate_within_three_times_target() {
        let rate = 0.001;
        let capacity = 20_000;
        let filter = new_filter(Variant::Bits, capacity, rate).unwrap();

        let observed = observed_rate(&*filter, capacity, 50_000);
        assert!(
            observed <= rate * 3.0,
            "Observed FPR {} exceeds 3x target {}",
            observed,
            rate
        );
    }

    #[test]
    fn test_hash_set_rate_within_three_times_target() {
        let rate = 0.001;
        let capacity = 20_000;
        let filter = new_filter(Variant::HashSet, capacity, rate).unwrap();

        let observed = observed_rate(&*filter, capacity, 50_000);
        assert!(observed <= rate * 3.0, "Observed FPR {}", observed);
    }

    #[test]
    fn test_looser_target_gives_more_false_positives() {
        let capacity = 5_000;
        let tight = new_filter(Variant::Bits, capacity, 0.001).unwrap();
        let loose = new_filter(Variant::Bits, capacity, 0.1).unwrap();

        let tight_rate = observed_rate(&*tight, capacity, 20_000);
        let loose_rate = observed_rate(&*loose, capacity, 20_000);
        assert!(loose_rate > tight_rate);
        assert!(loose_rate <= 0.3, "Loose FPR {}", loose_rate);
    }

    #[test]
    fn test_estimated_rate_tracks_configured_rate() {
        let capacity = 10_000;
        let filter = BloomFilter::new(capacity, 0.01).unwrap();
        for _ in 0..capacity {
            filter.add_str(&generate_instance_id(16)).unwrap();
        }

        let params = calculate_optimal_parameters(capacity, 0.01).unwrap();
        let estimated = filter.estimated_fpr();
        // A handful of inserts may collide and not be counted.
        assert!(estimated <= params.expected_fpr * 1.01);
        assert!(estimated >= params.expected_fpr * 0.9);
    }
}
