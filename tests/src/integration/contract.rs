//! # Facade Contract
//!
//! The same scenarios run against the bit-packed, hash-set and remote-backed
//! filters. Each test constructs its own filters.

#[cfg(test)]
mod tests {
    use bloom_filters::{FilterError, MembershipFilter};

    use crate::support::{generate_instance_id, init_tracing, new_filter, ALL_VARIANTS};

    // =============================================================================
    // BASIC OPERATIONS
    // =============================================================================

    #[test]
    fn test_add_new_byte_slice_then_exists() {
        init_tracing();
        for variant in ALL_VARIANTS {
            let filter = new_filter(variant, 10_000, 0.001).unwrap();
            let input = b"test data 2";

            assert!(!filter.add(input).unwrap(), "{:?}: new add must return false", variant);
            assert!(filter.exists(input).unwrap(), "{:?}: exists after add", variant);
        }
    }

    #[test]
    fn test_add_string_then_exists_string() {
        for variant in ALL_VARIANTS {
            let filter = new_filter(variant, 10_000, 0.001).unwrap();

            assert!(!filter.add_str("test data 3").unwrap(), "{:?}", variant);
            assert!(filter.exists_str("test data 3").unwrap(), "{:?}", variant);
            // Text and its bytes are the same element.
            assert!(filter.exists(b"test data 3").unwrap(), "{:?}", variant);
        }
    }

    #[test]
    fn test_alpha_beta_scenario() {
        for variant in ALL_VARIANTS {
            let filter = new_filter(variant, 1000, 0.01).unwrap();

            assert!(!filter.exists_str("beta").unwrap(), "{:?}", variant);
            assert!(!filter.add_str("alpha").unwrap(), "{:?}", variant);
            assert!(filter.add_str("alpha").unwrap(), "{:?}", variant);
            assert!(!filter.exists_str("beta").unwrap(), "{:?}", variant);
        }
    }

    #[test]
    fn test_empty_input_is_valid() {
        for variant in ALL_VARIANTS {
            let filter = new_filter(variant, 1000, 0.001).unwrap();

            assert!(!filter.exists(&[]).unwrap(), "{:?}", variant);
            assert!(!filter.add(&[]).unwrap(), "{:?}", variant);
            assert!(filter.exists(&[]).unwrap(), "{:?}", variant);
            assert!(filter.add_str("").unwrap(), "{:?}", variant);
        }
    }

    #[test]
    fn test_exists_before_add_does_not_insert() {
        for variant in ALL_VARIANTS {
            let filter = new_filter(variant, 1000, 0.001).unwrap();

            assert!(!filter.exists_str("probe").unwrap(), "{:?}", variant);
            assert!(!filter.exists_str("probe").unwrap(), "{:?}", variant);
            assert!(!filter.add_str("probe").unwrap(), "{:?}", variant);
        }
    }

    // =============================================================================
    // NO FALSE NEGATIVES
    // =============================================================================

    #[test]
    fn test_random_ids_never_false_negative() {
        const ITERATIONS: usize = 10_000;

        for variant in ALL_VARIANTS {
            let filter = new_filter(variant, ITERATIONS, 0.001).unwrap();
            let ids: Vec<String> = (0..ITERATIONS).map(|_| generate_instance_id(16)).collect();

            let mut collisions = 0;
            for id in &ids {
                if filter.add_str(id).unwrap() {
                    collisions += 1;
                }
            }
            for id in &ids {
                assert!(
                    filter.exists_str(id).unwrap(),
                    "{:?}: false negative for {}",
                    variant,
                    id
                );
            }
            // Expected around 0.5 * ITERATIONS * rate at most.
            assert!(collisions < 100, "{:?}: {} collisions", variant, collisions);
        }
    }

    #[test]
    fn test_early_elements_survive_overload() {
        for variant in ALL_VARIANTS {
            let filter = new_filter(variant, 100, 0.01).unwrap();
            filter.add_str("first").unwrap();

            for i in 0..5_000 {
                filter.add(format!("overload_{}", i).as_bytes()).unwrap();
            }
            assert!(filter.exists_str("first").unwrap(), "{:?}", variant);
        }
    }

    // =============================================================================
    // CONSTRUCTION
    // =============================================================================

    #[test]
    fn test_invalid_construction_fails() {
        for variant in ALL_VARIANTS {
            assert!(
                matches!(
                    new_filter(variant, 0, 0.001),
                    Err(FilterError::InvalidConfiguration { .. })
                ),
                "{:?}: zero capacity",
                variant
            );
            assert!(
                matches!(
                    new_filter(variant, 100, 1.5),
                    Err(FilterError::InvalidConfiguration { .. })
                ),
                "{:?}: rate above 1",
                variant
            );
        }
    }
}
