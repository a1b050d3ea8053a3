use int_forest::Strategy;
use int_forest_fuzz::{run, FuzzConfig, Fuzzer};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_seed_matches_reference(seed in any::<u64>(), key_space in 1u32..500) {
        for strategy in Strategy::ALL {
            let config = FuzzConfig {
                strategy,
                seed: Some(seed),
                tasks: 2,
                task_size: 150,
                key_space: Some(key_space),
                check_invariants: true,
                dump_on_failure: true,
            };
            let result = run(&config);
            prop_assert!(result.is_ok(), "{:?}", result.err());
        }
    }

    #[test]
    fn keys_stay_in_key_space(seed in any::<u64>(), k in 0u32..1_000) {
        let mut fuzzer = Fuzzer::new(Some(seed));
        for _ in 0..64 {
            let key = i64::from(fuzzer.random_key(Some(k)));
            prop_assert!((-i64::from(k)..=i64::from(k)).contains(&key));
        }
    }
}
