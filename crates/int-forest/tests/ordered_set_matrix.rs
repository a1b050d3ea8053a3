use int_forest::{OrderedSet, Strategy};

fn each_strategy(mut f: impl FnMut(Strategy, &mut dyn OrderedSet)) {
    for strategy in Strategy::ALL {
        let mut set = strategy.build();
        f(strategy, set.as_mut());
    }
}

#[test]
fn five_values_then_erase_middle() {
    each_strategy(|strategy, set| {
        for v in [5, 3, 8, 1, 4] {
            set.insert(v);
        }
        assert!(set.contains(4), "{strategy}");
        assert!(!set.contains(9), "{strategy}");

        set.erase(3);
        assert!(!set.contains(3), "{strategy}");
        for v in [5, 8, 1, 4] {
            assert!(set.contains(v), "{strategy}: {v} missing");
        }
        assert_eq!(set.values(), vec![1, 4, 5, 8], "{strategy}");
        set.check().unwrap();
    });
}

#[test]
fn erase_on_empty_is_noop() {
    each_strategy(|strategy, set| {
        set.erase(7);
        assert!(set.is_empty(), "{strategy}");
        assert_eq!(set.find(7), None, "{strategy}");
        assert!(!set.contains(7), "{strategy}");
        assert_eq!(set.print(), "∅");
        set.check().unwrap();
    });
}

#[test]
fn insert_twice_equals_insert_once() {
    each_strategy(|strategy, set| {
        set.insert(42);
        let allocated = set.allocated();
        set.insert(42);
        assert_eq!(set.allocated(), allocated, "{strategy}");
        assert_eq!(set.values(), vec![42], "{strategy}");
        assert_eq!(set.size(), 1, "{strategy}");
    });
}

#[test]
fn erase_twice_equals_erase_once() {
    each_strategy(|strategy, set| {
        for v in [1, 2, 3] {
            set.insert(v);
        }
        set.erase(2);
        let once = set.values();
        set.erase(2);
        assert_eq!(set.values(), once, "{strategy}");
        assert_eq!(once, vec![1, 3], "{strategy}");
        set.check().unwrap();
    });
}

#[test]
fn insert_all_then_erase_all_in_another_order() {
    let values: Vec<i32> = (0..500).map(|i| (i * 7919) % 1000 - 500).collect();
    each_strategy(|strategy, set| {
        for &v in &values {
            set.insert(v);
        }
        assert_eq!(set.size(), values.len(), "{strategy}");
        set.check().unwrap();

        let mut order = values.clone();
        order.sort_by_key(|v| (v.rem_euclid(13), *v));
        for v in order {
            set.erase(v);
        }
        assert!(set.is_empty(), "{strategy}");
        assert_eq!(set.root(), None, "{strategy}");
        assert_eq!(set.size(), 0, "{strategy}");
    });
}

#[test]
fn extreme_values() {
    each_strategy(|strategy, set| {
        for v in [i32::MAX, i32::MIN, 0, -1, 1] {
            set.insert(v);
        }
        assert_eq!(set.values(), vec![i32::MIN, -1, 0, 1, i32::MAX], "{strategy}");
        set.erase(i32::MIN);
        set.erase(i32::MAX);
        assert_eq!(set.values(), vec![-1, 0, 1], "{strategy}");
        set.check().unwrap();
    });
}

#[test]
fn arena_only_grows() {
    each_strategy(|strategy, set| {
        let base = set.allocated();
        for v in 0..10 {
            set.insert(v);
        }
        for v in 0..10 {
            set.erase(v);
        }
        assert!(set.is_empty(), "{strategy}");
        assert_eq!(set.allocated(), base + 10, "{strategy}");
    });
}

#[test]
fn dump_of_sorted_insert_path() {
    const N: usize = 100_000;
    for strategy in [Strategy::Splay, Strategy::TopDownSplay] {
        let mut set = strategy.build();
        for v in 0..N as i32 {
            set.insert(v);
        }
        set.check().unwrap();

        let dump = set.print();
        let lines: Vec<&str> = dump.lines().collect();
        // One line per node plus one `∅` per inner node: a single path.
        assert_eq!(lines.len(), 2 * N - 1, "{strategy}");
        assert_eq!(lines.iter().filter(|line| line.ends_with('∅')).count(), N - 1, "{strategy}");
        assert!(lines[0].ends_with(&format!(" {}", N - 1)), "{strategy}: {}", lines[0]);
        // The leaf at the bottom of the path is drawn with collapsed guides.
        assert!(lines[N - 1].ends_with(" 0"), "{strategy}: {}", lines[N - 1]);
        assert!(lines[N - 1].starts_with('…'), "{strategy}");
        assert_eq!(lines[2 * N - 2], "└─ ∅", "{strategy}");
        assert!(lines.iter().all(|line| line.chars().count() < 100), "{strategy}");
    }
}
