use int_forest::top_down_splay::HEADER;
use int_forest::{OrderedSet, TopDownSplaySet};

fn insert_value(set: &mut TopDownSplaySet, value: i32) {
    set.insert(value);
    if let Err(err) = set.check() {
        panic!("invalid splay tree after insert({value}): {err}\n{}", set.print());
    }
    let root = set.root.expect("non-empty after insert");
    assert_eq!(set.arena()[root].v, value, "inserted value must end at the root");
}

fn delete_value(set: &mut TopDownSplaySet, value: i32) {
    set.erase(value);
    if let Err(err) = set.check() {
        panic!("invalid splay tree after erase({value}): {err}\n{}", set.print());
    }
}

#[test]
fn td_splay_numbers_from_0_to_100_matrix() {
    let mut set = TopDownSplaySet::new();

    for i in 0..=100 {
        insert_value(&mut set, i);
        assert_eq!(set.size(), (i + 1) as usize);
    }
    for i in 0..=100 {
        delete_value(&mut set, i);
        assert_eq!(set.size(), (100 - i) as usize);
    }
    assert_eq!(set.root, None);
}

#[test]
fn td_splay_numbers_from_100_to_11_matrix() {
    let mut set = TopDownSplaySet::new();

    for i in (11..=100).rev() {
        insert_value(&mut set, i);
    }
    for i in 11..=100 {
        delete_value(&mut set, i);
    }
    assert_eq!(set.root, None);
}

#[test]
fn td_splay_interleaved_matrix() {
    let mut set = TopDownSplaySet::new();
    for i in 0..300 {
        insert_value(&mut set, (i * 71) % 300);
    }
    for i in (0..300).filter(|i| i % 4 == 1) {
        delete_value(&mut set, i);
    }
    let expected: Vec<i32> = (0..300).filter(|i| i % 4 != 1).collect();
    assert_eq!(set.values(), expected);
}

#[test]
fn td_splay_find_moves_hit_to_root() {
    let mut set = TopDownSplaySet::new();
    for v in [40, 20, 60, 10, 30, 50, 70] {
        set.insert(v);
    }
    for v in [10, 70, 30, 50, 40, 40] {
        let node = set.find(v).expect("present");
        assert_eq!(set.root, Some(node));
        set.check().unwrap();
    }
    assert_eq!(set.find(35), None);
    set.check().unwrap();
    assert_eq!(set.values(), vec![10, 20, 30, 40, 50, 60, 70]);
}

#[test]
fn td_splay_header_never_reachable() {
    let mut set = TopDownSplaySet::new();
    for v in [5, -5, 10, -10, 0] {
        set.insert(v);
        set.find(v + 1);
        set.erase(v - 1);
    }
    set.check().unwrap();
    assert_ne!(set.root, Some(HEADER));
    assert_eq!(set.values(), vec![-10, -5, 0, 5, 10]);
}

#[test]
fn td_splay_duplicate_insert_is_noop() {
    let mut set = TopDownSplaySet::new();
    for v in [3, 1, 2] {
        set.insert(v);
    }
    let allocated = set.allocated();
    insert_value(&mut set, 1);
    insert_value(&mut set, 3);
    assert_eq!(set.allocated(), allocated);
    assert_eq!(set.values(), vec![1, 2, 3]);
}

#[test]
fn td_splay_erase_absent_is_noop() {
    let mut set = TopDownSplaySet::new();
    delete_value(&mut set, 7);
    assert!(set.is_empty());
    for v in [1, 2, 3] {
        set.insert(v);
    }
    delete_value(&mut set, 7);
    assert_eq!(set.values(), vec![1, 2, 3]);
}
