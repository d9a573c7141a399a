use std::cmp::Ordering;

use block_list::{counting, SortedBlockList};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::helpers::{gen_rand_values_i32, shuffle_clone};
use crate::reference::SortedVecList;

fn cmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

#[test]
fn add_matches_reference() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(0);
    for array_len in 0..64 {
        let values = gen_rand_values_i32(&mut rng, array_len, 16);

        let mut list = SortedBlockList::new(cmp);
        let mut oracle = SortedVecList::new(cmp);

        for x in &values {
            list.add(*x);
            oracle.add(*x);
            assert_eq!(list.len(), oracle.len());
            assert_eq!(list.collect(), oracle.collect());
        }

        let probes = shuffle_clone(&values);
        for x in &probes {
            assert_eq!(list.contains(&(x - 1)), oracle.contains(&(x - 1)));
            assert_eq!(list.contains(x), oracle.contains(x));
            assert_eq!(list.contains(&(x + 1)), oracle.contains(&(x + 1)));
        }
    }
}

#[test]
fn sub_list_matches_reference() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(1);
    let values = gen_rand_values_i32(&mut rng, 200, 16);

    let mut list = SortedBlockList::new(cmp);
    let mut oracle = SortedVecList::new(cmp);
    for x in &values {
        list.add(*x);
        oracle.add(*x);
    }

    for lo in -1..18 {
        for hi in lo..18 {
            assert_eq!(list.sub_list(&lo, &hi).collect(), oracle.range(&lo, &hi));
        }
    }
}

#[test]
fn stability_matches_reference() {
    fn key_cmp(a: &(i32, usize), b: &(i32, usize)) -> Ordering {
        a.0.cmp(&b.0)
    }

    let mut rng: StdRng = SeedableRng::seed_from_u64(2);
    let keys = gen_rand_values_i32(&mut rng, 300, 8);

    let mut list = SortedBlockList::new(key_cmp);
    let mut oracle = SortedVecList::new(key_cmp);
    for (seq, key) in keys.iter().enumerate() {
        list.add((*key, seq));
        oracle.add((*key, seq));
    }

    // Equal keys stay in arrival order in both structures.
    assert_eq!(list.collect(), oracle.collect());
}

#[test]
fn search_cost_is_bounded_by_structure() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(3);
    let values = gen_rand_values_i32(&mut rng, 1000, 1000);

    let (counting_cmp, counter) = counting(cmp);
    let mut list = SortedBlockList::new(counting_cmp);
    for x in &values {
        list.add(*x);
    }

    // A lookup scans at most every directory entry, then one block, plus the
    // final equality check.
    let bound = (list.get_num_blocks() + list.get_block_fill_max() + 1) as u64;
    for x in &values {
        counter.reset();
        assert!(list.contains(x));
        assert!(counter.get() <= bound);
    }
}
