use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// Handle onto the invocation count recorded by a comparator built with
/// [`counting`].
#[derive(Clone)]
pub struct CmpCounter(Rc<Cell<u64>>);

impl CmpCounter {
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    pub fn reset(&self) {
        self.0.set(0);
    }
}

/// Wrap a comparator so every invocation is counted.
///
/// The container never requires a counting comparator; this decorator exists
/// for diagnostics and tests that report comparison costs. The returned
/// closure and the handle share the same counter, so the handle stays valid
/// after the closure has been moved into a list.
pub fn counting<T, C>(comparator: C) -> (impl Fn(&T, &T) -> Ordering + Clone, CmpCounter)
where
    C: Fn(&T, &T) -> Ordering + Clone,
{
    let counter = CmpCounter(Rc::new(Cell::new(0)));
    let handle = counter.clone();
    let cmp = move |a: &T, b: &T| {
        handle.0.set(handle.0.get() + 1);
        comparator(a, b)
    };
    (cmp, counter)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_and_resets() {
        let (cmp, counter) = counting(|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(counter.get(), 0);
        assert_eq!(cmp(&1, &2), Ordering::Less);
        assert_eq!(cmp(&2, &2), Ordering::Equal);
        assert_eq!(counter.get(), 2);
        counter.reset();
        assert_eq!(counter.get(), 0);
        assert_eq!(cmp(&3, &2), Ordering::Greater);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_counts_through_a_list() {
        use crate::SortedBlockList;

        let (cmp, counter) = counting(|a: &i32, b: &i32| a.cmp(b));
        let mut list = SortedBlockList::new(cmp);
        for x in 0..10 {
            list.add(x);
        }
        assert!(counter.get() > 0);

        counter.reset();
        assert!(list.contains(&5));
        assert!(counter.get() > 0);
    }
}
