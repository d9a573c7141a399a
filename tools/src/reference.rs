use std::cmp::Ordering;

/// Flat sorted vector with the same ordering contract as `SortedBlockList`
/// (duplicates kept in arrival order), used as the oracle in differential
/// tests.
pub struct SortedVecList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    comparator: C,
    data: Vec<T>,
}

impl<T, C> SortedVecList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(comparator: C) -> SortedVecList<T, C> {
        SortedVecList {
            comparator,
            data: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn add(&mut self, t: T) {
        // Upper bound: equal elements keep their arrival order.
        let idx = match self.data.binary_search_by(|x| {
            match (self.comparator)(x, &t) {
                Ordering::Equal => Ordering::Less,
                other => other,
            }
        }) {
            Ok(idx) | Err(idx) => idx,
        };
        self.data.insert(idx, t);
    }

    pub fn contains(&self, t: &T) -> bool {
        self.data
            .iter()
            .any(|x| (self.comparator)(x, t) == Ordering::Equal)
    }

    pub fn range(&self, from: &T, to: &T) -> Vec<T>
    where
        T: Clone,
    {
        self.data
            .iter()
            .filter(|x| {
                (self.comparator)(from, x) != Ordering::Greater
                    && (self.comparator)(x, to) == Ordering::Less
            })
            .cloned()
            .collect()
    }

    pub fn collect(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}
