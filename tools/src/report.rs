use std::cmp::Ordering;
use std::fmt::Write;

use block_list::{CmpCounter, SortedBlockList};

/// Render the occupancy and search-cost report for a list built with a
/// counting comparator (see `block_list::counting`).
///
/// The search statistics re-run `contains` for every stored element and
/// record the comparator calls each lookup incurred.
pub fn stats_report<T, C>(list: &SortedBlockList<T, C>, counter: &CmpCounter) -> String
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut out = String::new();
    let _ = writeln!(out, "STATS:");
    let _ = writeln!(out, "list size N = {}", list.len());
    let _ = writeln!(
        out,
        "directory: {} of {} slots used",
        list.get_num_blocks(),
        list.get_dir_capacity()
    );
    let _ = writeln!(
        out,
        "block occupancy: min = {}, avg = {:.2}, max = {}",
        list.get_block_fill_min(),
        list.get_block_fill_avg(),
        list.get_block_fill_max()
    );

    if list.is_empty() {
        let _ = writeln!(out, "no elements, skipping search statistics");
        return out;
    }

    let mut min_cmps = u64::max_value();
    let mut max_cmps = 0;
    let mut total_cmps = 0;
    for item in list.iter() {
        counter.reset();
        // Every stored element is found again; only the cost matters here.
        list.contains(item);
        let cmps = counter.get();
        min_cmps = min_cmps.min(cmps);
        max_cmps = max_cmps.max(cmps);
        total_cmps += cmps;
    }
    let _ = writeln!(
        out,
        "successful search: min cmps = {}, avg cmps = {:.2}, max cmps = {}",
        min_cmps,
        total_cmps as f64 / list.len() as f64,
        max_cmps
    );
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use block_list::counting;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_on_empty_list() {
        let (cmp, counter) = counting(|a: &i32, b: &i32| a.cmp(b));
        let list = SortedBlockList::new(cmp);
        let report = stats_report(&list, &counter);
        assert!(report.contains("list size N = 0"));
        assert!(report.contains("skipping search statistics"));
    }

    #[test]
    fn test_report_sections() {
        let (cmp, counter) = counting(|a: &i32, b: &i32| a.cmp(b));
        let mut list = SortedBlockList::new(cmp);
        for x in 0..20 {
            list.add(x);
        }
        let report = stats_report(&list, &counter);
        assert!(report.contains("list size N = 20"));
        assert!(report.contains("directory:"));
        assert!(report.contains("successful search:"));
        assert_eq!(list.len(), 20);
    }
}
