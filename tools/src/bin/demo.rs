extern crate block_list;
extern crate block_list_tools;

use clap::{App, Arg};

use block_list::{counting, SortedBlockList};
use block_list_tools::report::stats_report;

fn char_cmp(a: &char, b: &char) -> std::cmp::Ordering {
    a.cmp(b)
}

/// Small structural demo: inserts characters one by one and shows the
/// resulting two-level layout plus search statistics.
fn main() {
    let matches = App::new("block_list demo")
        .about("Inserts the given characters into a SortedBlockList and dumps the structure")
        .arg(
            Arg::with_name("items")
                .multiple(true)
                .help("Characters to insert (concatenated); defaults to abcdefg"),
        )
        .get_matches();

    let order: String = match matches.values_of("items") {
        Some(values) => values.collect::<Vec<_>>().concat(),
        None => "abcdefg".to_string(),
    };

    println!("insertion order: {}", order);

    let (cmp, counter) = counting(char_cmp);
    let mut list = SortedBlockList::new(cmp);
    for c in order.chars() {
        list.add(c);
    }
    println!("comparisons to build the list: {}", counter.get());

    println!("\nstructure dump:");
    print!("{}", list.dump());

    println!("\n{}", stats_report(&list, &counter));

    println!("contains('c') -> {}", list.contains(&'c'));
    println!("contains('7') -> {}", list.contains(&'7'));

    let mut buf = vec![' '; list.len()];
    match list.copy_into(&mut buf) {
        Ok(filled) => println!("exported: {:?}", filled),
        Err(err) => println!("export failed: {}", err),
    }

    println!("\nsub list ['b', 'k'):");
    let sub = list.sub_list(&'b', &'k');
    print!("{}", sub.dump());
}
