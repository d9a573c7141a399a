extern crate block_list;
extern crate block_list_tools;

use clap::{App, AppSettings, Arg};

use block_list::SortedBlockList;
use block_list_tools::helpers;

fn run_fill_statistics() {
    #[rustfmt::skip]
    let matches = App::new("Fill statistics runner")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(Arg::with_name("gen-mode")
                 .long("gen-mode")
                 .short("g")
                 .default_value("avg")
                 .possible_values(&["avg", "asc", "dsc"])
                 .help("Generator mode"))
        .arg(Arg::with_name("n")
                 .long("num-elements")
                 .short("n")
                 .default_value("100000")
                 .help("Number of elements to insert"))
        .get_matches();

    let gen_mode = matches.value_of("gen-mode").unwrap().to_string();
    let n: usize = matches
        .value_of("n")
        .unwrap()
        .parse()
        .expect("Invalid number of elements");

    let measure_every = 10;
    let values = match gen_mode.as_ref() {
        "avg" => helpers::gen_rand_values(n),
        "asc" => (0..n).map(|x| x as f64 / n as f64).collect(),
        "dsc" => (0..n).map(|x| x as f64 / n as f64).rev().collect(),
        _ => panic!("Invalid generator mode"),
    };

    let mut list = SortedBlockList::new(|a: &f64, b: &f64| a.partial_cmp(b).unwrap());

    let mut iters = Vec::new();
    let mut fill_min = Vec::new();
    let mut fill_avg = Vec::new();
    let mut fill_max = Vec::new();
    let mut num_blocks = Vec::new();
    let mut dir_capacity = Vec::new();

    println!("Inserting...");
    for (i, x) in values.iter().enumerate() {
        list.add(*x);
        let len = i + 1;
        if len % measure_every == 0 {
            iters.push(len);
            fill_min.push(list.get_block_fill_min());
            fill_avg.push(list.get_block_fill_avg());
            fill_max.push(list.get_block_fill_max());
            num_blocks.push(list.get_num_blocks());
            dir_capacity.push(list.get_dir_capacity());
        }
    }

    println!(
        "final: N = {}, blocks = {} of {}, occupancy min/avg/max = {}/{:.2}/{}",
        list.len(),
        list.get_num_blocks(),
        list.get_dir_capacity(),
        list.get_block_fill_min(),
        list.get_block_fill_avg(),
        list.get_block_fill_max(),
    );

    helpers::export_fill_stats(
        "results/fill_stats.json",
        &iters,
        &fill_min,
        &fill_avg,
        &fill_max,
        &num_blocks,
        &dir_capacity,
    );
    println!("Written to results/fill_stats.json");
}

fn main() {
    run_fill_statistics();
}
