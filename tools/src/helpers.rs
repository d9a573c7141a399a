use std::fs::{create_dir_all, File};
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use serde_json::json;

pub fn gen_rand_values(n: usize) -> Vec<f64> {
    let mut rng = thread_rng();
    (0..n).map(|_| rng.gen()).collect()
}

/// Seeded generator over a small value range, so duplicates occur.
pub fn gen_rand_values_i32(rng: &mut StdRng, len: usize, span: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0, span)).collect()
}

pub fn shuffle_clone<T>(v: &[T]) -> Vec<T>
where
    T: Clone,
{
    let mut rng = thread_rng();
    let mut v_cloned = v.to_vec();
    v_cloned.shuffle(&mut rng);
    v_cloned
}

/// Export fill statistics collected during a bulk insert run.
pub fn export_fill_stats(
    filename: &str,
    iters: &[usize],
    fill_min: &[usize],
    fill_avg: &[f64],
    fill_max: &[usize],
    num_blocks: &[usize],
    dir_capacity: &[usize],
) {
    let json_data = json!({
        "iters": iters,
        "fill_min": fill_min,
        "fill_avg": fill_avg,
        "fill_max": fill_max,
        "num_blocks": num_blocks,
        "dir_capacity": dir_capacity,
    });

    let path = Path::new(filename);
    let parent = path.parent().unwrap();
    create_dir_all(parent).unwrap();

    let f = File::create(path).expect("Unable to create json file.");
    serde_json::to_writer_pretty(f, &json_data).expect("Unable to write json file.");
}
