//! Quickstart example showing normalization and the zero-vector case

use ndarray::array;
use unitnorm::{l2_norm, normalize, normalize_rows};

fn main() {
    println!("unitnorm Quickstart Demo\n");

    let v = normalize([3.0, 4.0]).unwrap();
    println!("normalize([3.0, 4.0])  = {}", v);
    println!("   norm               = {:.6}", l2_norm(v.as_slice().unwrap()));

    let ints = normalize(vec![1, 0, 0]).unwrap();
    println!("normalize([1, 0, 0])   = {}", ints);

    let zero = normalize([0.0, 0.0]).unwrap();
    println!("normalize([0.0, 0.0])  = {}  (returned unchanged)", zero);

    match normalize(["1.5", "abc"]) {
        Ok(v) => println!("unexpected success: {}", v),
        Err(e) => println!("normalize([\"1.5\", \"abc\"]) -> error: {}", e),
    }

    let batch = array![[3.0, 4.0], [0.0, 0.0], [1.0, 1.0]];
    println!("\nnormalize_rows:\n{}", normalize_rows(&batch));
}
