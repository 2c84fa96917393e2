// Example: variable-extent rows with cache invalidation after a reflow.
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use window_calc::{WindowCalculator, WindowOptions};

fn main() {
    // Row 500 grows after its content reflows.
    let tall_row = Arc::new(AtomicU32::new(40));
    let provider_row = Arc::clone(&tall_row);

    let mut calc = WindowCalculator::new();
    calc.configure(
        WindowOptions::new(10_000, 480)
            .with_default_extent(40)
            .with_buffer(2)
            .with_extent_fn(move |i| {
                if i == 500 {
                    provider_row.load(Ordering::Relaxed)
                } else {
                    32 + (i % 5) as u32 * 8
                }
            }),
    )
    .expect("valid options");

    let offset = calc.offset_for_index(500).unwrap();
    println!("row 500 begins at {offset}");
    println!("range={:?}", calc.update_scroll(offset as i64).unwrap());

    tall_row.store(200, Ordering::Relaxed);
    calc.invalidate();
    println!(
        "after reflow: row 501 begins at {}",
        calc.offset_for_index(501).unwrap()
    );
}
