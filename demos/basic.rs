// Example: minimal usage with uniform-extent rows.
use window_calc::{Align, WindowCalculator, WindowOptions};

fn main() {
    let mut calc = WindowCalculator::new();
    calc.configure(
        WindowOptions::new(1_000_000, 600)
            .with_default_extent(24)
            .with_buffer(4),
    )
    .expect("valid options");

    let range = calc.update_scroll(123_456).expect("configured");
    println!("total_extent={}", calc.total_extent().unwrap());
    println!("range={range:?} ({} items mounted)", range.len());

    let off = calc
        .offset_for_index_aligned(999_999, Align::End)
        .unwrap();
    println!("scroll-to-last offset={off}");
}
