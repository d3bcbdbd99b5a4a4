// Example: wheel input drives an eased, stepped progress value until it settles.
use stepped_progress::{ProgressOptions, StepProgressController, WheelEvent};

fn main() {
    let options = ProgressOptions::for_slides(4).with_extent(800.0);
    let mut c = StepProgressController::new(options).expect("valid options");

    c.on_render(|c| {
        let s = c.stepped();
        println!(
            "progress={:.4} between {} and {} ({:.2})",
            s.progress, s.min_stepped_value, s.max_stepped_value, s.relative_stepped_progress
        );
    });

    // Five wheel notches of 120px on an 800px tall container.
    for _ in 0..5 {
        c.apply_wheel(&WheelEvent::pixels(0.0, 120.0));
    }
    println!("target={:.3}", c.target());

    // Simulate a 60fps frame loop that only runs while the controller needs it.
    let mut frames = 0u32;
    while c.is_running() {
        c.tick(1.0);
        frames += 1;
    }
    println!("settled at {} after {frames} frames", c.progress());

    c.dispose();
}
