use stepped_progress::{ProgressOptions, WheelEvent};
use stepped_progress_adapter::{Binding, ManualSurface, SlideBlend, SurfaceEvent};

fn main() {
    // Example: a four-slide slider driven by a simulated host event loop.
    //
    // A real adapter would:
    // - forward wheel/pointer events from its container into the surface
    // - call frame(now_ms) from its display-refresh callback while the binding is running
    // - feed SlideBlend into its shader uniforms on every rendered frame
    let slides = 4;
    let mut surface = ManualSurface::new();
    let options = ProgressOptions::for_slides(slides)
        .with_extent(800.0)
        .with_name("slider");
    let mut binding = Binding::attach(&mut surface, options).expect("valid options");

    binding.controller_mut().on_render(move |c| {
        let blend = SlideBlend::from_controller(c, slides);
        if blend.is_resting() {
            println!("resting on slide {}", blend.prev_index);
        }
    });

    // A quick drag up by 500px, then a single wheel notch.
    surface.dispatch(SurfaceEvent::PointerDown { x: 0.0, y: 600.0 });
    surface.dispatch(SurfaceEvent::PointerMove { x: 0.0, y: 350.0 });
    surface.dispatch(SurfaceEvent::PointerMove { x: 0.0, y: 100.0 });
    surface.dispatch(SurfaceEvent::PointerUp);
    surface.dispatch(SurfaceEvent::Wheel(WheelEvent::lines(0.0, 3.0)));

    let mut now_ms = 0u64;
    while binding.is_running() {
        if let Some(s) = binding.frame(now_ms) {
            if now_ms % 160 == 0 {
                let blend = SlideBlend::from_stepped(&s, 1.0, slides);
                println!(
                    "t={now_ms}ms progress={:.3} prev={} next={} mix={:.3}",
                    s.progress, blend.prev_index, blend.next_index, blend.mix
                );
            }
        }
        now_ms += 16;
    }

    println!("done: progress={}", binding.controller().progress());
    binding.dispose();
}
