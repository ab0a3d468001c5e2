use std::cell::RefCell;
use std::rc::Rc;

use carousel3d::{
    Carousel, CarouselConfig, CarouselEvent, CarouselWidget, CyclicLayout, FrameClock, HandleId,
    MotorPhase, PointerId, Ray,
};
use glam::Vec3;

const HANDLE_COUNT: u64 = 8;
const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_SETTLE_FRAMES: usize = 1200;
const CAMERA_Z: f32 = -1000.0; // camera looks down +z at the front of the track

fn camera_ray(x: f32) -> Ray {
    Ray::new(Vec3::new(x, 0.0, CAMERA_Z), Vec3::Z)
}

fn settle(widget: &mut CarouselWidget<CyclicLayout>) -> usize {
    let mut frames = 0;
    while frames < MAX_SETTLE_FRAMES {
        widget.tick(FRAME_DT);
        frames += 1;
        if widget.phase() == MotorPhase::Idle {
            break;
        }
    }
    frames
}

fn log_centered(widget: &CarouselWidget<CyclicLayout>) {
    let centered = widget.centered_object();
    let index = centered.and_then(|h| widget.carousel().index_by_object(h));
    log::info!("[sim] centered on {:?} (slot {:?})", centered, index);
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CarouselConfig::default();
    config.validate()?;

    let children: Vec<HandleId> = (0..HANDLE_COUNT).map(HandleId).collect();
    let layout = CyclicLayout::new(config.cyclic_params(), &children);
    log::info!(
        "[sim] {} handles, offset={:.2} sum={:.2} rail={:.2}",
        children.len(),
        layout.offset(),
        layout.sum_length(),
        layout.rail_length()
    );

    let mut widget = CarouselWidget::new(layout, &config);
    let events = Rc::new(RefCell::new(Vec::<CarouselEvent>::new()));
    {
        let events = events.clone();
        widget.subscribe(move |ev| {
            log::debug!("[sim] event {:?}", ev);
            events.borrow_mut().push(*ev);
        });
    }

    let mut clock = FrameClock::new();

    // Center on slot 3 at start-up, like a label that shows the current slot.
    widget.center_on_index(3)?;
    let frames = settle(&mut widget);
    log::info!("[sim] initial centering took {} frames", frames);
    log_centered(&widget);

    // Press on the front handle, drag left for a third of a second, let go.
    let pointer = PointerId(0);
    let front = Vec3::new(0.0, 0.0, -config.radius);
    widget.press(pointer, front);
    let mut x = 0.0;
    for _ in 0..20 {
        x -= 12.0;
        widget.drag(pointer, &camera_ray(x));
        widget.tick(FRAME_DT);
    }
    widget.release(pointer);
    log::info!(
        "[sim] released with momentum {:.2}",
        widget.motor().momentum().length()
    );

    let frames = settle(&mut widget);
    log::info!("[sim] fling settled after {} frames", frames);
    log_centered(&widget);

    let instances = widget.instances();
    for inst in &instances {
        let p = inst.translation();
        log::info!(
            "[sim] slot {} at ({:.1}, {:.1}, {:.1})",
            inst.slot,
            p.x,
            p.y,
            p.z
        );
    }
    log::info!(
        "[sim] instance buffer {} bytes",
        bytemuck::cast_slice::<_, u8>(&instances).len()
    );

    let summary = events.borrow();
    let count = |wanted: CarouselEvent| summary.iter().filter(|e| **e == wanted).count();
    log::info!(
        "[sim] drag_started={} momentum_frames={} stopped={} finished={} in {:.1} ms",
        count(CarouselEvent::DragStarted),
        count(CarouselEvent::MomentumMove),
        count(CarouselEvent::StoppedMoving),
        count(CarouselEvent::CenteringFinished),
        {
            clock.tick();
            clock.elapsed_sec() * 1000.0
        }
    );
    Ok(())
}
