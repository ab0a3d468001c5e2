// Host-side tests for the widget that ties layout, motor and centering together.

use carousel3d::{
    Carousel, CarouselConfig, CarouselError, CarouselEvent, CarouselWidget, ContainerTransform,
    CyclicLayout, HandleId, HandleInstance, HandleSet, LinearLayout, LinearParams, MotorPhase,
};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;

const DT: f32 = 1.0 / 60.0;

fn ids(n: u64) -> Vec<HandleId> {
    (0..n).map(HandleId).collect()
}

fn ring(n: u64) -> CarouselWidget<CyclicLayout> {
    let config = CarouselConfig::default();
    CarouselWidget::new(CyclicLayout::new(config.cyclic_params(), &ids(n)), &config)
}

fn settle<C: Carousel>(w: &mut CarouselWidget<C>) {
    for _ in 0..2000 {
        w.tick(DT);
        if w.phase() == MotorPhase::Idle {
            return;
        }
    }
    panic!("widget never settled");
}

#[test]
fn counter_example_centers_on_slot_three() {
    let mut w = ring(8);
    let shown = Rc::new(RefCell::new(None));
    let finished = Rc::new(RefCell::new(0));
    {
        let shown = shown.clone();
        let finished = finished.clone();
        w.subscribe(move |ev| match ev {
            CarouselEvent::CenterChanged(handle) => *shown.borrow_mut() = *handle,
            CarouselEvent::CenteringFinished => *finished.borrow_mut() += 1,
            _ => {}
        });
    }

    w.center_on_index(3).unwrap();
    assert_eq!(*shown.borrow(), Some(HandleId(3)));
    assert_eq!(w.phase(), MotorPhase::Settling);

    settle(&mut w);
    assert_eq!(*finished.borrow(), 1);
    assert_eq!(w.centered_object(), Some(HandleId(3)));
    assert_eq!(w.carousel().closest_to_center_index(Vec3::ZERO), Some(3));
}

#[test]
fn center_on_index_checks_range() {
    let mut w = ring(8);
    let err = w.center_on_index(8).unwrap_err();
    assert_eq!(err, CarouselError::IndexOutOfRange { index: 8, count: 8 });
    assert_eq!(err.to_string(), "slot 8 is out of range for 8 handles");
    assert!(!w.centering().is_active());
}

#[test]
fn center_on_unknown_handle_fails() {
    let mut w = ring(8);
    assert_eq!(
        w.center_on(HandleId(77)),
        Err(CarouselError::HandleNotFound(HandleId(77)))
    );
    assert_eq!(w.phase(), MotorPhase::Idle);
}

/// A layout that only tracks handles; enough to check initialization rules.
struct Bare {
    handles: HandleSet,
    container: ContainerTransform,
}

impl Carousel for Bare {
    fn handle_set(&self) -> &HandleSet {
        &self.handles
    }

    fn container(&self) -> &ContainerTransform {
        &self.container
    }

    fn init(&mut self, children: &[HandleId], force: bool) -> bool {
        self.handles.init(children, force)
    }

    fn sort(&mut self) {}

    fn move_relative(&mut self, _relative: Vec3) {}

    fn closest_to_center_index(&self, _center_offset: Vec3) -> Option<usize> {
        None
    }

    fn distance_for_centering_index(&self, _index: usize) -> Vec3 {
        Vec3::ZERO
    }
}

#[test]
fn uninitialized_carousel_cannot_center() {
    let bare = Bare {
        handles: HandleSet::default(),
        container: ContainerTransform::IDENTITY,
    };
    let mut w = CarouselWidget::new(bare, &CarouselConfig::default());
    assert_eq!(w.center_on_index(0), Err(CarouselError::NotInitialized));

    assert!(w.carousel_mut().init(&ids(3), false));
    assert!(w.center_on_index(0).is_ok());
    assert!(w.centering().is_active());
}

#[test]
fn observers_run_in_subscription_order() {
    let mut w = ring(8);
    let seen = Rc::new(RefCell::new(Vec::new()));
    for tag in 0..3u8 {
        let seen = seen.clone();
        w.subscribe(move |ev| seen.borrow_mut().push((tag, *ev)));
    }
    w.recenter();
    let changed = CarouselEvent::CenterChanged(Some(HandleId(1)));
    assert_eq!(*seen.borrow(), vec![(0, changed), (1, changed), (2, changed)]);
}

#[test]
fn reload_relays_out_and_stops_centering() {
    let mut w = ring(8);
    w.center_on_index(5).unwrap();
    w.tick(DT);
    assert!(w.carousel().first_object_shift() > 0.0);

    w.reload(&ids(6));
    assert!(!w.centering().is_active());
    assert_eq!(w.carousel().handles().len(), 6);
    assert_eq!(w.carousel().first_object_shift(), 0.0);
    assert!((w.carousel().sum_length() - 6.0 * w.carousel().offset()).abs() < 1e-2);
}

#[test]
fn instances_follow_the_container() {
    let config = CarouselConfig::default();
    let layout = CyclicLayout::new(config.cyclic_params(), &ids(8))
        .with_container(ContainerTransform::from_translation(Vec3::new(0.0, 10.0, 0.0)));
    let w = CarouselWidget::new(layout, &config);

    let instances = w.instances();
    assert_eq!(instances.len(), 8);
    for (slot, (inst, handle)) in instances
        .iter()
        .zip(w.carousel().handles().iter())
        .enumerate()
    {
        assert_eq!(inst.slot, slot as u32);
        let expected = handle.position + Vec3::new(0.0, 10.0, 0.0);
        assert!((inst.translation() - expected).length() < 1e-3);
    }

    assert_eq!(std::mem::size_of::<HandleInstance>(), 80);
    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    assert_eq!(bytes.len(), 8 * 80);
}

#[test]
fn linear_widget_slides_the_container() {
    let config = CarouselConfig::default();
    let layout = LinearLayout::new(LinearParams::default(), &ids(5));
    let mut w = CarouselWidget::new(layout, &config);

    w.center_on_index(2).unwrap();
    settle(&mut w);
    let translation = w.carousel().container().translation;
    assert!((translation - Vec3::new(-400.0, 0.0, 0.0)).length() < 0.1);
    assert_eq!(w.carousel().closest_to_center_index(Vec3::ZERO), Some(2));

    // a fling then lands on a neighbouring slot exactly
    w.fling(Vec3::new(-40.0, 0.0, 0.0));
    settle(&mut w);
    let target = w.centering().target_index().unwrap();
    assert!(w.carousel().distance_for_centering_index(target).length() < 0.1);
}

#[test]
fn idle_widget_stays_put() {
    let mut w = ring(8);
    let before: Vec<Vec3> = w.carousel().handles().iter().map(|h| h.position).collect();
    for _ in 0..30 {
        w.tick(DT);
    }
    let after: Vec<Vec3> = w.carousel().handles().iter().map(|h| h.position).collect();
    assert_eq!(before, after);
    assert_eq!(w.phase(), MotorPhase::Idle);
}
