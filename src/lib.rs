//! Motion model for 3D carousel widgets.
//!
//! A carousel arranges host-owned content handles on a track and moves them
//! in response to drags, momentum and a centering spring. Two layouts are
//! provided: [`CyclicLayout`], a closed loop of two rails and two
//! semicircular turnarounds, and [`LinearLayout`], a straight line. Hosts
//! feed pointer events and frame deltas into a [`CarouselWidget`] and read
//! back handle positions (or [`HandleInstance`] records) to render.
//!
//! The crate never installs a logger; it reports through the `log` facade.

pub mod carousel;
pub mod centering;
pub mod config;
pub mod constants;
pub mod cyclic;
pub mod error;
pub mod events;
pub mod frame;
pub mod handle;
pub mod instances;
pub mod linear;
pub mod motor;
pub mod spring;
pub mod transform;
pub mod widget;

pub use carousel::Carousel;
pub use centering::{CenteringController, CenteringParams};
pub use config::CarouselConfig;
pub use cyclic::{Advance, CyclicLayout, CyclicParams, Segment, Track};
pub use error::CarouselError;
pub use events::{CarouselEvent, Observers};
pub use frame::FrameClock;
pub use handle::{ContentHandle, HandleId, HandleSet};
pub use instances::{build_instances, HandleInstance};
pub use linear::{LinearLayout, LinearParams};
pub use motor::{DragEffect, InertialMotor, MotorParams, MotorPhase, Movement, PointerId};
pub use transform::{ContainerTransform, Plane, Ray};
pub use widget::CarouselWidget;
