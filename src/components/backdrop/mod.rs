//! Interactive particle backdrop.
//!
//! A canvas filled with small dots that:
//! - spawn in proportion to the canvas area, within fixed bounds
//! - flee from a smoothed pointer position and ease back to rest
//! - are joined by faint lines when close to each other
//!
//! The simulation is plain Rust ([`ParticleField`], [`AnimationLoop`]) and
//! only [`AnimatedBackground`] touches the browser.
//!
//! # Example
//!
//! ```ignore
//! use yali_site::components::backdrop::{AnimatedBackground, BackdropConfig};
//!
//! view! { <AnimatedBackground config=BackdropConfig::default() /> }
//! ```

mod animation;
mod component;
pub mod config;
mod particles;
mod point;
mod pointer;
mod render;
mod surface;

pub use animation::{AnimationLoop, FrameScheduler, LoopState};
pub use component::{AnimatedBackground, MountError};
pub use config::BackdropConfig;
pub use particles::{Link, Particle, ParticleField, particle_count};
pub use point::Point;
pub use pointer::SmoothedPointer;
pub use render::render;
pub use surface::{CanvasSurface, Surface};
