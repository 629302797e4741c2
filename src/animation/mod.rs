// SPDX-License-Identifier: MPL-2.0
//! Frame cycling and viewport mapping.
//!
//! - [`cycler`]: the frame index and the lifecycle of the timer driving it
//! - [`viewport`]: pure mapping from a frame index to a sheet region
//! - [`timer`]: tokio-backed repeating timers for use outside Iced

pub mod cycler;
pub mod timer;
pub mod viewport;

pub use cycler::{CyclerOptions, FrameCycler};
pub use timer::TimerHandle;
pub use viewport::{Region, Viewport};
