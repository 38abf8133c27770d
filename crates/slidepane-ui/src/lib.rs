//! The Slidepane drag controller.
//!
//! Consumes discrete gesture-phase events from the host, drives the
//! rubber-band resistance while dragging, decides the commit/cancel outcome
//! at release, hands the pane to the spring simulator for settling, and
//! notifies an observer at each phase transition.

pub mod config;
pub mod controller;
pub mod observer;
pub mod pane_state;

pub use config::PaneConfig;
pub use controller::{DragController, DragPhase};
pub use observer::{Outcome, PaneObserver};
pub use pane_state::{OffsetAuthor, PaneState};
