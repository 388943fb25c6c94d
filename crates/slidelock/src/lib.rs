//! Slide-to-unlock control.
//!
//! [`SlideLock`] is a [`slidelock_core::Widget`]: a track with a draggable
//! handle. Dragging the handle past the threshold and letting go unlocks
//! the control; letting go early slides the handle back. A
//! [`SlideLockDelegate`] is told about every completed transition.
//!
//! ```
//! use slidelock::{SlideLock, SlideLockConfig, SlideLockDelegate, Status};
//! use slidelock_core::{Event, GestureState, Point, Rect, Widget};
//!
//! struct Log;
//!
//! impl SlideLockDelegate for Log {
//!     fn status_updated(&mut self, status: Status, _sender: &SlideLock) {
//!         println!("slide lock is now {status}");
//!     }
//! }
//!
//! let mut lock = SlideLock::new()
//!     .configuration(&SlideLockConfig::new().locked_text("SLIDE TO OPEN"))
//!     .delegate(Log);
//! lock.layout(Rect::new(0.0, 0.0, 300.0, 60.0));
//!
//! lock.event(&Event::pan(Point::ORIGIN, Point::ORIGIN, GestureState::Began));
//! lock.event(&Event::pan(Point::new(40.0, 0.0), Point::ORIGIN, GestureState::Ended));
//! while lock.tick(1.0 / 60.0).is_none() {}
//! assert_eq!(lock.status(), Status::Locked);
//! ```

pub mod config;
mod error;
mod localize;
pub mod machine;
mod slide_lock;
mod status;

pub use config::{ColorRole, Icon, SlideLockConfig};
pub use error::{ConfigError, Result};
pub use localize::{Catalog, IdentityLocalizer, Localizer};
pub use machine::{DragInput, Phase, Release, UNLOCK_MARGIN};
pub use slide_lock::{SlideLock, DEFAULT_TRACK_SIZE};
pub use status::{SlideLockDelegate, Status, StatusUpdated};
