//! Typed, memory-safe event stream over libgphoto2's `gp_camera_wait_for_event`.
//!
//! ```no_run
//! # #[cfg(feature = "libgphoto2")]
//! # fn main() -> gphoto2_events::Result<()> {
//! use gphoto2_events::prelude::*;
//!
//! let mut camera = Camera::autodetect()?;
//!
//! loop {
//!     match camera.wait_for_event(2000)? {
//!         Some(event) => println!("{event}"),
//!         None => continue,
//!     }
//! }
//! # }
//! # #[cfg(not(feature = "libgphoto2"))]
//! # fn main() {}
//! ```

// Private modules
mod gphoto2_sys;
mod error;
mod util;

#[cfg(test)]
mod mock;

// Public modules
pub mod camera;
pub mod event;
pub mod monitor;
pub mod path;
pub mod wait;

#[cfg(feature = "libgphoto2")]
pub mod gphoto;



pub use camera::Camera;
pub use error::{Error, GpError};
pub use event::{CameraEvent, EventData, EventFileData, EventType, EventUnknownData};
pub use monitor::MonitorConfig;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Flow { Continue, Break }

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! gpcall {
    ($func: ident $(, $arg: expr)*) => {
        {
            use $crate::error::error_code_to_result;
            error_code_to_result(unsafe { $func($($arg),*) })
        }
    }
}



pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::event::{CameraEvent, EventData, EventType};
    pub use crate::monitor::MonitorConfig;
    pub use crate::wait::EventSource;
    pub use crate::Flow;

    #[cfg(feature = "libgphoto2")]
    pub use crate::gphoto::GPhotoDevice;
}
