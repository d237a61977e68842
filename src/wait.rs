use crate::error::Error;
use crate::gphoto2_sys::{GPResult::GP_ERROR_TIMEOUT, GP_OK};
use crate::Result;
use log::trace;
use std::ffi::c_void;
use std::os::raw::c_int;
use std::ptr;



/// The native side of an event wait.
///
/// # Safety
///
/// After `wait_for_event` returns `GP_OK`, `event_data` must be null or point
/// to a payload of the shape libgphoto2 uses for `event_type`: a
/// `CameraFilePath` that stays valid until the next call on this source for
/// file and folder events, or a heap C string that `free_payload` releases
/// for unknown events.
pub unsafe trait EventSource {
    /// `false` once the handle has been closed or lost.
    fn is_connected(&self) -> bool;

    /// Block for at most `timeout_ms` and report what happened, exactly as
    /// `gp_camera_wait_for_event` does.
    fn wait_for_event(
        &mut self,
        timeout_ms: c_int,
        event_type: &mut c_int,
        event_data: &mut *mut c_void,
    ) -> c_int;

    /// Release an owned payload previously produced by `wait_for_event`.
    ///
    /// # Safety
    ///
    /// `payload` must come from this source and must not have been released.
    unsafe fn free_payload(&mut self, payload: *mut c_void);
}



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawWait {
    Event { event_type: c_int, payload: *mut c_void },
    Timeout,
    Failure(c_int),
}

pub fn wait_raw<S: EventSource + ?Sized>(source: &mut S, timeout_ms: u32) -> Result<RawWait> {
    if !source.is_connected() { return Err(Error::DeviceDisconnected); }

    let timeout = c_int::try_from(timeout_ms).unwrap_or(c_int::MAX);
    let mut event_type: c_int = 0;
    let mut payload: *mut c_void = ptr::null_mut();

    trace!("waiting up to {timeout} ms for a camera event");

    let res = source.wait_for_event(timeout, &mut event_type, &mut payload);

    Ok(match res {
        GP_OK => RawWait::Event { event_type, payload },
        GP_ERROR_TIMEOUT => RawWait::Timeout,
        code => RawWait::Failure(code)
    })
}
