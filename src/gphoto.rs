use crate::gphoto2_sys::{self as sys, *};
use crate::camera::Camera;
use crate::error::Error;
use crate::wait::EventSource;
use crate::{gpcall, Result};
use log::{info, warn};
use std::ffi::c_void;
use std::os::raw::c_int;
use std::ptr;



struct GPhotoContext {
    ptr: *mut GPContext,
}

impl GPhotoContext {
    fn new() -> Result<Self> {
        let ptr = unsafe { gp_context_new() };

        if ptr.is_null() { Err(Error::Native(GPResult::GP_ERROR_NO_MEMORY)) }
        else { Ok(Self { ptr }) }
    }
}

impl Drop for GPhotoContext {
    fn drop(&mut self) {
        unsafe { gp_context_unref(self.ptr); }
    }
}



/// A libgphoto2 camera handle together with the context its calls report
/// errors through.
///
/// The handle and context are not thread safe. `GPhotoDevice` may be moved to
/// another thread but not shared between threads.
pub struct GPhotoDevice {
    handle: *mut sys::Camera,
    context: GPhotoContext,
    connected: bool,
}

// libgphoto2 handles may change threads, they just can't be used from two at
// once. Every call here takes `&mut self`.
unsafe impl Send for GPhotoDevice {}

impl GPhotoDevice {
    /// Connect to the first camera libgphoto2 autodetects.
    pub fn autodetect() -> Result<Self> {
        let context = GPhotoContext::new()?;
        let mut handle: *mut sys::Camera = ptr::null_mut();

        gpcall!(gp_camera_new, &mut handle)?;

        // From here on, dropping `device` unrefs the handle.
        let mut device = Self { handle, context, connected: false };

        gpcall!(gp_camera_init, device.handle, device.context.ptr)?;
        device.connected = true;
        info!("camera connected");

        Ok(device)
    }

    /// Close the connection. Waiting on a disconnected device fails with
    /// [`Error::DeviceDisconnected`] without touching libgphoto2.
    pub fn disconnect(&mut self) -> Result<()> {
        if self.connected {
            gpcall!(gp_camera_exit, self.handle, self.context.ptr)?;
            self.connected = false;
            info!("camera disconnected");
        }

        Ok(())
    }
}

unsafe impl EventSource for GPhotoDevice {
    fn is_connected(&self) -> bool {
        self.connected && !self.handle.is_null()
    }

    fn wait_for_event(
        &mut self,
        timeout_ms: c_int,
        event_type: &mut c_int,
        event_data: &mut *mut c_void,
    ) -> c_int {
        unsafe {
            gp_camera_wait_for_event(self.handle, timeout_ms, event_type, event_data, self.context.ptr)
        }
    }

    unsafe fn free_payload(&mut self, payload: *mut c_void) {
        libc::free(payload);
    }
}

impl Drop for GPhotoDevice {
    fn drop(&mut self) {
        if let Err(e) = self.disconnect() {
            warn!("could not close camera during drop: {e}");
        }

        if !self.handle.is_null() {
            unsafe { gp_camera_unref(self.handle); }
        }
    }
}



impl Camera<GPhotoDevice> {
    /// Event stream for the first camera libgphoto2 autodetects.
    pub fn autodetect() -> Result<Self> {
        Ok(Camera::new(GPhotoDevice::autodetect()?))
    }
}
