//! Scripted stand-in for libgphoto2, for testing without a camera.

use crate::gphoto2_sys::{CameraEventType::*, CameraFilePath, GPResult::GP_ERROR_TIMEOUT, GP_OK};
use crate::path::c_struct;
use crate::wait::EventSource;
use std::collections::VecDeque;
use std::ffi::{c_void, CString};
use std::os::raw::{c_char, c_int};
use std::ptr;



/// One scripted reply to `wait_for_event`.
#[derive(Debug, Clone)]
pub enum Response {
    Timeout,
    Failure(c_int),
    /// OK status with a file-path payload owned by the mock.
    File { event_type: c_int, folder: String, name: String },
    /// OK status, unknown event with a heap string the caller must free.
    Message(String),
    /// OK status, no payload.
    Empty(c_int),
    /// Anything else, verbatim.
    Raw { status: c_int, event_type: c_int, payload: *mut c_void },
}

impl Response {
    pub fn file_added(folder: &str, name: &str) -> Self {
        Response::File { event_type: GP_EVENT_FILE_ADDED, folder: folder.into(), name: name.into() }
    }
}

/// Replays [`Response`]s in order, then times out forever.
pub struct MockSource {
    script: VecDeque<Response>,
    connected: bool,
    timeouts: Vec<c_int>,
    records: Vec<Box<CameraFilePath>>,
    allocated: Vec<*mut c_char>,
    freed: Vec<*mut c_void>,
    bad_frees: usize,
}

impl MockSource {
    pub fn new(script: Vec<Response>) -> Self {
        Self {
            script: script.into(),
            connected: true,
            timeouts: Vec::new(),
            records: Vec::new(),
            allocated: Vec::new(),
            freed: Vec::new(),
            bad_frees: 0,
        }
    }

    #[must_use]
    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn waits(&self) -> usize {
        self.timeouts.len()
    }

    pub fn timeouts(&self) -> &[c_int] {
        &self.timeouts
    }

    pub fn frees(&self) -> usize {
        self.freed.len()
    }

    /// Owned payloads handed out and not yet freed.
    pub fn outstanding(&self) -> usize {
        self.allocated.len()
    }

    /// Frees of pointers this mock never handed out, or handed out and
    /// already freed.
    pub fn bad_frees(&self) -> usize {
        self.bad_frees
    }

    pub fn records(&self) -> &[Box<CameraFilePath>] {
        &self.records
    }
}

unsafe impl EventSource for MockSource {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn wait_for_event(
        &mut self,
        timeout_ms: c_int,
        event_type: &mut c_int,
        event_data: &mut *mut c_void,
    ) -> c_int {
        self.timeouts.push(timeout_ms);
        *event_data = ptr::null_mut();

        match self.script.pop_front().unwrap_or(Response::Timeout) {
            Response::Timeout => {
                *event_type = GP_EVENT_TIMEOUT;
                GP_ERROR_TIMEOUT
            }
            Response::Failure(code) => code,
            Response::File { event_type: t, folder, name } => {
                let mut record = Box::new(c_struct(&folder, &name));

                *event_type = t;
                *event_data = record.as_mut() as *mut CameraFilePath as *mut c_void;
                self.records.push(record);
                GP_OK
            }
            Response::Message(message) => {
                let raw = CString::new(message).unwrap().into_raw();

                *event_type = GP_EVENT_UNKNOWN;
                *event_data = raw as *mut c_void;
                self.allocated.push(raw);
                GP_OK
            }
            Response::Empty(t) => {
                *event_type = t;
                GP_OK
            }
            Response::Raw { status, event_type: t, payload } => {
                *event_type = t;
                *event_data = payload;
                status
            }
        }
    }

    unsafe fn free_payload(&mut self, payload: *mut c_void) {
        match self.allocated.iter().position(|&p| p as *mut c_void == payload) {
            Some(i) => {
                drop(CString::from_raw(self.allocated.swap_remove(i)));
                self.freed.push(payload);
            }
            None => self.bad_frees += 1
        }
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        for raw in self.allocated.drain(..) {
            drop(unsafe { CString::from_raw(raw) });
        }
    }
}
