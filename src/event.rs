//! Typed camera events and the decoder for libgphoto2's untyped event payloads.
//!
//! `gp_camera_wait_for_event` hands back an integer event type and a `void*`
//! whose meaning depends on that type. Which payloads are borrowed, owned or
//! empty is recorded once in [`EventType::payload_ownership`]; [`decode`]
//! follows that table and nothing else decides when native memory is freed.

use crate::gphoto2_sys::{CameraEventType::*, CameraFilePath};
use crate::path::{self, FilePath};
use crate::util::pointer_to_string;
use enum_as_inner::EnumAsInner;
use log::debug;
use std::ffi::c_void;
use std::fmt;
use std::os::raw::{c_char, c_int};



#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Unknown,
    Timeout,
    FileAdded,
    FolderAdded,
    CaptureComplete,
    FileChanged,

    /// A code this crate doesn't know about yet, kept verbatim.
    Other(c_int),
}

impl From<c_int> for EventType {
    fn from(v: c_int) -> Self {
        use EventType::*;

        match v {
            GP_EVENT_UNKNOWN => Unknown,
            GP_EVENT_TIMEOUT => Timeout,
            GP_EVENT_FILE_ADDED => FileAdded,
            GP_EVENT_FOLDER_ADDED => FolderAdded,
            GP_EVENT_CAPTURE_COMPLETE => CaptureComplete,
            GP_EVENT_FILE_CHANGED => FileChanged,
            other => Other(other)
        }
    }
}

impl EventType {
    pub fn raw(self) -> c_int {
        use EventType::*;

        match self {
            Unknown => GP_EVENT_UNKNOWN,
            Timeout => GP_EVENT_TIMEOUT,
            FileAdded => GP_EVENT_FILE_ADDED,
            FolderAdded => GP_EVENT_FOLDER_ADDED,
            CaptureComplete => GP_EVENT_CAPTURE_COMPLETE,
            FileChanged => GP_EVENT_FILE_CHANGED,
            Other(v) => v
        }
    }

    pub fn payload_ownership(self) -> PayloadOwnership {
        use EventType::*;

        match self {
            FileAdded | FolderAdded | FileChanged => PayloadOwnership::Borrowed,
            Unknown => PayloadOwnership::Owned,
            CaptureComplete | Timeout | Other(_) => PayloadOwnership::None,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EventType::*;

        match *self {
            Unknown => fmt.write_str("unknown event"),
            Timeout => fmt.write_str("timeout"),
            FileAdded => fmt.write_str("file added"),
            FolderAdded => fmt.write_str("folder added"),
            CaptureComplete => fmt.write_str("capture complete"),
            FileChanged => fmt.write_str("file changed"),
            Other(v) => write!(fmt, "unhandled event (type={v})")
        }
    }
}



/// Who owns the memory behind an event's payload pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadOwnership {
    /// Belongs to libgphoto2; read it, never free it.
    Borrowed,
    /// Handed to us; free it exactly once after copying.
    Owned,
    /// The pointer carries nothing we read.
    None,
}



#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventFileData {
    pub folder: String,
    pub name: String,
}

impl EventFileData {
    pub fn path(&self) -> String {
        path::join(&self.folder, &self.name)
    }
}

impl From<FilePath> for EventFileData {
    fn from(p: FilePath) -> Self {
        Self { folder: p.folder, name: p.name }
    }
}

impl fmt::Display for EventFileData {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventUnknownData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
pub enum EventData {
    File(EventFileData),
    Unknown(EventUnknownData),
}



#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraEvent {
    pub event_type: EventType,
    pub data: Option<EventData>,
}

impl CameraEvent {
    pub fn new(event_type: EventType, data: Option<EventData>) -> Self {
        Self { event_type, data }
    }

    pub fn file(&self) -> Option<&EventFileData> {
        self.data.as_ref().and_then(EventData::as_file)
    }

    pub fn message(&self) -> Option<&str> {
        self.data.as_ref()
            .and_then(EventData::as_unknown)
            .map(|d| d.message.as_str())
    }
}

impl fmt::Display for CameraEvent {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(EventData::File(file)) => write!(fmt, "{} - {}", self.event_type, file),
            Some(EventData::Unknown(data)) => write!(fmt, "{} - {}", self.event_type, data.message),
            None => write!(fmt, "{}", self.event_type)
        }
    }
}



// Frees an owned payload when dropped, so the release also happens if
// copying the payload out unwinds.
struct OwnedPayload<'a> {
    ptr: *mut c_void,
    release: &'a mut dyn FnMut(*mut c_void),
}

impl<'a> Drop for OwnedPayload<'a> {
    fn drop(&mut self) {
        debug!("releasing owned event payload {:p}", self.ptr);
        (self.release)(self.ptr);
    }
}

/// Decode an event payload into owned data.
///
/// `release` is called exactly once for a non-null payload whose type is
/// [`PayloadOwnership::Owned`], and never otherwise. Null payloads and types
/// without a known shape decode to `None`; this never fails.
///
/// # Safety
///
/// `payload` must be null or point to memory of the shape libgphoto2 documents
/// for `event_type`, valid for the duration of the call.
pub unsafe fn decode(
    event_type: EventType,
    payload: *mut c_void,
    release: &mut dyn FnMut(*mut c_void),
) -> Option<EventData> {
    if payload.is_null() { return None; }

    match event_type.payload_ownership() {
        PayloadOwnership::Borrowed => {
            let record = &*(payload as *const CameraFilePath);

            Some(EventData::File(FilePath::from_c_struct(record).into()))
        }

        PayloadOwnership::Owned => {
            let owned = OwnedPayload { ptr: payload, release };
            let message = pointer_to_string(owned.ptr as *const c_char);

            Some(EventData::Unknown(EventUnknownData { message }))
        }

        PayloadOwnership::None => None
    }
}
