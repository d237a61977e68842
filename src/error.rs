use crate::gphoto2_sys::{GPResult::*, GP_OK};
use crate::Result;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt;
use std::os::raw::c_int;
use thiserror::Error;



#[cfg_attr(not(feature = "libgphoto2"), allow(dead_code))]
pub fn error_code_to_result(code: c_int) -> Result<()> {
    if code >= GP_OK { Ok(()) }
    else { Err(Error::Native(code)) }
}



#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The device handle is gone; nothing was sent to libgphoto2.
    #[error("camera disconnected")]
    DeviceDisconnected,

    /// libgphoto2 returned a status other than success or timeout.
    #[error("libgphoto2 error {0}: {}", native_message(.0))]
    Native(c_int),
}

impl Error {
    /// The libgphoto2 error this maps onto, if the code is a known one.
    pub fn kind(&self) -> Option<GpError> {
        match *self {
            Error::Native(code) => GpError::from_i32(code),
            Error::DeviceDisconnected => None,
        }
    }

    pub fn code(&self) -> Option<c_int> {
        match *self {
            Error::Native(code) => Some(code),
            Error::DeviceDisconnected => None,
        }
    }
}



#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum GpError {
    // Port library errors
    Generic = GP_ERROR,
    BadParameters = GP_ERROR_BAD_PARAMETERS,
    NoMemory = GP_ERROR_NO_MEMORY,
    Library = GP_ERROR_LIBRARY,
    UnknownPort = GP_ERROR_UNKNOWN_PORT,
    NotSupported = GP_ERROR_NOT_SUPPORTED,
    IO = GP_ERROR_IO,
    FixedLimitExceeded = GP_ERROR_FIXED_LIMIT_EXCEEDED,
    Timeout = GP_ERROR_TIMEOUT,
    IOSupportedSerial = GP_ERROR_IO_SUPPORTED_SERIAL,
    IOSupportedUsb = GP_ERROR_IO_SUPPORTED_USB,
    IOInit = GP_ERROR_IO_INIT,
    IORead = GP_ERROR_IO_READ,
    IOWrite = GP_ERROR_IO_WRITE,
    IOUpdate = GP_ERROR_IO_UPDATE,
    IOSerialSpeed = GP_ERROR_IO_SERIAL_SPEED,
    IOUsbClearHalt = GP_ERROR_IO_USB_CLEAR_HALT,
    IOUsbFind = GP_ERROR_IO_USB_FIND,
    IOUsbClaim = GP_ERROR_IO_USB_CLAIM,
    IOLock = GP_ERROR_IO_LOCK,
    Hal = GP_ERROR_HAL,

    // Camera library errors
    CorruptedData = GP_ERROR_CORRUPTED_DATA,
    FileExists = GP_ERROR_FILE_EXISTS,
    ModelNotFound = GP_ERROR_MODEL_NOT_FOUND,
    DirectoryNotFound = GP_ERROR_DIRECTORY_NOT_FOUND,
    FileNotFound = GP_ERROR_FILE_NOT_FOUND,
    DirectoryExists = GP_ERROR_DIRECTORY_EXISTS,
    CameraBusy = GP_ERROR_CAMERA_BUSY,
    PathNotAbsolute = GP_ERROR_PATH_NOT_ABSOLUTE,
    Cancel = GP_ERROR_CANCEL,
    CameraError = GP_ERROR_CAMERA_ERROR,
    OsFailure = GP_ERROR_OS_FAILURE,
    NoSpace = GP_ERROR_NO_SPACE,
}

impl GpError {
    pub fn describe(code: c_int) -> &'static str {
        match GpError::from_i32(code) {
            Some(e) => e.message(),
            None => "unknown error",
        }
    }

    pub fn message(self) -> &'static str {
        use GpError::*;

        match self {
            Generic => "unspecified error",
            BadParameters => "bad parameters",
            NoMemory => "out of memory",
            Library => "error in the camera driver",
            UnknownPort => "unknown libgphoto2 port passed",
            NotSupported => "functionality not supported",
            IO => "generic I/O error",
            FixedLimitExceeded => "buffer overflow of internal structure",
            Timeout => "operation timed out",
            IOSupportedSerial => "serial ports not supported",
            IOSupportedUsb => "USB ports not supported",
            IOInit => "error initialising I/O",
            IORead => "I/O during read",
            IOWrite => "I/O during write",
            IOUpdate => "I/O during update of settings",
            IOSerialSpeed => "specified serial speed not possible",
            IOUsbClearHalt => "error clearing a halt condition on the USB bus",
            IOUsbFind => "could not find the requested USB device",
            IOUsbClaim => "could not claim the USB device",
            IOLock => "could not lock the device",
            Hal => "unspecified HAL error",
            CorruptedData => "corrupted data received",
            FileExists => "file already exists",
            ModelNotFound => "specified camera model was not found",
            DirectoryNotFound => "specified directory was not found",
            FileNotFound => "specified file was not found",
            DirectoryExists => "specified directory already exists",
            CameraBusy => "the camera is already busy",
            PathNotAbsolute => "path is not absolute",
            Cancel => "cancellation successful",
            CameraError => "unspecified camera error",
            OsFailure => "unspecified failure of the operating system",
            NoSpace => "not enough space",
        }
    }
}

fn native_message(code: &c_int) -> &'static str {
    GpError::describe(*code)
}

impl fmt::Display for GpError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{:?}: {}", self, self.message())
    }
}
