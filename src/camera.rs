use crate::event::{self, CameraEvent, EventType};
use crate::wait::{self, EventSource, RawWait};
use crate::error::Error;
use crate::Result;
use log::debug;
use std::ffi::c_void;
use std::time::Duration;



/// Event stream over one camera handle.
///
/// A handle is not safe for concurrent use, so every wait takes `&mut self`;
/// run one polling loop per camera. For shutdown that stays responsive, poll
/// with a short timeout (a second or two) and check the stop condition
/// between calls, or use [`Camera::monitor`].
pub struct Camera<S: EventSource> {
    source: S,
}

impl<S: EventSource> Camera<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    pub fn is_connected(&self) -> bool {
        self.source.is_connected()
    }

    /// Wait up to `timeout_ms` milliseconds for the next camera event.
    ///
    /// Returns `Ok(None)` when nothing happened in time; a timeout is never an
    /// error. Payload data the decoder can't make sense of is dropped, not
    /// reported, so an event is always delivered once the camera sends one.
    pub fn wait_for_event(&mut self, timeout_ms: u32) -> Result<Option<CameraEvent>> {
        let (raw_type, payload) = match wait::wait_raw(&mut self.source, timeout_ms)? {
            RawWait::Timeout => return Ok(None),
            RawWait::Failure(code) => return Err(Error::Native(code)),
            RawWait::Event { event_type, payload } => (event_type, payload),
        };

        let event_type = EventType::from(raw_type);

        // Some camera drivers report a timeout as an event instead of a status.
        if event_type == EventType::Timeout { return Ok(None); }

        let source = &mut self.source;
        let data = unsafe {
            event::decode(event_type, payload, &mut |p: *mut c_void| source.free_payload(p))
        };

        let event = CameraEvent::new(event_type, data);
        debug!("camera event: {event}");

        Ok(Some(event))
    }

    /// [`wait_for_event`](Camera::wait_for_event) with a `Duration`.
    ///
    /// The timeout is truncated to whole milliseconds, so anything under 1 ms
    /// becomes a zero timeout.
    pub fn wait_for_event_timeout(&mut self, timeout: Duration) -> Result<Option<CameraEvent>> {
        self.wait_for_event(duration_to_millis(timeout))
    }
}

pub(crate) fn duration_to_millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventData, EventFileData};
    use crate::gphoto2_sys::{CameraEventType::*, GPResult::*, GP_OK};
    use crate::mock::{MockSource, Response};
    use std::ptr;

    fn camera(script: Vec<Response>) -> Camera<MockSource> {
        Camera::new(MockSource::new(script))
    }

    #[test]
    fn timeout_is_not_an_error() {
        let mut cam = camera(vec![Response::Timeout]);

        assert_eq!(cam.wait_for_event(2000), Ok(None));
    }

    #[test]
    fn repeated_timeouts_leave_nothing_behind() {
        let mut cam = camera(vec![]);

        assert_eq!(cam.wait_for_event(10), Ok(None));
        assert_eq!(cam.wait_for_event(10), Ok(None));

        let source = cam.source();
        assert_eq!(source.waits(), 2);
        assert_eq!(source.frees(), 0);
        assert_eq!(source.outstanding(), 0);
    }

    #[test]
    fn native_failures_carry_their_code() {
        for code in [GP_ERROR, GP_ERROR_IO, GP_ERROR_CAMERA_BUSY, -4242] {
            let mut cam = camera(vec![Response::Failure(code)]);

            assert_eq!(cam.wait_for_event(100), Err(Error::Native(code)));
        }
    }

    #[test]
    fn file_events_are_deep_copied_and_never_freed() {
        let mut cam = camera(vec![
            Response::file_added("/store_00010001/DCIM/100CANON", "IMG_0001.JPG"),
            Response::File {
                event_type: GP_EVENT_FOLDER_ADDED,
                folder: "/store_00010001/DCIM".into(),
                name: "101CANON".into(),
            },
            Response::File {
                event_type: GP_EVENT_FILE_CHANGED,
                folder: "/store_00010001/DCIM/100CANON".into(),
                name: "IMG_0001.JPG".into(),
            },
        ]);

        let expected = [
            (EventType::FileAdded, "/store_00010001/DCIM/100CANON", "IMG_0001.JPG"),
            (EventType::FolderAdded, "/store_00010001/DCIM", "101CANON"),
            (EventType::FileChanged, "/store_00010001/DCIM/100CANON", "IMG_0001.JPG"),
        ];

        for (event_type, folder, name) in expected {
            let event = cam.wait_for_event(1000).unwrap().unwrap();

            assert_eq!(event.event_type, event_type);
            assert_eq!(
                event.data,
                Some(EventData::File(EventFileData { folder: folder.into(), name: name.into() }))
            );
        }

        let source = cam.source();
        assert_eq!(source.frees(), 0);
        assert_eq!(source.bad_frees(), 0);
        assert_eq!(source.records().len(), 3);
        assert_eq!(source.records()[0].name[0], b'I' as _);
    }

    #[test]
    fn file_event_without_payload_has_no_data() {
        let mut cam = camera(vec![Response::Empty(GP_EVENT_FILE_ADDED)]);
        let event = cam.wait_for_event(1000).unwrap().unwrap();

        assert_eq!(event.event_type, EventType::FileAdded);
        assert_eq!(event.data, None);
    }

    #[test]
    fn unknown_events_free_their_message_once() {
        let mut cam = camera(vec![Response::Message("PTP Property d1d9 changed".into())]);
        let event = cam.wait_for_event(1000).unwrap().unwrap();

        assert_eq!(event.event_type, EventType::Unknown);
        assert_eq!(event.message(), Some("PTP Property d1d9 changed"));

        let source = cam.source();
        assert_eq!(source.frees(), 1);
        assert_eq!(source.outstanding(), 0);
        assert_eq!(source.bad_frees(), 0);
    }

    #[test]
    fn unknown_event_without_payload_frees_nothing() {
        let mut cam = camera(vec![Response::Empty(GP_EVENT_UNKNOWN)]);
        let event = cam.wait_for_event(1000).unwrap().unwrap();

        assert_eq!(event.event_type, EventType::Unknown);
        assert_eq!(event.data, None);
        assert_eq!(cam.source().frees() + cam.source().bad_frees(), 0);
    }

    #[test]
    fn capture_complete_has_no_data_whatever_the_pointer() {
        let mut junk = [0xAAu8; 8];
        let mut cam = camera(vec![
            Response::Empty(GP_EVENT_CAPTURE_COMPLETE),
            Response::Raw {
                status: GP_OK,
                event_type: GP_EVENT_CAPTURE_COMPLETE,
                payload: junk.as_mut_ptr() as *mut c_void,
            },
        ]);

        for _ in 0..2 {
            let event = cam.wait_for_event(1000).unwrap().unwrap();

            assert_eq!(event.event_type, EventType::CaptureComplete);
            assert_eq!(event.data, None);
        }

        assert_eq!(cam.source().bad_frees(), 0);
    }

    #[test]
    fn unrecognized_types_pass_through() {
        let mut cam = camera(vec![Response::Empty(17)]);

        assert_eq!(
            cam.wait_for_event(1000),
            Ok(Some(CameraEvent::new(EventType::Other(17), None)))
        );
    }

    #[test]
    fn timeout_discriminant_with_ok_status_is_still_a_timeout() {
        let mut cam = camera(vec![Response::Raw {
            status: GP_OK,
            event_type: GP_EVENT_TIMEOUT,
            payload: ptr::null_mut(),
        }]);

        assert_eq!(cam.wait_for_event(1000), Ok(None));
    }

    #[test]
    fn disconnected_camera_never_reaches_native_layer() {
        let mut cam = Camera::new(MockSource::new(vec![Response::file_added("/", "a")]).disconnected());

        assert_eq!(cam.wait_for_event(1000), Err(Error::DeviceDisconnected));
        assert_eq!(cam.wait_for_event_timeout(Duration::from_secs(1)), Err(Error::DeviceDisconnected));
        assert_eq!(cam.source().waits(), 0);
    }

    #[test]
    fn disconnect_between_waits() {
        let mut cam = camera(vec![Response::Empty(GP_EVENT_CAPTURE_COMPLETE)]);

        assert!(cam.wait_for_event(1000).unwrap().is_some());
        cam.source_mut().disconnect();

        assert!(!cam.is_connected());
        assert_eq!(cam.wait_for_event(1000), Err(Error::DeviceDisconnected));
        assert_eq!(cam.source().waits(), 1);
    }

    #[test]
    fn durations_truncate_to_milliseconds() {
        let mut cam = camera(vec![]);

        cam.wait_for_event(1500).unwrap();
        cam.wait_for_event_timeout(Duration::from_secs_f64(1.5)).unwrap();
        cam.wait_for_event_timeout(Duration::from_micros(2999)).unwrap();
        cam.wait_for_event_timeout(Duration::from_nanos(999_999)).unwrap();

        assert_eq!(cam.source().timeouts(), &[1500, 1500, 2, 0]);
    }

    #[test]
    fn huge_durations_saturate() {
        assert_eq!(duration_to_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
