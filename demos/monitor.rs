use gphoto2_events::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};



static STOP: AtomicBool = AtomicBool::new(false);

extern "C" fn on_signal(_: libc::c_int) {
    STOP.store(true, Ordering::Relaxed);
}

fn install_signal_handlers() {
    let handler = on_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;

    unsafe {
        libc::signal(libc::SIGINT, handler);
        libc::signal(libc::SIGTERM, handler);
    }
}

// HH:MM:SS, UTC.
fn timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    format!("{:02}:{:02}:{:02}", (secs / 3600) % 24, (secs / 60) % 60, secs % 60)
}

fn describe(event: &CameraEvent) -> String {
    match event.event_type {
        EventType::FileAdded | EventType::FolderAdded | EventType::FileChanged
        | EventType::Unknown | EventType::CaptureComplete => event.to_string(),
        EventType::Timeout | EventType::Other(_) => match &event.data {
            Some(data) => format!("{} - data: {data:?}", event.event_type),
            None => event.event_type.to_string(),
        }
    }
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut camera = match Camera::autodetect() {
        Ok(camera) => camera,
        Err(e) => {
            log::error!("failed to connect to camera: {e}");
            std::process::exit(1);
        }
    };

    install_signal_handlers();
    println!("Monitoring camera events, press Ctrl+C to stop");

    let config = MonitorConfig::default().with_poll_timeout(Duration::from_secs(2));
    let mut seen = 0;
    let result = camera.monitor(&config, &STOP, |event| {
        seen += 1;
        println!("[{}] Event #{seen}: {}", timestamp(), describe(&event));
        Flow::Continue
    });

    match result {
        Ok(count) => println!("Stopped after {count} event(s)"),
        Err(e) => {
            log::error!("event monitor failed: {e}");
            std::process::exit(1);
        }
    }
}
