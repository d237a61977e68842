use crate::gphoto2_sys::CameraFilePath;
use crate::util::chars_to_string;
use std::fmt;



/// Owned copy of a native `CameraFilePath` record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilePath {
    pub folder: String,
    pub name: String,
}

impl FilePath {
    pub fn from_c_struct(path: &CameraFilePath) -> Self {
        Self {
            folder: chars_to_string(&path.folder),
            name: chars_to_string(&path.name),
        }
    }

    /// Folder and name joined with a single `/`.
    pub fn path(&self) -> String {
        join(&self.folder, &self.name)
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.path())
    }
}

pub(crate) fn join(folder: &str, name: &str) -> String {
    if name.is_empty() { folder.to_string() }
    else if folder.ends_with('/') { format!("{folder}{name}") }
    else { format!("{folder}/{name}") }
}



#[cfg(test)]
pub(crate) fn c_struct(folder: &str, name: &str) -> CameraFilePath {
    let mut path = CameraFilePath::default();

    for (dst, src) in path.folder.iter_mut().zip(folder.bytes()) { *dst = src as _; }
    for (dst, src) in path.name.iter_mut().zip(name.bytes()) { *dst = src as _; }

    path
}
