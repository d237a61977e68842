use std::ffi::CStr;
use std::os::raw::c_char;



// Invalid UTF-8 is replaced rather than rejected; camera firmware is not
// trusted to hand back clean strings.
pub unsafe fn pointer_to_string(p: *const c_char) -> String {
    CStr::from_ptr(p).to_string_lossy().into_owned()
}

// Fixed-size C buffers are not guaranteed to be terminated, so stop at the
// first NUL or the end of the array, whichever comes first.
pub fn chars_to_string(chars: &[c_char]) -> String {
    let bytes: Vec<u8> = chars.iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();

    String::from_utf8_lossy(&bytes).into_owned()
}
