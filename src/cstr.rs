use core::ffi::CStr;
use heapless::Vec;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    BufferOverflow,
    InteriorNul,
}

// Writes `s` as a C-style string (null-terminated) into `buffer`.
// Returns a `CStr` referencing the data in `buffer` or an `Error` if:
// - The buffer is too small to hold the string and the null terminator.
// - The string contains interior null bytes (which is invalid for `CStr`).
pub fn write_c_str<'buf>(s: &str, buffer: &'buf mut [u8]) -> Result<&'buf CStr, Error> {
    let bytes = s.as_bytes();
    let len = bytes.len();

    if len + 1 > buffer.len() {
        return Err(Error::BufferOverflow);
    }

    buffer[..len].copy_from_slice(bytes);
    buffer[len] = 0;

    CStr::from_bytes_with_nul(&buffer[..=len]).map_err(|_| Error::InteriorNul)
}

// Builds a `heapless::Vec<u8, N>` holding `s` followed by a null terminator.
pub fn build_c_str_vec<const N: usize>(s: &str) -> Result<Vec<u8, N>, Error> {
    if s.as_bytes().contains(&0) {
        return Err(Error::InteriorNul);
    }

    let mut buf: Vec<u8, N> = Vec::new();
    buf.extend_from_slice(s.as_bytes())
        .map_err(|_| Error::BufferOverflow)?;
    buf.push(0).map_err(|_| Error::BufferOverflow)?;

    Ok(buf)
}
