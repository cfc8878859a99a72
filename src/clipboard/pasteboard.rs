//! Platform pasteboard abstraction.
//!
//! The store only talks to this trait; the macOS implementation lives in
//! `system::macos` and tests script a fake.

/// Image read off the pasteboard: encoded PNG bytes plus pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteboardImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Access to the system pasteboard.
///
/// `change_count` must increase every time any process writes to the
/// pasteboard, including this one. Readers return `None` when the requested
/// representation is absent.
pub trait Pasteboard: Send + Sync {
    fn change_count(&self) -> i64;

    fn read_text(&self) -> Option<String>;
    fn read_image(&self) -> Option<PasteboardImage>;
    fn read_file_paths(&self) -> Option<Vec<String>>;

    fn write_text(&self, text: &str);
    fn write_image(&self, png: &[u8]);
    fn write_file_paths(&self, paths: &[String]);

    fn clear_contents(&self);
}

/// Pull width and height out of a PNG IHDR header without decoding the
/// image. Returns `None` if the bytes are not a PNG.
pub fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    if bytes.len() < 24 || bytes[..8] != PNG_SIGNATURE || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    Some((width, height))
}
