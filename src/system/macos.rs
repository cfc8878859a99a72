//! macOS backends: NSPasteboard access and NSWorkspace application lookup,
//! via Cocoa/ObjC messaging.

use cocoa::base::{id, nil};
use cocoa::foundation::{NSInteger, NSString, NSUInteger};
use objc::{class, msg_send, sel, sel_impl};

use crate::clipboard::pasteboard::{png_dimensions, Pasteboard, PasteboardImage};
use crate::system::SourceAppProvider;

const TYPE_UTF8_TEXT: &str = "public.utf8-plain-text";
const TYPE_PNG: &str = "public.png";
// Legacy pboard type; still the stable way to move file path lists
const TYPE_FILENAMES: &str = "NSFilenamesPboardType";

fn general_pasteboard() -> id {
    unsafe { msg_send![class!(NSPasteboard), generalPasteboard] }
}

unsafe fn ns_string(value: &str) -> id {
    NSString::alloc(nil).init_str(value)
}

unsafe fn to_rust_string(value: id) -> Option<String> {
    if value == nil {
        return None;
    }
    let cstr = std::ffi::CStr::from_ptr(NSString::UTF8String(value));
    Some(cstr.to_string_lossy().into_owned())
}

/// System pasteboard backed by `NSPasteboard.generalPasteboard`.
pub struct NsPasteboard;

impl Pasteboard for NsPasteboard {
    fn change_count(&self) -> i64 {
        unsafe {
            let pasteboard = general_pasteboard();
            let count: NSInteger = msg_send![pasteboard, changeCount];
            count as i64
        }
    }

    fn read_text(&self) -> Option<String> {
        unsafe {
            let pasteboard = general_pasteboard();
            let value: id = msg_send![pasteboard, stringForType: ns_string(TYPE_UTF8_TEXT)];
            to_rust_string(value)
        }
    }

    fn read_image(&self) -> Option<PasteboardImage> {
        unsafe {
            let pasteboard = general_pasteboard();
            let data: id = msg_send![pasteboard, dataForType: ns_string(TYPE_PNG)];
            if data == nil {
                return None;
            }
            let length: NSUInteger = msg_send![data, length];
            if length == 0 {
                return None;
            }
            let bytes: *const u8 = msg_send![data, bytes];
            let png = std::slice::from_raw_parts(bytes, length as usize).to_vec();
            let (width, height) = png_dimensions(&png).unwrap_or((0, 0));
            Some(PasteboardImage { width, height, png })
        }
    }

    fn read_file_paths(&self) -> Option<Vec<String>> {
        unsafe {
            let pasteboard = general_pasteboard();
            let list: id = msg_send![pasteboard, propertyListForType: ns_string(TYPE_FILENAMES)];
            if list == nil {
                return None;
            }
            let count: NSUInteger = msg_send![list, count];
            let mut paths = Vec::with_capacity(count as usize);
            for index in 0..count {
                let value: id = msg_send![list, objectAtIndex: index];
                if let Some(path) = to_rust_string(value) {
                    paths.push(path);
                }
            }
            if paths.is_empty() {
                None
            } else {
                Some(paths)
            }
        }
    }

    fn write_text(&self, text: &str) {
        unsafe {
            let pasteboard = general_pasteboard();
            let _: bool =
                msg_send![pasteboard, setString: ns_string(text) forType: ns_string(TYPE_UTF8_TEXT)];
        }
    }

    fn write_image(&self, png: &[u8]) {
        unsafe {
            let pasteboard = general_pasteboard();
            let data: id = msg_send![class!(NSData),
                dataWithBytes: png.as_ptr() as *const std::os::raw::c_void
                length: png.len() as NSUInteger];
            let _: bool = msg_send![pasteboard, setData: data forType: ns_string(TYPE_PNG)];
        }
    }

    fn write_file_paths(&self, paths: &[String]) {
        unsafe {
            let pasteboard = general_pasteboard();
            let list: id =
                msg_send![class!(NSMutableArray), arrayWithCapacity: paths.len() as NSUInteger];
            for path in paths {
                let _: () = msg_send![list, addObject: ns_string(path)];
            }
            let _: bool =
                msg_send![pasteboard, setPropertyList: list forType: ns_string(TYPE_FILENAMES)];
        }
    }

    fn clear_contents(&self) {
        unsafe {
            let pasteboard = general_pasteboard();
            let _: NSInteger = msg_send![pasteboard, clearContents];
        }
    }
}

/// Frontmost application name via NSWorkspace.
pub struct WorkspaceSourceApp;

impl SourceAppProvider for WorkspaceSourceApp {
    fn active_app_name(&self) -> Option<String> {
        unsafe {
            let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
            let front_app: id = msg_send![workspace, frontmostApplication];
            if front_app == nil {
                return None;
            }
            let name: id = msg_send![front_app, localizedName];
            to_rust_string(name)
        }
    }
}
