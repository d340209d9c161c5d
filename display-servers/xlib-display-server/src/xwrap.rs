//! A wrapper around calls to xlib and X related functions.
// We allow this so that extern "C" functions are not flagged as confusing. The current placement
// allows for easy reading.
#![allow(clippy::items_after_statements)]
use super::xatom::XAtom;
use std::os::raw::{c_int, c_long};
use std::ptr;
use thiserror::Error;

use x11_dl::xlib;

mod getters;
mod setters;

const MAX_PROPERTY_VALUE_LEN: c_long = 4096;

const X_GETWINDOWATTRIBUTES: u8 = 3;
const X_CONFIGUREWINDOW: u8 = 12;
const X_GETGEOMETRY: u8 = 14;
const X_QUERYTREE: u8 = 15;
const X_GETPROPERTY: u8 = 20;
const X_TRANSLATECOORDS: u8 = 40;

// Windows vanish between two requests all the time. Those errors are expected, everything else
// goes to the log.
// This is allowed for now as const extern fns
// are not yet stable (1.56.0, 16 Sept 2021)
// see issue #64926 <https://github.com/rust-lang/rust/issues/64926> for more information.
#[allow(clippy::missing_const_for_fn)]
pub extern "C" fn on_error_from_xlib(_: *mut xlib::Display, er: *mut xlib::XErrorEvent) -> c_int {
    let err = unsafe { *er };
    let ec = err.error_code;
    let rc = err.request_code;
    let bm = ec == xlib::BadMatch;
    let bd = ec == xlib::BadDrawable;

    if ec == xlib::BadWindow
        || (rc == X_CONFIGUREWINDOW && bm)
        || (rc == X_GETWINDOWATTRIBUTES && bd)
        || (rc == X_GETGEOMETRY && bd)
        || (rc == X_QUERYTREE && bd)
        || (rc == X_GETPROPERTY && bm)
        || (rc == X_TRANSLATECOORDS && bm)
    {
        return 0;
    }
    tracing::warn!(
        "Unexpected X error: code {}, request {}, resource {}",
        ec,
        rc,
        err.resourceid
    );
    0
}

#[derive(Debug, Clone, Error)]
pub enum XlibError {
    #[error("Unable to load Xlib: {0}")]
    LibraryNotLoaded(String),
    #[error("Unable to open the X display")]
    DisplayNotFound,
    #[error("Xlib returned a failed status")]
    FailedStatus,
    #[error("Root window not found")]
    RootWindowNotFound,
    #[error("Window {0} is gone")]
    WindowGone(xlib::Window),
}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    root: xlib::Window,
    pub atoms: XAtom,
}

impl XWrap {
    /// Connect to the display named by `$DISPLAY`.
    ///
    /// # Errors
    ///
    /// Errors when Xlib cannot be loaded or the display cannot be opened.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    pub fn new() -> Result<Self, XlibError> {
        let xlib = xlib::Xlib::open().map_err(|err| XlibError::LibraryNotLoaded(err.to_string()))?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(XlibError::DisplayNotFound);
        }

        let atoms = XAtom::new(&xlib, display);
        let root = unsafe { (xlib.XDefaultRootWindow)(display) };
        if root == 0 {
            unsafe { (xlib.XCloseDisplay)(display) };
            return Err(XlibError::RootWindowNotFound);
        }

        unsafe { (xlib.XSetErrorHandler)(Some(on_error_from_xlib)) };

        let xw = Self {
            xlib,
            display,
            root,
            atoms,
        };
        xw.sync();
        tracing::debug!("Connected to X, root window {}", root);
        Ok(xw)
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }
}

impl Drop for XWrap {
    // `XCloseDisplay`: https://tronche.com/gui/x/xlib/display/closing.html
    fn drop(&mut self) {
        unsafe { (self.xlib.XCloseDisplay)(self.display) };
    }
}
