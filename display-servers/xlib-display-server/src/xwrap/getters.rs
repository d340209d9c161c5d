//! `XWrap` getters.
use super::{XlibError, MAX_PROPERTY_VALUE_LEN};
use crate::{FrameExtents, XWrap};
use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_ulong};
use std::slice;
use x11_dl::xlib;

impl XWrap {
    // Public functions.

    /// Returns the default root.
    #[must_use]
    pub const fn get_default_root(&self) -> xlib::Window {
        self.root
    }

    /// Returns the managed top-level windows, bottom to top.
    ///
    /// Reads `_NET_CLIENT_LIST_STACKING`, then `_NET_CLIENT_LIST`, and falls back to the
    /// children of the root when no window manager publishes either.
    /// # Errors
    ///
    /// Errors when the children of the root cannot be queried.
    pub fn get_client_windows(&self) -> Result<Vec<xlib::Window>, XlibError> {
        for atom in [self.atoms.NetClientListStacking, self.atoms.NetClientList] {
            if let Some(windows) = self.get_window_list(self.root, atom) {
                tracing::trace!("Window list from {}", self.atoms.get_name(atom));
                return Ok(windows);
            }
        }
        let (_, children) = self.get_tree(self.root)?;
        Ok(children
            .into_iter()
            .filter(|&w| {
                self.get_window_attrs(w)
                    .is_ok_and(|attrs| attrs.override_redirect == xlib::False)
            })
            .collect())
    }

    /// Returns the current position of the cursor on the root and the button state mask.
    /// # Errors
    ///
    /// Will error if the server reports no root for the pointer.
    // `XQueryPointer`: https://tronche.com/gui/x/xlib/window-information/XQueryPointer.html
    pub fn get_pointer_state(&self) -> Result<(i32, i32, c_uint), XlibError> {
        let mut root_return: xlib::Window = 0;
        let mut child_return: xlib::Window = 0;
        let mut root_x_return: c_int = 0;
        let mut root_y_return: c_int = 0;
        let mut win_x_return: c_int = 0;
        let mut win_y_return: c_int = 0;
        let mut mask_return: c_uint = 0;
        let success = unsafe {
            (self.xlib.XQueryPointer)(
                self.display,
                self.root,
                &mut root_return,
                &mut child_return,
                &mut root_x_return,
                &mut root_y_return,
                &mut win_x_return,
                &mut win_y_return,
                &mut mask_return,
            )
        };
        pointer_sample(
            success != 0,
            root_return,
            (root_x_return, root_y_return),
            mask_return,
        )
    }

    /// Returns the child of the root at a point of the screen.
    // `XTranslateCoordinates`: https://tronche.com/gui/x/xlib/window-information/XTranslateCoordinates.html
    #[must_use]
    pub fn get_window_at(&self, x: i32, y: i32) -> Option<xlib::Window> {
        let mut dest_x: c_int = 0;
        let mut dest_y: c_int = 0;
        let mut child: xlib::Window = 0;
        let status = unsafe {
            (self.xlib.XTranslateCoordinates)(
                self.display,
                self.root,
                self.root,
                x,
                y,
                &mut dest_x,
                &mut dest_y,
                &mut child,
            )
        };
        (status != 0 && child != 0).then_some(child)
    }

    /// Returns the ancestor of a window which is a direct child of the root.
    #[must_use]
    pub fn get_top_level(&self, window: xlib::Window) -> xlib::Window {
        let mut current = window;
        while let Ok((parent, _)) = self.get_tree(current) {
            if parent == 0 || parent == self.root {
                break;
            }
            current = parent;
        }
        current
    }

    /// Returns the attributes of a window.
    /// # Errors
    ///
    /// Will error if window status is 0 (no attributes).
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xlib::Window,
    ) -> Result<xlib::XWindowAttributes, XlibError> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return Err(XlibError::WindowGone(window));
        }
        Ok(attrs)
    }

    /// Returns the outer rectangle of a window in root coordinates, as `(x, y, width, height)`.
    /// The frame drawn by the window manager is included, so the rect can be handed back to
    /// `move_resize_window` unchanged.
    /// # Errors
    ///
    /// Errors when the window is gone.
    pub fn get_window_rect(&self, window: xlib::Window) -> Result<(i32, i32, i32, i32), XlibError> {
        let attrs = self.get_window_attrs(window)?;
        let mut x: c_int = 0;
        let mut y: c_int = 0;
        let mut child: xlib::Window = 0;
        let status = unsafe {
            (self.xlib.XTranslateCoordinates)(
                self.display,
                window,
                self.root,
                0,
                0,
                &mut x,
                &mut y,
                &mut child,
            )
        };
        if status == 0 {
            return Err(XlibError::WindowGone(window));
        }
        let client = (x, y, attrs.width, attrs.height);
        Ok(self.get_frame_extents(window).outer(client))
    }

    /// Returns the decorations around a window, none when the window manager does not say.
    #[must_use]
    pub fn get_frame_extents(&self, window: xlib::Window) -> FrameExtents {
        self.get_property_longs(window, self.atoms.NetFrameExtents, xlib::XA_CARDINAL)
            .map(|values| FrameExtents::from_longs(&values))
            .unwrap_or_default()
    }

    /// Returns a windows name, `_NET_WM_NAME` first and `WM_NAME` otherwise.
    #[must_use]
    pub fn get_window_name(&self, window: xlib::Window) -> Option<String> {
        if let Ok(text) = self.get_utf8_prop(window, self.atoms.NetWMName) {
            return Some(text);
        }
        if let Ok(text) = self.get_text_prop(window, xlib::XA_WM_NAME) {
            return Some(text);
        }
        None
    }

    /// Returns the atom states of a window.
    #[must_use]
    pub fn get_window_states_atoms(&self, window: xlib::Window) -> Vec<xlib::Atom> {
        self.get_property_longs(window, self.atoms.NetWMState, xlib::XA_ATOM)
            .unwrap_or_default()
    }

    /// Returns the size of the default screen.
    // `XDefaultScreen`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultScreen
    // `XDisplayWidth`: https://tronche.com/gui/x/xlib/display/display-macros.html#DisplayWidth
    #[must_use]
    pub fn get_screen_size(&self) -> (i32, i32) {
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            (
                (self.xlib.XDisplayWidth)(self.display, screen),
                (self.xlib.XDisplayHeight)(self.display, screen),
            )
        }
    }

    // Internal functions.

    /// Returns a window list property like `_NET_CLIENT_LIST`.
    fn get_window_list(&self, window: xlib::Window, atom: xlib::Atom) -> Option<Vec<xlib::Window>> {
        self.get_property_longs(window, atom, xlib::XA_WINDOW)
            .ok()
            .filter(|windows| !windows.is_empty())
    }

    /// Returns a property made of 32 bit items, which Xlib hands out as longs.
    /// # Errors
    ///
    /// Errors if the property is missing.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    fn get_property_longs(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
    ) -> Result<Vec<c_ulong>, XlibError> {
        let mut format_return: i32 = 0;
        let mut nitems_return: c_ulong = 0;
        let mut type_return: xlib::Atom = 0;
        let mut bytes_after_return: c_ulong = 0;
        let mut prop_return: *mut c_uchar = std::ptr::null_mut();
        unsafe {
            let status = (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                property,
                0,
                MAX_PROPERTY_VALUE_LEN / 4,
                xlib::False,
                r#type,
                &mut type_return,
                &mut format_return,
                &mut nitems_return,
                &mut bytes_after_return,
                &mut prop_return,
            );
            if status != i32::from(xlib::Success) || prop_return.is_null() {
                return Err(XlibError::FailedStatus);
            }
            let values = if format_return == 32 {
                #[allow(clippy::cast_ptr_alignment)]
                let ptr = prop_return as *const c_ulong;
                slice::from_raw_parts(ptr, nitems_return as usize).to_vec()
            } else {
                vec![]
            };
            (self.xlib.XFree)(prop_return.cast());
            Ok(values)
        }
    }

    /// Returns a `UTF8_STRING` property like `_NET_WM_NAME`.
    /// # Errors
    ///
    /// Errors if the property is missing or is not UTF-8 text.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    fn get_utf8_prop(&self, window: xlib::Window, property: xlib::Atom) -> Result<String, XlibError> {
        let mut format_return: i32 = 0;
        let mut nitems_return: c_ulong = 0;
        let mut type_return: xlib::Atom = 0;
        let mut bytes_after_return: c_ulong = 0;
        let mut prop_return: *mut c_uchar = std::ptr::null_mut();
        unsafe {
            let status = (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                property,
                0,
                MAX_PROPERTY_VALUE_LEN / 4,
                xlib::False,
                self.atoms.UTF8String,
                &mut type_return,
                &mut format_return,
                &mut nitems_return,
                &mut bytes_after_return,
                &mut prop_return,
            );
            if status != i32::from(xlib::Success) || prop_return.is_null() {
                return Err(XlibError::FailedStatus);
            }
            let text = if format_return == 8 && type_return == self.atoms.UTF8String {
                utf8_text(slice::from_raw_parts(prop_return, nitems_return as usize))
            } else {
                None
            };
            (self.xlib.XFree)(prop_return.cast());
            text.ok_or(XlibError::FailedStatus)
        }
    }

    /// Returns a text property for a window.
    /// # Errors
    ///
    /// Errors if window status = 0.
    // `XGetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTextProperty.html
    fn get_text_prop(&self, window: xlib::Window, atom: xlib::Atom) -> Result<String, XlibError> {
        unsafe {
            let mut text_prop: xlib::XTextProperty = std::mem::zeroed();
            let status: c_int =
                (self.xlib.XGetTextProperty)(self.display, window, &mut text_prop, atom);
            if status == 0 || text_prop.value.is_null() {
                return Err(XlibError::FailedStatus);
            }
            let text = CStr::from_ptr(text_prop.value.cast::<c_char>())
                .to_string_lossy()
                .into_owned();
            (self.xlib.XFree)(text_prop.value.cast());
            Ok(text)
        }
    }

    /// Returns the parent and the children of a window.
    /// # Errors
    ///
    /// Will error if the window is gone.
    // `XQueryTree`: https://tronche.com/gui/x/xlib/window-information/XQueryTree.html
    fn get_tree(&self, window: xlib::Window) -> Result<(xlib::Window, Vec<xlib::Window>), XlibError> {
        unsafe {
            let mut root_return: xlib::Window = 0;
            let mut parent_return: xlib::Window = 0;
            let mut array: *mut xlib::Window = std::ptr::null_mut();
            let mut length: c_uint = 0;
            let status: xlib::Status = (self.xlib.XQueryTree)(
                self.display,
                window,
                &mut root_return,
                &mut parent_return,
                &mut array,
                &mut length,
            );
            if status == 0 {
                return Err(XlibError::WindowGone(window));
            }
            let children = if array.is_null() {
                vec![]
            } else {
                let children = slice::from_raw_parts(array, length as usize).to_vec();
                (self.xlib.XFree)(array.cast());
                children
            };
            Ok((parent_return, children))
        }
    }
}

/// Turns an `XQueryPointer` reply into a sample. The call fails when the pointer sits on
/// another screen of the display; that is reported as not pressed rather than as an error.
fn pointer_sample(
    same_screen: bool,
    root: xlib::Window,
    (x, y): (i32, i32),
    mask: c_uint,
) -> Result<(i32, i32, c_uint), XlibError> {
    if same_screen {
        return Ok((x, y, mask));
    }
    if root == 0 {
        return Err(XlibError::RootWindowNotFound);
    }
    tracing::trace!("Pointer is on the screen of root {}", root);
    Ok((x, y, 0))
}

/// Decodes a `UTF8_STRING` value. Empty values count as missing.
fn utf8_text(bytes: &[u8]) -> Option<String> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let text = String::from_utf8_lossy(&bytes[..end]);
    (!text.is_empty()).then(|| text.into_owned())
}
