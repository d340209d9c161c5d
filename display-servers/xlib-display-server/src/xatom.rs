use std::ffi::CString;
use x11_dl::xlib;

// Specifications can be found here:
// https://specifications.freedesktop.org/wm-spec/1.3/ar01s03.html

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct XAtom {
    pub NetWMName: xlib::Atom,
    pub NetWMState: xlib::Atom,
    pub NetWMStateMaximizedVert: xlib::Atom,
    pub NetWMStateMaximizedHorz: xlib::Atom,
    pub NetClientList: xlib::Atom,
    pub NetClientListStacking: xlib::Atom,
    pub NetFrameExtents: xlib::Atom,
    pub UTF8String: xlib::Atom,
}

impl XAtom {
    #[must_use]
    pub const fn get_name(&self, atom: xlib::Atom) -> &str {
        match atom {
            a if a == self.NetWMName => "_NET_WM_NAME",
            a if a == self.NetWMState => "_NET_WM_STATE",
            a if a == self.NetWMStateMaximizedVert => "_NET_WM_STATE_MAXIMIZED_VERT",
            a if a == self.NetWMStateMaximizedHorz => "_NET_WM_STATE_MAXIMIZED_HORZ",
            a if a == self.NetClientList => "_NET_CLIENT_LIST",
            a if a == self.NetClientListStacking => "_NET_CLIENT_LIST_STACKING",
            a if a == self.NetFrameExtents => "_NET_FRAME_EXTENTS",
            a if a == self.UTF8String => "UTF8_STRING",
            _ => "(UNKNOWN)",
        }
    }

    pub fn new(xlib: &xlib::Xlib, dpy: *mut xlib::Display) -> Self {
        Self {
            NetWMName: from(xlib, dpy, "_NET_WM_NAME"),
            NetWMState: from(xlib, dpy, "_NET_WM_STATE"),
            NetWMStateMaximizedVert: from(xlib, dpy, "_NET_WM_STATE_MAXIMIZED_VERT"),
            NetWMStateMaximizedHorz: from(xlib, dpy, "_NET_WM_STATE_MAXIMIZED_HORZ"),
            NetClientList: from(xlib, dpy, "_NET_CLIENT_LIST"),
            NetClientListStacking: from(xlib, dpy, "_NET_CLIENT_LIST_STACKING"),
            NetFrameExtents: from(xlib, dpy, "_NET_FRAME_EXTENTS"),
            UTF8String: from(xlib, dpy, "UTF8_STRING"),
        }
    }

    /// Whether a `_NET_WM_STATE` list marks a window maximized in both directions.
    #[must_use]
    pub fn is_maximized(&self, states: &[xlib::Atom]) -> bool {
        states.contains(&self.NetWMStateMaximizedVert)
            && states.contains(&self.NetWMStateMaximizedHorz)
    }
}

// `XInternAtom`: https://tronche.com/gui/x/xlib/window-information/XInternAtom.html
fn from(xlib: &xlib::Xlib, dpy: *mut xlib::Display, s: &str) -> xlib::Atom {
    let name = CString::new(s).unwrap_or_default();
    unsafe { (xlib.XInternAtom)(dpy, name.as_ptr(), xlib::False) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms() -> XAtom {
        XAtom {
            NetWMName: 1,
            NetWMState: 2,
            NetWMStateMaximizedVert: 3,
            NetWMStateMaximizedHorz: 4,
            NetClientList: 5,
            NetClientListStacking: 6,
            NetFrameExtents: 7,
            UTF8String: 8,
        }
    }

    #[test]
    fn maximized_needs_both_directions() {
        let atoms = atoms();
        assert!(atoms.is_maximized(&[9, 4, 3]));
        assert!(!atoms.is_maximized(&[3]));
        assert!(!atoms.is_maximized(&[4]));
        assert!(!atoms.is_maximized(&[]));
    }

    #[test]
    fn names_known_atoms() {
        let atoms = atoms();
        assert_eq!(atoms.get_name(6), "_NET_CLIENT_LIST_STACKING");
        assert_eq!(atoms.get_name(7), "_NET_FRAME_EXTENTS");
        assert_eq!(atoms.get_name(8), "UTF8_STRING");
        assert_eq!(atoms.get_name(42), "(UNKNOWN)");
    }
}
