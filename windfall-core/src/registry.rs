//! Bookkeeping of the windows taking part in the simulation.
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::{Handle, TrackedWindow, WindowHandle};

/// The master list of tracked windows, ordered bottom to top.
#[derive(Debug, Clone)]
pub struct WindowRegistry<H: Handle> {
    windows: Vec<TrackedWindow<H>>,
    ignored_titles: Vec<String>,
    skip_maximized: bool,
}

impl<H: Handle> Default for WindowRegistry<H> {
    fn default() -> Self {
        Self::new(vec![], false)
    }
}

impl<H: Handle> WindowRegistry<H> {
    #[must_use]
    pub fn new(ignored_titles: Vec<String>, skip_maximized: bool) -> Self {
        Self {
            windows: vec![],
            ignored_titles,
            skip_maximized,
        }
    }

    /// Visible top-level windows with a title which is not on the ignore list.
    ///
    /// # Errors
    ///
    /// Errors when the display server cannot list its windows.
    pub fn candidates(
        &self,
        server: &impl DisplayServer<H>,
    ) -> Result<Vec<(WindowHandle<H>, String)>> {
        let candidates = server
            .top_level_windows()?
            .into_iter()
            .filter_map(|(handle, title)| Some((handle, title?)))
            .filter(|(_, title)| !title.is_empty())
            .filter(|(_, title)| !self.is_ignored(title))
            .filter(|(handle, _)| server.is_visible(*handle))
            .collect();
        Ok(candidates)
    }

    /// Track every candidate window. Returns the candidate set.
    ///
    /// # Errors
    ///
    /// Errors when the display server cannot list its windows.
    pub fn discover(&mut self, server: &impl DisplayServer<H>) -> Result<Vec<WindowHandle<H>>> {
        let candidates = self.candidates(server)?;
        let mut found = Vec::with_capacity(candidates.len());
        for (handle, title) in candidates {
            self.insert(server, handle, Some(title));
            found.push(handle);
        }
        tracing::debug!("Discovered {} windows", found.len());
        Ok(found)
    }

    /// Track a single window. Windows which are not visible are skipped.
    pub fn add(&mut self, server: &impl DisplayServer<H>, handle: WindowHandle<H>) -> bool {
        if !server.is_visible(handle) {
            tracing::debug!("Skipping invisible window {:?}", handle);
            return false;
        }
        self.insert(server, handle, None)
    }

    /// Track the visible top-level window with exactly this title.
    ///
    /// # Errors
    ///
    /// Errors when the display server cannot list its windows.
    pub fn add_by_title(&mut self, server: &impl DisplayServer<H>, title: &str) -> Result<bool> {
        let found = server
            .top_level_windows()?
            .into_iter()
            .find(|(handle, name)| name.as_deref() == Some(title) && server.is_visible(*handle));
        match found {
            Some((handle, name)) => Ok(self.insert(server, handle, name)),
            None => {
                tracing::warn!("No visible window titled {:?}", title);
                Ok(false)
            }
        }
    }

    /// Drop windows which are gone (and maximized ones when those are skipped), then return
    /// the handles of the windows left for this tick.
    pub fn refresh(&mut self, server: &impl DisplayServer<H>) -> Vec<WindowHandle<H>> {
        let skip_maximized = self.skip_maximized;
        self.windows.retain(|w| {
            if !server.is_valid(w.handle) {
                tracing::debug!("Window {:?} is gone", w.handle);
                return false;
            }
            if skip_maximized && server.is_maximized(w.handle) {
                tracing::debug!("Window {:?} is maximized, no longer tracking it", w.handle);
                return false;
            }
            true
        });
        self.windows.iter().map(|w| w.handle).collect()
    }

    #[must_use]
    pub fn windows(&self) -> &[TrackedWindow<H>] {
        &self.windows
    }

    #[must_use]
    pub fn get(&self, handle: WindowHandle<H>) -> Option<&TrackedWindow<H>> {
        self.windows.iter().find(|w| w.handle == handle)
    }

    pub fn get_mut(&mut self, handle: WindowHandle<H>) -> Option<&mut TrackedWindow<H>> {
        self.windows.iter_mut().find(|w| w.handle == handle)
    }

    /// The window following the cursor, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&TrackedWindow<H>> {
        self.windows.iter().find(|w| w.dragging())
    }

    /// Let go of every window.
    pub fn release_all(&mut self) {
        self.windows.iter_mut().for_each(TrackedWindow::stop_drag);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn is_ignored(&self, title: &str) -> bool {
        self.ignored_titles.iter().any(|ignored| ignored == title)
    }

    fn insert(
        &mut self,
        server: &impl DisplayServer<H>,
        handle: WindowHandle<H>,
        title: Option<String>,
    ) -> bool {
        if self.get(handle).is_some() {
            return false;
        }
        match server.window_rect(handle) {
            Ok(rect) => {
                tracing::debug!("Tracking window {:?} {:?} at {:?}", handle, title, rect);
                self.windows.push(TrackedWindow::new(handle, title, rect));
                true
            }
            Err(err) => {
                tracing::debug!("Unable to read geometry of {:?}: {}", handle, err);
                false
            }
        }
    }
}
