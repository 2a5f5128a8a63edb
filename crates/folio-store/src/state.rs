//! Loading state shared by every store

use folio_core::ErrorInfo;

/// Request status of a store: idle, loading, or settled with an optional error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub error: Option<ErrorInfo>,
}

impl LoadingState {
    /// Enter `Loading`; a previous error is forgotten
    pub fn start(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Settle successfully; an error left by an overlapping load is dropped
    pub fn succeed(&mut self) {
        self.is_loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, error: ErrorInfo) {
        self.is_loading = false;
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
