use leptos::prelude::*;

/// Shell-wide UI state shared by the header and the sidebar
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Small screens hide the sidebar after navigating
    pub fn close_left(&self) {
        self.left_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    expect_context::<AppGlobalContext>()
}
