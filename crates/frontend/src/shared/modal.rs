use leptos::prelude::*;

/// Open/closed state of one dialog. Thaw's `Dialog` binds to `open` directly.
#[derive(Clone, Copy)]
pub struct ModalController {
    pub open: RwSignal<bool>,
}

impl ModalController {
    pub fn show(&self) {
        self.open.set(true);
    }

    pub fn hide(&self) {
        self.open.set(false);
    }

    pub fn toggle(&self) {
        self.open.update(|o| *o = !*o);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

pub fn use_modal() -> ModalController {
    ModalController {
        open: RwSignal::new(false),
    }
}
