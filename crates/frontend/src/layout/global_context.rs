use leptos::prelude::*;

use crate::system::session;

/// Top-level views of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Products,
    NewProduct,
    ProductTypes,
    Account,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Products,
        Page::NewProduct,
        Page::ProductTypes,
        Page::Account,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Products => "Products",
            Page::NewProduct => "Create product",
            Page::ProductTypes => "Product types",
            Page::Account => "Account",
        }
    }
}

/// App-wide UI state, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Products),
            sidebar_open: RwSignal::new(true),
        }
    }

    /// Switches the center view. Navigation counts as user activity for the
    /// session timeout.
    pub fn navigate(&self, page: Page) {
        session::touch_activity();
        self.page.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
