#![allow(dead_code)]

use ballot::{App, MemoryDocument, MemoryElement, Page, PageRegistry, ShellConfig};
use ballot::testing::CountingPage;

// ============================================================================
// Host Fixtures
// ============================================================================

/// A document at `location` with a `#root` element.
pub fn document_at(location: &str) -> MemoryDocument {
    MemoryDocument::new()
        .with_location(location)
        .with_element("root")
}

/// Start the standard application at `location`.
pub fn start_at(location: &str) -> (MemoryDocument, App<MemoryElement>) {
    let document = document_at(location);
    let app = ballot::start(&document, &ShellConfig::default()).unwrap();
    (document, app)
}

/// HTML the shell produces for `page` with the built-in placeholders.
pub fn shell_html(page: Page) -> String {
    let inner = PageRegistry::standard()
        .get(page)
        .map(|h| h.render().to_html())
        .unwrap_or_default();
    format!(r#"<div class="app">{}</div>"#, inner)
}

pub const EMPTY_SHELL: &str = r#"<div class="app"></div>"#;

// ============================================================================
// Counting Registry
// ============================================================================

/// A registry where every page counts its renders.
pub struct CountingRegistry {
    pub registry: PageRegistry,
    pub pages: Vec<(Page, CountingPage)>,
}

impl CountingRegistry {
    pub fn new() -> Self {
        let mut registry = PageRegistry::new();
        let mut pages = Vec::new();
        for page in Page::ALL {
            let counting = CountingPage::new(page.moniker());
            registry.register(page, counting.clone());
            pages.push((page, counting));
        }
        Self { registry, pages }
    }

    pub fn count(&self, page: Page) -> usize {
        self.pages
            .iter()
            .find(|(p, _)| *p == page)
            .map(|(_, c)| c.count())
            .unwrap_or(0)
    }

    pub fn counts(&self) -> Vec<(Page, usize)> {
        self.pages.iter().map(|(p, c)| (*p, c.count())).collect()
    }
}
