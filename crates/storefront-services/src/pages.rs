//! Page rendering with view tracking.

use std::sync::Arc;

use crate::capabilities::Analytics;

/// Path recorded for the landing page.
pub const HOME_PATH: &str = "/home";

pub struct PageRenderer {
    analytics: Arc<dyn Analytics>,
}

impl PageRenderer {
    pub fn new(analytics: Arc<dyn Analytics>) -> Self {
        PageRenderer { analytics }
    }

    /// Records a view of the home page and returns its markup.
    pub fn render_page(&self) -> String {
        self.analytics.track_page_view(HOME_PATH);
        "<div>content</div>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeAnalytics;

    #[test]
    fn test_render_tracks_home_view() {
        let analytics = Arc::new(FakeAnalytics::default());
        let renderer = PageRenderer::new(analytics.clone());

        renderer.render_page();

        assert_eq!(analytics.views(), vec!["/home".to_string()]);
    }

    #[test]
    fn test_render_returns_content() {
        let renderer = PageRenderer::new(Arc::new(FakeAnalytics::default()));
        assert!(renderer.render_page().contains("content"));
    }
}
