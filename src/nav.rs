use std::sync::Arc;

use crate::menu::MenuState;

/// A scrollable region of the page, addressed by its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

/// Sections listed in the header, in display order.
pub const NAV_SECTIONS: [Section; 4] = [
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Contact,
];

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Something that can bring a named anchor into view.
///
/// A missing anchor is not an error: implementations ignore it.
pub trait ScrollTarget {
    fn scroll_to_section(&self, id: &str);
}

/// Smooth-scrolls the browser viewport to the element with the given id.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScroll;

impl ScrollTarget for BrowserScroll {
    #[cfg(feature = "hydrate")]
    fn scroll_to_section(&self, id: &str) {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        let el = if let Some(el) = el {
            el
        } else {
            log::debug!("no element with id {id}, skipping scroll");
            return;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    #[cfg(not(feature = "hydrate"))]
    fn scroll_to_section(&self, id: &str) {
        // no document outside the browser
        log::debug!("scroll to {id} ignored outside the browser");
    }
}

/// Shared handle to the page's scroll capability, provided through context
/// to the components that navigate.
#[derive(Clone)]
pub struct Navigator(Arc<dyn ScrollTarget + Send + Sync>);

impl Navigator {
    pub fn new<S>(target: S) -> Self
    where
        S: ScrollTarget + Send + Sync + 'static,
    {
        Self(Arc::new(target))
    }

    pub fn browser() -> Self {
        Self::new(BrowserScroll)
    }

    pub fn go(&self, section: Section) {
        log::debug!("navigating to #{}", section.id());
        self.0.scroll_to_section(section.id());
    }

    /// Click handler for a plain scroll link.
    pub fn on_click(&self, section: Section) -> impl Fn() + Clone + Send + Sync + 'static {
        let navigator = self.clone();
        move || navigator.go(section)
    }

    /// A nav item was chosen: scroll there and close the mobile menu.
    pub fn select(&self, section: Section, menu: &mut MenuState) {
        self.go(section);
        menu.close();
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator").finish_non_exhaustive()
    }
}

/// Records every requested id instead of scrolling.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingScroll {
    calls: Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl RecordingScroll {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl ScrollTarget for RecordingScroll {
    fn scroll_to_section(&self, id: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_navigator() -> (Navigator, RecordingScroll) {
        let recorder = RecordingScroll::default();
        (Navigator::new(recorder.clone()), recorder)
    }

    #[test]
    fn test_nav_items_scroll_to_their_own_id() {
        for section in NAV_SECTIONS {
            let (nav, recorder) = recording_navigator();
            let mut menu = MenuState::default();
            nav.select(section, &mut menu);
            assert_eq!(recorder.calls(), vec![section.id().to_string()]);
        }
    }

    #[test]
    fn test_nav_ids_match_expected_anchors() {
        let ids = NAV_SECTIONS.iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["about", "skills", "projects", "contact"]);
        let labels = NAV_SECTIONS.iter().map(|s| s.label()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["About", "Skills", "Projects", "Contact"]);
    }

    #[test]
    fn test_select_always_closes_menu() {
        for section in NAV_SECTIONS {
            for open in [false, true] {
                let (nav, _) = recording_navigator();
                let mut menu = if open {
                    MenuState::Open
                } else {
                    MenuState::Closed
                };
                nav.select(section, &mut menu);
                assert_eq!(menu, MenuState::Closed);
            }
        }
    }

    #[test]
    fn test_go_does_not_touch_menu_and_records_in_order() {
        let (nav, recorder) = recording_navigator();
        nav.go(Section::Hero);
        nav.go(Section::Projects);
        nav.go(Section::About);
        assert_eq!(recorder.calls(), vec!["hero", "projects", "about"]);
    }

    #[test]
    fn test_click_handler_can_fire_repeatedly() {
        let (nav, recorder) = recording_navigator();
        let click = nav.on_click(Section::Skills);
        click();
        click.clone()();
        assert_eq!(recorder.calls(), vec!["skills", "skills"]);
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_missing_target_is_a_noop() {
        // outside the browser there is never a target; this must not panic
        BrowserScroll.scroll_to_section("does-not-exist");
        Navigator::browser().go(Section::Contact);
    }
}
