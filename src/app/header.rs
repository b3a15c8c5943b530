use leptos::{either::Either, prelude::*};

use crate::menu::MenuState;
use crate::nav::{Navigator, Section, NAV_SECTIONS};

use super::icons::{Glyph, Icon};

/// Every nav item scrolls and closes the mobile menu, desktop included.
fn nav_click(
    navigator: Navigator,
    menu: RwSignal<MenuState>,
    section: Section,
) -> impl Fn() + Clone + Send + Sync + 'static {
    move || menu.update(|m| navigator.select(section, m))
}

#[component]
pub fn Header() -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let menu = RwSignal::new(MenuState::default());

    let nav_item = {
        let navigator = navigator.clone();
        move |section: Section, class: &'static str| {
            let click = nav_click(navigator.clone(), menu, section);
            view! {
                <button
                    class=format!(
                        "text-gray-700 hover:text-blue-600 transition-colors font-medium {class}",
                    )
                    on:click=move |_| click()
                >
                    {section.label()}
                </button>
            }
        }
    };
    let mobile_item = nav_item.clone();

    let go_home = navigator.on_click(Section::Hero);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-md border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <button
                        class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-cyan-600 bg-clip-text text-transparent hover:from-blue-700 hover:to-cyan-700 transition-all"
                        on:click=move |_| go_home()
                    >
                        "Portfolio"
                    </button>
                    <nav class="hidden md:flex space-x-8">
                        {NAV_SECTIONS.into_iter().map(|s| nav_item(s, "")).collect_view()}
                    </nav>
                    <button
                        class="md:hidden text-gray-700"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        {move || {
                            if menu.get().is_open() {
                                Either::Left(view! { <Glyph icon=Icon::Close /> })
                            } else {
                                Either::Right(view! { <Glyph icon=Icon::Menu /> })
                            }
                        }}
                    </button>
                </div>
            </div>
            {move || {
                menu.get()
                    .is_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-white border-t border-gray-200">
                                <nav class="flex flex-col space-y-4 px-4 py-6">
                                    {NAV_SECTIONS
                                        .into_iter()
                                        .map(|s| mobile_item(s, "text-left"))
                                        .collect_view()}
                                </nav>
                            </div>
                        }
                    })
            }}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::RecordingScroll;

    #[test]
    fn test_nav_click_scrolls_then_closes_menu() {
        Owner::new().with(|| {
            let recorder = RecordingScroll::default();
            let navigator = Navigator::new(recorder.clone());
            let menu = RwSignal::new(MenuState::Closed);
            for section in NAV_SECTIONS {
                menu.set(MenuState::Open);
                nav_click(navigator.clone(), menu, section)();
                assert_eq!(menu.get_untracked(), MenuState::Closed);
            }
            let expected = NAV_SECTIONS.map(|s| s.id().to_string());
            assert_eq!(recorder.calls(), expected.to_vec());
        });
    }

    #[test]
    fn test_renders_nav_items_in_order() {
        let html = Owner::new().with(|| {
            provide_context(Navigator::new(RecordingScroll::default()));
            view! { <Header /> }.to_html()
        });
        let positions = NAV_SECTIONS
            .iter()
            .map(|s| html.find(&format!(">{}</button>", s.label())))
            .collect::<Option<Vec<_>>>()
            .expect("every nav item is rendered");
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        // the mobile panel only exists while the menu is open
        assert_eq!(html.matches(r#"<nav class="flex flex-col"#).count(), 0);
    }
}
