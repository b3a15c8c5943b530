use leptos::prelude::*;

use crate::content::PROFILE;
use crate::nav::{Navigator, Section};

use super::icons::{BrandIcon, Glyph, Icon};

/// "View My Work" jumps to the projects, the bouncing arrow to about.
fn hero_clicks(
    navigator: &Navigator,
) -> [impl Fn() + Clone + Send + Sync + 'static; 2] {
    [
        navigator.on_click(Section::Projects),
        navigator.on_click(Section::About),
    ]
}

#[component]
pub fn Hero() -> impl IntoView {
    let [view_work, scroll_hint] = hero_clicks(&expect_context::<Navigator>());

    view! {
        <section
            id=Section::Hero.id()
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-50 to-blue-50 pt-16 relative"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center">
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-gray-900 mb-6">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-blue-600 to-cyan-600 bg-clip-text text-transparent">
                        {PROFILE.name}
                    </span>
                </h1>
                <p class="text-xl sm:text-2xl text-gray-600 mb-8 max-w-3xl mx-auto">
                    {PROFILE.headline}
                </p>
                <p class="text-lg text-gray-500 mb-12 max-w-2xl mx-auto">{PROFILE.tagline}</p>
                <div class="flex justify-center gap-4 mb-12">
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-3 bg-gray-900 text-white rounded-full hover:bg-gray-800 transition-colors text-2xl leading-none"
                        aria-label="GitHub Profile"
                    >
                        <BrandIcon name="github" />
                    </a>
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-3 bg-blue-600 text-white rounded-full hover:bg-blue-700 transition-colors text-2xl leading-none"
                        aria-label="LinkedIn Profile"
                    >
                        <BrandIcon name="linkedin" />
                    </a>
                    <a
                        href=PROFILE.mailto()
                        class="p-3 bg-cyan-600 text-white rounded-full hover:bg-cyan-700 transition-colors"
                        aria-label="Email"
                    >
                        <Glyph icon=Icon::Mail />
                    </a>
                </div>
                <button
                    class="inline-flex items-center gap-2 bg-blue-600 text-white px-8 py-4 rounded-full font-medium hover:bg-blue-700 transition-all hover:scale-105"
                    on:click=move |_| view_work()
                >
                    "View My Work"
                </button>
            </div>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-gray-400 hover:text-blue-600 transition-colors"
                aria-label="Scroll to about"
                on:click=move |_| scroll_hint()
            >
                <Glyph icon=Icon::ArrowDown size=32 />
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::RecordingScroll;

    #[test]
    fn test_buttons_scroll_to_projects_and_about() {
        let recorder = RecordingScroll::default();
        let [view_work, scroll_hint] = hero_clicks(&Navigator::new(recorder.clone()));
        view_work();
        scroll_hint();
        assert_eq!(recorder.calls(), vec!["projects", "about"]);
    }

    #[test]
    fn test_renders_with_injected_navigator() {
        let html = Owner::new().with(|| {
            provide_context(Navigator::new(RecordingScroll::default()));
            view! { <Hero /> }.to_html()
        });
        assert!(html.contains(r#"id="hero""#));
        assert!(html.contains(">View My Work</button>"));
        assert!(html.contains(&format!("mailto:{}", PROFILE.email)));
    }
}
