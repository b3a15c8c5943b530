use leptos::prelude::*;

use crate::content::PROFILE;

use super::icons::{BrandIcon, Glyph, Icon};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col items-center">
                    <div class="flex gap-6 mb-6 text-2xl">
                        <a
                            href=PROFILE.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-white transition-colors"
                            aria-label="GitHub Profile"
                        >
                            <BrandIcon name="github" />
                        </a>
                        <a
                            href=PROFILE.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-white transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <BrandIcon name="linkedin" />
                        </a>
                        <a
                            href=PROFILE.mailto()
                            class="hover:text-white transition-colors"
                            aria-label="Email"
                        >
                            <Glyph icon=Icon::Mail />
                        </a>
                    </div>
                    <p class="text-center flex items-center gap-2">
                        "Made with " <Glyph icon=Icon::Heart size=16 class="text-red-500" filled=true />
                        " by " {PROFILE.name}
                    </p>
                    <p class="text-sm text-gray-400 mt-2">
                        {format!("© {} All rights reserved.", env!("BUILD_YEAR"))}
                    </p>
                </div>
            </div>
        </footer>
    }
}
