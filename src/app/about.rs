use leptos::prelude::*;

use crate::content::{FeatureIcon, FEATURES};
use crate::nav::Section;

use super::icons::{Glyph, Icon};

fn icon_for(icon: FeatureIcon) -> Icon {
    match icon {
        FeatureIcon::Code => Icon::Code,
        FeatureIcon::Palette => Icon::Palette,
        FeatureIcon::Zap => Icon::Zap,
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-4">"About Me"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "I'm a passionate developer dedicated to creating exceptional digital experiences that make a difference"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8 mb-16">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="p-6 bg-gradient-to-br from-gray-50 to-blue-50 rounded-2xl hover:shadow-xl transition-all duration-300 hover:-translate-y-2">
                                    <div class="w-16 h-16 bg-blue-600 text-white rounded-xl flex items-center justify-center mb-4">
                                        <Glyph icon=icon_for(feature.icon) size=32 />
                                    </div>
                                    <h3 class="text-xl font-semibold text-gray-900 mb-2">
                                        {feature.title}
                                    </h3>
                                    <p class="text-gray-600">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="max-w-3xl mx-auto text-center">
                    <p class="text-lg text-gray-700 leading-relaxed mb-6">
                        "With several years of experience in web development, I specialize in building modern, responsive applications using cutting-edge technologies. I'm always learning and staying up-to-date with the latest trends in the industry."
                    </p>
                    <p class="text-lg text-gray-700 leading-relaxed">
                        "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or sharing knowledge with the developer community."
                    </p>
                </div>
            </div>
        </section>
    }
}
