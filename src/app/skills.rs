use leptos::prelude::*;

use crate::content::SKILL_CATEGORIES;
use crate::nav::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-gradient-to-br from-gray-50 to-blue-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-4">
                        "Skills & Expertise"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Technologies and tools I work with to bring ideas to life"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="bg-white p-8 rounded-2xl shadow-lg hover:shadow-2xl transition-all duration-300">
                                    <h3 class="text-2xl font-bold text-gray-900 mb-6 pb-3 border-b-2 border-blue-600">
                                        {category.category}
                                    </h3>
                                    <div class="space-y-3">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="flex items-center gap-3 group">
                                                        <div class="w-2 h-2 bg-blue-600 rounded-full group-hover:scale-150 transition-transform" />
                                                        <span class="text-gray-700 group-hover:text-blue-600 transition-colors font-medium">
                                                            {*skill}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
