use leptos::prelude::*;

use crate::content::{ProjectEntry, PROJECTS};
use crate::nav::Section;

use super::icons::{BrandIcon, Glyph, Icon};
use super::illustration::ProjectArt;

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300 hover:-translate-y-2 border border-gray-100">
            <div class="h-48 overflow-hidden">
                <ProjectArt illustration=project.illustration />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 mb-2">{project.title}</h3>
                <p class="text-gray-600 mb-4 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 bg-blue-50 text-blue-600 text-sm rounded-full font-medium">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.repository
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-gray-700 hover:text-blue-600 transition-colors"
                    >
                        <BrandIcon name="github" class="text-xl" />
                        <span class="font-medium">"Code"</span>
                    </a>
                    <a
                        href=project.demo
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-gray-700 hover:text-blue-600 transition-colors"
                    >
                        <Glyph icon=Icon::ExternalLink size=20 />
                        <span class="font-medium">"Demo"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-4">
                        "Featured Projects"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "A selection of projects that showcase my skills and experience"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
