mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod icons;
mod illustration;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;

use crate::content::PROFILE;
use crate::nav::Navigator;

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Header and Hero scroll through this rather than touching the document
    provide_context(Navigator::browser());

    view! {
        <Title formatter=|title| format!("{title} | {}", PROFILE.name) />
        <Title text="Portfolio" />
        <Meta name="description" content=PROFILE.headline />

        <div class="min-h-screen">
            <Header />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
