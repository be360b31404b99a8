pub mod decrypted_text;
pub mod flip_card;
pub mod gallery;
pub mod layout;
pub mod media;
pub mod sections;
pub mod theme;
pub mod tilt_card;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;
use gallery::PhotoGallery;
use layout::{Footer, Navbar};
use sections::*;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta name="description" content=format!("Portfolio of {OWNER_NAME}") />

        <Router>
            <div class=move || {
                let theme = theme.get();
                format!(
                    "min-h-screen transition-colors duration-300 {} {}",
                    theme.page_background(),
                    theme.pick("text-slate-900", "text-white"),
                )
            }>
                <Navbar />
                <main class="mx-auto w-full max-w-7xl">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// The whole portfolio is one scrolling page of anchored sections.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <OpenSource />
        <Experience />
        <Certifications />
        <Projects />
        <Achievements />
        <PhotoGallery />
        <Contact />
    }
}
