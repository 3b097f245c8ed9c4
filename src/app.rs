mod about;
mod backdrop;
#[cfg(feature = "hydrate")]
mod browser;
mod certifications;
mod contact;
mod footer;
mod hero;
mod hooks;
mod navigation;
mod progress;
mod projects;
mod section;
mod skills;
mod typing;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    config::SiteConfig,
    content::{
        person_schema, FAVICON, OG_DESCRIPTION, PROFILE, SITE_DESCRIPTION, SITE_KEYWORDS,
        SITE_TITLE, THEME_COLOR,
    },
};

use about::AboutSection;
use backdrop::FloatingBlobs;
use certifications::CertificationsSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use navigation::Navigation;
use progress::ScrollProgress;
use projects::ProjectsSection;
use skills::SkillsSection;

const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;500;700&family=Rajdhani:wght@300;400;500;600;700&display=swap";
const DEVICON_HREF: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site = SiteConfig::current();
    let schema = match person_schema().to_json() {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("couldn't render person schema: {e}");
            None
        }
    };
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link rel="stylesheet" href=FONTS_HREF />
                <link rel="stylesheet" href=DEVICON_HREF />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                {schema.map(|json| view! { <script type="application/ld+json" inner_html=json></script> })}
                {site.analytics_src.map(|src| view! { <script defer=true src=src></script> })}
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

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="keywords" content=SITE_KEYWORDS.join(", ") />
        <Meta name="author" content=PROFILE.full_name() />
        <Meta name="theme-color" content=THEME_COLOR />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=OG_DESCRIPTION />
        <Meta property="og:type" content="website" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site: every section stacked in one scrolling page.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <main class="relative min-h-screen overflow-x-hidden">
            <FloatingBlobs />
            <ScrollProgress />
            <Navigation />
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <CertificationsSection />
            <ContactSection />
            <Footer />
        </main>
    }
}
