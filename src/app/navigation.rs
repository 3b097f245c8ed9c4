use leptos::prelude::*;

use crate::{config::NAV_SCROLLED_PX, content::SectionId};

use super::hooks::use_scrolled_past;

#[component]
pub fn Navigation() -> impl IntoView {
    let scrolled = use_scrolled_past(NAV_SCROLLED_PX);
    view! {
        <nav class=move || {
            let treatment = if scrolled.get() {
                "glass-card !rounded-none py-3"
            } else {
                "py-6 bg-transparent"
            };
            format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {treatment}")
        }>
            <div class="container mx-auto px-4 flex items-center justify-between">
                <a href="#" class="font-mono text-primary text-lg font-bold tracking-wider">
                    "<Usman />"
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {SectionId::NAV
                        .iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="text-muted-foreground hover:text-primary transition-colors duration-300 text-sm font-medium tracking-wide"
                                >
                                    {section.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
