use leptos::{html, prelude::*};

use crate::{
    config::SECTION_THRESHOLD,
    content::{SectionId, PROFILE},
    motion::reveal_class,
};

use super::{hooks::use_section_visibility, section::SectionHeading};

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_section_visibility(section_ref, SECTION_THRESHOLD);
    view! {
        <section id=SectionId::About.anchor() node_ref=section_ref class="py-20 px-4 relative">
            <div class="container mx-auto max-w-4xl">
                <SectionHeading section=SectionId::About />
                <div class=move || {
                    reveal_class(
                        "glass-card p-8 md:p-12 card-hover transition-all duration-700",
                        visible.get(),
                    )
                }>
                    <div class="flex items-start gap-4 mb-6">
                        <span class="font-mono text-2xl text-primary flex-shrink-0">">_"</span>
                        <div class="font-mono text-sm text-muted-foreground mt-1">
                            <span class="text-primary">"$"</span>
                            " cat about.txt"
                        </div>
                    </div>
                    {PROFILE
                        .about
                        .iter()
                        .enumerate()
                        .map(|(i, paragraph)| {
                            let spacing = if i + 1 < PROFILE.about.len() { " mb-6" } else { "" };
                            view! {
                                <p class=format!(
                                    "text-lg md:text-xl text-foreground leading-relaxed{spacing}",
                                )>{*paragraph}</p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
