use leptos::{html, prelude::*};

use crate::{
    config::{CERTIFICATION_STAGGER, SECTION_THRESHOLD},
    content::{SectionId, CERTIFICATIONS},
    motion::{reveal_class, stagger_style},
};

use super::{hooks::use_section_visibility, section::SectionHeading};

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_section_visibility(section_ref, SECTION_THRESHOLD);
    view! {
        <section
            id=SectionId::Certifications.anchor()
            node_ref=section_ref
            class="py-20 px-4 relative"
        >
            <div class="container mx-auto max-w-4xl">
                <SectionHeading section=SectionId::Certifications />
                <div class=move || {
                    reveal_class("glass-card p-6 md:p-8 transition-all duration-700", visible.get())
                }>
                    <div class="font-mono text-sm mb-6">
                        <span class="text-muted-foreground">"$"</span>
                        " "
                        <span class="text-primary">"certifications"</span>
                        " "
                        <span class="text-secondary">"--list"</span>
                    </div>
                    <div class="space-y-4">
                        {CERTIFICATIONS
                            .iter()
                            .enumerate()
                            .map(|(index, cert)| {
                                view! {
                                    <div
                                        class="flex items-center gap-4 p-4 bg-muted/30 rounded-lg hover:bg-muted/50 transition-colors"
                                        style=stagger_style("animation-delay", index, CERTIFICATION_STAGGER)
                                    >
                                        <span class="text-2xl flex-shrink-0" aria-hidden="true">"🏆"</span>
                                        <div class="flex-1">
                                            <p class="text-foreground font-medium">{cert.name}</p>
                                            <p class="text-muted-foreground text-sm">{cert.platform}</p>
                                        </div>
                                        <span class="text-muted-foreground hover:text-secondary cursor-pointer transition-colors">
                                            "↗"
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="font-mono text-sm mt-6 text-muted-foreground">
                        <span class="text-primary">">"</span>
                        " More certifications loading..."
                        <span class="typing-cursor text-primary">"|"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
