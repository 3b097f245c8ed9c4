use leptos::{html, prelude::*};

use crate::{
    config::{SECTION_THRESHOLD, SKILL_STAGGER},
    content::{SectionId, Skill, CURRENT_SKILLS, LEARNING_SKILLS},
    motion::{reveal_class, stagger_style},
};

use super::{
    hooks::use_section_visibility,
    section::{Prompt, SectionHeading},
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_section_visibility(section_ref, SECTION_THRESHOLD);
    view! {
        <section id=SectionId::Skills.anchor() node_ref=section_ref class="py-20 px-4 relative">
            <div class="container mx-auto max-w-5xl">
                <SectionHeading section=SectionId::Skills />
                <Prompt command="skills --list --all" extra="mb-8 text-center" />
                <div class=move || {
                    reveal_class("mb-12 transition-all duration-700 delay-100", visible.get())
                }>
                    <h3 class="text-xl font-bold text-secondary mb-6 flex items-center gap-2">
                        <span class="w-3 h-3 bg-primary rounded-full"></span>
                        "Current Skills"
                    </h3>
                    <SkillGrid skills=CURRENT_SKILLS learning=false />
                </div>
                <div class=move || {
                    reveal_class("transition-all duration-700 delay-300", visible.get())
                }>
                    <h3 class="text-xl font-bold text-muted-foreground mb-6 flex items-center gap-2">
                        <span class="w-3 h-3 bg-secondary rounded-full animate-pulse"></span>
                        "Learning & Future Goals"
                    </h3>
                    <SkillGrid skills=LEARNING_SKILLS learning=true />
                </div>
            </div>
        </section>
    }
}

/// Badges for one group of skills. Skills still being learned render muted.
#[component]
fn SkillGrid(skills: &'static [Skill], learning: bool) -> impl IntoView {
    let (badge, icon, name) = if learning {
        (
            "glass-card p-4 text-center card-hover skill-badge opacity-70 hover:opacity-100 cursor-default",
            "text-3xl mb-2 block grayscale hover:grayscale-0 transition-all",
            "text-muted-foreground font-medium",
        )
    } else {
        (
            "glass-card p-4 text-center card-hover skill-badge cursor-default",
            "text-3xl mb-2 block",
            "text-foreground font-medium",
        )
    };
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
            {skills
                .iter()
                .enumerate()
                .map(|(index, skill)| {
                    view! {
                        <div
                            class=badge
                            style=stagger_style("animation-delay", index, SKILL_STAGGER)
                        >
                            <span class=icon>{skill.icon}</span>
                            <span class=name>{skill.name}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
