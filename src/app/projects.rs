use leptos::{html, prelude::*};

use crate::{
    config::{PROJECTS_THRESHOLD, PROJECT_STAGGER},
    content::{Project, SectionId, PROJECTS},
    motion::{reveal_class, stagger_style},
};

use super::{hooks::use_section_visibility, section::SectionHeading};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_section_visibility(section_ref, PROJECTS_THRESHOLD);
    view! {
        <section id=SectionId::Projects.anchor() node_ref=section_ref class="py-20 px-4 relative">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading section=SectionId::Projects />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project=*project index visible /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div
            class=move || {
                reveal_class("glass-card p-6 card-hover transition-all duration-700", visible.get())
            }
            style=stagger_style("transition-delay", index, PROJECT_STAGGER)
        >
            <div class="flex items-center justify-between mb-4">
                <div class="w-12 h-12 rounded-lg bg-primary/10 flex items-center justify-center">
                    <span class="font-mono text-primary">">_"</span>
                </div>
                <a
                    href=project.repository
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-muted-foreground hover:text-primary transition-colors text-2xl"
                    aria-label=format!("View {} on GitHub", project.title)
                >
                    <i class="devicon-github-original"></i>
                </a>
            </div>
            <h3 class="text-xl font-bold text-foreground mb-3">{project.title}</h3>
            <p class="text-muted-foreground text-sm mb-4 leading-relaxed">{project.description}</p>
            <div class="flex flex-wrap gap-2">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 text-xs font-mono bg-muted/50 text-secondary rounded-full">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
