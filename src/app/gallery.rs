use leptos::prelude::*;

use crate::content::{Project, PORTFOLIO};
use crate::navigation::Section;
use crate::selection::ProjectSelection;

#[component]
pub fn TechTags(technologies: &'static [String]) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2 tech-tags">
            {technologies
                .iter()
                .map(|tech| {
                    view! {
                        <li class="px-2 py-1 bg-gray-100 text-gray-600 text-sm rounded-md">
                            {tech.as_str()}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn ProjectCard(
    project: &'static Project,
    set_selection: WriteSignal<ProjectSelection>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| {
                log::debug!("opening project details: {}", project.title);
                set_selection.update(|s| s.select(project));
            }
            class="group bg-white p-6 rounded-lg shadow-sm hover:shadow-md transition-shadow text-left"
        >
            <div class="flex items-start justify-between mb-4">
                <h3 class="text-lg font-semibold group-hover:text-blue-600 transition-colors">
                    {project.title.as_str()}
                </h3>
                <span class="text-gray-400 group-hover:text-blue-600" aria-hidden="true">
                    "↗"
                </span>
            </div>
            <p class="text-gray-600 mb-4">{project.description.as_str()}</p>
            <TechTags technologies=project.technologies.as_slice() />
        </button>
    }
}

#[component]
pub fn ProjectGallery(set_selection: WriteSignal<ProjectSelection>) -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor_id() class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <h2 class="text-2xl font-bold text-center mb-8">{Section::Projects.label()}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PORTFOLIO
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project set_selection /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    /// Pull the text of each tag out of the first `tech-tags` list in `html`.
    fn rendered_tags(html: &str) -> Vec<String> {
        let start = html.find("tech-tags").expect("tag list should render");
        let end = start + html[start..].find("</ul>").expect("tag list should close");
        html[start..end]
            .split("<li")
            .skip(1)
            .map(|item| {
                let text_start = item.find('>').expect("li should close its open tag") + 1;
                let text_end = item.find("</li>").expect("li should close");
                item[text_start..text_end]
                    .replace("<!>", "")
                    .trim()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_card_tags_match_technologies() {
        for project in PORTFOLIO.projects.iter() {
            let owner = Owner::new();
            let html = owner.with(|| {
                let (_, set_selection) = signal(ProjectSelection::NoSelection);
                view! { <ProjectCard project set_selection /> }.to_html()
            });
            assert!(html.contains(project.title.as_str()));
            assert_eq!(rendered_tags(&html), project.technologies);
        }
    }

    #[test]
    fn test_gallery_renders_projects_in_order() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let (_, set_selection) = signal(ProjectSelection::NoSelection);
            view! { <ProjectGallery set_selection /> }.to_html()
        });
        assert!(html.contains("id=\"projects\""));

        let mut cursor = 0;
        for project in PORTFOLIO.projects.iter() {
            let at = html[cursor..]
                .find(project.title.as_str())
                .unwrap_or_else(|| panic!("{} should render after earlier cards", project.title));
            cursor += at + project.title.len();
        }
    }
}
