use leptos::prelude::*;

use super::gallery::TechTags;
use crate::content::Project;
use crate::selection::ProjectSelection;

#[component]
fn DetailList(
    heading: &'static str,
    list_class: &'static str,
    items: &'static [String],
) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-medium text-gray-700 mb-2">{heading}</h4>
            <ul class=format!("list-disc list-inside text-gray-600 space-y-1 {list_class}")>
                {items.iter().map(|item| view! { <li>{item.as_str()}</li> }).collect_view()}
            </ul>
        </div>
    }
}

/// Overlay for a single project. Clicking the backdrop or the close control clears the selection.
#[component]
pub fn ProjectDialog(
    project: &'static Project,
    set_selection: WriteSignal<ProjectSelection>,
) -> impl IntoView {
    let close = move || {
        log::debug!("closing project details: {}", project.title);
        set_selection.update(ProjectSelection::close);
    };
    let details = &project.details;

    view! {
        <div
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center p-4"
            on:click=move |_| close()
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-dialog-title"
                class="bg-white rounded-lg max-w-4xl w-full max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="p-6">
                    <div class="flex justify-between items-start mb-6">
                        <h2 id="project-dialog-title" class="text-2xl font-bold text-gray-900">
                            {project.title.as_str()}
                        </h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-gray-500 hover:text-gray-700"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="space-y-6">
                        <div>
                            <h3 class="text-lg font-semibold text-blue-600 mb-2">"Purpose"</h3>
                            <p class="text-gray-600 project-purpose">{details.purpose.as_str()}</p>
                        </div>
                        <div>
                            <h3 class="text-lg font-semibold text-blue-600 mb-2">"Value"</h3>
                            <p class="text-gray-600">{details.value.as_str()}</p>
                        </div>
                        <div>
                            <h3 class="text-lg font-semibold text-blue-600 mb-2">"Key Features"</h3>
                            <ul class="list-disc list-inside text-gray-600 space-y-1 feature-list">
                                {details
                                    .features
                                    .iter()
                                    .map(|feature| view! { <li>{feature.as_str()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h3 class="text-lg font-semibold text-blue-600 mb-2">
                                "Challenges & Solutions"
                            </h3>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <DetailList
                                    heading="Challenges"
                                    list_class="challenge-list"
                                    items=details.challenges.as_slice()
                                />
                                <DetailList
                                    heading="Solutions"
                                    list_class="solution-list"
                                    items=details.solutions.as_slice()
                                />
                            </div>
                        </div>

                        <TechTags technologies=project.technologies.as_slice() />

                        <div class="flex justify-end">
                            <a
                                href=project.link.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors"
                            >
                                "View Project"
                                <span aria-hidden="true">"↗"</span>
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Renders the dialog for the selected project, or nothing when no project is selected.
#[component]
pub fn ProjectModal(
    selection: ReadSignal<ProjectSelection>,
    set_selection: WriteSignal<ProjectSelection>,
) -> impl IntoView {
    move || {
        selection
            .get()
            .project()
            .map(|project| view! { <ProjectDialog project set_selection /> })
    }
}
