use leptos::prelude::*;

use crate::content::{Certification, CertificationStatus, PORTFOLIO};
use crate::navigation::Section;

#[component]
fn SectionHeading(section: Section) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center mb-8">
            <h2 class="text-2xl font-bold">{section.label()}</h2>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor_id() class="py-16">
            <div class="container mx-auto px-4">
                <SectionHeading section=Section::Skills />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {PORTFOLIO
                        .skills
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="bg-gray-50 p-4 rounded-lg">
                                    <h3 class="text-lg font-semibold mb-3">{group.name.as_str()}</h3>
                                    <ul class="space-y-1 text-gray-600">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| view! { <li>"• "{item.as_str()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.anchor_id() class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <SectionHeading section=Section::Experience />
                <div class="space-y-6">
                    {PORTFOLIO
                        .experience
                        .iter()
                        .map(|role| {
                            view! {
                                <div class="bg-white p-4 rounded-lg shadow-sm">
                                    <h3 class="text-lg font-semibold">{role.title.as_str()}</h3>
                                    <p class="text-gray-600">{role.company.as_str()}</p>
                                    <p class="text-sm text-gray-500 mb-2">{role.period.as_str()}</p>
                                    <p class="text-gray-600">{role.description.as_str()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(cert: &'static Certification) -> impl IntoView {
    view! {
        <div class="bg-gray-50 p-4 rounded-lg">
            <h4 class="text-lg font-semibold mb-2">{cert.title.as_str()}</h4>
            <p class="text-gray-600">{cert.issuer.as_str()}</p>
            <p class="text-sm text-gray-500">{cert.date.as_str()}</p>
        </div>
    }
}

#[component]
fn CertificationGroup(status: CertificationStatus) -> impl IntoView {
    view! {
        <div class="mb-12 last:mb-0">
            <h3 class="text-xl font-semibold mb-6 text-center">{status.heading()}</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {PORTFOLIO
                    .certifications_with(status)
                    .map(|cert| view! { <CertificationCard cert /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id=Section::Certifications.anchor_id() class="py-16">
            <div class="container mx-auto px-4">
                <SectionHeading section=Section::Certifications />
                <CertificationGroup status=CertificationStatus::Current />
                <CertificationGroup status=CertificationStatus::Previous />
            </div>
        </section>
    }
}
