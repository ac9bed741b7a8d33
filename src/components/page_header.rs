//! Page Header Component
//!
//! Title block at the top of each page, with an optional action slot on
//! the right.

use leptos::*;

#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="mb-8 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold text-white flex items-center gap-3">
                    {icon.map(|icon| view! { <span class="text-3xl">{icon}</span> })}
                    {title}
                </h1>
                {description.map(|description| view! {
                    <p class="text-gray-400 mt-1">{description}</p>
                })}
            </div>
            {children.map(|action| view! {
                <div class="flex items-center gap-2 shrink-0">{action()}</div>
            })}
        </div>
    }
}
