use crate::refactor::RefactorPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <RefactorPage />
    }
}
