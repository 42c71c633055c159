//! Dashboard Page
//!
//! Localized greeting, the raw active language code, and two buttons that
//! switch the language.

use leptos::*;

use crate::i18n::use_i18n;

/// Language switch buttons as (label, language code)
pub const LANGUAGE_BUTTONS: [(&str, &str); 2] = [("English", "en"), ("Deutsch", "de")];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let i18n = use_i18n();

    let greeting = {
        let i18n = i18n.clone();
        move || i18n.t("dashboard.welcome")
    };
    let language = {
        let i18n = i18n.clone();
        move || i18n.language()
    };

    let buttons = LANGUAGE_BUTTONS
        .into_iter()
        .map(|(label, code)| {
            let i18n = i18n.clone();
            view! { <button on:click=move |_| i18n.change_language(code)>{label}</button> }
        })
        .collect_view();

    view! {
        <h1>{greeting}</h1>
        <p>{language}</p>
        {buttons}
    }
}
