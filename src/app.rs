use leptos::prelude::*;
use svg_icon::{provide_icon_registry, trust_markup, IconRegistry, RegisterMode, SvgIcon};

use crate::icons;

const LOGO: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" fill="currentColor"/></svg>"#;

#[component]
pub fn App() -> impl IntoView {
    let registry = provide_icon_registry(IconRegistry::with_icons(icons::bundled_icons()));
    let (inline, set_inline) = signal(false);

    // Drop everything except the status icons, to show icons re-rendering on registration.
    let reset_to_status = move |_| {
        registry.register_icons(
            [("check", icons::CHECK), ("cancel", icons::CANCEL)],
            RegisterMode::Reset,
        );
    };
    let restore = move |_| {
        registry.register_icons(icons::bundled_icons(), RegisterMode::Reset);
    };

    view! {
        <main class="gallery">
            <h1>
                <SvgIcon src=trust_markup(LOGO) inline=true title="svg-icon" />
                " Icon gallery"
            </h1>
            <div class="gallery-controls">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || inline.get()
                        on:change=move |ev| set_inline.set(event_target_checked(&ev))
                    />
                    " Inline"
                </label>
                <button on:click=reset_to_status>"Status icons only"</button>
                <button on:click=restore>"All icons"</button>
            </div>
            <ul class="icon-list">
                <For
                    each=move || registry.names()
                    key=|name| name.clone()
                    children=move |name: String| {
                        let label = name.clone();
                        view! {
                            <li class="icon-item">
                                {move || {
                                    view! {
                                        <SvgIcon
                                            name=name.clone()
                                            class="gallery-icon"
                                            inline=inline.get()
                                            title=name.clone()
                                        />
                                    }
                                }}
                                <span class="icon-name">{label}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <ErrorBoundary fallback=|errors| {
                view! {
                    <p class="icon-error">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| e.to_string())
                                .collect::<Vec<_>>()
                                .join(", ")
                        }}
                    </p>
                }
            }>
                <SvgIcon name="star" class="gallery-icon" />
            </ErrorBoundary>
        </main>
    }
}
