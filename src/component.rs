use leptos::html::Span;
use leptos::prelude::*;

use crate::context::use_icon_registry;
use crate::resolve::IconRequest;
use crate::trust::SvgSource;

/// Class always present on the icon container.
pub const BASE_CLASS: &str = "svg-icon";
/// Class added to the container for inline display.
pub const INLINE_CLASS: &str = "svg-icon--inline";

pub fn container_class(inline: bool) -> String {
    if inline {
        format!("{} {}", BASE_CLASS, INLINE_CLASS)
    } else {
        BASE_CLASS.to_string()
    }
}

/// Set the `class` attribute of the first `<svg>` inside `container`.
pub fn apply_svg_class(container: &web_sys::Element, class: &str) {
    if let Ok(Some(svg)) = container.query_selector("svg") {
        let _ = svg.set_attribute("class", class);
    }
}

/// Renders an icon as an inline `<svg>` so it can be styled with CSS.
///
/// Supply either a registered icon `name` or a trusted `src`
/// (see [`crate::trust_markup`]). A name that is not registered, an untrusted
/// `src`, or neither one renders as an error for the nearest `ErrorBoundary`.
#[component]
pub fn SvgIcon(
    /// Name of an icon in the registry provided via `provide_icon_registry`.
    #[prop(optional, into)]
    name: Option<String>,
    /// Markup to render when no `name` is given. Must be wrapped with `trust_markup`.
    #[prop(optional, into)]
    src: Option<SvgSource>,
    /// CSS class applied to the `<svg>` element itself.
    #[prop(optional, into)]
    class: String,
    /// Use the inline variant of the container.
    #[prop(optional)]
    inline: bool,
    /// Tooltip for the container `<span>`.
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let registry = use_icon_registry();
    let request = IconRequest::new(name, src);
    let markup = Memo::new(move |_| registry.with(|r| r.resolve_request(&request)));
    let container = NodeRef::<Span>::new();

    // The <svg> is replaced whenever the markup changes, so its class has to be re-applied.
    Effect::new(move |_| {
        if markup.with(|m| m.is_err()) {
            return;
        }
        if let Some(span) = container.get() {
            apply_svg_class(&span, &class);
        }
    });

    let title = title.filter(|t| !t.is_empty());

    move || {
        markup.get().map(|html| {
            view! {
                <span
                    class=container_class(inline)
                    title=title.clone()
                    inner_html=html
                    node_ref=container
                />
            }
        })
    }
}
