//! Inline SVG icons for Leptos.
//!
//! Icons are rendered from an [`IconRegistry`] by name, or from markup that
//! the caller explicitly trusted with [`trust_markup`]:
//!
//! ```ignore
//! let registry = IconRegistry::with_icons([("star", include_str!("star.svg"))]);
//! provide_icon_registry(registry);
//!
//! view! {
//!     <SvgIcon name="star" class="star-icon" />
//!     <SvgIcon src=trust_markup(logo_svg) inline=true title="Home" />
//! }
//! ```

pub mod component;
pub mod context;
mod error;
pub mod registry;
pub mod resolve;
pub mod trust;

pub use component::SvgIcon;
pub use context::{provide_icon_registry, use_icon_registry, IconRegistryContext};
pub use error::IconError;
pub use registry::{IconManifest, IconMap, IconRegistry, RegisterMode};
pub use resolve::{IconRequest, MarkupSource};
pub use trust::{trust_markup, SvgSource, TrustedMarkup};
