//! Route-to-catalog bridge for the two view modes.
//!
//! The application has exactly two navigational states: an overview listing
//! every tip and a detail page addressed by slug. Route parameters come from
//! an outside routing collaborator and are matched verbatim. Resolution is
//! stateless; entering a route resolves it fresh against the immutable
//! catalog, so the same route always yields the same view.

use crate::catalog::{Catalog, Tip};

/// A navigational state requested by the routing collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The overview page listing every tip in catalog order.
    Overview,
    /// The detail page for one slug, carried verbatim from the route
    /// parameter with no decoding or normalization.
    Detail(String),
}

/// What the view layer renders for a resolved route.
#[derive(Clone, Debug)]
pub enum View<'c> {
    /// The ordered catalog backing the overview page.
    Listing(&'c Catalog),
    /// A single resolved tip.
    Detail(&'c Tip),
    /// No entry carries the requested slug. Rendered as a state of its own
    /// rather than surfaced as an error.
    NotFound { slug: String },
}

/// Every tip in catalog order, for the overview page.
pub fn list_all(catalog: &Catalog) -> impl Iterator<Item = &Tip> {
    catalog.entries()
}

/// Resolve a detail-route slug to its tip.
///
/// Exact, case-sensitive match against the slug index; absence is a normal
/// outcome, not an error.
pub fn resolve<'c>(catalog: &'c Catalog, slug: &str) -> Option<&'c Tip> {
    catalog.get(slug)
}

/// Map a route to the view it renders.
pub fn navigate<'c>(catalog: &'c Catalog, route: &Route) -> View<'c> {
    match route {
        Route::Overview => View::Listing(catalog),
        Route::Detail(slug) => match resolve(catalog, slug) {
            Some(tip) => View::Detail(tip),
            None => View::NotFound { slug: slug.clone() },
        },
    }
}
