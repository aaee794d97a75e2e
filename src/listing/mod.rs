//! Paginated, filterable listings.
//!
//! A screen binds one [`ListingController`] per listing. The controller asks
//! for pages through [`PageRequest`]s, narrows each page with the
//! [`filter`] predicate, and reports snapshots to a [`RenderSink`] such as
//! [`ListingPanel`]. Pagination bookkeeping lives in [`PaginationState`].
//!
//! # Example
//!
//! ```
//! use musiclist::gateway::{CatalogData, JsonGateway};
//! use musiclist::listing::{ListingController, ListingPanel, SearchCriteria};
//! use musiclist::{Performer, PerformerCategory};
//!
//! let gateway = JsonGateway::in_memory(CatalogData {
//!     performers: vec![Performer::new("p1", "Blur", "GB", PerformerCategory::Group, 80)],
//!     ..CatalogData::default()
//! });
//!
//! let mut listing: ListingController<Performer, ListingPanel<Performer>> =
//!     ListingController::new(10, ListingPanel::new());
//! listing.search_with(&gateway, SearchCriteria::match_all());
//!
//! assert_eq!(listing.sink().items().len(), 1);
//! assert!(!listing.has_more());
//! ```

pub mod controller;
pub mod criteria;
pub mod filter;
pub mod page;
pub mod pagination;
pub mod panel;

pub use controller::{Listable, ListingController, PageRequest, PageSource, RenderSink};
pub use criteria::{CategoryFilter, ListingKind, SearchCriteria, ANY_CATEGORY};
pub use filter::Filterable;
pub use page::ResultPage;
pub use pagination::{PaginationState, Phase, DEFAULT_PAGE_SIZE};
pub use panel::{Indicator, ListingPanel, LoadMoreButton, LOAD_MORE_LABEL, NO_MORE_LABEL};
