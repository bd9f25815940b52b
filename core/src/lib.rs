//! Sans-IO client core for the storefront page.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and drives the page's
//! loading/display/refetch-on-mutation lifecycle through an explicit
//! reducer. The caller executes the actual HTTP round-trips, making the
//! whole page behavior deterministic and testable.
//!
//! # Design
//! - `ShopClient` is stateless — it holds only `base_url`. Each API
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `PageState` is driven by one `PageEvent` per transition; `View` is a
//!   pure projection encoding the render policy, including the rule that a
//!   products error suppresses the cart panel entirely.
//! - `PageController` ties the two together and hands the host tagged
//!   `PendingFetch` values; a successful mutation always yields a follow-up
//!   cart fetch.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod page;
pub mod types;

pub use client::{Operation, ShopClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::{PageController, PageEvent, PageState, PendingFetch, View};
pub use types::{AddToCart, CartItem, Product};
