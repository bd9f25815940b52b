//! Page state machine and sans-IO controller for the storefront page.
//!
//! # Design
//! The page's mutable cells (products, cart items, loading flag, two error
//! strings) live in a single `PageState` driven by a reducer: one
//! `PageEvent` variant per transition, applied in arrival order. The render
//! policy is a pure projection (`PageState::view`), which makes the
//! asymmetric rule "a products error hides everything, a cart error hides
//! nothing" an explicit, ordered match instead of a render-order accident.
//!
//! `PageController` wires a `ShopClient` to a `PageState` without doing any
//! I/O itself: it hands the host `PendingFetch` values to execute and
//! consumes the responses. A successful mutation always yields a follow-up
//! cart fetch; the cart is refetched wholesale, never locally incremented,
//! so overlapping mutations resolve as last-write-wins on the cart
//! collection. There is no debouncing, queueing, cancellation, or timeout;
//! a response that never arrives leaves the state as it was.

use crate::client::{Operation, ShopClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CartItem, Product};

/// In-memory state of the storefront page.
///
/// Starts in the loading state; mutate it exclusively through
/// [`PageState::apply`] and read it through [`PageState::view`].
#[derive(Debug, Clone)]
pub struct PageState {
    products: Vec<Product>,
    cart_items: Vec<CartItem>,
    loading: bool,
    products_error: Option<String>,
    cart_error: Option<String>,
}

/// One state transition of the storefront page.
#[derive(Debug, Clone)]
pub enum PageEvent {
    ProductsLoaded(Vec<Product>),
    ProductsFailed(String),
    CartLoaded(Vec<CartItem>),
    CartFailed(String),
    MutationFailed(String),
}

/// What the page should render, projected from the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    /// The initial products fetch has not settled yet; render a placeholder
    /// only.
    Loading,
    /// The products fetch failed; render the message alone. The cart is
    /// suppressed even if it loaded successfully.
    ProductsError(&'a str),
    /// Product grid and cart panel side by side. A set `cart_error` is shown
    /// inside the cart panel; the items may be stale when it is set.
    Storefront {
        products: &'a [Product],
        cart_items: &'a [CartItem],
        cart_error: Option<&'a str>,
    },
}

impl PageState {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            cart_items: Vec::new(),
            loading: true,
            products_error: None,
            cart_error: None,
        }
    }

    /// Apply one transition. Only the two products events touch `loading`;
    /// cart outcomes never affect it.
    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::ProductsLoaded(products) => {
                self.products = products;
                self.products_error = None;
                self.loading = false;
            }
            PageEvent::ProductsFailed(message) => {
                self.products_error = Some(message);
                self.loading = false;
            }
            PageEvent::CartLoaded(items) => {
                self.cart_items = items;
                self.cart_error = None;
            }
            PageEvent::CartFailed(message) | PageEvent::MutationFailed(message) => {
                self.cart_error = Some(message);
            }
        }
    }

    /// Project the render policy, rules evaluated in order: loading first,
    /// then products error, then the full storefront.
    pub fn view(&self) -> View<'_> {
        if self.loading {
            return View::Loading;
        }
        if let Some(message) = &self.products_error {
            return View::ProductsError(message);
        }
        View::Storefront {
            products: &self.products,
            cart_items: &self.cart_items,
            cart_error: self.cart_error.as_deref(),
        }
    }
}

/// A request the host must execute, tagged with the operation it serves so
/// the response can be routed back through [`PageController::handle_response`].
#[derive(Debug, Clone)]
pub struct PendingFetch {
    pub operation: Operation,
    pub request: HttpRequest,
}

/// Sans-IO driver for the storefront page lifecycle.
#[derive(Debug, Clone)]
pub struct PageController {
    client: ShopClient,
    state: PageState,
}

impl PageController {
    pub fn new(client: ShopClient) -> Self {
        Self {
            client,
            state: PageState::new(),
        }
    }

    /// The two initial fetches issued on page load. The host may execute
    /// them concurrently in either order; they update disjoint state.
    pub fn open(&self) -> [PendingFetch; 2] {
        [
            PendingFetch {
                operation: Operation::FetchProducts,
                request: self.client.build_fetch_products(),
            },
            self.fetch_cart(),
        ]
    }

    /// User clicked "Add to Cart" on a product.
    pub fn add_to_cart(&self, product_id: &str) -> Result<PendingFetch, ApiError> {
        Ok(PendingFetch {
            operation: Operation::AddToCart,
            request: self.client.build_add_to_cart(product_id)?,
        })
    }

    /// User clicked "Remove" on a cart line.
    pub fn remove_from_cart(&self, product_id: &str) -> PendingFetch {
        PendingFetch {
            operation: Operation::RemoveFromCart,
            request: self.client.build_remove_from_cart(product_id),
        }
    }

    /// Feed a completed response back into the page.
    ///
    /// Parses the response for the tagged operation and applies the resulting
    /// event. A successful mutation returns the unconditional follow-up cart
    /// fetch; a failed one records the error and returns nothing, leaving the
    /// displayed cart untouched.
    pub fn handle_response(
        &mut self,
        operation: Operation,
        response: HttpResponse,
    ) -> Option<PendingFetch> {
        match operation {
            Operation::FetchProducts => {
                let event = match self.client.parse_fetch_products(response) {
                    Ok(products) => PageEvent::ProductsLoaded(products),
                    Err(err) => PageEvent::ProductsFailed(err.to_string()),
                };
                self.state.apply(event);
                None
            }
            Operation::FetchCart => {
                let event = match self.client.parse_fetch_cart(response) {
                    Ok(items) => PageEvent::CartLoaded(items),
                    Err(err) => PageEvent::CartFailed(err.to_string()),
                };
                self.state.apply(event);
                None
            }
            Operation::AddToCart | Operation::RemoveFromCart => {
                let outcome = match operation {
                    Operation::AddToCart => self.client.parse_add_to_cart(response),
                    _ => self.client.parse_remove_from_cart(response),
                };
                match outcome {
                    Ok(()) => Some(self.fetch_cart()),
                    Err(err) => {
                        self.state.apply(PageEvent::MutationFailed(err.to_string()));
                        None
                    }
                }
            }
        }
    }

    pub fn view(&self) -> View<'_> {
        self.state.view()
    }

    fn fetch_cart(&self) -> PendingFetch {
        PendingFetch {
            operation: Operation::FetchCart,
            request: self.client.build_fetch_cart(),
        }
    }
}
