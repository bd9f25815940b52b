//! Plain-text rendering of the page `View`.
//!
//! Rendering is a pure `View` → `String` function so the page's display
//! rules stay testable without a terminal.

use storefront_core::View;

pub fn render(view: &View<'_>) -> String {
    match view {
        View::Loading => "Loading...\n".to_string(),
        View::ProductsError(message) => format!("Error: {message}\n"),
        View::Storefront {
            products,
            cart_items,
            cart_error,
        } => {
            let mut out = String::new();
            out.push_str("Products\n");
            out.push_str("--------\n");
            for product in *products {
                out.push_str(&format!(
                    "  {} ${}  [add {}]\n",
                    product.name, product.price, product.product_id
                ));
            }
            out.push('\n');
            out.push_str("Shopping Cart\n");
            out.push_str("-------------\n");
            if let Some(message) = cart_error {
                out.push_str(&format!("  ! {message}\n"));
            }
            if cart_items.is_empty() {
                out.push_str("  Your cart is empty\n");
            } else {
                for item in *cart_items {
                    // Fall back to the id when the server sent no name.
                    let name = item.name.as_deref().unwrap_or(&item.product_id);
                    out.push_str(&format!(
                        "  {}, Quantity: {}  [remove {}]\n",
                        name, item.quantity, item.product_id
                    ));
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CartItem, Product};

    fn pen() -> Product {
        Product {
            product_id: "p1".to_string(),
            name: "Pen".to_string(),
            price: 1.5,
        }
    }

    #[test]
    fn loading_renders_placeholder_only() {
        assert_eq!(render(&View::Loading), "Loading...\n");
    }

    #[test]
    fn products_error_renders_message_only() {
        let out = render(&View::ProductsError("Failed to fetch products"));
        assert_eq!(out, "Error: Failed to fetch products\n");
    }

    #[test]
    fn storefront_with_empty_cart_shows_placeholder() {
        let products = [pen()];
        let out = render(&View::Storefront {
            products: &products,
            cart_items: &[],
            cart_error: None,
        });
        assert!(out.contains("Pen $1.5"));
        assert!(out.contains("Your cart is empty"));
    }

    #[test]
    fn cart_rows_show_name_and_quantity() {
        let items = [CartItem {
            product_id: "p1".to_string(),
            quantity: 1,
            name: Some("Pen".to_string()),
        }];
        let out = render(&View::Storefront {
            products: &[],
            cart_items: &items,
            cart_error: None,
        });
        assert!(out.contains("Pen, Quantity: 1"));
        assert!(out.contains("[remove p1]"));
        assert!(!out.contains("Your cart is empty"));
    }

    #[test]
    fn cart_row_falls_back_to_product_id_without_name() {
        let items = [CartItem {
            product_id: "p9".to_string(),
            quantity: 4,
            name: None,
        }];
        let out = render(&View::Storefront {
            products: &[],
            cart_items: &items,
            cart_error: None,
        });
        assert!(out.contains("p9, Quantity: 4"));
    }

    #[test]
    fn cart_error_is_shown_inside_the_cart_panel() {
        let items = [CartItem {
            product_id: "p1".to_string(),
            quantity: 2,
            name: Some("Pen".to_string()),
        }];
        let out = render(&View::Storefront {
            products: &[],
            cart_items: &items,
            cart_error: Some("Failed to add to cart"),
        });
        // Error and the stale items are both visible.
        assert!(out.contains("! Failed to add to cart"));
        assert!(out.contains("Pen, Quantity: 2"));
    }

    #[test]
    fn whole_number_price_renders_without_decimals() {
        let products = [Product {
            product_id: "p3".to_string(),
            name: "Stapler".to_string(),
            price: 7.0,
        }];
        let out = render(&View::Storefront {
            products: &products,
            cart_items: &[],
            cart_error: None,
        });
        assert!(out.contains("Stapler $7"));
    }
}
