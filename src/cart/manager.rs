//! Cart Manager
//!
//! Owns the rules for reading a session's cart and applying "add quantity of
//! product X" mutations: catalog validation, quantity bounds, and
//! merge-by-product-id. Every rejection is a silent no-op on the cart; the
//! storefront re-displays the cart and the absence of change is the feedback.

use super::models::CartLine;
use crate::catalog::{Catalog, ProductId};
use crate::session::SessionHandle;
use serde_json::json;

/// Session key under which the cart lives
pub const CART_KEY: &str = "cart";

/// Outcome of an add-to-cart attempt.
///
/// Only the manager and its tests see this tag; the HTTP contract exposes
/// nothing beyond "cart changed or not".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended at the end of the cart
    Added,
    /// An existing line was replaced in place with the summed quantity
    Updated,
    /// The product id is unknown to the catalog; cart untouched
    RejectedNotFound,
    /// The requested or summed quantity fell outside `1..=inventory`;
    /// cart untouched
    RejectedBounds,
}

impl AddOutcome {
    /// True when the attempt left the cart unchanged
    pub fn is_rejected(self) -> bool {
        matches!(self, Self::RejectedNotFound | Self::RejectedBounds)
    }
}

/// Cart manager bound to a catalog lookup.
///
/// Session state is passed explicitly into every call, so multiple sessions
/// can be exercised side by side without cross-contamination.
pub struct CartManager<'a> {
    catalog: &'a dyn Catalog,
}

impl<'a> CartManager<'a> {
    /// Creates a manager that validates mutations against `catalog`
    pub fn new(catalog: &'a dyn Catalog) -> Self {
        Self { catalog }
    }

    /// Adds `requested` units of a product to the session's cart.
    ///
    /// Rules, in order:
    /// 1. Unknown product: no mutation.
    /// 2. `requested` outside `1..=inventory`: no mutation.
    /// 3. Product already in the cart: the line is replaced in place with
    ///    the summed quantity, unless the sum exceeds inventory, in which
    ///    case the whole increment is rejected (never clamped).
    /// 4. Otherwise a new line is appended at the end.
    ///
    /// The session is saved on every path, including rejections, so a call
    /// always leaves the store in a deterministic state.
    pub fn add_to_cart(
        &self,
        session: &mut SessionHandle<'_>,
        product_id: ProductId,
        requested: i64,
    ) -> AddOutcome {
        let mut cart = self.cart_contents(session);
        let outcome = self.apply_add(&mut cart, product_id, requested);

        if !outcome.is_rejected() {
            session.set(CART_KEY, json!(cart));
        }
        session.save();

        outcome
    }

    /// Returns the session's cart lines in stored order.
    ///
    /// A session that was never touched for cart operations yields an empty
    /// cart; a malformed stored value is treated the same way.
    pub fn cart_contents(&self, session: &SessionHandle<'_>) -> Vec<CartLine> {
        session
            .get(CART_KEY)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    fn apply_add(
        &self,
        cart: &mut Vec<CartLine>,
        product_id: ProductId,
        requested: i64,
    ) -> AddOutcome {
        let Some(product) = self.catalog.product(product_id) else {
            return AddOutcome::RejectedNotFound;
        };

        let inventory = i64::from(product.inventory);
        if requested < 1 || requested > inventory {
            return AddOutcome::RejectedBounds;
        }

        if let Some(position) = cart.iter().position(|line| line.id == product_id) {
            // Repeat add: the bound applies to the summed quantity, and an
            // excess increment is rejected as a whole.
            let summed = i64::from(cart[position].quantity) + requested;
            if summed > inventory {
                return AddOutcome::RejectedBounds;
            }

            cart[position] = CartLine {
                id: product_id,
                quantity: summed as u32,
                name: product.name,
                cost: summed as f64 * product.unit_cost,
            };
            AddOutcome::Updated
        } else {
            cart.push(CartLine {
                id: product_id,
                quantity: requested as u32,
                name: product.name,
                cost: requested as f64 * product.unit_cost,
            });
            AddOutcome::Added
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::session::SessionStore;

    fn setup() -> (MemoryCatalog, SessionStore) {
        (MemoryCatalog::sample(), SessionStore::new())
    }

    // Sample catalog: product 1 is the Yellow Wool Jumper,
    // unit cost 20.0, inventory 5.
    const JUMPER: ProductId = ProductId(1);

    #[test]
    fn test_fresh_session_has_empty_cart() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);

        let session = sessions.open("v1");
        assert!(manager.cart_contents(&session).is_empty());
    }

    #[test]
    fn test_first_add_appends_one_line() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        let outcome = manager.add_to_cart(&mut session, JUMPER, 3);
        assert_eq!(outcome, AddOutcome::Added);

        let cart = manager.cart_contents(&session);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].id, JUMPER);
        assert_eq!(cart[0].quantity, 3);
        assert_eq!(cart[0].name, "Yellow Wool Jumper");
        assert_eq!(cart[0].cost, 60.0);
    }

    #[test]
    fn test_unknown_product_is_silent_noop() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        manager.add_to_cart(&mut session, JUMPER, 1);
        let before = manager.cart_contents(&session);

        let outcome = manager.add_to_cart(&mut session, ProductId(999), 1);
        assert_eq!(outcome, AddOutcome::RejectedNotFound);
        assert_eq!(manager.cart_contents(&session), before);
    }

    #[test]
    fn test_non_positive_quantities_are_rejected() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        for requested in [0, -1, -3] {
            let outcome = manager.add_to_cart(&mut session, JUMPER, requested);
            assert_eq!(outcome, AddOutcome::RejectedBounds);
            assert!(manager.cart_contents(&session).is_empty());
        }
    }

    #[test]
    fn test_first_add_bounded_by_absolute_inventory() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        // Inventory is 5, so 6 is rejected outright
        let outcome = manager.add_to_cart(&mut session, JUMPER, 6);
        assert_eq!(outcome, AddOutcome::RejectedBounds);
        assert!(manager.cart_contents(&session).is_empty());

        // Exactly the inventory is fine
        let outcome = manager.add_to_cart(&mut session, JUMPER, 5);
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(manager.cart_contents(&session)[0].quantity, 5);
    }

    #[test]
    fn test_repeat_add_merges_into_one_line() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        manager.add_to_cart(&mut session, JUMPER, 2);
        let outcome = manager.add_to_cart(&mut session, JUMPER, 2);
        assert_eq!(outcome, AddOutcome::Updated);

        let cart = manager.cart_contents(&session);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 4);
        assert_eq!(cart[0].cost, 80.0);
    }

    #[test]
    fn test_excess_increment_rejected_not_clamped() {
        // The concrete storefront scenario: inventory 5, unit cost 20.0.
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        manager.add_to_cart(&mut session, JUMPER, 3);

        // 3 + 3 = 6 > 5: the whole increment is rejected, not clamped to 2
        let outcome = manager.add_to_cart(&mut session, JUMPER, 3);
        assert_eq!(outcome, AddOutcome::RejectedBounds);
        let cart = manager.cart_contents(&session);
        assert_eq!(cart[0].quantity, 3);
        assert_eq!(cart[0].cost, 60.0);

        // 3 + 2 = 5 == inventory: accepted
        let outcome = manager.add_to_cart(&mut session, JUMPER, 2);
        assert_eq!(outcome, AddOutcome::Updated);
        let cart = manager.cart_contents(&session);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
        assert_eq!(cart[0].cost, 100.0);
    }

    #[test]
    fn test_repeat_add_bound_asymmetry() {
        // First adds are checked against absolute inventory, repeat adds
        // against the summed quantity. Pinned here on purpose.
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        manager.add_to_cart(&mut session, JUMPER, 4);

        // 2 alone would be a valid first add, but 4 + 2 > 5
        let outcome = manager.add_to_cart(&mut session, JUMPER, 2);
        assert_eq!(outcome, AddOutcome::RejectedBounds);
        assert_eq!(manager.cart_contents(&session)[0].quantity, 4);
    }

    #[test]
    fn test_update_keeps_line_position() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        manager.add_to_cart(&mut session, JUMPER, 1);
        manager.add_to_cart(&mut session, ProductId(5), 1);
        manager.add_to_cart(&mut session, JUMPER, 1);

        let cart = manager.cart_contents(&session);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].id, JUMPER);
        assert_eq!(cart[0].quantity, 2);
        assert_eq!(cart[1].id, ProductId(5));
    }

    #[test]
    fn test_no_duplicate_lines_for_one_product() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);
        let mut session = sessions.open("v1");

        for _ in 0..4 {
            manager.add_to_cart(&mut session, JUMPER, 1);
        }

        let cart = manager.cart_contents(&session);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 4);
    }

    #[test]
    fn test_sessions_keep_independent_carts() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);

        let mut first = sessions.open("v1");
        manager.add_to_cart(&mut first, JUMPER, 2);

        let mut second = sessions.open("v2");
        manager.add_to_cart(&mut second, ProductId(5), 1);

        assert_eq!(manager.cart_contents(&sessions.open("v1"))[0].id, JUMPER);
        assert_eq!(
            manager.cart_contents(&sessions.open("v2"))[0].id,
            ProductId(5)
        );
    }

    #[test]
    fn test_malformed_stored_cart_reads_as_empty() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);

        // A session value that is not a cart at all
        let mut session = sessions.open("v1");
        session.set(CART_KEY, json!("garbage"));
        assert!(manager.cart_contents(&session).is_empty());

        // An array whose entries do not deserialize as lines
        session.set(CART_KEY, json!([{"id": true}]));
        assert!(manager.cart_contents(&session).is_empty());

        // Adding on top starts a fresh line, replacing the bad value
        let outcome = manager.add_to_cart(&mut session, JUMPER, 2);
        assert_eq!(outcome, AddOutcome::Added);
        let cart = manager.cart_contents(&session);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn test_rejection_still_saves_session() {
        let (catalog, sessions) = setup();
        let manager = CartManager::new(&catalog);

        let mut session = sessions.open("v1");
        session.set("seen_banner", json!(true));
        manager.add_to_cart(&mut session, ProductId(999), 1);

        // The save on the rejected path persisted the unrelated key
        let reopened = sessions.open("v1");
        assert_eq!(reopened.get("seen_banner"), Some(&json!(true)));
    }
}
