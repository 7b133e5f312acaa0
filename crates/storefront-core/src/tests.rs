//! Service Integration Tests
//!
//! Storefront and Admin driven through an in-memory backend.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use async_trait::async_trait;

    use crate::admin::{add_failure_message, AddItemForm, Admin, GENERIC_ADD_FAILURE};
    use crate::backend::Backend;
    use crate::cart::Cart;
    use crate::error::{StoreError, StoreResult};
    use crate::models::{AddedItem, Bill, BillLine, CheckoutReceipt, CheckoutRequest, HealthStatus, InventoryItem, NewItem};
    use crate::money::Money;
    use crate::storefront::Storefront;

    #[derive(Default)]
    struct MockState {
        catalog: HashMap<String, InventoryItem>,
        bills: Vec<Bill>,
        item_down: bool,
        inventory_down: bool,
        billing_down: bool,
        checkout_error: Option<StoreError>,
        add_error: Option<StoreError>,
        lookups: Vec<String>,
        checkouts: Vec<CheckoutRequest>,
        submitted_items: Vec<NewItem>,
    }

    /// Backend double; clones share state so tests can inspect calls
    #[derive(Clone, Default)]
    struct MockBackend {
        state: Rc<RefCell<MockState>>,
    }

    impl MockBackend {
        fn with_catalog(items: &[(&str, &str, f64)]) -> Self {
            let backend = MockBackend::default();
            for (sku, name, price) in items {
                backend.state.borrow_mut().catalog.insert(
                    sku.to_string(),
                    InventoryItem {
                        sku: sku.to_string(),
                        name: name.to_string(),
                        price: Money::from_decimal(*price),
                        stock: 10,
                    },
                );
            }
            backend
        }

        fn network_calls(&self) -> usize {
            let state = self.state.borrow();
            state.lookups.len() + state.checkouts.len() + state.submitted_items.len()
        }
    }

    #[async_trait(?Send)]
    impl Backend for MockBackend {
        async fn fetch_item(&self, sku: &str) -> StoreResult<InventoryItem> {
            let mut state = self.state.borrow_mut();
            state.lookups.push(sku.to_string());
            if state.item_down {
                return Err(StoreError::Unreachable("connection refused".into()));
            }
            state.catalog.get(sku).cloned().ok_or_else(|| StoreError::NotFound(sku.to_string()))
        }

        async fn fetch_inventory(&self) -> StoreResult<Vec<InventoryItem>> {
            let state = self.state.borrow();
            if state.inventory_down {
                return Err(StoreError::Unreachable("connection refused".into()));
            }
            let mut items: Vec<InventoryItem> = state.catalog.values().cloned().collect();
            items.sort_by(|a, b| a.sku.cmp(&b.sku));
            Ok(items)
        }

        async fn fetch_billing_history(&self) -> StoreResult<Vec<Bill>> {
            let state = self.state.borrow();
            if state.billing_down {
                return Err(StoreError::Unreachable("connection refused".into()));
            }
            Ok(state.bills.clone())
        }

        async fn submit_checkout(&self, request: &CheckoutRequest) -> StoreResult<CheckoutReceipt> {
            let mut state = self.state.borrow_mut();
            state.checkouts.push(request.clone());
            if let Some(err) = state.checkout_error.clone() {
                return Err(err);
            }
            let items = request
                .cart
                .iter()
                .map(|l| BillLine {
                    sku: Some(l.sku.clone()),
                    name: l.name.clone(),
                    price: l.price,
                    qty: l.qty,
                    line_total: Some(l.line_total()),
                })
                .collect();
            let bill = Bill { id: None, timestamp: None, items, total: request.total };
            state.bills.insert(0, bill.clone());
            Ok(CheckoutReceipt {
                message: "Checkout successful!".into(),
                total: None,
                bill: Some(bill),
            })
        }

        async fn submit_item(&self, item: &NewItem) -> StoreResult<AddedItem> {
            let mut state = self.state.borrow_mut();
            state.submitted_items.push(item.clone());
            if let Some(err) = state.add_error.clone() {
                return Err(err);
            }
            // Server normalizes names
            let stored = InventoryItem {
                sku: item.sku.clone(),
                name: item.name.to_uppercase(),
                price: item.price,
                stock: i64::from(item.stock),
            };
            state.catalog.insert(stored.sku.clone(), stored.clone());
            Ok(AddedItem { message: "Item added successfully".into(), item: stored })
        }

        async fn health(&self) -> StoreResult<HealthStatus> {
            Ok(HealthStatus { status: "ok".into(), time: None })
        }
    }

    fn grocery() -> MockBackend {
        MockBackend::with_catalog(&[("A1", "Apples", 50.0), ("B2", "Bread", 30.0), ("C3", "Cheese", 12.75)])
    }

    fn filled_form() -> AddItemForm {
        AddItemForm {
            sku: "D4".into(),
            name: "dates".into(),
            price: "99.5".into(),
            stock: "5".into(),
        }
    }

    #[tokio::test]
    async fn test_scan_scenario() {
        let shop = Storefront::new(grocery());
        let mut cart = Cart::new();
        for code in ["A1", "A1", "B2"] {
            cart = shop.scan(&cart, code).await.expect("scan failed");
        }

        assert_eq!(cart.len(), 2);
        let a1 = &cart.lines()[0];
        assert_eq!((a1.sku.as_str(), a1.qty, a1.line_total()), ("A1", 2, Money::from_decimal(100.0)));
        let b2 = &cart.lines()[1];
        assert_eq!((b2.sku.as_str(), b2.qty, b2.line_total()), ("B2", 1, Money::from_decimal(30.0)));
        assert_eq!(cart.total(), Money::from_decimal(130.0));
    }

    #[tokio::test]
    async fn test_unknown_code_leaves_cart_unchanged() {
        let shop = Storefront::new(grocery());
        let cart = shop.scan(&Cart::new(), "A1").await.unwrap();

        let err = shop.scan(&cart, "Z9").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("Z9".into()));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_decimal(50.0));
    }

    #[tokio::test]
    async fn test_unreachable_lookup_leaves_cart_unchanged() {
        let backend = grocery();
        let shop = Storefront::new(backend.clone());
        let cart = shop.scan(&Cart::new(), "A1").await.unwrap();

        backend.state.borrow_mut().item_down = true;
        let err = shop.scan(&cart, "B2").await.unwrap_err();
        assert!(err.is_unreachable());
        assert_eq!(err.user_message(), "Backend not reachable!");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_decimal(50.0));
    }

    #[tokio::test]
    async fn test_blank_code_makes_no_request() {
        let backend = grocery();
        let shop = Storefront::new(backend.clone());
        let err = shop.scan(&Cart::new(), "   ").await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(backend.network_calls(), 0);
    }

    #[tokio::test]
    async fn test_scanned_code_is_trimmed() {
        let backend = grocery();
        let shop = Storefront::new(backend.clone());
        let cart = shop.scan(&Cart::new(), " B2\n").await.unwrap();
        assert_eq!(cart.lines()[0].sku, "B2");
        assert_eq!(backend.state.borrow().lookups, vec!["B2".to_string()]);
    }

    #[tokio::test]
    async fn test_total_matches_lines_for_any_scan_sequence() {
        let shop = Storefront::new(grocery());
        let codes = ["A1", "B2", "C3", "Z9"];
        // Deterministic pseudo-random sequences of varying length
        let mut seed: u32 = 7;
        for len in 0..40 {
            let mut cart = Cart::new();
            for _ in 0..len {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let code = codes[(seed >> 16) as usize % codes.len()];
                if let Ok(next) = shop.scan(&cart, code).await {
                    cart = next;
                }
                let expected: i64 = cart.lines().iter().map(|l| l.price.minor() * i64::from(l.qty)).sum();
                assert_eq!(cart.total().minor(), expected);
                let mut skus: Vec<&str> = cart.lines().iter().map(|l| l.sku.as_str()).collect();
                skus.sort_unstable();
                skus.dedup();
                assert_eq!(skus.len(), cart.len(), "duplicate lines in {:?}", cart);
            }
        }
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_makes_no_request() {
        let backend = grocery();
        let shop = Storefront::new(backend.clone());
        let cart = Cart::new();

        let err = shop.checkout(&cart).await.unwrap_err();
        assert_eq!(err, StoreError::EmptyCart);
        assert_eq!(backend.network_calls(), 0);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_success_clears_cart() {
        let backend = grocery();
        let shop = Storefront::new(backend.clone());
        let mut cart = Cart::new();
        for code in ["C3", "A1", "C3", "B2"] {
            cart = shop.scan(&cart, code).await.unwrap();
        }

        let outcome = shop.checkout(&cart).await.expect("checkout failed");
        assert!(outcome.cart.is_empty());
        assert_eq!(outcome.receipt.message, "Checkout successful!");
        assert_eq!(outcome.total, Money::from_decimal(105.5));

        let state = backend.state.borrow();
        assert_eq!(state.checkouts.len(), 1);
        assert_eq!(state.checkouts[0].cart, cart.lines().to_vec());
        assert_eq!(state.checkouts[0].total, cart.total());
    }

    #[tokio::test]
    async fn test_checkout_failure_keeps_cart() {
        let backend = grocery();
        backend.state.borrow_mut().checkout_error =
            Some(StoreError::Server { status: 400, message: Some("Insufficient stock for SKU A1".into()) });
        let shop = Storefront::new(backend.clone());
        let cart = shop.scan(&Cart::new(), "A1").await.unwrap();

        let err = shop.checkout(&cart).await.unwrap_err();
        assert_eq!(err.user_message(), "Insufficient stock for SKU A1");
        assert_eq!(cart.len(), 1);
        assert_eq!(backend.state.borrow().bills.len(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_checkout_keeps_cart() {
        let backend = grocery();
        let shop = Storefront::new(backend.clone());
        let mut cart = Cart::new();
        for code in ["A1", "C3"] {
            cart = shop.scan(&cart, code).await.unwrap();
        }
        backend.state.borrow_mut().checkout_error = Some(StoreError::Unreachable("connection refused".into()));

        let err = shop.checkout(&cart).await.unwrap_err();
        assert!(err.is_unreachable());
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Money::from_decimal(62.75));
        assert!(backend.state.borrow().bills.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_payload_wire_shape() {
        let shop = Storefront::new(grocery());
        let cart = shop.scan(&Cart::new(), "B2").await.unwrap();
        let request = CheckoutRequest { cart: cart.lines().to_vec(), total: cart.total() };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cart": [{"sku": "B2", "name": "Bread", "price": 30.0, "qty": 1}],
                "total": 30.0
            })
        );
    }

    #[tokio::test]
    async fn test_add_item_with_empty_name_makes_no_request() {
        let backend = grocery();
        let admin = Admin::new(backend.clone());
        let form = AddItemForm { name: String::new(), ..filled_form() };

        let err = admin.add_item(&form).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(backend.network_calls(), 0);
    }

    #[tokio::test]
    async fn test_add_item_returns_server_item() {
        let backend = grocery();
        let admin = Admin::new(backend.clone());

        let added = admin.add_item(&filled_form()).await.expect("add failed");
        assert_eq!(added.item.name, "DATES");
        assert_eq!(added.item.price, Money::from_decimal(99.5));
        assert_eq!(backend.state.borrow().submitted_items[0].name, "dates");
    }

    #[tokio::test]
    async fn test_add_item_failure_messages() {
        let backend = grocery();
        let admin = Admin::new(backend.clone());

        backend.state.borrow_mut().add_error = Some(StoreError::Server { status: 400, message: Some("Item already exists".into()) });
        let err = admin.add_item(&filled_form()).await.unwrap_err();
        assert_eq!(err.user_message(), "Item already exists");

        backend.state.borrow_mut().add_error = Some(StoreError::Server { status: 500, message: None });
        let err = admin.add_item(&filled_form()).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to add item.");
    }

    #[tokio::test]
    async fn test_add_item_malformed_body_shows_generic_failure() {
        let backend = grocery();
        let admin = Admin::new(backend.clone());
        backend.state.borrow_mut().add_error = Some(StoreError::MalformedResponse("expected value at line 1".into()));

        let err = admin.add_item(&filled_form()).await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedResponse(_)));
        assert_eq!(add_failure_message(&err), GENERIC_ADD_FAILURE);
        assert_eq!(backend.state.borrow().submitted_items.len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_both_succeed() {
        let backend = grocery();
        let shop = Storefront::new(backend.clone());
        let cart = shop.scan(&Cart::new(), "A1").await.unwrap();
        shop.checkout(&cart).await.unwrap();

        let snapshot = Admin::new(backend).load_snapshot().await;
        assert!(snapshot.backend_reachable());
        assert_eq!(snapshot.inventory_or_empty().len(), 3);
        assert_eq!(snapshot.billing_or_empty().len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_inventory_down_billing_up() {
        let backend = grocery();
        backend.state.borrow_mut().bills.push(Bill {
            id: Some("b-1".into()),
            timestamp: None,
            items: vec![],
            total: Money::from_decimal(42.0),
        });
        backend.state.borrow_mut().inventory_down = true;

        let snapshot = Admin::new(backend).load_snapshot().await;
        assert!(!snapshot.backend_reachable());
        assert!(snapshot.inventory.is_err());
        assert!(snapshot.inventory_or_empty().is_empty());
        assert_eq!(snapshot.billing_or_empty().len(), 1);
        assert_eq!(snapshot.billing_or_empty()[0].total, Money::from_decimal(42.0));
    }

    #[tokio::test]
    async fn test_snapshot_billing_down_inventory_up() {
        let backend = grocery();
        backend.state.borrow_mut().billing_down = true;

        let snapshot = Admin::new(backend).load_snapshot().await;
        assert!(!snapshot.backend_reachable());
        assert_eq!(snapshot.inventory_or_empty().len(), 3);
        assert!(snapshot.billing_or_empty().is_empty());
    }
}
