// tests/store_tests.rs
mod common;

use common::*;
use storefront::models::{ACTIVE_CART_STATUS, DEFAULT_CART_NAME};
use storefront::{NewCart, NewOrder};

#[tokio::test]
async fn test_created_user_is_listed() {
  setup_tracing();
  for (label, store) in all_stores().await {
    let created = store.create_user(new_user("a", "p")).await.unwrap();
    assert_eq!(created.id, 1, "{label}: first id");
    assert_eq!(created.username, "a", "{label}");
    assert_eq!(created.password, "p", "{label}");
    assert_eq!(created.token, None, "{label}");

    let users = store.list_users().await.unwrap();
    assert_eq!(users, vec![created], "{label}");
  }
}

#[tokio::test]
async fn test_credentials_match_exactly() {
  setup_tracing();
  for (label, store) in all_stores().await {
    store.create_user(new_user("alice", "secret")).await.unwrap();

    let found = store.find_user_by_credentials("alice", "secret").await.unwrap();
    assert_eq!(found.map(|u| u.username), Some("alice".to_string()), "{label}");
    assert!(store.find_user_by_credentials("alice", "Secret").await.unwrap().is_none(), "{label}");
    assert!(store.find_user_by_credentials("Alice", "secret").await.unwrap().is_none(), "{label}");
  }
}

#[tokio::test]
async fn test_duplicate_usernames_resolve_to_lowest_id() {
  setup_tracing();
  for (label, store) in all_stores().await {
    let first = store.create_user(new_user("dup", "p")).await.unwrap();
    store.create_user(new_user("dup", "p")).await.unwrap();

    let found = store.find_user_by_credentials("dup", "p").await.unwrap().unwrap();
    assert_eq!(found.id, first.id, "{label}");
  }
}

#[tokio::test]
async fn test_save_user_updates_token_lookup() {
  setup_tracing();
  for (label, store) in all_stores().await {
    let mut user = store.create_user(new_user("a", "p")).await.unwrap();
    assert!(store.find_user_by_token("tokenAAAAA").await.unwrap().is_none(), "{label}");

    user.token = Some("tokenAAAAA".to_string());
    store.save_user(&user).await.unwrap();
    let found = store.find_user_by_token("tokenAAAAA").await.unwrap().unwrap();
    assert_eq!(found.id, user.id, "{label}");

    // Overwriting the token invalidates the previous one.
    user.token = Some("tokenBBBBB".to_string());
    store.save_user(&user).await.unwrap();
    assert!(store.find_user_by_token("tokenAAAAA").await.unwrap().is_none(), "{label}");
    assert!(store.find_user_by_token("tokenBBBBB").await.unwrap().is_some(), "{label}");
    assert_eq!(store.list_users().await.unwrap().len(), 1, "{label}: save must not duplicate");
  }
}

#[tokio::test]
async fn test_items_are_created_and_found_by_id() {
  setup_tracing();
  for (label, store) in all_stores().await {
    let widget = store.create_item(new_item("Widget", "ok")).await.unwrap();
    let gadget = store.create_item(new_item("Gadget", "draft")).await.unwrap();
    assert_eq!((widget.id, gadget.id), (1, 2), "{label}");

    assert_eq!(store.find_item(2).await.unwrap(), Some(gadget.clone()), "{label}");
    assert!(store.find_item(99).await.unwrap().is_none(), "{label}");
    assert_eq!(store.list_items().await.unwrap(), vec![widget, gadget], "{label}");
  }
}

#[tokio::test]
async fn test_find_or_create_cart_creates_once_per_user() {
  setup_tracing();
  for (label, store) in all_stores().await {
    let (cart, created) = store.find_or_create_cart(NewCart::active_for(1)).await.unwrap();
    assert!(created, "{label}");
    assert_eq!(cart.user_id, 1, "{label}");
    assert_eq!(cart.name, DEFAULT_CART_NAME, "{label}");
    assert_eq!(cart.status, ACTIVE_CART_STATUS, "{label}");

    let (again, created_again) = store.find_or_create_cart(NewCart::active_for(1)).await.unwrap();
    assert!(!created_again, "{label}");
    assert_eq!(again.id, cart.id, "{label}");

    let (other, other_created) = store.find_or_create_cart(NewCart::active_for(2)).await.unwrap();
    assert!(other_created, "{label}");
    assert_ne!(other.id, cart.id, "{label}");

    assert_eq!(store.list_carts().await.unwrap().len(), 2, "{label}");
  }
}

#[tokio::test]
async fn test_list_carts_loads_items_in_append_order_with_duplicates() {
  setup_tracing();
  for (label, store) in all_stores().await {
    let widget = store.create_item(new_item("Widget", "ok")).await.unwrap();
    let gadget = store.create_item(new_item("Gadget", "ok")).await.unwrap();
    let (cart, _) = store.find_or_create_cart(NewCart::active_for(1)).await.unwrap();
    let (empty, _) = store.find_or_create_cart(NewCart::active_for(2)).await.unwrap();

    store.append_cart_item(cart.id, gadget.id).await.unwrap();
    store.append_cart_item(cart.id, widget.id).await.unwrap();
    store.append_cart_item(cart.id, gadget.id).await.unwrap();

    let carts = store.list_carts().await.unwrap();
    assert_eq!(carts.len(), 2, "{label}");
    assert_eq!(carts[0].id, cart.id, "{label}");
    let names: Vec<&str> = carts[0].items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Gadget", "Widget", "Gadget"], "{label}");
    assert_eq!(carts[1].id, empty.id, "{label}");
    assert!(carts[1].items.is_empty(), "{label}");
  }
}

#[tokio::test]
async fn test_orders_accept_any_cart_id() {
  setup_tracing();
  for (label, store) in all_stores().await {
    let order = store
      .create_order(NewOrder { cart_id: 4242, user_id: 1 })
      .await
      .unwrap();
    assert_eq!(order.id, 1, "{label}");
    assert_eq!(order.cart_id, 4242, "{label}");

    let orders = store.list_orders().await.unwrap();
    assert_eq!(orders, vec![order], "{label}");
  }
}
