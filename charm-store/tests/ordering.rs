use std::sync::Arc;

use uuid::Uuid;

use charm_catalog::{Item, ItemCategory, ItemError, ItemRepository};
use charm_core::member::{Address, Member};
use charm_core::repository::MemberRepository;
use charm_order::repository::OrderRepository;
use charm_order::{
    DeliveryStatus, OrderError, OrderItemStatus, OrderSearch, OrderService, OrderServiceError,
    OrderStatus,
};
use charm_store::{MemoryItemRepository, MemoryMemberRepository, MemoryOrderRepository};

struct Harness {
    members: Arc<MemoryMemberRepository>,
    items: Arc<MemoryItemRepository>,
    orders: Arc<MemoryOrderRepository>,
    service: OrderService,
}

fn harness() -> Harness {
    let members = Arc::new(MemoryMemberRepository::new());
    let items = Arc::new(MemoryItemRepository::new());
    let orders = Arc::new(MemoryOrderRepository::new());
    let service = OrderService::new(members.clone(), items.clone(), orders.clone());
    Harness {
        members,
        items,
        orders,
        service,
    }
}

fn lisbon() -> Address {
    Address {
        city: "Lisbon".to_string(),
        street: "12 Harbor Way".to_string(),
        zipcode: "1100-341".to_string(),
    }
}

async fn seed_member(harness: &Harness, name: &str) -> Uuid {
    let member = Member::new(name.to_string(), Some(lisbon()));
    harness.members.save(&member).await.unwrap()
}

async fn seed_item(harness: &Harness, name: &str, price: i32, stock: i32) -> Uuid {
    let item = Item::new(name.to_string(), price, stock, ItemCategory::Book);
    harness.items.save(&item).await.unwrap()
}

#[tokio::test]
async fn place_order_takes_stock_and_links_member() {
    let harness = harness();
    let member_id = seed_member(&harness, "charming").await;
    let item_id = seed_item(&harness, "Dune", 12000, 10).await;

    let order_id = harness.service.place_order(member_id, item_id, 2).await.unwrap();

    let order = harness.orders.find_one(order_id).await.unwrap().unwrap();
    assert_eq!(order.member_id, member_id);
    assert_eq!(order.status, OrderStatus::Order);
    assert_eq!(order.total_price(), 24000);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].order_id, Some(order_id));
    assert_eq!(order.delivery.as_ref().unwrap().order_id, Some(order_id));
    assert_eq!(order.delivery.as_ref().unwrap().status, DeliveryStatus::Ready);

    let item = harness.items.find_one(item_id).await.unwrap().unwrap();
    assert_eq!(item.stock_quantity, 8);

    let member = harness.members.find_one(member_id).await.unwrap().unwrap();
    assert_eq!(member.order_ids, vec![order_id]);
}

#[tokio::test]
async fn place_order_rejects_stock_overdraw_without_writing() {
    let harness = harness();
    let member_id = seed_member(&harness, "charming").await;
    let item_id = seed_item(&harness, "Dune", 12000, 1).await;

    let result = harness.service.place_order(member_id, item_id, 2).await;

    assert!(matches!(
        result,
        Err(OrderServiceError::Item(ItemError::NotEnoughStock { .. }))
    ));

    // No store was touched
    let item = harness.items.find_one(item_id).await.unwrap().unwrap();
    assert_eq!(item.stock_quantity, 1);
    let member = harness.members.find_one(member_id).await.unwrap().unwrap();
    assert!(member.order_ids.is_empty());
    assert!(harness.orders.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn place_order_requires_delivery_address() {
    let harness = harness();
    let member = Member::new("charming".to_string(), None);
    let member_id = harness.members.save(&member).await.unwrap();
    let item_id = seed_item(&harness, "Dune", 12000, 10).await;

    let result = harness.service.place_order(member_id, item_id, 1).await;

    assert!(matches!(
        result,
        Err(OrderServiceError::NoDeliveryAddress(id)) if id == member_id
    ));
}

#[tokio::test]
async fn cancel_order_restores_stock() {
    let harness = harness();
    let member_id = seed_member(&harness, "charming").await;
    let item_id = seed_item(&harness, "Dune", 12000, 10).await;
    let order_id = harness.service.place_order(member_id, item_id, 2).await.unwrap();

    harness.service.cancel_order(order_id).await.unwrap();

    let order = harness.orders.find_one(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Cancel);
    assert!(order
        .items
        .iter()
        .all(|line| line.status == OrderItemStatus::Cancelled));

    let item = harness.items.find_one(item_id).await.unwrap().unwrap();
    assert_eq!(item.stock_quantity, 10);
}

#[tokio::test]
async fn cancel_rejected_after_delivery_completes() {
    let harness = harness();
    let member_id = seed_member(&harness, "charming").await;
    let item_id = seed_item(&harness, "Dune", 12000, 10).await;
    let order_id = harness.service.place_order(member_id, item_id, 2).await.unwrap();

    // The carrier marks the shipment complete out of band
    let mut order = harness.orders.find_one(order_id).await.unwrap().unwrap();
    order.delivery.as_mut().unwrap().status = DeliveryStatus::Comp;
    harness.orders.save(&order).await.unwrap();

    let result = harness.service.cancel_order(order_id).await;

    assert!(matches!(
        result,
        Err(OrderServiceError::Order(OrderError::AlreadyDelivered))
    ));

    // Neither the order nor the stock moved
    let order = harness.orders.find_one(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Order);
    let item = harness.items.find_one(item_id).await.unwrap().unwrap();
    assert_eq!(item.stock_quantity, 8);
}

#[tokio::test]
async fn cancel_rejected_on_cancelled_order() {
    let harness = harness();
    let member_id = seed_member(&harness, "charming").await;
    let item_id = seed_item(&harness, "Dune", 12000, 10).await;
    let order_id = harness.service.place_order(member_id, item_id, 2).await.unwrap();

    harness.service.cancel_order(order_id).await.unwrap();
    let result = harness.service.cancel_order(order_id).await;

    assert!(matches!(
        result,
        Err(OrderServiceError::Order(OrderError::AlreadyCancelled(id))) if id == order_id
    ));

    // A double cancel must not restore stock twice
    let item = harness.items.find_one(item_id).await.unwrap().unwrap();
    assert_eq!(item.stock_quantity, 10);
}

#[tokio::test]
async fn find_orders_filters_by_member_name_and_status() {
    let harness = harness();
    let charming = seed_member(&harness, "charming").await;
    let disarming = seed_member(&harness, "disarming").await;
    let item_id = seed_item(&harness, "Dune", 12000, 10).await;

    let kept = harness.service.place_order(charming, item_id, 1).await.unwrap();
    let cancelled = harness.service.place_order(charming, item_id, 1).await.unwrap();
    harness.service.cancel_order(cancelled).await.unwrap();
    harness.service.place_order(disarming, item_id, 1).await.unwrap();

    let all = harness.service.find_orders(OrderSearch::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let search = OrderSearch {
        member_name: Some("charming".to_string()),
        status: None,
    };
    let for_member = harness.service.find_orders(search).await.unwrap();
    assert_eq!(for_member.len(), 2);

    let search = OrderSearch {
        member_name: Some("charming".to_string()),
        status: Some(OrderStatus::Order),
    };
    let open = harness.service.find_orders(search).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, kept);

    let search = OrderSearch {
        member_name: Some("nobody".to_string()),
        status: None,
    };
    assert!(harness.service.find_orders(search).await.unwrap().is_empty());
}

#[tokio::test]
async fn place_order_rejects_unknown_member_and_item() {
    let harness = harness();
    let member_id = seed_member(&harness, "charming").await;

    let result = harness
        .service
        .place_order(Uuid::new_v4(), Uuid::new_v4(), 1)
        .await;
    assert!(matches!(result, Err(OrderServiceError::MemberNotFound(_))));

    let result = harness
        .service
        .place_order(member_id, Uuid::new_v4(), 1)
        .await;
    assert!(matches!(result, Err(OrderServiceError::ItemNotFound(_))));
}
