use std::sync::Arc;

use charm_catalog::{Item, ItemRepository};
use charm_core::member::{Address, Member};
use charm_core::membership::MembershipService;
use charm_order::{OrderSearch, OrderService, OrderStatus};
use charm_store::app_config::Config;
use charm_store::{MemoryItemRepository, MemoryMemberRepository, MemoryOrderRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = Config::load().expect("Failed to load config");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Charm order engine");

    let members = Arc::new(MemoryMemberRepository::new());
    let items = Arc::new(MemoryItemRepository::new());
    let orders = Arc::new(MemoryOrderRepository::new());

    // Seed the catalog from configuration
    for seed in &config.catalog.seed {
        let item = Item::new(seed.name.clone(), seed.price, seed.stock, seed.category);
        items.save(&item).await.expect("Failed to seed catalog");
    }
    tracing::info!(items = config.catalog.seed.len(), "catalog seeded");

    let membership = MembershipService::new(members.clone());
    let order_service = OrderService::new(members.clone(), items.clone(), orders.clone());

    let member = Member::new(
        "charming".to_string(),
        Some(Address {
            city: "Lisbon".to_string(),
            street: "12 Harbor Way".to_string(),
            zipcode: "1100-341".to_string(),
        }),
    );
    let member_id = membership.join(member).await.expect("Member join failed");

    let catalog = items.find_all().await.expect("Catalog lookup failed");
    let first = catalog
        .first()
        .expect("Catalog is empty, check config/default.toml");

    let order_id = order_service
        .place_order(member_id, first.id, 2)
        .await
        .expect("Order placement failed");
    let order = order_service
        .find_order(order_id)
        .await
        .expect("Order lookup failed");
    tracing::info!(total = order.total_price(), item = %first.name, "order placed");

    order_service
        .cancel_order(order_id)
        .await
        .expect("Order cancellation failed");

    let cancelled = order_service
        .find_orders(OrderSearch {
            member_name: Some("charming".to_string()),
            status: Some(OrderStatus::Cancel),
        })
        .await
        .expect("Order search failed");
    tracing::info!(count = cancelled.len(), "cancelled orders on file");
}
