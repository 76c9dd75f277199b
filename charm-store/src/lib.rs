pub mod app_config;
pub mod item_repo;
pub mod member_repo;
pub mod order_repo;

pub use item_repo::MemoryItemRepository;
pub use member_repo::MemoryMemberRepository;
pub use order_repo::MemoryOrderRepository;
