pub mod member;
pub mod membership;
pub mod repository;

pub use member::{Address, Member};
pub use membership::{MembershipError, MembershipService};
pub use repository::MemberRepository;
