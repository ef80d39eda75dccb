pub mod user_repo;
pub mod in_memory_user_repo;
pub mod mongo_user_repo;

pub use user_repo::UserRepository;
pub use in_memory_user_repo::InMemoryUserRepository;
pub use mongo_user_repo::MongoUserRepository;
