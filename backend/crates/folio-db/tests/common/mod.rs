mod test_db;

pub use test_db::{create_test_pool, new_user};
