pub mod database;
pub mod helpers;
pub mod test_app;

#[allow(unused_imports)]
pub use database::TestDb;
#[allow(unused_imports)]
pub use helpers::generate_test_email;
#[allow(unused_imports)]
pub use test_app::TestApp;
