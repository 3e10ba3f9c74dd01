pub mod admin;
pub mod not_found;

pub use admin::QueryAdminPage;
