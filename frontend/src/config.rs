//! Configuration for the admin panel.

#[cfg(not(feature = "mock"))]
use turntable_shared::AdminConfig;

/// Admin service root.
///
/// 编译时从环境变量 `TURNTABLE_API_BASE` 读取，默认本地开发地址。
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("TURNTABLE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8080/turntable",
};

/// Option whose choices fill the database selector.
pub const DB_OPTION: &str = "db";

/// Endpoint layout of the admin service.
#[cfg(not(feature = "mock"))]
pub fn admin_config() -> AdminConfig {
    AdminConfig::new(API_BASE)
}
