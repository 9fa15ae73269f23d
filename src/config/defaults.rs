pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info,sea_orm=warn";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://fyyur.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 2;
