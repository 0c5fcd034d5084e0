use clap::Parser;
use once_cell::sync::Lazy;

pub const SESSION_COOKIE_NAME: &str = "sid";

// Leaderboard configuration
pub const LEADERBOARD_SIZE: usize = 10;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 5001)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, env, default_value = "http://localhost:5173,http://127.0.0.1:5173")]
    pub cors_allowed_origins: String,

    // Server-side session lifetime, fourteen days
    #[clap(long, env, default_value_t = 1_209_600)]
    pub session_ttl_seconds: i64,

    #[clap(long, env, default_value = "admin")]
    pub admin_account: String,

    #[clap(long, env, default_value = "admin123")]
    pub admin_password: String,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
