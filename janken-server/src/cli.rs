// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::net::SocketAddr;
use std::sync::LazyLock;
use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;
use session_store::RedisConfig;
use session_store::StoreConfig;

pub static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
    format!(
        "
{}
BUILD_GIT_BRANCH={}
BUILD_GIT_COMMIT={}
BUILD_GIT_DATE={}
BUILD_TIME={}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_GIT_BRANCH"),
        env!("BUILD_GIT_COMMIT"),
        env!("BUILD_GIT_DATE"),
        env!("BUILD_TIME"),
    )
});

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Redis,
    /// Keeps sessions in process memory; they are lost on restart.
    Memory,
}

/// Janken session server
#[derive(Parser, Debug)]
#[command(author, long_version = &**LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Socket address of the HTTP server
    #[arg(long, env = "JANKEN_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Where sessions are kept
    #[arg(long, env = "JANKEN_STORE", value_enum, default_value_t = StoreKind::Redis)]
    pub store: StoreKind,

    #[arg(long, env = "REDIS_HOST", default_value = "localhost")]
    pub redis_host: String,

    #[arg(long, env = "REDIS_PORT", default_value_t = 6379)]
    pub redis_port: u16,

    #[arg(long, env = "REDIS_PASSWORD")]
    pub redis_password: Option<String>,

    /// Seconds a session lives after its last update
    #[arg(
        long,
        env = "JANKEN_SESSION_LIFETIME_SECS",
        default_value_t = 3600,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub session_lifetime_secs: u64,

    /// Seconds after which an unreleased session lock expires
    #[arg(
        long,
        env = "JANKEN_LOCK_TIMEOUT_SECS",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub lock_timeout_secs: u64,
}

impl Args {
    pub fn redis_config(&self) -> RedisConfig {
        RedisConfig {
            host: self.redis_host.clone(),
            port: self.redis_port,
            password: self.redis_password.clone(),
        }
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            session_lifetime: Duration::from_secs(self.session_lifetime_secs),
            lock_timeout: Duration::from_secs(self.lock_timeout_secs),
        }
    }
}
