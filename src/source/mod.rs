//! 外部数值源模块：计数服务、引用抓取与天气接口的具体实现
pub mod counter;
pub mod scholar;
pub mod weather;

use std::time::Duration;
use reqwest::Client;

use crate::error::RsfResult;

// 导出核心接口
pub use self::counter::{CounterMode, CounterSource};
pub use self::scholar::ScholarCitationsSource;
pub use self::weather::{WeatherInfo, WeatherService};

/// 构建共享HTTP客户端（请求超时与解析器的单源限时对齐）
pub fn build_http_client(timeout_secs: u64) -> RsfResult<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}
