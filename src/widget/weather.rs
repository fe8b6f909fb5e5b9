//! 天气展示组件
//! 未配置API密钥时直接展示占位天气；拉取失败或超时渲染占位符，绝不阻塞

use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;
use tracing::warn;

use super::PLACEHOLDER;
use crate::config::GlobalConfig;
use crate::source::{WeatherInfo, WeatherService};

/// 天气展示组件
pub struct WeatherWidget {
    service: WeatherService,
    fetch_timeout: Duration,
}

impl WeatherWidget {
    /// 创建天气组件
    pub fn new(client: Client, config: &GlobalConfig) -> Self {
        Self {
            service: WeatherService::new(client, config),
            fetch_timeout: Duration::from_secs(config.source_timeout),
        }
    }

    /// 获取当前天气（失败时返回None，由渲染层降级为占位符）
    pub async fn current(&self) -> Option<WeatherInfo> {
        if !self.service.is_configured() {
            return Some(WeatherInfo::placeholder());
        }

        match timeout(self.fetch_timeout, self.service.fetch()).await {
            Ok(Ok(info)) => Some(info),
            Ok(Err(e)) => {
                warn!("天气拉取失败：{}", e);
                None
            }
            Err(_) => {
                warn!("天气拉取超时（限时{:?}）", self.fetch_timeout);
                None
            }
        }
    }

    /// 渲染展示文本（"72°F Sunny"）
    pub fn render(info: Option<&WeatherInfo>) -> String {
        match info {
            Some(weather) => format!("{}°F {}", weather.temp, weather.description),
            None => PLACEHOLDER.to_string(),
        }
    }
}
