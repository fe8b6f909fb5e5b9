//! 访问计数组件
//! 三级解析：hit自增 -> get只读 -> 本地缓存（访问计数的缓存无新鲜度上限）

use std::time::Duration;

use reqwest::Client;

use super::PLACEHOLDER;
use crate::config::GlobalConfig;
use crate::resolver::{ResolvedValue, TieredValueResolver, ValueSource};
use crate::source::CounterSource;
use crate::store::LocalStore;
use crate::utils::NumberFormatter;

/// 访问计数在本地存储中的指标名
pub const VISITS_METRIC: &str = "visits";

/// 访问计数组件
pub struct ViewCounterWidget {
    resolver: TieredValueResolver,
    sources: Vec<Box<dyn ValueSource>>,
}

impl ViewCounterWidget {
    /// 创建访问计数组件
    pub fn new(client: Client, config: &GlobalConfig) -> Self {
        let sources: Vec<Box<dyn ValueSource>> = vec![
            Box::new(CounterSource::hit(client.clone(), config)),
            Box::new(CounterSource::get(client, config)),
        ];

        Self {
            resolver: TieredValueResolver::new(Duration::from_secs(config.source_timeout)),
            sources,
        }
    }

    /// 解析当前访问计数
    pub async fn resolve(&self, store: &mut LocalStore) -> ResolvedValue {
        self.resolver
            .resolve(&self.sources, store, VISITS_METRIC, None)
            .await
    }

    /// 渲染展示文本（"1.2k views"；不可用时为占位符）
    pub fn render(resolved: &ResolvedValue) -> String {
        if resolved.is_available() {
            format!("{} views", NumberFormatter::format(resolved.value))
        } else {
            PLACEHOLDER.to_string()
        }
    }
}
