//! 引用计数组件
//! 两级解析：学术主页抓取 -> 本地缓存（24小时新鲜度窗口）

use std::time::Duration;

use chrono::Duration as FreshnessWindow;
use reqwest::Client;

use crate::config::GlobalConfig;
use crate::resolver::{ResolvedValue, TieredValueResolver, ValueSource};
use crate::source::ScholarCitationsSource;
use crate::store::LocalStore;
use crate::utils::NumberFormatter;

/// 引用计数在本地存储中的指标名
pub const CITATIONS_METRIC: &str = "citations";

/// 引用计数不可用时的占位符
pub const CITATIONS_PLACEHOLDER: &str = "∞";

/// 引用计数组件
pub struct CitationWidget {
    resolver: TieredValueResolver,
    sources: Vec<Box<dyn ValueSource>>,
    freshness: FreshnessWindow,
}

impl CitationWidget {
    /// 创建引用计数组件
    pub fn new(client: Client, config: &GlobalConfig) -> Self {
        let sources: Vec<Box<dyn ValueSource>> =
            vec![Box::new(ScholarCitationsSource::new(client, config))];

        Self {
            resolver: TieredValueResolver::new(Duration::from_secs(config.source_timeout)),
            sources,
            freshness: FreshnessWindow::hours(config.citation_freshness_hours),
        }
    }

    /// 解析当前引用计数
    pub async fn resolve(&self, store: &mut LocalStore) -> ResolvedValue {
        self.resolver
            .resolve(&self.sources, store, CITATIONS_METRIC, Some(self.freshness))
            .await
    }

    /// 渲染展示文本
    pub fn render(resolved: &ResolvedValue) -> String {
        if resolved.is_available() {
            NumberFormatter::format(resolved.value)
        } else {
            CITATIONS_PLACEHOLDER.to_string()
        }
    }
}
