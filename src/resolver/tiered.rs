//! 多级数值解析器核心
//! 按序尝试数值源，首个成功者直写缓存；全部失败时回退到新鲜缓存，最终回退为占位值
//! 每次解析独立运行，无跨次重试；任何路径都终止于确定的ResolvedValue，不向上抛错

use std::time::Duration;

use chrono::{DateTime, Duration as FreshnessWindow, Utc};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::cache::MetricCache;
use super::source::ValueSource;
use crate::error::RsfolioError;
use crate::store::LocalStore;

/// 解析值来源标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    /// 某个数值源实时产出
    Live,
    /// 数值源全部失败，取自新鲜缓存
    Cached,
    /// 无实时值亦无新鲜缓存，调用方应渲染占位符
    Unavailable,
}

/// 单次解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub value: u64,
    pub origin: ValueOrigin,
    pub timestamp: DateTime<Utc>,
}

impl ResolvedValue {
    /// 是否有可展示的数值
    pub fn is_available(&self) -> bool {
        !matches!(self.origin, ValueOrigin::Unavailable)
    }
}

/// 多级数值解析器
/// 视图计数与引用计数共用同一解析流程，仅新鲜度窗口不同：
/// 视图计数无界（freshness = None），引用计数24小时
#[derive(Debug, Clone)]
pub struct TieredValueResolver {
    // 单源超时
    source_timeout: Duration,
}

impl TieredValueResolver {
    /// 创建解析器（单源超时，观测设计为5秒）
    pub fn new(source_timeout: Duration) -> Self {
        Self { source_timeout }
    }

    /// 解析指标值
    ///
    /// 流程（严格串行，顺序即优先级）：
    /// 1. 按序尝试每个数值源，单源限时；超时或失败则顺延，不重试同一源
    /// 2. 首个成功源胜出：数值+当前时间直写缓存，返回Live
    /// 3. 全部失败：读缓存，条目存在且在新鲜度窗口内则返回Cached（时间戳为条目时间）
    /// 4. 仍无可用值：返回 {0, Unavailable, now}，调用方渲染占位符
    pub async fn resolve(
        &self,
        sources: &[Box<dyn ValueSource>],
        store: &mut LocalStore,
        metric: &str,
        freshness: Option<FreshnessWindow>,
    ) -> ResolvedValue {
        // 1. 按序尝试数值源
        for source in sources {
            debug!("指标 [{}] 尝试数值源 [{}]", metric, source.name());
            match timeout(self.source_timeout, source.fetch()).await {
                Ok(Ok(value)) => {
                    debug!("数值源 [{}] 成功，值：{}", source.name(), value);
                    let now = Utc::now();

                    // 2. 直写缓存；落盘失败仅告警，不影响实时结果
                    MetricCache::write(store, metric, value, now);
                    if let Err(e) = store.persist().await {
                        warn!("指标 [{}] 缓存落盘失败：{}", metric, e);
                    }

                    return ResolvedValue {
                        value,
                        origin: ValueOrigin::Live,
                        timestamp: now,
                    };
                }
                Ok(Err(e)) => {
                    warn!("数值源 [{}] 失败：{}，尝试下一个源", source.name(), e);
                }
                Err(_) => {
                    let e = RsfolioError::SourceTimeout(source.name().to_string());
                    warn!("{}（限时{:?}），尝试下一个源", e, self.source_timeout);
                }
            }
        }

        // 3. 全部失败，回退到本地缓存
        match MetricCache::read(store, metric) {
            Ok(entry) => {
                // 时钟回拨产生的未来时间戳按零龄处理，视为新鲜
                let fresh = match freshness {
                    None => true,
                    Some(window) => Utc::now() - entry.timestamp <= window,
                };

                if fresh {
                    debug!("指标 [{}] 回退到缓存值：{}", metric, entry.value);
                    return ResolvedValue {
                        value: entry.value,
                        origin: ValueOrigin::Cached,
                        timestamp: entry.timestamp,
                    };
                }

                let e = RsfolioError::CacheStale(metric.to_string());
                warn!("{}（条目时间：{}）", e, entry.timestamp.to_rfc3339());
            }
            Err(e) => {
                warn!("指标 [{}] 无可用缓存：{}", metric, e);
            }
        }

        // 4. 无任何可用值，返回占位
        ResolvedValue {
            value: 0,
            origin: ValueOrigin::Unavailable,
            timestamp: Utc::now(),
        }
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RsfResult;
    use async_trait::async_trait;

    /// 固定结果的测试数值源
    struct StubSource {
        name: &'static str,
        result: Option<u64>,
    }

    #[async_trait]
    impl ValueSource for StubSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch(&self) -> RsfResult<u64> {
            self.result
                .ok_or_else(|| RsfolioError::SourceFailure(self.name.to_string()))
        }
    }

    /// 永不返回的测试数值源（验证单源超时）
    struct HangingSource;

    #[async_trait]
    impl ValueSource for HangingSource {
        fn name(&self) -> &str {
            "hanging"
        }

        async fn fetch(&self) -> RsfResult<u64> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(0)
        }
    }

    fn ok(name: &'static str, value: u64) -> Box<dyn ValueSource> {
        Box::new(StubSource { name, result: Some(value) })
    }

    fn fail(name: &'static str) -> Box<dyn ValueSource> {
        Box::new(StubSource { name, result: None })
    }

    fn resolver() -> TieredValueResolver {
        TieredValueResolver::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_first_success_wins_and_writes_cache() {
        // 测试场景：[失败, 失败, 成功(42)] 应返回Live 42，并将42写入缓存
        let mut store = LocalStore::in_memory();
        let sources = vec![fail("a"), fail("b"), ok("c", 42)];

        let resolved = resolver().resolve(&sources, &mut store, "visits", None).await;

        assert_eq!(resolved.value, 42);
        assert_eq!(resolved.origin, ValueOrigin::Live);

        let entry = MetricCache::read(&store, "visits").unwrap();
        assert_eq!(entry.value, 42);
        assert_eq!(entry.timestamp, resolved.timestamp);
    }

    #[tokio::test]
    async fn test_source_order_is_priority() {
        // 测试场景：多个源可成功时，序列靠前者胜出
        let mut store = LocalStore::in_memory();
        let sources = vec![fail("a"), ok("b", 7), ok("c", 9)];

        let resolved = resolver().resolve(&sources, &mut store, "visits", None).await;
        assert_eq!(resolved.value, 7);
    }

    #[tokio::test]
    async fn test_all_fail_falls_back_to_fresh_cache() {
        // 测试场景：全部失败 + 1小时前的缓存条目（24小时窗口）应返回Cached
        let mut store = LocalStore::in_memory();
        let cached_at = Utc::now() - FreshnessWindow::hours(1);
        MetricCache::write(&mut store, "citations", 10, cached_at);

        let sources = vec![fail("a"), fail("b")];
        let resolved = resolver()
            .resolve(&sources, &mut store, "citations", Some(FreshnessWindow::hours(24)))
            .await;

        assert_eq!(resolved.value, 10);
        assert_eq!(resolved.origin, ValueOrigin::Cached);
        assert_eq!(resolved.timestamp, cached_at);
    }

    #[tokio::test]
    async fn test_stale_cache_is_unavailable() {
        // 测试场景：全部失败 + 48小时前的缓存条目（24小时窗口）应返回Unavailable
        let mut store = LocalStore::in_memory();
        let cached_at = Utc::now() - FreshnessWindow::hours(48);
        MetricCache::write(&mut store, "citations", 10, cached_at);

        let sources = vec![fail("a")];
        let resolved = resolver()
            .resolve(&sources, &mut store, "citations", Some(FreshnessWindow::hours(24)))
            .await;

        assert_eq!(resolved.value, 0);
        assert_eq!(resolved.origin, ValueOrigin::Unavailable);
    }

    #[tokio::test]
    async fn test_unbounded_freshness_accepts_old_cache() {
        // 测试场景：视图计数无新鲜度上限，任意旧条目均可回退
        let mut store = LocalStore::in_memory();
        let cached_at = Utc::now() - FreshnessWindow::days(400);
        MetricCache::write(&mut store, "visits", 99, cached_at);

        let sources = vec![fail("a")];
        let resolved = resolver().resolve(&sources, &mut store, "visits", None).await;

        assert_eq!(resolved.value, 99);
        assert_eq!(resolved.origin, ValueOrigin::Cached);
    }

    #[tokio::test]
    async fn test_no_cache_is_unavailable() {
        // 测试场景：全部失败且无缓存，返回 {0, Unavailable}
        let mut store = LocalStore::in_memory();

        let sources = vec![fail("a"), fail("b")];
        let resolved = resolver().resolve(&sources, &mut store, "visits", None).await;

        assert_eq!(resolved.value, 0);
        assert_eq!(resolved.origin, ValueOrigin::Unavailable);
        assert!(!resolved.is_available());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_source_times_out_to_next() {
        // 测试场景：悬挂源超出单源限时后顺延到下一个源（暂停时钟，无真实等待）
        let mut store = LocalStore::in_memory();
        let sources: Vec<Box<dyn ValueSource>> = vec![Box::new(HangingSource), ok("b", 5)];

        let resolved = resolver().resolve(&sources, &mut store, "visits", None).await;

        assert_eq!(resolved.value, 5);
        assert_eq!(resolved.origin, ValueOrigin::Live);
    }

    #[tokio::test]
    async fn test_empty_source_list_uses_cache() {
        // 测试场景：空源列表直接走缓存回退
        let mut store = LocalStore::in_memory();
        MetricCache::write(&mut store, "visits", 3, Utc::now());

        let resolved = resolver().resolve(&[], &mut store, "visits", None).await;
        assert_eq!(resolved.value, 3);
        assert_eq!(resolved.origin, ValueOrigin::Cached);
    }
}
