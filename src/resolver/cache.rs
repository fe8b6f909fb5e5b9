//! 指标缓存管理
//! 在本地存储上按 "{metric}" / "{metric}Timestamp" 两键读写缓存条目
//! 存储值均为字符串（数值为十进制文本，时间戳为RFC 3339），与页面本地存储布局一致

use chrono::{DateTime, Utc};

use crate::error::{RsfResult, RsfolioError};
use crate::store::LocalStore;

/// 单条指标缓存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub value: u64,
    pub timestamp: DateTime<Utc>,
}

/// 指标缓存管理器
/// 只负责条目的读写与格式转换，新鲜度判断由解析器完成
pub struct MetricCache;

impl MetricCache {
    /// 读取指标缓存条目
    /// 任一键缺失或格式损坏均视为未命中（宁可重新拉取，不返回可疑值）
    pub fn read(store: &LocalStore, metric: &str) -> RsfResult<CacheEntry> {
        let miss = || RsfolioError::CacheMiss(metric.to_string());

        let value = store
            .get(metric)
            .and_then(|raw| raw.parse::<u64>().ok())
            .ok_or_else(miss)?;

        let timestamp = store
            .get(&Self::timestamp_key(metric))
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc))
            .ok_or_else(miss)?;

        Ok(CacheEntry { value, timestamp })
    }

    /// 写入指标缓存条目（仅更新内存表，落盘由调用方决定）
    pub fn write(store: &mut LocalStore, metric: &str, value: u64, timestamp: DateTime<Utc>) {
        store.set(metric, value.to_string());
        store.set(Self::timestamp_key(metric), timestamp.to_rfc3339());
    }

    /// 时间戳键名
    fn timestamp_key(metric: &str) -> String {
        format!("{}Timestamp", metric)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_roundtrip() {
        // 测试场景：写入条目后可完整读回
        let mut store = LocalStore::in_memory();
        let ts = Utc::now();

        MetricCache::write(&mut store, "visits", 1234, ts);
        let entry = MetricCache::read(&store, "visits").unwrap();

        assert_eq!(entry.value, 1234);
        // RFC 3339往返保留到纳秒精度
        assert_eq!(entry.timestamp, ts);
    }

    #[test]
    fn test_read_missing_entry_is_miss() {
        // 测试场景：两键均缺失时返回CacheMiss
        let store = LocalStore::in_memory();
        let err = MetricCache::read(&store, "citations").unwrap_err();
        assert!(matches!(err, RsfolioError::CacheMiss(_)));
    }

    #[test]
    fn test_read_corrupt_timestamp_is_miss() {
        // 测试场景：时间戳损坏时整条视为未命中
        let mut store = LocalStore::in_memory();
        store.set("citations", "88");
        store.set("citationsTimestamp", "yesterday-ish");

        let err = MetricCache::read(&store, "citations").unwrap_err();
        assert!(matches!(err, RsfolioError::CacheMiss(_)));
    }

    #[test]
    fn test_read_corrupt_value_is_miss() {
        // 测试场景：数值非十进制文本时整条视为未命中
        let mut store = LocalStore::in_memory();
        store.set("citations", "-5");
        store.set("citationsTimestamp", Utc::now().to_rfc3339());

        let err = MetricCache::read(&store, "citations").unwrap_err();
        assert!(matches!(err, RsfolioError::CacheMiss(_)));
    }
}
