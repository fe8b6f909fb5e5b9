//! 本地键值存储
//! 浏览器localStorage的文件等价物：纯字符串键值对，整体序列化为单个JSON文件

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{RsfResult, RsfolioError};

/// 本地键值存储
/// 存储本身不做任何过期管理，新鲜度由上层解析器判断
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: Option<PathBuf>,
    entries: HashMap<String, String>,
}

impl LocalStore {
    /// 创建纯内存存储（测试用，不落盘）
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: HashMap::new(),
        }
    }

    /// 打开文件存储（文件缺失或损坏时从空表开始，不视为错误）
    pub async fn open(path: &Path) -> Self {
        let entries = match tokio::fs::read(path).await {
            Ok(data) => match serde_json::from_slice::<HashMap<String, String>>(&data) {
                Ok(entries) => {
                    debug!("本地存储加载成功，条目数：{}", entries.len());
                    entries
                }
                Err(e) => {
                    warn!("本地存储文件损坏，将从空表开始：{}", e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path: Some(path.to_path_buf()),
            entries,
        }
    }

    /// 读取键值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// 写入键值（仅更新内存表，落盘需调用persist）
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// 删除键值
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// 将内存表落盘（内存存储直接返回成功）
    pub async fn persist(&self) -> RsfResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let data = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| RsfolioError::StoreError(format!("序列化失败：{}", e)))?;
        tokio::fs::write(path, data).await?;

        debug!("本地存储已落盘，条目数：{}", self.entries.len());
        Ok(())
    }
}
