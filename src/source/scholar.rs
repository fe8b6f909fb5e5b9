//! 学术引用计数源
//! 经CORS代理抓取学术主页HTML，从中正则提取 "Cited by N" 计数

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::{RsfResult, RsfolioError};
use crate::resolver::ValueSource;

/// 引用计数提取正则（页面是整段HTML，只做子串级提取，不解析DOM）
static CITED_BY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Cited by (\d+)").unwrap()
});

/// 学术引用计数源
#[derive(Debug, Clone)]
pub struct ScholarCitationsSource {
    client: Client,
    target_url: String,
}

impl ScholarCitationsSource {
    /// 创建引用计数源（代理前缀 + URL编码后的主页地址）
    pub fn new(client: Client, config: &GlobalConfig) -> Self {
        let encoded: String =
            url::form_urlencoded::byte_serialize(config.scholar_profile_url.as_bytes()).collect();
        let target_url = format!("{}{}", config.scholar_proxy_url, encoded);

        Self { client, target_url }
    }

    /// 从HTML文本中提取首个引用计数
    fn extract_count(html: &str) -> RsfResult<u64> {
        let captures = CITED_BY_REGEX.captures(html).ok_or_else(|| {
            RsfolioError::SourceFailure("页面中未找到 Cited by 计数".to_string())
        })?;

        // \d+ 保证非负，超出u64范围按解析失败处理
        captures[1].parse::<u64>().map_err(|e| {
            RsfolioError::SourceFailure(format!("引用计数解析失败：{}", e))
        })
    }
}

#[async_trait]
impl ValueSource for ScholarCitationsSource {
    fn name(&self) -> &str {
        "scholar-citations"
    }

    async fn fetch(&self) -> RsfResult<u64> {
        let response = self.client.get(&self.target_url).send().await?;
        if !response.status().is_success() {
            return Err(RsfolioError::SourceFailure(format!(
                "引用抓取代理返回状态码 {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        let count = Self::extract_count(&html)?;
        debug!("引用计数抓取成功：{}", count);
        Ok(count)
    }
}
