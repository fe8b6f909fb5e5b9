//! CountAPI访问计数源
//! hit端点自增并返回计数；get端点只读，是自增失败后的降级层

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::GlobalConfig;
use crate::error::{RsfResult, RsfolioError};
use crate::resolver::ValueSource;

/// 计数端点模式
#[derive(Debug, Clone, Copy)]
pub enum CounterMode {
    /// 自增并返回（正常路径）
    Hit,
    /// 只读（降级路径）
    Get,
}

/// CountAPI计数源
#[derive(Debug, Clone)]
pub struct CounterSource {
    client: Client,
    endpoint: String,
    mode: CounterMode,
    name: String,
}

/// CountAPI响应体
#[derive(Debug, Deserialize)]
struct CounterResponse {
    value: Option<i64>,
}

impl CounterSource {
    /// 自增计数源
    pub fn hit(client: Client, config: &GlobalConfig) -> Self {
        Self::build(client, config, CounterMode::Hit)
    }

    /// 只读计数源
    pub fn get(client: Client, config: &GlobalConfig) -> Self {
        Self::build(client, config, CounterMode::Get)
    }

    fn build(client: Client, config: &GlobalConfig, mode: CounterMode) -> Self {
        let action = match mode {
            CounterMode::Hit => "hit",
            CounterMode::Get => "get",
        };
        let endpoint = format!(
            "{}/{}/{}/{}",
            config.counter_api_base, action, config.counter_namespace, config.counter_key
        );

        Self {
            client,
            endpoint,
            mode,
            name: format!("countapi-{}", action),
        }
    }
}

#[async_trait]
impl ValueSource for CounterSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> RsfResult<u64> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(RsfolioError::SourceFailure(format!(
                "{} 返回状态码 {}",
                self.endpoint,
                response.status()
            )));
        }

        let body: CounterResponse = response.json().await?;
        match (self.mode, body.value) {
            (_, Some(value)) if value < 0 => Err(RsfolioError::InvalidInput(format!(
                "计数服务返回负值：{}",
                value
            ))),
            (_, Some(value)) => Ok(value as u64),
            // 只读端点允许键尚不存在，按0处理；自增端点必须带值
            (CounterMode::Get, None) => Ok(0),
            (CounterMode::Hit, None) => Err(RsfolioError::SourceFailure(
                "hit端点响应缺少value字段".to_string(),
            )),
        }
    }
}
