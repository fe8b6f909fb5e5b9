//! 天气采集服务
//! 调用OpenWeatherMap当前天气接口，输出温度（华氏，取整）与天况描述

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::{GlobalConfig, WEATHER_API_KEY_PLACEHOLDER};
use crate::error::{RsfResult, RsfolioError};

/// OpenWeatherMap当前天气接口
const WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// 天气信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherInfo {
    /// 温度（华氏，四舍五入取整）
    pub temp: i64,
    /// 天况描述（Sunny/Clouds/Rain等）
    pub description: String,
}

impl WeatherInfo {
    /// 未配置API密钥时的占位天气
    pub fn placeholder() -> Self {
        Self {
            temp: 72,
            description: "Sunny".to_string(),
        }
    }
}

/// 天气采集服务
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Client,
    api_key: String,
    lat: f64,
    lon: f64,
}

/// OpenWeatherMap响应体（仅解码用到的字段）
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    main: String,
}

impl WeatherService {
    /// 创建天气服务
    pub fn new(client: Client, config: &GlobalConfig) -> Self {
        Self {
            client,
            api_key: config.weather_api_key.clone(),
            lat: config.weather_lat,
            lon: config.weather_lon,
        }
    }

    /// 是否配置了真实API密钥（占位密钥不发请求，直接展示占位天气）
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != WEATHER_API_KEY_PLACEHOLDER
    }

    /// 拉取当前天气
    pub async fn fetch(&self) -> RsfResult<WeatherInfo> {
        let url = Url::parse_with_params(
            WEATHER_API_URL,
            &[
                ("lat", self.lat.to_string()),
                ("lon", self.lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
            ],
        )?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(RsfolioError::SourceFailure(format!(
                "天气接口返回状态码 {}",
                response.status()
            )));
        }

        let body: WeatherResponse = response.json().await?;
        let condition = body.weather.first().ok_or_else(|| {
            RsfolioError::SourceFailure("天气响应缺少weather数组".to_string())
        })?;

        Ok(WeatherInfo {
            temp: body.main.temp.round() as i64,
            description: condition.main.clone(),
        })
    }
}
