//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 未配置天气API密钥时的占位值（此时展示占位天气而非请求失败）
pub const WEATHER_API_KEY_PLACEHOLDER: &str = "YOUR_OPENWEATHERMAP_API_KEY";

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 应答规则表路径
    pub rule_table_path: PathBuf,
    // 本地键值存储路径（浏览器localStorage的本地文件等价物）
    pub store_path: PathBuf,
    // OpenWeatherMap API密钥
    pub weather_api_key: String,
    // 天气坐标（UC Merced）
    pub weather_lat: f64,
    pub weather_lon: f64,
    // CountAPI服务地址与命名空间
    pub counter_api_base: String,
    pub counter_namespace: String,
    pub counter_key: String,
    // 学术主页URL与抓取代理前缀
    pub scholar_profile_url: String,
    pub scholar_proxy_url: String,
    // 单个数值源超时（单位：秒）
    pub source_timeout: u64,
    // 引用数缓存新鲜度窗口（单位：小时）
    pub citation_freshness_hours: i64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            rule_table_path: PathBuf::from("chat_responses.json"),
            store_path: PathBuf::from("rsfolio_store.json"),
            weather_api_key: WEATHER_API_KEY_PLACEHOLDER.to_string(),
            weather_lat: 37.3636,
            weather_lon: -120.4252,
            counter_api_base: "https://api.countapi.xyz".to_string(),
            counter_namespace: "akuna23matata-github-io".to_string(),
            counter_key: "visits".to_string(),
            scholar_profile_url: "https://scholar.google.com/citations?user=akuna23matata".to_string(),
            scholar_proxy_url: "https://api.allorigins.win/raw?url=".to_string(),
            source_timeout: 5,
            citation_freshness_hours: 24,
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn rule_table_path(mut self, path: PathBuf) -> Self {
        self.config.rule_table_path = path;
        self
    }

    pub fn store_path(mut self, path: PathBuf) -> Self {
        self.config.store_path = path;
        self
    }

    pub fn weather_api_key(mut self, key: String) -> Self {
        self.config.weather_api_key = key;
        self
    }

    pub fn weather_coords(mut self, lat: f64, lon: f64) -> Self {
        self.config.weather_lat = lat;
        self.config.weather_lon = lon;
        self
    }

    pub fn counter_namespace(mut self, namespace: String) -> Self {
        self.config.counter_namespace = namespace;
        self
    }

    pub fn counter_key(mut self, key: String) -> Self {
        self.config.counter_key = key;
        self
    }

    pub fn scholar_profile_url(mut self, url: String) -> Self {
        self.config.scholar_profile_url = url;
        self
    }

    pub fn source_timeout(mut self, timeout: u64) -> Self {
        self.config.source_timeout = timeout;
        self
    }

    pub fn citation_freshness_hours(mut self, hours: i64) -> Self {
        self.config.citation_freshness_hours = hours;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
