//! rsfolio - 个人主页动态组件引擎
//! 核心为两个叶级纯逻辑组件：应答选择器（脚本化聊天）与多级数值解析器（计数回退），
//! 网络采集与本地存储以协作方实例显式注入，不做全局单例

// 导出全局错误类型
pub use self::error::{RsfolioError, RsfResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出聊天模块核心接口
pub use self::chat::{
    ChatRule, RuleTable, RuleTableLoader, ResponseSelector,
    BUILTIN_FALLBACK_RESPONSE, FALLBACK_KEY,
};

// 导出解析模块核心接口
pub use self::resolver::{
    ValueSource, TieredValueResolver, ResolvedValue, ValueOrigin,
    MetricCache, CacheEntry,
};

// 导出本地存储
pub use self::store::LocalStore;

// 导出外部数值源核心接口
pub use self::source::{
    build_http_client, CounterMode, CounterSource, ScholarCitationsSource,
    WeatherInfo, WeatherService,
};

// 导出组件模块核心接口
pub use self::widget::{
    ChatWidget, CitationWidget, Theme, ThemeManager, ViewCounterWidget,
    WeatherWidget, PLACEHOLDER,
};

// 导出工具模块核心接口
pub use self::utils::NumberFormatter;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod chat;
pub mod resolver;
pub mod store;
pub mod source;
pub mod widget;
pub mod utils;
