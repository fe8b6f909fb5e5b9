//! 页面组件模块：在核心逻辑之上编排各展示组件的解析与渲染
pub mod chat;
pub mod view_counter;
pub mod citations;
pub mod weather;
pub mod theme;

/// 数值不可用时的通用占位符
pub const PLACEHOLDER: &str = "—";

// 导出核心接口
pub use self::chat::ChatWidget;
pub use self::view_counter::ViewCounterWidget;
pub use self::citations::CitationWidget;
pub use self::weather::WeatherWidget;
pub use self::theme::{Theme, ThemeManager};
