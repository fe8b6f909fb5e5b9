//! 主题偏好管理
//! 主题选择持久化在本地存储的 "theme" 键下，未知或缺失值回落为深色主题

use crate::store::LocalStore;

/// 主题偏好的存储键名
pub const THEME_KEY: &str = "theme";

/// 页面主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl Theme {
    /// 主题标识（存储与页面data-theme属性共用）
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// 展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::HighContrast => "High Contrast",
        }
    }

    /// 从标识解析主题
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "high-contrast" => Some(Theme::HighContrast),
            _ => None,
        }
    }
}

/// 主题偏好管理器
pub struct ThemeManager;

impl ThemeManager {
    /// 读取已保存主题（缺失或未知值回落为深色）
    pub fn load(store: &LocalStore) -> Theme {
        store
            .get(THEME_KEY)
            .and_then(Theme::from_id)
            .unwrap_or_default()
    }

    /// 保存主题偏好（仅更新内存表，落盘由调用方决定）
    pub fn set(store: &mut LocalStore, theme: Theme) {
        store.set(THEME_KEY, theme.id());
    }
}
