//! 数字展示格式化工具模块
//! 负责将计数值压缩为页面展示形态（1234 -> "1.2k"，1234567 -> "1.2m"）

/// 数字格式化工具类
pub struct NumberFormatter;

impl NumberFormatter {
    /// 格式化计数值
    ///
    /// 规则：
    /// - 百万及以上：除以1e6，保留1位小数，追加"m"
    /// - 千及以上：除以1e3，保留1位小数，追加"k"
    /// - 千以下：原样十进制输出
    pub fn format(num: u64) -> String {
        if num >= 1_000_000 {
            format!("{:.1}m", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}k", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_under_thousand_unchanged() {
        // 测试场景：千以下原样输出
        assert_eq!(NumberFormatter::format(0), "0");
        assert_eq!(NumberFormatter::format(7), "7");
        assert_eq!(NumberFormatter::format(999), "999");
    }

    #[test]
    fn test_format_thousands() {
        // 测试场景：千位压缩为k
        assert_eq!(NumberFormatter::format(1_000), "1.0k");
        assert_eq!(NumberFormatter::format(1_234), "1.2k");
        assert_eq!(NumberFormatter::format(999_999), "1000.0k");
    }

    #[test]
    fn test_format_millions() {
        // 测试场景：百万位压缩为m
        assert_eq!(NumberFormatter::format(1_000_000), "1.0m");
        assert_eq!(NumberFormatter::format(1_234_567), "1.2m");
    }
}
