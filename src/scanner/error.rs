//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载扫描链路中的所有错误来源。
//! 单个文件的错误会被记录为 `FileFailure` 后继续处理；
//! 只有目录不可读、配置非法这类错误会上抛为 `AppError` 终止运行。

/// 扫描统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置错误：{0}")]
    Config(String),
}

impl ScanError {
    /// 报告中使用的稳定英文类别标识；详细原因文本不保证语言与格式。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileSystem(_) => "file-system",
            Self::InvalidFormat(_) => "invalid-format",
            Self::Decode(_) => "decode",
            Self::ResourceLimit(_) => "resource-limit",
            Self::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_stable_ascii_per_variant() {
        let cases = [
            (ScanError::FileSystem("x".into()), "file-system"),
            (ScanError::InvalidFormat("x".into()), "invalid-format"),
            (ScanError::Decode("x".into()), "decode"),
            (ScanError::ResourceLimit("x".into()), "resource-limit"),
            (ScanError::Config("x".into()), "config"),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
            assert!(err.kind().is_ascii());
        }
    }
}
