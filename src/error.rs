//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，只承载会终止整次运行的错误：
//! 配置非法、输入目录不可读、报告无法写入。
//! 单个图片的加载/解码失败不会走到这里，而是记录在报告中继续处理。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ScanError` 与 `std::io::Error` 提供 `From` 转换，调用侧直接 `?`。

use crate::scanner::ScanError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 扫描阶段的致命错误（配置 / 目录）
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 报告输出失败
    #[error("报告输出失败: {0}")]
    Report(String),
}
