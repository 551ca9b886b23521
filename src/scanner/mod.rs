//! # 图集扫描模块（scanner）
//!
//! ## 设计思路
//!
//! 该模块将“目录枚举 → 配对 → 加载校验 → 解码测量 → 规则判定 → 报告”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `config`：扫描配置、JSON 加载与校验
//! - `handler`：编排整条处理流水线
//! - `loader`：目录枚举、文件名配对、原始字节加载与签名校验
//! - `pipeline`：解码、像素限制、内容尺寸测量
//! - `rules`：过小 / 尺寸不一致判定
//! - `error/source`：错误与中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs（命令行参数 → ScanConfig）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（枚举 + 配对 + 读取）
//!    ├─ pipeline.rs（解码 + 像素限制 + 测量）
//!    └─ rules.rs（判定）
//!    ↓
//! report.rs（渲染 + 写盘）
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
pub mod rules;
mod source;

pub use config::{DEFAULT_MIN_DIMENSION, DEFAULT_MISMATCH_TOLERANCE, ScanConfig};
pub use error::ScanError;
pub use handler::{ScanOutcome, Scanner};
pub use source::ImageSet;
