//! # 闪光图尺寸扫描工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   clap 参数 + JSON 配置 → ScanConfig             │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓
//! ┌───────┴──────────────────────────────────────────────────┐
//! │  ┌─ error ────────── AppError (致命错误)                  │
//! │  │                                                       │
//! │  ├─ scanner ──────── 枚举·配对·解码·判定                  │
//! │  │   ├─ loader        目录 / 文件读取 / 签名校验          │
//! │  │   ├─ pipeline      解码 + 像素上限                     │
//! │  │   └─ rules         过小 / 尺寸不一致                   │
//! │  │                                                       │
//! │  ├─ content_box       非透明像素包围盒                    │
//! │  └─ report            报告缓冲 + 写盘 + 汇总              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，命令行入口的返回类型 |
//! | [`content_box`] | 计算 `alpha > 0` 像素的最小包围盒 |
//! | [`scanner`] | 扫描配置、目录配对、图片加载解码、规则判定 |
//! | [`report`] | 报告三段式渲染、写入文件、运行汇总 |

pub mod error;
pub mod content_box;
pub mod report;
pub mod scanner;
