//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“图片所属集合”和“流水线中间结果”解耦：
//! - `ImageSet` 表示文件来自普通图集还是闪光图集
//! - `RawImageData` 表示已读取但未解码的字节
//! - `MeasuredImage` 表示已解码并完成内容测量的结果

use std::path::PathBuf;

use crate::content_box::ContentMeasurement;

/// 图片所属集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSet {
    /// 普通（non-shiny）图集。
    Base,
    /// 闪光（shiny）图集。
    Shiny,
}

impl ImageSet {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Shiny => "shiny",
        }
    }
}

/// 加载阶段输出：原始字节与文件路径。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 文件路径（用于日志与诊断）。
    pub(crate) path: PathBuf,
}

/// 测量阶段输出。
#[derive(Debug, Clone, Copy)]
pub(crate) struct MeasuredImage {
    /// 解码后的整图宽高。
    pub(crate) image_width: u32,
    pub(crate) image_height: u32,
    pub(crate) content: ContentMeasurement,
}
