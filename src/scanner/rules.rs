//! 过小与尺寸不一致判定规则。

use crate::content_box::ContentSize;

/// 宽和高同时小于 `threshold` 时判定为过小。
pub fn is_too_small(size: ContentSize, threshold: u32) -> bool {
    size.width < threshold && size.height < threshold
}

/// 任一维度差值超过 `tolerance` 时判定为不一致。
pub fn is_size_mismatch(base: ContentSize, shiny: ContentSize, tolerance: u32) -> bool {
    base.width.abs_diff(shiny.width) > tolerance || base.height.abs_diff(shiny.height) > tolerance
}
