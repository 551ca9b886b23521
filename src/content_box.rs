//! # 内容包围盒模块
//!
//! ## 设计思路
//!
//! 计算图片中所有 `alpha > 0` 像素的最小轴对齐包围盒。
//! 这是整个扫描流程里唯一的核心算法，保持为纯函数，不依赖文件系统与日志。
//!
//! ## 实现思路
//!
//! - 单次遍历 `enumerate_pixels`，每个像素恰好访问一次。
//! - 用 `Option<(min_x, min_y, max_x, max_y)>` 累积边界，避免“无穷大哨兵”导致的负数尺寸。
//! - 全透明图片返回 `None`，由 `measure_content` 统一映射为 `0 x 0` 并打上透明标记。
//! - 对通道类型泛型（`Rgba<u8>`、`Rgba<u16>` 等），16 位图片按原始精度判断 alpha，
//!   不先降到 8 位，否则 alpha 低于 `257` 的像素会被舍入成完全透明。

use image::{ImageBuffer, Pixel, Primitive, Rgba};

/// 非透明内容的包围盒（像素坐标，原点为左上角）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ContentBox {
    pub fn size(&self) -> ContentSize {
        ContentSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// 规则判断使用的内容尺寸。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentSize {
    pub width: u32,
    pub height: u32,
}

impl ContentSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// 一次测量结果。
///
/// `transparent == true` 时 `size` 恒为 `0 x 0`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentMeasurement {
    pub size: ContentSize,
    pub content_box: Option<ContentBox>,
    pub transparent: bool,
}

/// 计算所有 `alpha > 0` 像素的最小包围盒。
///
/// 没有任何非透明像素时返回 `None`。
///
/// # 示例
/// ```rust,ignore
/// use image::{Rgba, RgbaImage};
/// use shiny_scanner::content_box::compute_content_box;
///
/// let mut img = RgbaImage::new(8, 8);
/// img.put_pixel(3, 5, Rgba([0, 0, 0, 255]));
/// let bbox = compute_content_box(&img).unwrap();
/// assert_eq!((bbox.x, bbox.y, bbox.width, bbox.height), (3, 5, 1, 1));
/// ```
pub fn compute_content_box<T: Primitive>(image: &ImageBuffer<Rgba<T>, Vec<T>>) -> Option<ContentBox>
where
    Rgba<T>: Pixel<Subpixel = T>,
{
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] <= T::DEFAULT_MIN_VALUE {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    bounds.map(|(min_x, min_y, max_x, max_y)| ContentBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// 测量内容尺寸；全透明图片记为 `0 x 0` 并标记 `transparent`。
pub fn measure_content<T: Primitive>(image: &ImageBuffer<Rgba<T>, Vec<T>>) -> ContentMeasurement
where
    Rgba<T>: Pixel<Subpixel = T>,
{
    match compute_content_box(image) {
        Some(content_box) => ContentMeasurement {
            size: content_box.size(),
            content_box: Some(content_box),
            transparent: false,
        },
        None => ContentMeasurement {
            size: ContentSize::default(),
            content_box: None,
            transparent: true,
        },
    }
}
