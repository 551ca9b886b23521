//! # 解码与测量流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGBA → 内容尺寸”的过程集中管理。
//! 优先读取文件头尺寸做像素上限检查，再进行完整解码，避免异常输入占用大量内存。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码
//! 4. 按解码后的通道位深转换为 RGBA8 或 RGBA16，再调用 `content_box::measure_content`
//!    （16 位图片不降到 8 位，保留低 alpha 像素）

use std::io::Cursor;

use image::{DynamicImage, ImageReader};

use super::source::{MeasuredImage, RawImageData};
use super::{ScanConfig, ScanError, Scanner};
use crate::content_box::{ContentMeasurement, measure_content};

impl Scanner {
    /// 解码原始字节并测量非透明内容尺寸。
    pub(super) fn decode_and_measure(
        &self,
        raw: RawImageData,
        config: &ScanConfig,
    ) -> Result<MeasuredImage, ScanError> {
        let decoded = Self::decode_image(&raw.bytes, config)?;
        let content = Self::measure_decoded(&decoded);

        match content.content_box {
            Some(content_box) => log::debug!(
                "✅ 测量完成 - 路径: {} 图片尺寸: {}x{} 内容区域: ({}, {}) {}x{}",
                raw.path.display(),
                decoded.width(),
                decoded.height(),
                content_box.x,
                content_box.y,
                content_box.width,
                content_box.height
            ),
            None => {
                log::warn!("⚠️ 图片完全透明，内容尺寸记为 0 x 0 - 路径: {}", raw.path.display())
            }
        }

        Ok(MeasuredImage {
            image_width: decoded.width(),
            image_height: decoded.height(),
            content,
        })
    }

    /// 将字节解码为图像，保留原始通道位深。
    pub(crate) fn decode_image(bytes: &[u8], config: &ScanConfig) -> Result<DynamicImage, ScanError> {
        let (header_width, header_height) = Self::inspect_dimensions_from_memory(bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(bytes)
            .map_err(|e| ScanError::Decode(format!("图片解码失败：{}", e)))?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(ScanError::Decode("图片宽或高为 0".to_string()));
        }

        Ok(decoded)
    }

    /// 按通道位深测量：8 位走 RGBA8，16 位及以上走 RGBA16。
    pub(crate) fn measure_decoded(decoded: &DynamicImage) -> ContentMeasurement {
        match decoded {
            DynamicImage::ImageRgba8(rgba) => measure_content(rgba),
            DynamicImage::ImageRgba16(rgba) => measure_content(rgba),
            other if other.color().bytes_per_pixel() > other.color().channel_count() => {
                measure_content(&other.to_rgba16())
            }
            other => measure_content(&other.to_rgba8()),
        }
    }

    /// 仅通过内存中的图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), ScanError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| ScanError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| ScanError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(config: &ScanConfig, width: u32, height: u32) -> Result<(), ScanError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ScanError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(ScanError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
