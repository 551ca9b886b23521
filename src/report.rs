//! # 报告模块
//!
//! ## 设计思路
//!
//! 报告由三段组成：过小图片、尺寸不一致、（可选）处理失败。
//! 每段之后都跟一个空行，无失败时输出格式与历史脚本完全一致。
//!
//! ## 实现思路
//!
//! - 扫描期间只向缓冲区追加行，运行结束后一次性渲染并写盘。
//! - `ScanSummary` 汇总计数，供命令行结束时打印。

use std::fmt;
use std::fs;
use std::path::Path;

use crate::content_box::ContentSize;
use crate::error::AppError;
use crate::scanner::ImageSet;

/// 单个文件的处理失败记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// 报告中展示的相对路径，例如 `arts/001.png`。
    pub path: String,
    pub set: ImageSet,
    /// 稳定的英文错误类别，见 `ScanError::kind`。
    pub kind: &'static str,
    /// 自由格式的错误详情，不属于报告的稳定格式。
    pub reason: String,
}

/// 异常报告缓冲区。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnomalyReport {
    pub too_small: Vec<String>,
    pub size_mismatch: Vec<String>,
    pub failures: Vec<FileFailure>,
}

impl AnomalyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_too_small(&mut self, relative_path: &str, size: ContentSize) {
        self.too_small.push(format!(
            "{} too small ({} x {})",
            relative_path, size.width, size.height
        ));
    }

    pub fn push_size_mismatch(&mut self, file_name: &str, base: ContentSize, shiny: ContentSize) {
        self.size_mismatch.push(format!(
            "{} image size mismatch (non-shiny: {} x {}, shiny: {} x {})",
            file_name, base.width, base.height, shiny.width, shiny.height
        ));
    }

    pub fn push_failure(&mut self, failure: FileFailure) {
        self.failures.push(failure);
    }

    pub fn is_clean(&self) -> bool {
        self.too_small.is_empty() && self.size_mismatch.is_empty() && self.failures.is_empty()
    }

    /// 渲染为最终文本。
    pub fn render(&self) -> String {
        let mut out = String::new();

        for line in &self.too_small {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');

        for line in &self.size_mismatch {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');

        if !self.failures.is_empty() {
            for failure in &self.failures {
                out.push_str(&format!(
                    "{} failed ({}): {}\n",
                    failure.path, failure.kind, failure.reason
                ));
            }
            out.push('\n');
        }

        out
    }

    /// 渲染并写入报告文件。写入失败属于致命错误。
    pub fn write_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Report(format!("创建报告目录 {} 失败: {}", parent.display(), e))
                })?;
            }
        }

        fs::write(path, self.render())?;
        log::info!("📝 报告已写入 - 路径: {}", path.display());
        Ok(())
    }
}

/// 一次扫描的汇总计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// 两个目录中同名的文件对数量。
    pub matched_pairs: usize,
    /// 两侧均成功测量的文件对数量。
    pub measured_pairs: usize,
    pub too_small: usize,
    pub size_mismatches: usize,
    pub transparent_images: usize,
    pub failed_files: usize,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matched pairs, {} measured, {} too small, {} size mismatches, {} fully transparent, {} failed",
            self.matched_pairs,
            self.measured_pairs,
            self.too_small,
            self.size_mismatches,
            self.transparent_images,
            self.failed_files
        )
    }
}
