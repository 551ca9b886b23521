//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `Scanner` 只负责流程编排，不直接处理命令行。
//! 处理链路固定为：
//! 1. 校验配置
//! 2. 枚举两个目录并按文件名配对
//! 3. 逐对加载、解码、测量内容尺寸
//! 4. 应用“过小”与“尺寸不一致”规则，写入报告缓冲区
//! 5. 渲染报告并写盘
//!
//! ## 实现思路
//!
//! - 单个文件失败记录为 `FileFailure` 后继续，不丢弃其余文件的结果。
//! - 目录不可读、配置非法、报告不可写属于致命错误，向上返回。
//! - 记录 `list/measure/write/total` 阶段耗时，便于诊断大图集的耗时分布。

use std::time::Instant;

use super::rules::{is_size_mismatch, is_too_small};
use super::source::MeasuredImage;
use super::{ImageSet, ScanConfig, ScanError};
use crate::error::AppError;
use crate::report::{AnomalyReport, FileFailure, ScanSummary};

/// 扫描器。
pub struct Scanner {
    pub(super) config: ScanConfig,
}

/// 扫描结果：报告缓冲区与汇总计数。
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub report: AnomalyReport,
    pub summary: ScanSummary,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// 完整运行：扫描并把报告写入 `output_path`。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use shiny_scanner::scanner::{ScanConfig, Scanner};
    ///
    /// let summary = Scanner::new(ScanConfig::default()).run()?;
    /// println!("{summary}");
    /// # Ok::<(), shiny_scanner::error::AppError>(())
    /// ```
    pub fn run(&self) -> Result<ScanSummary, AppError> {
        let total_start = Instant::now();

        let outcome = self.scan()?;

        let write_start = Instant::now();
        outcome.report.write_to(&self.config.output_path)?;
        let write_elapsed = write_start.elapsed();

        log::info!(
            "⏱️ 扫描完成 - 写入: {}ms 总计: {}ms",
            write_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(outcome.summary)
    }

    /// 只扫描、不写盘。
    pub fn scan(&self) -> Result<ScanOutcome, ScanError> {
        let config = &self.config;
        config.validate()?;

        let list_start = Instant::now();
        let base_files = Self::list_png_files(&config.base_dir)?;
        let shiny_files = Self::list_png_files(&config.shiny_dir)?;
        let matched = Self::matching_file_names(&base_files, &shiny_files);
        let list_elapsed = list_start.elapsed();

        log::info!(
            "📊 配对完成 - 普通图: {} 闪光图: {} 同名: {}（耗时 {}ms）",
            base_files.len(),
            shiny_files.len(),
            matched.len(),
            list_elapsed.as_millis()
        );

        let base_label = config.set_label(ImageSet::Base);
        let shiny_label = config.set_label(ImageSet::Shiny);

        let mut outcome = ScanOutcome::default();
        outcome.summary.matched_pairs = matched.len();

        let measure_start = Instant::now();
        for file_name in &matched {
            let base_path = format!("{}/{}", base_label, file_name);
            let shiny_path = format!("{}/{}", shiny_label, file_name);

            let base = self.measure_file(ImageSet::Base, file_name);
            let shiny = self.measure_file(ImageSet::Shiny, file_name);

            let base = Self::settle(&mut outcome, &base_path, ImageSet::Base, base);
            let shiny = Self::settle(&mut outcome, &shiny_path, ImageSet::Shiny, shiny);

            if let (Some(base), Some(shiny)) = (&base, &shiny) {
                log::debug!(
                    "{} - 普通图 {}x{}（内容 {}x{}） 闪光图 {}x{}（内容 {}x{}）",
                    file_name,
                    base.image_width,
                    base.image_height,
                    base.content.size.width,
                    base.content.size.height,
                    shiny.image_width,
                    shiny.image_height,
                    shiny.content.size.width,
                    shiny.content.size.height
                );
            }

            if let Some(base) = &base {
                if is_too_small(base.content.size, config.min_dimension) {
                    outcome.report.push_too_small(&base_path, base.content.size);
                    outcome.summary.too_small += 1;
                }
            }
            if let Some(shiny) = &shiny {
                if is_too_small(shiny.content.size, config.min_dimension) {
                    outcome.report.push_too_small(&shiny_path, shiny.content.size);
                    outcome.summary.too_small += 1;
                }
            }

            if let (Some(base), Some(shiny)) = (base, shiny) {
                outcome.summary.measured_pairs += 1;
                if is_size_mismatch(base.content.size, shiny.content.size, config.mismatch_tolerance) {
                    outcome
                        .report
                        .push_size_mismatch(file_name, base.content.size, shiny.content.size);
                    outcome.summary.size_mismatches += 1;
                }
            }
        }

        log::info!(
            "✅ 测量完成 - {} 对（耗时 {}ms）",
            matched.len(),
            measure_start.elapsed().as_millis()
        );

        if outcome.summary.failed_files > 0 {
            log::warn!("⚠️ {} 个文件处理失败，详见报告末尾", outcome.summary.failed_files);
        }

        Ok(outcome)
    }

    /// 加载、解码并测量单个文件。
    fn measure_file(&self, set: ImageSet, file_name: &str) -> Result<MeasuredImage, ScanError> {
        let path = self.config.dir_for(set).join(file_name);
        let raw = self.load_from_file(&path, &self.config)?;
        self.decode_and_measure(raw, &self.config)
    }

    /// 把单个文件的结果计入汇总；失败时记录到报告并返回 `None`。
    fn settle(
        outcome: &mut ScanOutcome,
        relative_path: &str,
        set: ImageSet,
        result: Result<MeasuredImage, ScanError>,
    ) -> Option<MeasuredImage> {
        match result {
            Ok(measured) => {
                if measured.content.transparent {
                    outcome.summary.transparent_images += 1;
                }
                Some(measured)
            }
            Err(err) => {
                log::warn!("❌ {} 图片处理失败 - {}: {}", set.as_str(), relative_path, err);
                outcome.summary.failed_files += 1;
                outcome.report.push_failure(FileFailure {
                    path: relative_path.to_string(),
                    set,
                    kind: err.kind(),
                    reason: err.to_string(),
                });
                None
            }
        }
    }
}
