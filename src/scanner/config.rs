//! # 配置模块
//!
//! ## 设计思路
//!
//! 将原本写死在脚本里的路径与阈值集中到 `ScanConfig`，由调用方显式传入编排入口。
//! 配置来源优先级：默认值 < JSON 配置文件 < 命令行参数。
//!
//! ## 实现思路
//!
//! - `Default` 提供与历史脚本一致的默认值（`./images/arts`、`596`、`2`）。
//! - `load_from_path` 通过 `serde_json` 读取，缺省字段回落到默认值。
//! - `validate` 在运行前做范围校验，非法配置直接失败，不进入扫描阶段。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ImageSet, ScanError};

/// 内容尺寸阈值的默认值（像素）。
pub const DEFAULT_MIN_DIMENSION: u32 = 596;
/// 普通图与闪光图尺寸差异的默认容差（像素）。
pub const DEFAULT_MISMATCH_TOLERANCE: u32 = 2;

/// 扫描配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// 普通图集目录。
    pub base_dir: PathBuf,
    /// 闪光图集目录。
    pub shiny_dir: PathBuf,
    /// 报告输出路径。
    pub output_path: PathBuf,
    /// 宽和高同时小于该值时判定为“过小”。
    pub min_dimension: u32,
    /// 宽或高差值超过该值时判定为“尺寸不一致”。
    pub mismatch_tolerance: u32,
    /// 单个文件允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码前按文件头尺寸校验的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./images/arts"),
            shiny_dir: PathBuf::from("./images/shiny_arts"),
            output_path: PathBuf::from("output.txt"),
            min_dimension: DEFAULT_MIN_DIMENSION,
            mismatch_tolerance: DEFAULT_MISMATCH_TOLERANCE,
            max_file_size: 64 * 1024 * 1024,
            max_decoded_pixels: 100_000_000,
        }
    }
}

impl ScanConfig {
    /// 从 JSON 文件加载配置，缺省字段使用默认值。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use shiny_scanner::scanner::ScanConfig;
    ///
    /// let config = ScanConfig::load_from_path("scan.json".as_ref())?;
    /// # Ok::<(), shiny_scanner::scanner::ScanError>(())
    /// ```
    pub fn load_from_path(path: &Path) -> Result<Self, ScanError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScanError::Config(format!("无法读取配置文件 {}：{}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ScanError::Config(format!("解析配置文件 {} 失败：{}", path.display(), e))
        })
    }

    /// 运行前校验。
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.base_dir == self.shiny_dir {
            return Err(ScanError::Config(format!(
                "base_dir 与 shiny_dir 不能相同：{}",
                self.base_dir.display()
            )));
        }
        if self.min_dimension == 0 {
            return Err(ScanError::Config("min_dimension 必须大于 0".to_string()));
        }
        if self.max_file_size == 0 {
            return Err(ScanError::Config("max_file_size 必须大于 0".to_string()));
        }
        if self.max_decoded_pixels == 0 {
            return Err(ScanError::Config("max_decoded_pixels 必须大于 0".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ScanError::Config("output_path 不能为空".to_string()));
        }

        Ok(())
    }

    pub fn dir_for(&self, set: ImageSet) -> &Path {
        match set {
            ImageSet::Base => &self.base_dir,
            ImageSet::Shiny => &self.shiny_dir,
        }
    }

    /// 报告行中使用的集合前缀：目录最后一级名称，例如 `arts`。
    ///
    /// 目录没有最后一级名称（如 `/` 或 `..`）时回退为完整路径；
    /// 两个集合的最后一级名称相同（如 `v1/arts` 与 `v2/arts`）时，两侧都使用完整路径，
    /// 保证报告行能区分图片所属集合。
    pub fn set_label(&self, set: ImageSet) -> String {
        let base = Self::short_label(&self.base_dir);
        let shiny = Self::short_label(&self.shiny_dir);

        if base == shiny {
            return Self::full_label(self.dir_for(set));
        }

        match set {
            ImageSet::Base => base,
            ImageSet::Shiny => shiny,
        }
    }

    fn short_label(dir: &Path) -> String {
        match dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => Self::full_label(dir),
        }
    }

    /// 规范化后的完整路径（去掉末尾的 `/`）。
    fn full_label(dir: &Path) -> String {
        dir.components().collect::<PathBuf>().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("shiny-scanner-config-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn defaults_match_legacy_script() {
        let config = ScanConfig::default();

        assert_eq!(config.base_dir, PathBuf::from("./images/arts"));
        assert_eq!(config.shiny_dir, PathBuf::from("./images/shiny_arts"));
        assert_eq!(config.output_path, PathBuf::from("output.txt"));
        assert_eq!(config.min_dimension, 596);
        assert_eq!(config.mismatch_tolerance, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let dir = unique_temp_dir();
        let path = dir.join("scan.json");
        std::fs::write(&path, r#"{ "min_dimension": 128, "shiny_dir": "/data/shiny" }"#)
            .expect("write config");

        let config = ScanConfig::load_from_path(&path).expect("load config");

        assert_eq!(config.min_dimension, 128);
        assert_eq!(config.shiny_dir, PathBuf::from("/data/shiny"));
        assert_eq!(config.base_dir, ScanConfig::default().base_dir);
        assert_eq!(config.mismatch_tolerance, DEFAULT_MISMATCH_TOLERANCE);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let dir = unique_temp_dir();
        let path = dir.join("scan.json");
        std::fs::write(&path, "not-json").expect("write invalid config");

        let result = ScanConfig::load_from_path(&path);

        assert!(matches!(result, Err(ScanError::Config(_))));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let dir = unique_temp_dir();

        let result = ScanConfig::load_from_path(&dir.join("absent.json"));

        assert!(matches!(result, Err(ScanError::Config(_))));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn validate_rejects_same_dirs_and_zero_limits() {
        let mut config = ScanConfig::default();
        config.shiny_dir = config.base_dir.clone();
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));

        let mut config = ScanConfig::default();
        config.min_dimension = 0;
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));

        let mut config = ScanConfig::default();
        config.max_decoded_pixels = 0;
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));
    }

    #[test]
    fn zero_tolerance_is_allowed() {
        let mut config = ScanConfig::default();
        config.mismatch_tolerance = 0;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn set_label_uses_last_path_component() {
        let config = ScanConfig::default();

        assert_eq!(config.set_label(ImageSet::Base), "arts");
        assert_eq!(config.set_label(ImageSet::Shiny), "shiny_arts");

        let mut config = ScanConfig::default();
        config.base_dir = PathBuf::from("/");
        assert_eq!(config.set_label(ImageSet::Base), "/");
    }

    #[test]
    fn set_label_falls_back_to_full_path_when_last_components_collide() {
        let mut config = ScanConfig::default();
        config.base_dir = PathBuf::from("data/v1/arts/");
        config.shiny_dir = PathBuf::from("data/v2/arts");

        let base = config.set_label(ImageSet::Base);
        let shiny = config.set_label(ImageSet::Shiny);

        assert_eq!(base, PathBuf::from("data/v1/arts").display().to_string());
        assert_eq!(shiny, PathBuf::from("data/v2/arts").display().to_string());
        assert_ne!(base, shiny);
    }
}
