//! # 目录枚举与加载模块
//!
//! ## 设计思路
//!
//! 负责“目录 → 文件名 → 原始字节”这一段，并在尽可能早的阶段执行输入校验，
//! 让损坏或伪装的文件在解码前就失败。
//!
//! ## 实现思路
//!
//! - 目录：只列普通文件，扩展名 `.png` 不区分大小写，结果按文件名排序保证输出稳定。
//! - 配对：以普通图集顺序为准，保留在闪光图集中同名（区分大小写）的文件。
//! - 文件：metadata 体积限制 + 读取 + `infer` 签名校验。

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::source::RawImageData;
use super::{ScanConfig, ScanError, Scanner};

impl Scanner {
    /// 列出目录下所有 `.png` 文件名（不区分扩展名大小写），按名称排序。
    ///
    /// 目录不存在或不可读时返回 `ScanError::FileSystem`，由上层视为致命错误。
    pub fn list_png_files(dir: &Path) -> Result<Vec<String>, ScanError> {
        log::info!("📁 开始枚举目录 - 路径: {}", dir.display());

        let entries = fs::read_dir(dir).map_err(|e| {
            ScanError::FileSystem(format!("无法读取目录 {}：{}", dir.display(), e))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ScanError::FileSystem(format!("枚举目录 {} 失败：{}", dir.display(), e))
            })?;

            if !entry.path().is_file() {
                continue;
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    log::warn!("⚠️ 跳过非 UTF-8 文件名：{}", raw.to_string_lossy());
                    continue;
                }
            };

            if Self::has_png_extension(&name) {
                files.push(name);
            }
        }

        files.sort();
        log::debug!("目录 {} 中共 {} 个 PNG 文件", dir.display(), files.len());

        Ok(files)
    }

    /// 取两个集合中同名的文件，保持 `base` 的顺序。
    pub fn matching_file_names(base: &[String], shiny: &[String]) -> Vec<String> {
        let shiny: HashSet<&str> = shiny.iter().map(String::as_str).collect();
        base.iter()
            .filter(|name| shiny.contains(name.as_str()))
            .cloned()
            .collect()
    }

    fn has_png_extension(name: &str) -> bool {
        name.to_lowercase().ends_with(".png")
    }

    /// 从本地路径读取图片原始字节。
    pub(super) fn load_from_file(
        &self,
        path: &Path,
        config: &ScanConfig,
    ) -> Result<RawImageData, ScanError> {
        log::debug!("📄 读取图片 - 路径: {}", path.display());

        let metadata = fs::metadata(path).map_err(|e| {
            ScanError::FileSystem(format!("无法读取文件信息 {}：{}", path.display(), e))
        })?;

        if metadata.len() > config.max_file_size {
            return Err(ScanError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = fs::read(path)
            .map_err(|e| ScanError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            path: path.to_path_buf(),
        })
    }

    fn validate_image_signature(bytes: &[u8]) -> Result<(), ScanError> {
        if bytes.is_empty() {
            return Err(ScanError::InvalidFormat("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| ScanError::InvalidFormat("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(ScanError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("shiny-scanner-loader-{tag}-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn list_png_files_filters_extension_case_insensitively() {
        let dir = unique_temp_dir("list");
        for name in ["b.png", "A.PNG", "c.jpg", "notes.txt", "d.Png"] {
            std::fs::write(dir.join(name), b"x").expect("write file");
        }
        std::fs::create_dir_all(dir.join("nested.png")).expect("create nested dir");

        let files = Scanner::list_png_files(&dir).expect("list dir");

        assert_eq!(files, names(&["A.PNG", "b.png", "d.Png"]));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn list_png_files_fails_for_missing_dir() {
        let dir = unique_temp_dir("missing");
        let result = Scanner::list_png_files(&dir.join("nope"));

        assert!(matches!(result, Err(ScanError::FileSystem(_))));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let base = names(&["001.png", "002.png", "Three.png", "004.png"]);
        let shiny = names(&["004.png", "three.png", "001.png"]);

        let matched = Scanner::matching_file_names(&base, &shiny);

        assert_eq!(matched, names(&["001.png", "004.png"]));
    }

    #[test]
    fn matching_with_empty_side_is_empty() {
        let base = names(&["001.png"]);

        assert!(Scanner::matching_file_names(&base, &[]).is_empty());
        assert!(Scanner::matching_file_names(&[], &base).is_empty());
    }

    #[test]
    fn signature_check_rejects_text_payload() {
        let result = Scanner::validate_image_signature(b"hello, definitely not a png");

        assert!(matches!(result, Err(ScanError::InvalidFormat(_))));
    }

    #[test]
    fn signature_check_rejects_empty_payload() {
        assert!(matches!(
            Scanner::validate_image_signature(&[]),
            Err(ScanError::InvalidFormat(_))
        ));
    }

    #[test]
    fn signature_check_accepts_png_header() {
        let png_signature = [137_u8, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13];

        assert!(Scanner::validate_image_signature(&png_signature).is_ok());
    }

    #[test]
    fn load_from_file_rejects_oversized_file() {
        let dir = unique_temp_dir("size");
        let path = dir.join("big.png");
        std::fs::write(&path, vec![0u8; 64]).expect("write file");

        let mut config = ScanConfig::default();
        config.max_file_size = 16;
        let scanner = Scanner::new(config.clone());

        let result = scanner.load_from_file(&path, &config);

        assert!(matches!(result, Err(ScanError::ResourceLimit(_))));
        let _ = std::fs::remove_dir_all(dir);
    }
}
