//! JSON ファイル版 WordListRepository 実装
use crate::domain::word_list::{WordListRepository, parse, render};
use crate::error::{Result, WordListError};
use crate::utils::profiling;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct JsonFileWordListRepo {
    path: PathBuf,
}

impl JsonFileWordListRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 実際に書き換えるファイル。シンボリックリンクならリンク先。
    fn target_path(&self) -> PathBuf {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
            }
            _ => self.path.clone(),
        }
    }
}

impl WordListRepository for JsonFileWordListRepo {
    fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            log::debug!("{} does not exist, starting empty", self.path.display());
            return Ok(vec![]);
        }
        let timer = profiling::Timer::start("word_list.load");
        let content = fs::read_to_string(&self.path).map_err(|source| WordListError::Read {
            path: self.path.clone(),
            source,
        })?;
        let words = parse(&content).map_err(|source| WordListError::MalformedInput {
            path: self.path.clone(),
            source,
        })?;
        timer.log_with(&format!("count={}", words.len()));
        log::debug!("loaded {} word(s) from {}", words.len(), self.path.display());
        Ok(words)
    }

    fn save(&self, words: &[String]) -> Result<()> {
        let timer = profiling::Timer::start("word_list.save");
        let content = render(words)?;
        let target = self.target_path();
        let write_err = |source: io::Error| WordListError::Write {
            path: self.path.clone(),
            source,
        };

        // 同じディレクトリに一時ファイルを作って rename で置き換える
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        if let Ok(meta) = fs::metadata(&target) {
            fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?;
        }
        tmp.persist(&target).map_err(|e| write_err(e.error))?;
        timer.log_with(&format!("count={}", words.len()));
        log::debug!("saved {} word(s) to {}", words.len(), self.path.display());
        Ok(())
    }
}
