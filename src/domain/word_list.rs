//! 単語リストの整列・マージとリポジトリ抽象 – ドメイン層

use crate::error::Result;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// 1 回のマージ結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeReport {
    pub supplied: usize, // 呼び出し側が渡した語数（重複込み）
    pub added: usize,    // 新規に増えた語数
    pub total: usize,    // マージ後の総数
}

/// 小文字化した形で比較し、等しければ元の文字列のバイト順で決める。
pub fn compare_words(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// 既存の語と新しい語を完全一致で重複排除し、大文字小文字を無視した順に並べます。
///
/// ファイル I/O は行いません。
pub fn merge<I, S>(existing: I, new_words: &[S]) -> (Vec<String>, MergeReport)
where
    I: IntoIterator<Item = String>,
    S: AsRef<str>,
{
    let mut set: BTreeSet<String> = existing.into_iter().collect();
    let before = set.len();
    for w in new_words {
        set.insert(w.as_ref().to_owned());
    }

    let mut words: Vec<String> = set.into_iter().collect();
    words.sort_by(|a, b| compare_words(a, b));

    let report = MergeReport {
        supplied: new_words.len(),
        added: words.len() - before,
        total: words.len(),
    };
    (words, report)
}

/// ファイルに書き出す内容（2 スペースインデント、非 ASCII はそのまま）
pub fn render(words: &[String]) -> Result<String> {
    Ok(serde_json::to_string_pretty(words)?)
}

/// ファイル内容を文字列配列として読む。配列以外・文字列以外の要素はエラー。
pub fn parse(content: &str) -> serde_json::Result<Vec<String>> {
    serde_json::from_str(content)
}

/// 単語リスト永続化 I/F
pub trait WordListRepository {
    fn load(&self) -> Result<Vec<String>>;
    fn save(&self, words: &[String]) -> Result<()>;

    /// 読み込み → マージ → 保存
    fn merge_words<S: AsRef<str>>(&self, new_words: &[S]) -> Result<MergeReport>
    where
        Self: Sized,
    {
        let existing = self.load()?;
        let (words, report) = merge(existing, new_words);
        log::debug!(
            "merged: supplied={} added={} total={}",
            report.supplied,
            report.added,
            report.total
        );
        self.save(&words)?;
        Ok(report)
    }
}
