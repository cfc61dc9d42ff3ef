use crate::error::{Result, WordListError};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// `words_add <json_path> <word>...`
///
/// ヘルプ・バージョンフラグは持たない。パス以降の引数はすべて単語として扱う。
#[derive(Parser, Debug)]
#[command(
    name = "words_add",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// 単語リスト JSON のパス（無ければ作成）
    pub json_path: PathBuf,

    /// 追加する単語
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(
    name = "words_normalize",
    author,
    version,
    about = "Rewrite a JSON word list in deduplicated, sorted form"
)]
pub struct NormalizeCli {
    /// 整形する単語リスト JSON のパス
    pub json_path: PathBuf,
}

/// 引数を解釈する。プログラム名の後ろが 2 個未満なら `Usage`。
pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from("words_add"));
    let rest: Vec<OsString> = args.collect();
    if rest.len() < 2 {
        return Err(WordListError::Usage);
    }

    // `--` 以降は clap がフラグとして解釈しないので、`-h` や `--` も単語になる
    let argv = [program, OsString::from("--")].into_iter().chain(rest);
    Cli::try_parse_from(argv).map_err(|e| {
        log::debug!("argument error: {:?}", e.kind());
        WordListError::Usage
    })
}

/// エラーを表示してプロセスを終了する
pub fn exit_with(err: WordListError) -> ! {
    if let WordListError::Usage = err {
        println!("{err}");
    } else {
        log::debug!("{err:?}");
        eprintln!("Error: {err}");
    }
    std::process::exit(err.exit_code());
}
