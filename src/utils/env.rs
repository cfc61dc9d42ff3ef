use crate::utils::config::ENV_PATH_ENV;

/// `.env` を読み込む。
///
/// `WORDS_ADD_ENV_PATH` が指定されていればそのファイル、無ければカレント
/// ディレクトリから親方向に `.env` を探す。見つからなくてもエラーにしない。
/// 戻り値は実際に読み込んだファイル。
pub fn load_env() -> Option<std::path::PathBuf> {
    match std::env::var_os(ENV_PATH_ENV) {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            dotenvy::from_path(&path).ok().map(|_| path)
        }
        None => dotenvy::dotenv().ok(),
    }
}

