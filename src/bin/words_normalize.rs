use clap::Parser;
use words_add::cli::{NormalizeCli, exit_with};
use words_add::utils::{config::EnvConfig, env::load_env};
use words_add::{JsonFileWordListRepo, Result, WordListError, WordListRepository};

fn run() -> Result<()> {
    let cli = NormalizeCli::parse();
    let repo = JsonFileWordListRepo::new(&cli.json_path);
    if !repo.path().exists() {
        return Err(WordListError::NotFound(cli.json_path));
    }

    let report = repo.merge_words::<&str>(&[])?; // 0 語のマージ = 整形のみ
    println!(
        "Normalized {} ({} word(s))",
        cli.json_path.display(),
        report.total
    );
    Ok(())
}

fn main() {
    let env_file = load_env();
    EnvConfig::init();
    env_logger::init();
    if let Some(path) = env_file {
        log::debug!("loaded {}", path.display());
    }

    if let Err(e) = run() {
        exit_with(e);
    }
}
