//! words_add CLI: JSON 単語リストに単語を追加し、大文字小文字を無視した順で保存します。
use words_add::cli::{exit_with, parse_args};
use words_add::utils::{config::EnvConfig, env::load_env, profiling::Timer};
use words_add::{Result, add_words};

fn run() -> Result<()> {
    let cli = parse_args(std::env::args_os())?;

    let timer = Timer::start("words_add.run");
    let report = add_words(&cli.json_path, &cli.words)?;
    timer.log();

    log::info!(
        "{} new, {} total in {}",
        report.added,
        report.total,
        cli.json_path.display()
    );
    println!(
        "Added {} word(s) to {}",
        report.supplied,
        cli.json_path.display()
    );
    Ok(())
}

fn main() {
    // .env → EnvConfig → ロガーの順に初期化
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
