use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use mindpaperscreen_rust::{export_script, Conf, ExportFormat, ScreenplayResult, TitlePage};

/// 剧本解析与导出
#[derive(Parser, Debug)]
#[command(name = "screenplay-parser", version, about)]
struct Cli {
    /// 剧本文件
    file: PathBuf,

    /// 输出格式: json | markdown | fountain | html | outline
    #[arg(short, long, default_value = "json")]
    format: String,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 输出文件，缺省时打印到标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 标题页：标题
    #[arg(long)]
    title: Option<String>,

    /// 标题页：作者
    #[arg(long)]
    author: Option<String>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> ScreenplayResult<()> {
    let config = match &cli.config {
        Some(path) => Conf::from_file(path)?,
        None => Conf::default(),
    };
    let format: ExportFormat = cli.format.parse()?;
    let content = fs::read_to_string(&cli.file)?;
    debug!(file = %cli.file.display(), bytes = content.len(), "read screenplay");

    let title_page = if cli.title.is_some() || cli.author.is_some() {
        Some(TitlePage {
            title: cli.title.clone().unwrap_or_default(),
            author: cli.author.clone().unwrap_or_default(),
            draft_date: Some(chrono::Local::now().date_naive()),
            ..TitlePage::default()
        })
    } else {
        None
    };

    let exported = export_script(&content, format, &config, title_page.as_ref())?;
    match &cli.output {
        Some(path) => fs::write(path, exported)?,
        None => print!("{}", exported),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("错误: {}", e);
            ExitCode::FAILURE
        }
    }
}
