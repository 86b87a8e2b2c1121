//! Quire - 手稿编译工具
//!
//! 入口：解析命令行 → 加载配置 → 初始化日志 → 执行命令

use clap::Parser;
use std::sync::Arc;

use quire::application::{
    ApplicationError, CompileManuscript, CompileManuscriptHandler, CountWords, CountWordsHandler,
};
use quire::config::{load_config_from_path, print_config, validate_config, LogConfig};
use quire::infrastructure::adapters::{FsManuscriptSource, FsManuscriptWriter};
use quire::infrastructure::cli::{render_json, render_text, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let mut config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    match &cli.command {
        Commands::Compile(args) => args.apply(&mut config),
        Commands::Count(args) => args.apply(&mut config),
    }
    validate_config(&config)?;

    init_tracing(&config.log);
    print_config(&config);

    let source = Arc::new(FsManuscriptSource::new());

    match cli.command {
        Commands::Compile(_) => {
            let handler = CompileManuscriptHandler::new(source, Arc::new(FsManuscriptWriter::new()));
            exit_on_error(handler.handle(CompileManuscript {
                root: config.source.root.clone(),
                output: config.output.path.clone(),
                extension: config.source.extension.clone(),
                header_file: config.source.header_file.clone(),
                options: config.compile.to_options(),
            }));
        }
        Commands::Count(args) => {
            let handler = CountWordsHandler::new(source);
            let report = exit_on_error(handler.handle(CountWords {
                root: config.source.root.clone(),
                extension: config.source.extension.clone(),
            }));

            let output = if args.json {
                render_json(&report)? + "\n"
            } else {
                render_text(&report, args.show_paths)
            };
            print!("{}", output);
        }
    }

    Ok(())
}

/// 初始化日志，输出到 stderr，stdout 只用于报告
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},quire={}", log.level, log.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 致命错误：记录后以对应退出码结束进程
fn exit_on_error<T>(result: Result<T, ApplicationError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(exit_code = err.exit_code(), "{}", err);
            std::process::exit(err.exit_code());
        }
    }
}
