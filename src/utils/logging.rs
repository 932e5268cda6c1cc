// graphalgo 日志接入
//
// 算法只通过 log 门面输出 debug/trace 记录，宿主程序不调用 init 时没有任何输出。
// init 把 graphalgo 的记录写入按大小轮转的文件；shutdown 先关闭 log 门面再 flush，
// 之后算法的记录直接被丢弃，不会落到已关闭的异步写线程上。

use crate::config::Config;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 当前生效的日志句柄，shutdown 时取出并 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 把配置中的级别转换为 flexi_logger 的模块规格
///
/// 单独的级别（如 `"debug"`）只作用于 graphalgo 自身，宿主其他模块保持关闭；
/// 含 `=` 或 `,` 的完整规格原样使用
fn module_spec(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("off, graphalgo={}", level)
    }
}

/// 初始化日志系统
///
/// 全局 logger 只能安装一次，重复调用返回错误
///
/// ```no_run
/// use graphalgo::config::Config;
/// use graphalgo::utils::logging;
///
/// let mut config = Config::default();
/// config.log.level = "debug".to_string();
/// logging::init(&config).expect("日志初始化失败");
/// // ... 运行算法 ...
/// logging::shutdown();
/// ```
pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let handle = Logger::try_with_str(module_spec(&config.log.level))?
        .log_to_file(
            FileSpec::default()
                .basename(&config.log.file)
                .directory(&config.log.dir),
        )
        .rotate(
            Criterion::Size(config.log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.log.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::info!("日志系统初始化完成: {}/{}", config.log.dir, config.log.file);
    Ok(())
}

/// 关闭日志系统
///
/// 先把 log 门面的最大级别设为 Off，再 flush 并释放句柄。
/// log 不支持卸载全局 logger，关闭后的记录在门面处就被过滤掉。
pub fn shutdown() {
    log::set_max_level(log::LevelFilter::Off);
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
