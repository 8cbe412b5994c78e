// GUI用ユーティリティ関数

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::gui::config_manager::{LogConfig, WindowConfig};

/// 表示用の時刻フォーマット
pub fn format_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// ウィンドウ設定を妥当な範囲に収める
///
/// 保存された設定が壊れていても最低限のサイズで起動できるようにする。
pub fn validate_window_bounds(window: &mut WindowConfig) {
    const MIN_WIDTH: u32 = 800;
    const MIN_HEIGHT: u32 = 600;

    if window.width < MIN_WIDTH {
        window.width = MIN_WIDTH;
    }
    if window.height < MIN_HEIGHT {
        window.height = MIN_HEIGHT;
    }
    if window.x < 0 {
        window.x = 0;
    }
    if window.y < 0 {
        window.y = 0;
    }
}

/// 強化されたログ初期化
///
/// stderrへのコンパクト出力に加え、設定で有効なら日次ローテーションの
/// ファイル出力を行う。返される `WorkerGuard` はアプリ終了まで保持する
/// こと（dropするとバッファが書き切られない）。
pub fn init_logging(
    config: &LogConfig,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if config.enable_file_logging {
        let log_dir = resolve_log_dir(config);
        std::fs::create_dir_all(&log_dir)?;

        let appender = tracing_appender::rolling::daily(&log_dir, "icontract-analytics.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .compact(),
            )
            .try_init()?;

        Ok(Some(guard))
    } else {
        registry.try_init()?;
        Ok(None)
    }
}

/// ログ出力先ディレクトリを決定する
fn resolve_log_dir(config: &LogConfig) -> std::path::PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }

    directories::ProjectDirs::from("dev", "icontract", "icontract-analytics")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_shape() {
        let timestamp = format_timestamp();
        // HH:MM:SS
        assert_eq!(timestamp.len(), 8);
        assert_eq!(timestamp.matches(':').count(), 2);
    }

    #[test]
    fn test_validate_window_bounds_clamps_minimums() {
        let mut window = WindowConfig {
            width: 100,
            height: 50,
            x: -200,
            y: -10,
            maximized: false,
        };

        validate_window_bounds(&mut window);

        assert_eq!(window.width, 800);
        assert_eq!(window.height, 600);
        assert_eq!(window.x, 0);
        assert_eq!(window.y, 0);
    }

    #[test]
    fn test_validate_window_bounds_keeps_valid_config() {
        let mut window = WindowConfig::default();
        let original = window.clone();

        validate_window_bounds(&mut window);

        assert_eq!(window.width, original.width);
        assert_eq!(window.height, original.height);
    }

    #[test]
    fn test_resolve_log_dir_prefers_override() {
        let config = LogConfig {
            log_dir: Some(std::path::PathBuf::from("/tmp/icontract-logs")),
            ..LogConfig::default()
        };

        assert_eq!(
            resolve_log_dir(&config),
            std::path::PathBuf::from("/tmp/icontract-logs")
        );
    }
}
