use dioxus::prelude::*;
use icontract_analytics::gui::{components::MainWindow, config_manager, utils};

/// ウィンドウ設定の保存用
static LAST_WINDOW_CONFIG: parking_lot::Mutex<Option<config_manager::WindowConfig>> =
    parking_lot::Mutex::new(None);

/// Dioxusベースの iContract Analytics デスクトップアプリケーション
fn app() -> Element {
    let window = dioxus::desktop::use_window();

    // ウィンドウ状態を定期的に更新（終了時の保存用・軽量な監視）
    use_effect({
        let window = window.clone();
        move || {
            let window = window.clone();
            spawn(async move {
                let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(1));
                loop {
                    interval.tick().await;

                    let current_size = window.inner_size();
                    let current_position = window.outer_position().unwrap_or_default();
                    let is_maximized = window.is_maximized();

                    let window_config = config_manager::WindowConfig {
                        width: current_size.width,
                        height: current_size.height,
                        x: current_position.x,
                        y: current_position.y,
                        maximized: is_maximized,
                    };

                    *LAST_WINDOW_CONFIG.lock() = Some(window_config);
                }
            });
        }
    });

    rsx! {
        MainWindow {}
    }
}

fn main() -> anyhow::Result<()> {
    // 設定読み込み（ログ設定が含まれるため初期化より先）
    let config_manager = config_manager::ConfigManager::new()?;
    let mut config = config_manager.load_config().unwrap_or_else(|e| {
        eprintln!("設定読み込みエラー、デフォルト設定を使用: {}", e);
        config_manager::AppConfig::default()
    });

    // ログ初期化。ガードは終了まで保持する
    let _log_guard = utils::init_logging(&config.log)?;

    tracing::info!("🎬 Starting iContract Analytics - AI-Powered Contract Insights");

    // ウィンドウ位置を妥当な範囲内に調整
    utils::validate_window_bounds(&mut config.window);

    tracing::info!(
        "🪟 ウィンドウ設定: {}x{} at ({}, {}), 最大化: {}",
        config.window.width,
        config.window.height,
        config.window.x,
        config.window.y,
        config.window.maximized
    );

    // LaunchBuilderを使用してウィンドウ設定を適用
    let launch_builder = dioxus::LaunchBuilder::desktop().with_cfg(
        dioxus::desktop::Config::new().with_window(
            dioxus::desktop::tao::window::WindowBuilder::new()
                .with_title("iContract Analytics")
                .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                    config.window.width as f64,
                    config.window.height as f64,
                ))
                .with_position(dioxus::desktop::tao::dpi::LogicalPosition::new(
                    config.window.x as f64,
                    config.window.y as f64,
                ))
                .with_maximized(config.window.maximized)
                .with_resizable(true),
        ),
    );

    // Ctrl+Cシグナルハンドラー
    ctrlc::set_handler(move || {
        tracing::info!("🛑 終了シグナルを受信しました");
        save_window_config_on_exit();
        std::process::exit(0);
    })?;

    // Dioxusアプリケーションを起動
    launch_builder.launch(app);

    // 正常終了時の設定保存
    save_window_config_on_exit();

    tracing::info!("👋 iContract Analytics shutting down");
    Ok(())
}

/// 終了時にウィンドウ設定を保存
fn save_window_config_on_exit() {
    let last_config = LAST_WINDOW_CONFIG.lock().clone();

    if let Some(window_config) = last_config {
        match config_manager::ConfigManager::new() {
            Ok(config_manager) => {
                let mut config = config_manager.load_config().unwrap_or_default();
                config.window = window_config;

                if let Err(e) = config_manager.save_config(&config) {
                    tracing::error!("設定保存エラー: {}", e);
                } else {
                    tracing::info!(
                        "💾 ウィンドウ設定を保存しました: {}x{}",
                        config.window.width,
                        config.window.height
                    );
                }
            }
            Err(e) => {
                tracing::error!("ConfigManagerの作成に失敗しました: {}", e);
            }
        }
    }
}
