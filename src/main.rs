use clap::Parser;
use defect_inspector::{cli, client, config, error, render, report, scanner};
use cli::{Cli, Commands};
use client::HttpApi;
use config::Config;
use defect_inspector_common::UploadController;
use error::{InspectorError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn init_logger(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// ローディング表示
fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Inspect { path, recursive, no_upload, json, output } => {
            let base_url = config.base_url(cli.base_url.as_deref())?;
            let locale = config.locale(cli.locale);
            let labels = locale.labels();

            let images = scanner::collect_images(&path, recursive)?;
            if images.is_empty() {
                return Err(InspectorError::NoImagesFound(path.display().to_string()));
            }
            if !json {
                println!("🔍 defect-inspector - {} ({}件)\n", base_url, images.len());
            }

            let api = HttpApi::new(base_url.clone(), config.timeout_seconds)?;
            let upload = config.settings.upload_processed && !no_upload;
            let mut controller = UploadController::new(api, locale).with_upload(upload);
            let mut reports = Vec::with_capacity(images.len());

            for image in &images {
                let preview = image.path.display().to_string();

                // 読めないファイルは記録して残りを続ける
                let (event, file_report) = match report::load_image(image) {
                    Ok(loaded) => loaded,
                    Err(unreadable) => {
                        if !json {
                            println!("📷 {}", image.file_name);
                            println!("✘ {}\n", unreadable.error.as_deref().unwrap_or_default());
                        }
                        reports.push(unreadable);
                        continue;
                    }
                };

                if let Err(e) = controller.accept(&event, preview.as_str()) {
                    log::info!("skipped {}: {}", image.file_name, e);
                    if !json {
                        println!("📷 {}", image.file_name);
                        print!("{}", render::render_state(controller.state(), labels, &base_url));
                        println!();
                    }
                    reports.push(file_report.rejected(&e));
                    continue;
                }

                let pb = (!json).then(|| spinner(format!("{} {}", labels.loading, image.file_name)));
                let outcome = controller.run(&event).await;
                if let Some(pb) = pb {
                    pb.finish_and_clear();
                }

                reports.push(file_report.record(&outcome));
                controller.finish(outcome);

                if !json {
                    println!("📷 {}", image.file_name);
                    print!("{}", render::render_state(controller.state(), labels, &base_url));
                    println!();
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                let failed = reports.iter().filter(|r| r.error.is_some()).count();
                let defective = reports.iter().filter(|r| r.defective_regions() > 0).count();
                println!(
                    "✅ 完了: {}件 (欠陥あり {}件, 失敗 {}件)",
                    reports.len(),
                    defective,
                    failed
                );
            }

            if let Some(output) = output {
                report::write_report(&reports, &output)?;
                if !json {
                    println!("✔ レポートを保存: {}", output.display());
                }
            }
        }

        Commands::Image { id } => {
            let base_url = config.base_url(cli.base_url.as_deref())?;
            let api = HttpApi::new(base_url, config.timeout_seconds)?;
            let record = api.get_image(id).await?;

            println!("画像情報:");
            println!("  ID: {}", record.id);
            println!("  ファイル名: {}", record.filename);
            if let Some(uploaded_at) = &record.uploaded_at {
                println!("  登録日時: {}", format_uploaded_at(uploaded_at));
            }
        }

        Commands::Delete { id } => {
            let base_url = config.base_url(cli.base_url.as_deref())?;
            let api = HttpApi::new(base_url, config.timeout_seconds)?;
            api.delete_image(id).await?;
            println!("✔ 画像ID {} を削除しました", id);
        }

        Commands::Config { set_base_url, set_locale, set_timeout, upload, no_upload, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                // 保存前に形式を検証
                config.base_url(Some(url.as_str()))?;
                config.settings.base_url = url;
                changed = true;
            }
            if let Some(locale) = set_locale {
                config.settings.locale = locale;
                changed = true;
            }
            if let Some(timeout) = set_timeout {
                config.timeout_seconds = timeout;
                changed = true;
            }
            if upload || no_upload {
                config.settings.upload_processed = upload;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  ベースURL: {}", config.settings.base_url);
                println!("  表示言語: {}", config.settings.locale.as_str());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  処理済み画像リンク: {}",
                    if config.settings.upload_processed { "取得する" } else { "取得しない" }
                );
                if let Ok(url) = std::env::var(config::BASE_URL_ENV) {
                    println!("  ({} = {} が優先されます)", config::BASE_URL_ENV, url);
                }
            }
        }
    }

    Ok(())
}

/// バックエンドの日時（タイムゾーンなし）を読みやすく整形
fn format_uploaded_at(raw: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
