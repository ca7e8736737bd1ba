use clap::{Parser, Subcommand};
use defect_inspector_common::Locale;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "defect-inspector")]
#[command(about = "画像を欠陥検出サーバーへ送信し結果を表示するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// サーバーのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// 表示言語 (ru/en/ja)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像（またはフォルダ内の画像）を解析
    Inspect {
        /// 画像ファイルまたはフォルダのパス
        #[arg(required = true)]
        path: PathBuf,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 処理済み画像リンクを取得しない（/upload を呼ばない）
        #[arg(long)]
        no_upload: bool,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 全ファイルの結果をJSONレポートとして保存
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 登録済み画像の情報を表示
    Image {
        /// 画像ID
        #[arg(required = true)]
        id: u64,
    },

    /// 登録済み画像を削除
    Delete {
        /// 画像ID
        #[arg(required = true)]
        id: u64,
    },

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 表示言語を設定
        #[arg(long)]
        set_locale: Option<Locale>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 処理済み画像リンクの取得を有効化
        #[arg(long, conflicts_with = "no_upload")]
        upload: bool,

        /// 処理済み画像リンクの取得を無効化
        #[arg(long)]
        no_upload: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::parse_from([
            "defect-inspector",
            "--locale",
            "en",
            "inspect",
            "photos",
            "-r",
            "--no-upload",
            "-o",
            "report.json",
        ]);
        assert_eq!(cli.locale, Some(Locale::En));
        match cli.command {
            Commands::Inspect { path, recursive, no_upload, json, output } => {
                assert_eq!(path, PathBuf::from("photos"));
                assert!(recursive);
                assert!(no_upload);
                assert!(!json);
                assert_eq!(output, Some(PathBuf::from("report.json")));
            }
            _ => panic!("expected inspect"),
        }
    }

    #[test]
    fn test_parse_config_conflict() {
        let result = Cli::try_parse_from(["defect-inspector", "config", "--upload", "--no-upload"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_locale_rejected() {
        let result = Cli::try_parse_from(["defect-inspector", "--locale", "de", "image", "1"]);
        assert!(result.is_err());
    }
}
