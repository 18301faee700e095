use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdf-ai")]
#[command(about = "PDF + Excel をAI解析サーバーへ送信して結果を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// サーバーURL（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// アップロードから解析・結果表示まで一括実行
    Run {
        /// 種類を自動判定するファイル（.pdf / .xlsx / .xls）
        files: Vec<PathBuf>,

        /// PDFファイル
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Excelファイル（.xlsx / .xls）
        #[arg(long)]
        excel: Option<PathBuf>,

        /// 解析プロンプト（省略時は設定の既定値）
        #[arg(short, long)]
        prompt: Option<String>,

        /// 構造化JSON形式のプロンプトを使う
        #[arg(long)]
        structured: bool,

        /// 生成されたExcelの保存先
        #[arg(short = 'o', long)]
        download: Option<PathBuf>,

        /// 解析結果JSONの保存先
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// サーバーURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 既定のプロンプトを設定
        #[arg(long)]
        set_prompt: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
