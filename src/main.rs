use clap::Parser;
use pdf_ai_common::{
    build_structured_prompt, FileHandle, FileSlot, JobReport, Notice, UiEvents, UploadController,
    View,
};
use pdf_ai_rust::{cli, config, error, report, terminal, transport};
use cli::{Cli, Commands};
use config::Config;
use error::{PdfAiError, Result};
use std::path::PathBuf;
use terminal::TerminalView;
use transport::{HttpTransport, LocalFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Controller = UploadController<HttpTransport, TerminalView>;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pdf_ai_rust=debug,pdf_ai_common=debug"
    } else {
        "pdf_ai_rust=warn,pdf_ai_common=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// ピッカーで選んだのと同じ扱いで枠に入れる
fn choose(controller: &Controller, slot: FileSlot, path: PathBuf) -> Result<()> {
    let file = LocalFile::open(&path)?;
    let name = file.name();
    if controller.on_file_chosen(slot, file) {
        Ok(())
    } else {
        Err(PdfAiError::UnsupportedFile {
            slot: slot.label().to_string(),
            name,
        })
    }
}

#[allow(clippy::too_many_arguments)]
async fn run(
    config: &Config,
    server: Option<&str>,
    files: Vec<PathBuf>,
    pdf: Option<PathBuf>,
    excel: Option<PathBuf>,
    prompt: Option<String>,
    structured: bool,
    download: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    println!("📄 pdf-ai - Analyse PDF avec IA\n");

    let controller = UploadController::new(
        HttpTransport::new(),
        TerminalView::new(),
        config.controller_config(server)?,
    );
    let view = controller.view();
    view.notify(Notice::info(format!(
        "Serveur: {}",
        controller.endpoints().base_url()
    )));

    // 1. ファイル選択（ドロップ扱い → 明示指定の順）
    if !files.is_empty() {
        let dropped = files
            .iter()
            .map(LocalFile::open)
            .collect::<Result<Vec<_>>>()?;
        for file in dropped.iter().filter(|f| f.drop_slot().is_none()) {
            view.notify(Notice::warning(format!("Fichier ignoré: {}", file.name())));
        }
        let filled = controller.on_files_dropped(dropped);
        tracing::debug!(?filled, "dropped files classified");
    }
    if let Some(path) = pdf {
        choose(&controller, FileSlot::Document, path)?;
    }
    if let Some(path) = excel {
        choose(&controller, FileSlot::Spreadsheet, path)?;
    }

    // 2. プロンプト
    let prompt = prompt.unwrap_or_else(|| config.default_prompt.clone());
    let prompt = if structured {
        build_structured_prompt(&prompt)
    } else {
        prompt
    };
    controller.on_prompt_changed(&prompt);

    // 3. 送信
    match controller.on_submit().await {
        JobReport::Completed { pages } => println!("\n✅ Traitement terminé ({} pages)", pages),
        JobReport::Rejected(message) | JobReport::Failed(message) => {
            return Err(PdfAiError::JobFailed(message));
        }
        JobReport::Ignored => {
            return Err(PdfAiError::JobFailed("traitement déjà en cours".into()));
        }
    }

    // 4. 結果保存
    if let Some(path) = json {
        let result = controller.session().result.clone();
        if let Some(result) = result {
            report::write_results_json(&result, &path)?;
            view.notify(Notice::success(format!(
                "Résultats enregistrés: {}",
                path.display()
            )));
        }
    }

    // 5. ダウンロード
    if let Some(url) = controller.on_download_requested() {
        if let Some(dest) = download {
            let written = controller.transport().download(&url, &dest).await?;
            view.notify(Notice::success(format!(
                "Fichier Excel enregistré: {} ({} octets)",
                dest.display(),
                written
            )));
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    println!("Configuration: {}", Config::config_path()?.display());
    println!("  server_url:          {}", config.server_url);
    println!("  serveur effectif:    {}", config.server_url());
    println!("  default_prompt:      {}", config.default_prompt);
    println!("  completion_delay_ms: {}", config.completion_delay_ms);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;

    match cli.command {
        Commands::Run { files, pdf, excel, prompt, structured, download, json } => {
            run(&config, cli.server.as_deref(), files, pdf, excel, prompt, structured, download, json).await?;
        }

        Commands::Config { set_server, set_prompt, show } => {
            let changed = set_server.is_some() || set_prompt.is_some();
            if let Some(url) = set_server {
                config.set_server_url(url)?;
            }
            if let Some(prompt) = set_prompt {
                config.set_default_prompt(prompt)?;
            }
            if changed {
                config.save()?;
                println!("✔ Configuration enregistrée");
            }
            if show || !changed {
                show_config(&config)?;
            }
        }
    }

    Ok(())
}
