//! Geocode Inspector TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，副作用以 `Command` 返回
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与地理编码服务 (`backend/`)
//! - **Tree**: JSON 树的展开状态与行渲染 (`tree/`)
//!
//! main 负责：解析命令行、加载配置、初始化日志与 tokio 运行时，
//! 然后进入 `app::run` 主循环，最后无论成功与否都恢复终端。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod tree;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use geocode_provider::{GeocodeClient, ProviderId};

use backend::{ConfigService, GeocodeService, LocalConfigService, default_config_dir};
use message::{AppMessage, SearchMessage};
use model::{App, FocusPanel};
use util::{init_logging, init_terminal, restore_terminal};

/// Inspect raw geocoding responses in the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Provider to select on startup (google, nominatim, geoapify, maptiler)
    #[arg(short, long, env = "GEOCODE_PROVIDER")]
    provider: Option<ProviderId>,

    /// Address to prefill; searched immediately when given
    #[arg(short, long)]
    address: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. 日志（失败不影响运行，终端界面占用 stdout）
    let log_path = init_logging(&default_config_dir()).ok();

    // 2. 配置
    let config_service = match &args.config {
        Some(path) => LocalConfigService::with_path(path),
        None => LocalConfigService::new(),
    };
    tracing::debug!(path = %config_service.path().display(), "loading config");
    let config = config_service.load()?;
    view::theme::set_theme(config.theme);

    // 3. 后台服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client_config = config.client_config();
    let configured_keys = ProviderId::ALL
        .into_iter()
        .filter(|id| client_config.api_keys.contains_key(id))
        .collect();
    let client = GeocodeClient::new(client_config)?;
    let service = GeocodeService::new(client, runtime.handle().clone());

    // 4. 应用状态
    let mut app = App::new(args.provider.unwrap_or(config.default_provider));
    app.endpoints = config.endpoints;
    app.configured_keys = configured_keys;
    if let Some(path) = log_path {
        tracing::info!(log = %path.display(), "geocode-tui started");
    }

    let mut pending = None;
    if let Some(address) = args.address {
        app.search.form.address = model::state::TextInput::new(address);
        app.focus = FocusPanel::Candidates;
        pending = update::update(&mut app, AppMessage::Search(SearchMessage::Submit));
    }

    // 5. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &service, pending);
    restore_terminal(&mut terminal)?;

    result
}
