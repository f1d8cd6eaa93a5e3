//!
//! src/update/mod.rs
//! Update 层：消费消息、修改状态
//!
//! `update` 是唯一修改 `App` 的入口。需要副作用（发起网络请求）时不直接执行，
//! 而是返回一个 `Command` 交给主循环，由 Backend 层异步处理：
//!
//!     Submit ──▶ SearchState::submit() ──▶ Some(Command::Search(request))
//!                                               │
//!                                               ▼
//!                              GeocodeService::spawn_search (tokio)
//!                                               │
//!     SearchCompleted ◀──── mpsc ◀──────────────┘

mod inspector;
mod modal;
mod search;

use crate::message::AppMessage;
use crate::model::{App, FetchOutcome, SearchRequest};

/// 需要主循环执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 发起一次地理编码请求
    Search(SearchRequest),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::FocusNext => {
            if !app.modal.is_open() {
                app.focus = app.focus.next();
            }
            None
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                app.focus = app.focus.prev();
            }
            None
        }

        AppMessage::Search(search_msg) => search::update(app, search_msg),

        AppMessage::Inspector(inspector_msg) => {
            inspector::update(app, inspector_msg);
            None
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            None
        }

        AppMessage::SearchCompleted(response) => {
            search::complete(app, *response);
            None
        }

        AppMessage::Refresh => {
            let request = app.search.refresh();
            match &request {
                Some(req) => app.set_status(format!("Searching {}...", req.provider)),
                None => app.set_status("Nothing to refresh yet"),
            }
            request.map(Command::Search)
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::ShowProviderInfo => {
            let provider = match &app.search.outcome {
                FetchOutcome::Loaded(result) if app.focus != crate::model::FocusPanel::Provider => {
                    result.provider
                }
                _ => app.search.form.provider,
            };
            app.modal.show_provider_info(provider);
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}
