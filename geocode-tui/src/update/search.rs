//! 搜索面板更新逻辑

use crate::message::SearchMessage;
use crate::model::{App, FetchOutcome, SearchResponse};

use super::Command;

/// 处理搜索消息
pub fn update(app: &mut App, msg: SearchMessage) -> Option<Command> {
    let input = &mut app.search.form.address;
    match msg {
        SearchMessage::Input(c) => input.insert(c),
        SearchMessage::Paste(text) => text.chars().for_each(|c| input.insert(c)),
        SearchMessage::Backspace => input.backspace(),
        SearchMessage::Delete => input.delete(),
        SearchMessage::CursorLeft => input.move_left(),
        SearchMessage::CursorRight => input.move_right(),
        SearchMessage::CursorHome => input.move_home(),
        SearchMessage::CursorEnd => input.move_end(),
        SearchMessage::ClearInput => input.clear(),

        SearchMessage::NextProvider => {
            app.search.form.provider = app.search.form.provider.next();
        }
        SearchMessage::PrevProvider => {
            app.search.form.provider = app.search.form.provider.prev();
        }

        SearchMessage::Submit => return submit(app),

        SearchMessage::SelectPrevious => select(app, |r| r.select_previous()),
        SearchMessage::SelectNext => select(app, |r| r.select_next()),
        SearchMessage::SelectFirst => select(app, |r| r.select_first()),
        SearchMessage::SelectLast => select(app, |r| r.select_last()),
    }
    None
}

fn submit(app: &mut App) -> Option<Command> {
    let request = app.search.submit();
    match &request {
        Some(req) => {
            tracing::info!(provider = %req.provider, id = req.id, "search submitted");
            app.set_status(format!("Searching {}...", req.provider));
        }
        None => app.clear_status(),
    }
    request.map(Command::Search)
}

fn select(app: &mut App, f: impl FnOnce(&mut crate::model::SearchResult)) {
    if let Some(result) = app.search.outcome.result_mut() {
        f(result);
    }
}

/// 应用后台响应
pub fn complete(app: &mut App, response: SearchResponse) {
    let id = response.id;
    if !app.search.complete(response) {
        tracing::debug!(id, "stale search response dropped");
        return;
    }

    match &app.search.outcome {
        FetchOutcome::Loaded(result) => {
            let status = if result.is_empty() {
                "No results found for this address".to_string()
            } else {
                format!(
                    "{} result(s) from {}",
                    result.candidates.len(),
                    result.provider
                )
            };
            app.inspector.reset();
            app.set_status(status);
        }
        FetchOutcome::Failed { error, .. } => {
            let status = error.to_string();
            app.inspector.reset();
            app.set_status(status);
        }
        FetchOutcome::Idle | FetchOutcome::Loading { .. } => {}
    }
}
