//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     for response in service.drain() {               // 收取后台完成的请求
//!         update(&mut app, SearchCompleted(response))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);            // 原始事件 -> 消息
//!         update(&mut app, msg)                           // 可能返回 Command
//!     }
//!     dispatch(command)                               // Command 交给 Backend 执行
//! }
//!
//! 网络请求在 tokio 线程池中完成，主循环从不阻塞在 I/O 上。

use std::time::Duration;

use anyhow::Result;

use crate::backend::GeocodeService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Command};
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    service: &GeocodeService,
    initial: Option<Command>,
) -> Result<()> {
    if let Some(command) = initial {
        dispatch(service, command);
    }

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用后台响应
        for response in service.drain() {
            if let Some(command) =
                update::update(app, AppMessage::SearchCompleted(Box::new(response)))
            {
                dispatch(service, command);
            }
        }

        // 4. 轮询事件并更新状态
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            if let Some(command) = update::update(app, msg) {
                dispatch(service, command);
            }
        }
    }

    Ok(())
}

/// 执行副作用
fn dispatch(service: &GeocodeService, command: Command) {
    match command {
        Command::Search(request) => service.spawn_search(request),
    }
}
