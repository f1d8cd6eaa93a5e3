//! 地理编码服务：后台执行请求

use std::sync::mpsc::{self, Receiver, Sender};

use geocode_provider::GeocodeClient;
use tokio::runtime::Handle;

use crate::model::{SearchRequest, SearchResponse};

/// 在 tokio 运行时上执行搜索，结果经 channel 送回 UI 线程
pub struct GeocodeService {
    client: GeocodeClient,
    runtime: Handle,
    tx: Sender<SearchResponse>,
    rx: Receiver<SearchResponse>,
}

impl GeocodeService {
    pub fn new(client: GeocodeClient, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client,
            runtime,
            tx,
            rx,
        }
    }

    /// 异步发起搜索，立即返回
    pub fn spawn_search(&self, request: SearchRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let SearchRequest {
                id,
                provider,
                address,
            } = request;
            let result = client.geocode(provider, &address).await;
            match &result {
                Ok(outcome) => {
                    tracing::info!(id, %provider, candidates = outcome.candidates.len(), "search completed");
                }
                Err(e) if e.is_expected() => tracing::warn!(id, %provider, "search failed: {e}"),
                Err(e) => tracing::error!(id, %provider, "search failed: {e}"),
            }
            let response = SearchResponse {
                id,
                provider,
                address,
                result,
            };
            if tx.send(response).is_err() {
                tracing::debug!(id, "UI closed before search completed");
            }
        });
    }

    /// 取出所有已完成的响应（不阻塞）
    pub fn drain(&self) -> Vec<SearchResponse> {
        self.rx.try_iter().collect()
    }
}
