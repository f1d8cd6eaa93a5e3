//! 页面数据状态

mod input;
mod inspector;
mod modal;
mod search;

pub use input::TextInput;
pub use inspector::{InspectorState, PAGE_STEP};
pub use modal::{Modal, ModalState};
pub use search::{
    FetchOutcome, SearchRequest, SearchResponse, SearchResult, SearchState,
};
