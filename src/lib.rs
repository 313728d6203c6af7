//! zscope - 按工作区（screen）划分的文档列表
//!
//! 模块结构：
//! - core: 宿主句柄与命令标识
//! - kernel: 成员关系、最近使用顺序过滤、事件与保护规则
//! - kernel::services: 宿主能力接口（ports）与实现（adapters）
//! - logging: tracing 初始化

pub mod core;
pub mod error;
pub mod kernel;
pub mod logging;

pub use crate::core::{CommandId, DocumentId, WindowId, WorkspaceId};
pub use error::{ScopeError, SettingsError};
pub use kernel::{Action, DispatchResult, Effect, ListingHook, ScopeConfig, Session, Store};
