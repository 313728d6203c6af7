//! 核心类型
//!
//! - ids: 宿主对象句柄（文档、工作区、窗口）
//! - command: 交互命令标识

pub mod command;
pub mod ids;

pub use command::CommandId;
pub use ids::{DocumentId, WindowId, WorkspaceId};
