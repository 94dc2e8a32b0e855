//! Agent tools
//!
//! Each tool is registered in a [`ToolRegistry`] under a fixed name and
//! executed against the caller's wallet.

mod approval;
mod registry;
mod route;
mod types;

use crate::relay::SwapRelay;
use crate::router::RouterClient;
use std::sync::Arc;

pub use approval::{CheckApprovalParameters, CheckApprovalTool};
pub use registry::{Tool, ToolRegistry, ToolSpec};
pub use route::{RouteParameters, RouteTool};

pub const TOOL_ROUTE: &str = "enso_route";
pub const TOOL_CHECK_APPROVAL: &str = "enso_check_approval";

impl ToolRegistry {
    /// Registry with both Enso tools sharing one relay
    pub fn enso<R: RouterClient + 'static>(router: R) -> Self {
        let relay = Arc::new(SwapRelay::new(router));
        let mut registry = Self::new();
        registry
            .register(RouteTool::new(Arc::clone(&relay)))
            .register(CheckApprovalTool::new(relay));
        registry
    }
}
