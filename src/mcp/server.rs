//! Unit Converter MCP Server Implementation
//!
//! Implements the MCP server with all converter tools.

use std::sync::{Arc, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::ads::AdPresenter;
use crate::models::History;
use crate::session::ConverterSession;
use crate::tools::catalog;
use crate::tools::convert;
use crate::tools::history;
use crate::tools::session;
use crate::tools::status::StatusTracker;

/// Unit Converter MCP Service
#[derive(Clone)]
pub struct ConverterService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    session: Arc<std::sync::Mutex<ConverterSession>>,
    presenter: Arc<dyn AdPresenter>,
    tool_router: ToolRouter<ConverterService>,
}

impl ConverterService {
    pub fn new(history_capacity: usize, presenter: Arc<dyn AdPresenter>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(history_capacity))),
            session: Arc::new(std::sync::Mutex::new(ConverterSession::new(
                History::with_capacity(history_capacity),
            ))),
            presenter,
            tool_router: Self::tool_router(),
        }
    }

    fn session(&self) -> Result<MutexGuard<'_, ConverterSession>, McpError> {
        self.session
            .lock()
            .map_err(|_| McpError::internal_error("Session lock poisoned", None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CategoryParams {
    /// Category: length, weight, temperature, area, volume, speed, data
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Category: length, weight, temperature, area, volume, speed, data
    pub category: String,
    /// Source unit key (e.g., "in")
    pub from_unit: String,
    /// Target unit key (e.g., "cm")
    pub to_unit: String,
    /// Value to convert, as text (e.g., "1", "98.6")
    pub value: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectUnitsParams {
    /// New source unit key (optional)
    pub from_unit: Option<String>,
    /// New target unit key (optional)
    pub to_unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetInputParams {
    /// Value to convert, as text
    pub value: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ApplyPresetParams {
    /// Preset index from list_presets for the current category
    pub index: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ApplyRecordParams {
    /// History record ID from list_history
    pub id: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ConverterService {
    // --- Status ---

    #[tool(description = "Get the current status of the converter service including build info, catalog size, and process information")]
    async fn converter_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for using the unit converter tools. Call this when unsure which tool to use.")]
    fn converter_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERTER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERTER_INSTRUCTIONS)]))
    }

    // --- Catalog ---

    #[tool(description = "List measurement categories in display order")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        json_result(&catalog::list_categories())
    }

    #[tool(description = "List the units of a category in catalog order, with its base unit and default selection")]
    fn list_units(&self, Parameters(p): Parameters<CategoryParams>) -> Result<CallToolResult, McpError> {
        let result = catalog::list_units(&p.category).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List the quick conversion presets of a category")]
    fn list_presets(&self, Parameters(p): Parameters<CategoryParams>) -> Result<CallToolResult, McpError> {
        let result = catalog::list_presets(&p.category).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Conversion ---

    #[tool(description = "Convert a value between two units of the same category without changing the session")]
    fn convert(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let result = convert::convert(&p.category, &p.from_unit, &p.to_unit, &p.value)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Session ---

    #[tool(description = "Get the current converter session: category, units, input, formatted result and presets")]
    fn get_session(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&session::get_session(&session))
    }

    #[tool(description = "Switch the session to a category; units reset to the category defaults")]
    fn select_category(&self, Parameters(p): Parameters<CategoryParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = session::select_category(&mut session, &p.category)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Change the source and/or target unit within the current category")]
    fn select_units(&self, Parameters(p): Parameters<SelectUnitsParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = session::select_units(&mut session, p.from_unit.as_deref(), p.to_unit.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Swap the source and target units")]
    fn swap_units(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        json_result(&session::swap_units(&mut session))
    }

    #[tool(description = "Set the value to convert")]
    fn set_input(&self, Parameters(p): Parameters<SetInputParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        json_result(&session::set_input(&mut session, &p.value))
    }

    #[tool(description = "Apply a quick preset of the current category by index")]
    fn apply_preset(&self, Parameters(p): Parameters<ApplyPresetParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = session::apply_preset(&mut session, p.index)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the current conversion as copyable text, e.g. \"1 in = 2.54 cm\"")]
    fn copy_result(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = session::copy_result(&session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- History ---

    #[tool(description = "Save the current conversion to history (keeps the latest records only)")]
    fn save_record(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = history::save_record(&session, self.presenter.as_ref())
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List saved conversions, newest first")]
    fn list_history(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&history::list_history(&session))
    }

    #[tool(description = "Restore category, units and input from a saved conversion")]
    fn apply_record(&self, Parameters(p): Parameters<ApplyRecordParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = history::apply_record(&mut session, &p.id)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ConverterService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "unitconv".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Unit Converter - length, weight, temperature, area, volume, speed and data size. \
                 Call converter_instructions first if unsure. \
                 Catalog: list_categories, list_units, list_presets. \
                 One-off: convert. \
                 Session: get_session, select_category, select_units, swap_units, set_input, \
                 apply_preset, copy_result. \
                 History: save_record, list_history, apply_record."
                    .into(),
            ),
        }
    }
}
