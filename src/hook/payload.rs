//! Hook request and response types.

use serde::{Deserialize, Serialize};

/// Event name echoed back in the response.
pub const PRE_TOOL_USE: &str = "PreToolUse";

/// Tool whose `command` is a shell command line.
pub const SHELL_TOOL: &str = "Bash";

/// Payload the hook framework writes to stdin. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Intercepted tool. Absent means the framework already filtered to shell
    /// commands.
    #[serde(default)]
    pub tool_name: Option<String>,

    #[serde(default)]
    pub tool_input: ToolInput,

    /// Working directory of the session.
    #[serde(default)]
    pub cwd: Option<String>,
}

/// The intercepted tool call's arguments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub command: String,
}

impl HookInput {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Whether the intercepted tool runs shell commands.
    pub fn is_shell_tool(&self) -> bool {
        self.tool_name
            .as_deref()
            .map_or(true, |name| name == SHELL_TOOL)
    }
}

/// Response written to stdout on denial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HookOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub permission_decision: PermissionDecision,
    pub permission_decision_reason: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Deny,
}

impl HookOutput {
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: PRE_TOOL_USE.to_string(),
                permission_decision: PermissionDecision::Deny,
                permission_decision_reason: reason.into(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
