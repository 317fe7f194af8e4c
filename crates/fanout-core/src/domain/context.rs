use serde::{Deserialize, Serialize};

/// InvocationContext はプラットフォームから渡される invocation ごとのメタ情報
///
/// Handler は読むだけで、生成と破棄はプラットフォーム側が行う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationContext {
    request_id: String,
    function_name: String,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: function_name.into(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }
}
