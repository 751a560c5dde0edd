use serde::Serialize;

/// One `(code, text)` row of a message table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorMessageRecord {
    code: i64,
    text: String,
}
impl ErrorMessageRecord {
    pub fn new(code: i64, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }
    /// The `{0, NULL}` row that ends a C message table.
    pub fn sentinel() -> Self {
        Self::new(0, String::new())
    }
    pub fn code(&self) -> i64 {
        self.code
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn is_sentinel(&self) -> bool {
        self.text.is_empty()
    }
}
impl From<(i64, &str)> for ErrorMessageRecord {
    fn from((code, text): (i64, &str)) -> Self {
        Self::new(code, text)
    }
}
