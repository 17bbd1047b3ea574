use serde::Serialize;

/// Result of an abuse report, also returned unchanged for reports against an
/// already-suspended account.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub report_count: i32,
    pub is_blocked: bool,
    /// True only on the report that crossed the suspension threshold.
    pub just_blocked: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnblockResponse {
    pub is_blocked: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_response_uses_camel_case_fields() {
        let resp = ReportResponse {
            report_count: 10,
            is_blocked: true,
            just_blocked: true,
            message: "Account suspended".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"reportCount\":10"));
        assert!(json.contains("\"isBlocked\":true"));
        assert!(json.contains("\"justBlocked\":true"));
    }
}
