//! Response envelopes used by the remote API.
//!
//! Every payload arrives wrapped: single objects under `data`, listings
//! under `data` plus a `meta` pagination window, failures under `error`.

use serde::Deserialize;

/// Envelope wrapping a single-object response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Envelope wrapping one page of a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedEnvelope<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Pagination window reported with every listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PageMeta {
    /// Whether the remote reports records beyond this page.
    pub fn has_next_page(&self) -> bool {
        self.page.saturating_mul(self.limit) < self.total
    }
}

/// Envelope wrapping a failed response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Error body reported by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_unwraps_data() {
        let envelope: Envelope<String> =
            serde_json::from_value(json!({ "data": "payload" })).expect("decode envelope");
        assert_eq!(envelope.data, "payload");
    }

    #[test]
    fn test_paged_envelope_decodes_meta() {
        let envelope: PagedEnvelope<u32> = serde_json::from_value(json!({
            "data": [1, 2, 3],
            "meta": { "total": 7, "page": 1, "limit": 3 }
        }))
        .expect("decode paged envelope");
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert_eq!(envelope.meta, PageMeta { total: 7, page: 1, limit: 3 });
    }

    #[test]
    fn test_paged_envelope_rejects_non_list_data() {
        let result = serde_json::from_value::<PagedEnvelope<u32>>(json!({
            "data": { "k": 1 },
            "meta": { "total": 1, "page": 1, "limit": 20 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_envelope_decodes_code_and_message() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": { "code": 404, "message": "contract not found" }
        }))
        .expect("decode error envelope");
        assert_eq!(envelope.error.code, 404);
        assert_eq!(envelope.error.message, "contract not found");
    }

    #[test]
    fn test_has_next_page_window_math() {
        // 7 records at 3 per page: pages 1 and 2 report more, page 3 does not.
        assert!(PageMeta { total: 7, page: 1, limit: 3 }.has_next_page());
        assert!(PageMeta { total: 7, page: 2, limit: 3 }.has_next_page());
        assert!(!PageMeta { total: 7, page: 3, limit: 3 }.has_next_page());
        // Exact multiple: the final page fills completely.
        assert!(!PageMeta { total: 6, page: 2, limit: 3 }.has_next_page());
        // Empty listing reports no pages at all.
        assert!(!PageMeta { total: 0, page: 1, limit: 20 }.has_next_page());
    }
}
