//! In-process stand-in for the procurement endpoint. Answers page requests
//! from the mock dataset after a simulated network delay.

use contracts::domain::a002_purchase_order::{mock, PurchaseOrder};
use contracts::shared::pagination::{PageRequest, PageResponse};
use gloo_timers::future::TimeoutFuture;
use once_cell::sync::Lazy;

static PURCHASE_ORDERS: Lazy<Vec<PurchaseOrder>> = Lazy::new(mock::dataset);

pub const OUTAGE_MESSAGE: &str = "Network failure";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    pub latency_ms: u32,
    /// Fail every request with [`OUTAGE_MESSAGE`].
    pub simulate_outage: bool,
}

/// Delay for one request. Varies with the page so that quick paging can
/// complete out of order.
pub fn latency_for(request: &PageRequest, base_ms: u32) -> u32 {
    let extra = base_ms.saturating_mul((request.page_index % 3) as u32) / 2;
    base_ms.saturating_add(extra)
}

/// Fetch one page of purchase orders.
pub async fn fetch_purchase_orders(
    request: PageRequest,
    options: LoaderOptions,
) -> Result<PageResponse<PurchaseOrder>, String> {
    let delay = latency_for(&request, options.latency_ms);
    log::debug!(
        "fetch_purchase_orders: gen={} page={} size={} delay={}ms",
        request.generation,
        request.page_index,
        request.page_size,
        delay
    );
    let body = serde_json::to_string(&request).map_err(|e| format!("Failed to encode request: {}", e))?;
    TimeoutFuture::new(delay).await;

    if options.simulate_outage {
        return Err(OUTAGE_MESSAGE.to_string());
    }

    let payload = respond(&body)?;
    serde_json::from_str(&payload).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Server side of the exchange: JSON request in, JSON page out.
fn respond(body: &str) -> Result<String, String> {
    let request: PageRequest =
        serde_json::from_str(body).map_err(|e| format!("Bad request: {}", e))?;
    let response = mock::query(&PURCHASE_ORDERS, &request);
    serde_json::to_string(&response).map_err(|e| format!("Failed to encode response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::{ColumnFilters, SortingState};

    fn request(page_index: usize) -> PageRequest {
        PageRequest {
            generation: 1,
            page_index,
            page_size: 20,
            sorting: SortingState::new(),
            filters: ColumnFilters::new(),
            search: String::new(),
        }
    }

    #[test]
    fn test_respond_pages_over_json() {
        let body = serde_json::to_string(&request(1)).unwrap();
        let payload = respond(&body).unwrap();
        let page: PageResponse<PurchaseOrder> = serde_json::from_str(&payload).unwrap();
        assert_eq!(page.total_count, mock::DATASET_SIZE);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.items[0].number, "PO-10021");
    }

    #[test]
    fn test_respond_rejects_malformed_request() {
        assert!(respond("{\"page_index\": \"two\"}").unwrap_err().starts_with("Bad request"));
    }

    #[test]
    fn test_latency_varies_by_page() {
        assert_eq!(latency_for(&request(0), 400), 400);
        assert_eq!(latency_for(&request(1), 400), 600);
        assert_eq!(latency_for(&request(2), 400), 800);
        assert_eq!(latency_for(&request(3), 400), 400);
        assert_eq!(latency_for(&request(5), 0), 0);
    }

    #[test]
    fn test_huge_configured_latency_saturates() {
        assert_eq!(latency_for(&request(0), u32::MAX), u32::MAX);
        assert_eq!(latency_for(&request(2), u32::MAX), u32::MAX);
        assert_eq!(latency_for(&request(1), 3_000_000_000), u32::MAX);
    }
}
