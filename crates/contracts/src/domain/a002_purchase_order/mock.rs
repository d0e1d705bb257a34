use super::aggregate::{PurchaseOrder, SEARCH_COLUMNS};
use crate::domain::common::{iso_date, pick};
use crate::enums::OrderStatus;
use crate::shared::pagination::{PageRequest, PageResponse};
use crate::shared::table::row_model::serve_page;

const VENDORS: [&str; 7] = [
    "Granite Supply Co.",
    "Northern Steelworks",
    "BrightSpark Electrical",
    "AquaFlow Plumbing",
    "Timberline Lumber",
    "Crane & Hoist Rentals",
    "ClimateCore HVAC",
];

/// (item, category, unit price)
const ITEMS: [(&str, &str, f64); 10] = [
    ("Ready-mix concrete C30, m3", "Materials", 118.0),
    ("Rebar B500, t", "Materials", 760.0),
    ("Structural steel beams, t", "Materials", 1_240.0),
    ("Copper cable 4x16mm, m", "Materials", 14.5),
    ("PVC drainage pipe 110mm, m", "Materials", 9.8),
    ("Glulam timber, m3", "Materials", 690.0),
    ("Tower crane rental, week", "Equipment", 5_400.0),
    ("Excavator rental, day", "Equipment", 820.0),
    ("HVAC installation crew, day", "Subcontract", 2_150.0),
    ("Site survey", "Services", 3_600.0),
];

const STATUSES: [OrderStatus; 7] = [
    OrderStatus::Delivered,
    OrderStatus::Approved,
    OrderStatus::Pending,
    OrderStatus::Delivered,
    OrderStatus::Draft,
    OrderStatus::Approved,
    OrderStatus::Cancelled,
];

pub const DATASET_SIZE: usize = 240;

/// Stable purchase-order dataset behind the procurement loader.
pub fn dataset() -> Vec<PurchaseOrder> {
    (0..DATASET_SIZE)
        .map(|i| {
            let (item, category, unit_price) = pick(&ITEMS, i * 7);
            PurchaseOrder {
                number: format!("PO-{:05}", 10_001 + i),
                project_code: format!("PRJ-{:03}", i % 36 + 1),
                vendor: pick(&VENDORS, i * 3).to_string(),
                item: item.to_string(),
                category: category.to_string(),
                quantity: 1 + ((i * 37) % 120) as u32,
                unit_price,
                status: pick(&STATUSES, i),
                ordered_at: iso_date(DATASET_SIZE as u64 * 3 - i as u64 * 3),
            }
        })
        .collect()
}

/// Vendor names offered by the vendor filter menu.
pub fn vendor_options() -> Vec<String> {
    let mut names: Vec<String> = VENDORS.iter().map(|v| v.to_string()).collect();
    names.sort();
    names
}

/// Distinct item categories, sorted.
pub fn category_options() -> Vec<String> {
    let mut categories: Vec<String> = ITEMS.iter().map(|(_, c, _)| c.to_string()).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Status labels as they appear in `cell_text("status")`.
pub fn status_options() -> Vec<String> {
    OrderStatus::all()
        .iter()
        .map(|s| s.display_name().to_string())
        .collect()
}

/// Server-side answer for one page request.
pub fn query(rows: &[PurchaseOrder], request: &PageRequest) -> PageResponse<PurchaseOrder> {
    serve_page(rows, request, &SEARCH_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{ColumnFilters, SortDirection, SortingState};

    fn request(page_index: usize, page_size: usize) -> PageRequest {
        PageRequest {
            generation: 1,
            page_index,
            page_size,
            sorting: SortingState::new(),
            filters: ColumnFilters::new(),
            search: String::new(),
        }
    }

    #[test]
    fn test_query_pages_through_dataset() {
        let rows = dataset();
        let response = query(&rows, &request(0, 50));
        assert_eq!(response.total_count, DATASET_SIZE);
        assert_eq!(response.items.len(), 50);
        assert_eq!(response.page_count(50), 5);

        let last = query(&rows, &request(4, 50));
        assert_eq!(last.items.len(), 40);
    }

    #[test]
    fn test_query_filters_by_status() {
        let rows = dataset();
        let mut req = request(0, 500);
        let mut filters = ColumnFilters::new();
        filters.set("status", vec![OrderStatus::Cancelled.display_name().to_string()]);
        req.filters = filters;
        let response = query(&rows, &req);
        assert!(response.total_count > 0);
        assert!(response
            .items
            .iter()
            .all(|po| po.status == OrderStatus::Cancelled));
    }

    #[test]
    fn test_filter_options_cover_dataset() {
        let rows = dataset();
        let categories = category_options();
        assert_eq!(categories, vec!["Equipment", "Materials", "Services", "Subcontract"]);
        assert!(rows.iter().all(|po| categories.contains(&po.category)));
        assert!(rows.iter().all(|po| vendor_options().contains(&po.vendor)));
        assert_eq!(status_options().len(), 5);
    }

    #[test]
    fn test_query_search_and_sort() {
        let rows = dataset();
        let mut req = request(0, 500);
        req.search = "steelworks".to_string();
        req.sorting = SortingState::by("amount", SortDirection::Desc);
        let response = query(&rows, &req);
        assert!(response.items.iter().all(|po| po.vendor == "Northern Steelworks"));
        assert!(response
            .items
            .windows(2)
            .all(|w| w[0].amount() >= w[1].amount()));
    }
}
