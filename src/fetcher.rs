//! Sequential page loop that drains an order source into one batch.

use async_trait::async_trait;
use tracing::info;

use crate::shipstation::{Order, OrderBatch, ShipStationError};

/// Anything that can hand out orders one page at a time.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch page `page` (1-based) holding at most `page_size` orders.
    async fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Order>, ShipStationError>;
}

/// Request pages 1, 2, 3, ... until the source runs dry and return every
/// order in request order.
///
/// The loop stops on an empty page or on a page shorter than `page_size`.
/// When the final page is exactly `page_size` long, one extra request is made
/// to observe the empty page that follows. Any failed page aborts the whole
/// fetch; nothing is retried.
pub async fn fetch_all_orders<S>(
    source: &S,
    page_size: u32,
) -> Result<OrderBatch, ShipStationError>
where
    S: OrderSource + ?Sized,
{
    let mut all_orders = OrderBatch::new();
    let mut page = 1u32;

    loop {
        info!(page, "Fetching page {}", page);
        let orders = source.fetch_page(page, page_size).await?;
        if orders.is_empty() {
            break;
        }

        let received = orders.len();
        all_orders.extend(orders);
        info!(page, received, "Received {} orders", received);

        if received < page_size as usize {
            break;
        }
        page += 1;
    }

    info!(total = all_orders.len(), "Total orders fetched: {}", all_orders.len());
    Ok(all_orders)
}
