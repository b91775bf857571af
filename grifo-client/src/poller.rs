//! Recent-sales polling
//!
//! Fixed-interval refresh of the dashboard's recent-sales list. A tick that
//! arrives while a previous fetch is still outstanding is skipped, not
//! queued, so slow responses never pile up overlapping requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::HttpClient;
use crate::services::SaleService;
use shared::models::sale::Sale;

/// Default number of sales kept in the dashboard list
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// Handle to a running recent-sales poller
pub struct PollerHandle {
    receiver: watch::Receiver<Vec<Sale>>,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Subscribe to list updates
    pub fn subscribe(&self) -> watch::Receiver<Vec<Sale>> {
        self.receiver.clone()
    }

    /// Stop the poller and wait for the loop to exit
    pub async fn stop(self) {
        self.shutdown.cancel();
        let _ = self.task.await;
    }
}

/// Recent-sales poller
pub struct RecentSalesPoller {
    http: HttpClient,
    interval: Duration,
    limit: u32,
}

impl RecentSalesPoller {
    pub fn new(http: HttpClient, interval: Duration) -> Self {
        Self {
            http,
            interval,
            limit: DEFAULT_RECENT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Start polling. Fetch errors are logged and the loop keeps running;
    /// only cancellation stops it.
    pub fn spawn(self) -> PollerHandle {
        let (sender, receiver) = watch::channel(Vec::new());
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let task = tokio::spawn(async move {
            let in_flight = Arc::new(AtomicBool::new(false));
            let mut ticker = tokio::time::interval(self.interval);

            tracing::debug!(interval = ?self.interval, limit = self.limit, "Recent-sales poller started");

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::debug!("Recent-sales poller stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        // In-flight guard: skip the tick instead of stacking
                        // a second request behind a slow one.
                        if in_flight
                            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                            .is_err()
                        {
                            tracing::debug!("Previous refresh still in flight, skipping tick");
                            continue;
                        }

                        let http = self.http.clone();
                        let limit = self.limit;
                        let sender = sender.clone();
                        let in_flight = Arc::clone(&in_flight);
                        tokio::spawn(async move {
                            match SaleService::new(&http).recent(limit).await {
                                Ok(sales) => {
                                    let _ = sender.send(sales);
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "Recent-sales refresh failed");
                                }
                            }
                            in_flight.store(false, Ordering::Release);
                        });
                    }
                }
            }
        });

        PollerHandle {
            receiver,
            shutdown,
            task,
        }
    }
}
