//! Periodically refreshed list of the latest articles, for scrolling
//! headline displays.

use std::time::Duration;

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::{index::get_articles, models::Article, ClientConfig};

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(10);

/// Polls `GET /articles` in a background task and publishes each fresh
/// list. A failed refresh is logged and the previous list stays current.
///
/// The task stops when the ticker is stopped or dropped.
pub struct RecentArticlesTicker {
    receiver: watch::Receiver<Vec<Article>>,
    task: JoinHandle<()>,
}

impl RecentArticlesTicker {
    /// Must be called inside a tokio runtime. The first fetch happens
    /// immediately.
    pub fn spawn(config: ClientConfig, period: Duration) -> Self {
        let (sender, receiver) = watch::channel(Vec::new());

        let task = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                match get_articles(&config).await {
                    Ok(articles) => {
                        debug!(count = articles.len(), "recent articles refreshed");
                        if sender.send(articles).is_err() {
                            break;
                        }
                    }
                    Err(err) => warn!(error = %err, "recent articles refresh failed"),
                }
            }
        });

        Self { receiver, task }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Article>> {
        self.receiver.clone()
    }

    pub fn latest(&self) -> Vec<Article> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next successful refresh.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.receiver.changed().await
    }

    /// Aborts the polling task.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RecentArticlesTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// `DD.MM.YYYY HH:mm - heading`
pub fn format_ticker_entry(article: &Article) -> String {
    format!("{} - {}", article.time_published.format("%d.%m.%Y %H:%M"), article.heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn entry_shows_day_first_date_and_heading() {
        let article = Article {
            id: 1,
            time_published: NaiveDate::from_ymd_opt(2018, 11, 8)
                .unwrap()
                .and_hms_opt(18, 36, 0)
                .unwrap(),
            written_by: "Hans Hansen".to_string(),
            heading: "New laptop from HP".to_string(),
            text: String::new(),
            image: "hp.jpg".to_string(),
            priority: 1,
            category_id: 1,
            rating: None,
        };
        assert_eq!(format_ticker_entry(&article), "08.11.2018 18:36 - New laptop from HP");
    }
}
