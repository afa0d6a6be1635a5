//! LinkService 集成测试
//!
//! 覆盖缩短、访问计数、持久化与存储失败

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use minilinker::config::LinksConfig;
use minilinker::errors::{MinilinkerError, Result};
use minilinker::services::{CodeGenerator, LinkService};
use minilinker::storage::{KvStore, LinkEntry, LinkRepository, MemoryKvStore};

const KEY: &str = "shortUrls";

/// Produces "c1", "c2", ... so tests can predict short links.
fn sequential_generator() -> CodeGenerator {
    let counter = Arc::new(AtomicUsize::new(0));
    Arc::new(move |_len: usize| format!("c{}", counter.fetch_add(1, Ordering::SeqCst) + 1))
}

async fn service_with(store: Arc<dyn KvStore>) -> LinkService {
    let repo = LinkRepository::new(store, KEY);
    LinkService::load(repo, LinksConfig::default())
        .await
        .unwrap()
        .with_generator(sequential_generator())
}

/// Memory store whose writes can be switched off.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryKvStore,
    fail_writes: AtomicBool,
}

#[async_trait]
impl KvStore for FlakyStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MinilinkerError::file_operation("disk full"));
        }
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.inner.remove_item(key).await
    }

    fn backend_name(&self) -> &'static str {
        "flaky"
    }
}

#[cfg(test)]
mod shorten_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let mut service = service_with(Arc::new(MemoryKvStore::new())).await;
        let err = service.shorten("").await.unwrap_err();
        assert_eq!(err, MinilinkerError::validation("Please enter a URL"));
        assert!(service.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_input_rejected() {
        let store = Arc::new(MemoryKvStore::new());
        let mut service = service_with(store.clone()).await;

        let err = service.shorten("not a url").await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.message().starts_with("Invalid URL!"));
        assert!(service.is_empty());
        // 校验失败不写存储
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_entries_are_prepended() {
        let mut service = service_with(Arc::new(MemoryKvStore::new())).await;

        let first = service.shorten("https://first.example.com").await.unwrap();
        let second = service.shorten("https://second.example.com").await.unwrap();

        assert_eq!(first, LinkEntry::new("https://first.example.com", "https://c1"));
        assert_eq!(second.short, "https://c2");
        assert_eq!(service.len(), 2);
        assert_eq!(service.links()[0], second);
        assert_eq!(service.links()[1], first);
    }

    #[tokio::test]
    async fn test_duplicates_allowed() {
        let mut service = service_with(Arc::new(MemoryKvStore::new())).await;
        service.shorten("https://example.com").await.unwrap();
        service.shorten("https://example.com").await.unwrap();
        assert_eq!(service.len(), 2);
    }

    #[tokio::test]
    async fn test_default_generator_shape() {
        let repo = LinkRepository::new(Arc::new(MemoryKvStore::new()), KEY);
        let mut service = LinkService::load(repo, LinksConfig::default()).await.unwrap();

        let entry = service.shorten("https://example.com").await.unwrap();
        let code = entry.short.strip_prefix("https://").unwrap();
        assert!(code.len() <= 6);
        assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[tokio::test]
    async fn test_custom_prefix_and_length() {
        let repo = LinkRepository::new(Arc::new(MemoryKvStore::new()), KEY);
        let config = LinksConfig {
            code_length: 3,
            short_prefix: "https://s.io/".to_string(),
        };
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_gen = seen.clone();
        let mut service = LinkService::load(repo, config)
            .await
            .unwrap()
            .with_generator(Arc::new(move |len: usize| {
                seen_in_gen.store(len, Ordering::SeqCst);
                "abc".to_string()
            }));

        let entry = service.shorten("https://example.com").await.unwrap();
        assert_eq!(entry.short, "https://s.io/abc");
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }
}

#[cfg(test)]
mod visit_tests {
    use super::*;

    #[tokio::test]
    async fn test_visit_increments_only_target() {
        let mut service = service_with(Arc::new(MemoryKvStore::new())).await;
        service.shorten("https://a.example.com").await.unwrap();
        service.shorten("https://b.example.com").await.unwrap();
        service.shorten("https://c.example.com").await.unwrap();

        let visited = service.visit(1).await.unwrap();
        assert_eq!(visited.original, "https://b.example.com");
        assert_eq!(visited.clicks, 1);

        service.visit(1).await.unwrap();
        let clicks: Vec<u64> = service.links().iter().map(|l| l.clicks).collect();
        assert_eq!(clicks, vec![0, 2, 0]);
        assert_eq!(service.total_clicks(), 2);
    }

    #[tokio::test]
    async fn test_visit_out_of_range() {
        let mut service = service_with(Arc::new(MemoryKvStore::new())).await;
        service.shorten("https://a.example.com").await.unwrap();

        let err = service.visit(5).await.unwrap_err();
        assert_eq!(
            err,
            MinilinkerError::not_found("No link at position 6 (1 links stored)")
        );
    }
}

#[cfg(test)]
mod persistence_tests {
    use super::*;

    #[tokio::test]
    async fn test_state_survives_reload() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());
        {
            let mut service = service_with(store.clone()).await;
            service.shorten("https://a.example.com").await.unwrap();
            service.shorten("https://b.example.com").await.unwrap();
            service.visit(0).await.unwrap();
        }

        let reloaded = service_with(store).await;
        assert_eq!(
            reloaded.links(),
            &[
                LinkEntry {
                    original: "https://b.example.com".to_string(),
                    short: "https://c2".to_string(),
                    clicks: 1,
                },
                LinkEntry::new("https://a.example.com", "https://c1"),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_save_keeps_memory_state() {
        let store = Arc::new(FlakyStore::default());
        let mut service = service_with(store.clone()).await;
        service.shorten("https://a.example.com").await.unwrap();

        store.fail_writes.store(true, Ordering::SeqCst);
        let err = service.shorten("https://b.example.com").await.unwrap_err();
        assert!(matches!(err, MinilinkerError::FileOperation(_)));
        assert_eq!(service.len(), 2);

        assert!(service.visit(0).await.is_err());
        assert_eq!(service.links()[0].clicks, 1);

        // 存储恢复后下一次写入带上全部状态
        store.fail_writes.store(false, Ordering::SeqCst);
        service.persist().await.unwrap();
        let reloaded = service_with(store).await;
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.links()[0].clicks, 1);
    }
}
