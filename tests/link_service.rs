use std::collections::HashSet;
use std::sync::Arc;

use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::MemoryLinkRepository;

fn service() -> Arc<LinkService> {
    Arc::new(LinkService::new(Arc::new(MemoryLinkRepository::new())))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_count_every_click() {
    let service = service();
    service
        .create_link(Some("https://example.com".to_string()), Some("race01".to_string()))
        .await
        .unwrap();

    let tasks: Vec<_> = (0..100)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.resolve_and_track("race01").await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), "https://example.com");
    }

    let link = service.get_link("race01").await.unwrap();
    assert_eq!(link.clicks, 100);
    assert!(link.last_clicked_at.is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_codes() {
    let service = service();

    let tasks: Vec<_> = (0..100)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .create_link(Some(format!("https://example.com/{i}")), None)
                    .await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for task in tasks {
        let link = task.await.unwrap().unwrap();
        assert!(codes.insert(link.short_code));
    }

    assert_eq!(service.list_links().await.unwrap().len(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_custom_code_has_one_winner() {
    let service = service();

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .create_link(
                        Some(format!("https://example.com/{i}")),
                        Some("winner".to_string()),
                    )
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
}
