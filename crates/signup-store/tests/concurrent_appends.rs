//! Integration tests for concurrent use of the file-backed repository

use signup_core::{Partner, PartnerSubmission};
use signup_store::{open, FileConfig, PartnerFilter, StorageBackend};
use tempfile::TempDir;

fn partner(n: usize) -> Partner {
    Partner::create(PartnerSubmission {
        name: format!("Dealer {}", n),
        company: format!("Garage {}", n),
        mobile_phone: "07123456789".to_string(),
        email_address: format!("dealer{}@example.com", n),
        postcode: "N6 1BA".to_string(),
        pay_later: n % 2 == 0,
        pay_now: n % 2 == 1,
    })
}

#[tokio::test]
async fn test_concurrent_appends_are_not_lost() {
    let temp_dir = TempDir::new().unwrap();
    let backend = StorageBackend::File(FileConfig {
        path: temp_dir.path().join("partners.json"),
    });
    let repository = open(&backend).await.unwrap();
    assert_eq!(repository.name(), "file");

    let mut handles = Vec::new();
    for n in 0..20 {
        let repository = repository.clone();
        handles.push(tokio::spawn(async move { repository.append(partner(n)).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let all = repository.all().await.unwrap();
    assert_eq!(all.len(), 20);

    let garage_1x = repository.query(&PartnerFilter::company("garage 1")).await.unwrap();
    // "Garage 1" and "Garage 10".."Garage 19"
    assert_eq!(garage_1x.len(), 11);
}

#[tokio::test]
async fn test_memory_backend_from_config() {
    let repository = open(&StorageBackend::Memory).await.unwrap();
    repository.append(partner(1)).await.unwrap();
    assert_eq!(repository.all().await.unwrap().len(), 1);
    assert_eq!(repository.name(), "memory");
}
