//! Live tests against the public OpenAlex API.
//!
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use author_profile::config::Config;
use author_profile::service::ProfileService;

fn create_service() -> ProfileService {
    ProfileService::from_config(&Config::from_env().expect("valid environment")).expect("Failed to create client")
}

#[tokio::test]
async fn test_live_search_then_rank() {
    let service = create_service();

    let search = service.search_authors("Geoffrey Hinton", 3).await.unwrap();
    assert!(!search.results.is_empty());
    println!("Candidates: {:#?}", search.results);

    let id = search.results[0].id.clone().expect("candidate has an id");
    let report = service.ranking(&id).await.unwrap();

    assert!(report.count_works_total > 0);
    assert!(report.paper_ranking.items.len() <= 30);
    assert!(report.coauthor_ranking.items.iter().all(|c| c.author_id != report.author_id));
    println!(
        "{} works, {} with year, top paper: {:?}",
        report.count_works_total,
        report.count_works_with_year,
        report.paper_ranking.items.first().and_then(|p| p.work.title.clone())
    );
}
