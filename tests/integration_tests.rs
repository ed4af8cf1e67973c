// Integration tests for NEMO Match

use nemo_match::config::MailgunSettings;
use nemo_match::core::{Matcher, SearchQuery};
use nemo_match::models::{
    ApplicationRecord, ApplicationStatus, Contractor, ContractorApplication, ImageUpload,
};
use nemo_match::services::{ListingsClient, ListingsError, MailgunClient, SupabaseClient};

fn create_contractor(id: &str, name: &str, contractor_type: &str, areas: &[&str]) -> Contractor {
    Contractor {
        id: id.to_string(),
        name: name.to_string(),
        contractor_type: contractor_type.to_string(),
        phone: "(573) 555-0100".to_string(),
        email: format!("info@{}.test", id),
        website: String::new(),
        location: "Northeast Missouri".to_string(),
        service_area: areas.iter().map(|a| a.to_string()).collect(),
        sub_types: vec![],
        image_url: String::new(),
    }
}

fn create_record() -> ApplicationRecord {
    ApplicationRecord {
        name: "Acme Roofing".to_string(),
        contact_name: "Jane Doe".to_string(),
        phone: "(660) 555-0123".to_string(),
        email: "jane@acmeroofing.com".to_string(),
        services: vec!["roofers".to_string()],
        service_areas: vec!["Moberly".to_string()],
    }
}

#[test]
fn test_end_to_end_search() {
    let matcher = Matcher::new();

    let contractors = vec![
        create_contractor("1", "Mark Twain Electric", "Electrician", &["Hannibal"]),
        create_contractor("2", "Salt River Electric", "Electrician", &["Hannibal", "Moberly"]),
        create_contractor("3", "River City Plumbing", "Plumber", &["Hannibal"]),
        create_contractor("4", "Kirksville Wiring Co", "Electrician", &["Kirksville"]),
        create_contractor("5", "No Area Electric", "Electrician", &[]),
    ];

    let query = SearchQuery {
        service_name: "Electricians".to_string(),
        region_name: "Hannibal".to_string(),
        name_query: None,
    };

    let result = matcher.search(&contractors, &query);

    let ids: Vec<&str> = result.contractors.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(result.total_listed, 5);
}

#[test]
fn test_search_with_name_narrowing() {
    let matcher = Matcher::new();

    let contractors = vec![
        create_contractor("1", "Mark Twain Electric", "Electrician", &["Hannibal"]),
        create_contractor("2", "Salt River Electric", "Electrician", &["Hannibal"]),
    ];

    let query = SearchQuery {
        service_name: "Electricians".to_string(),
        region_name: "Hannibal".to_string(),
        name_query: Some("twain".to_string()),
    };

    let result = matcher.search(&contractors, &query);

    assert_eq!(result.contractors.len(), 1);
    assert_eq!(result.contractors[0].id, "1");
}

#[tokio::test]
async fn test_listings_fetch_and_lookup() {
    let mut server = mockito::Server::new_async().await;

    let body = serde_json::to_string(&vec![
        create_contractor("c-1", "Mark Twain Electric", "Electrician", &["Hannibal"]),
        create_contractor("c-2", "River City Plumbing", "Plumber", &["Hannibal"]),
    ])
    .unwrap();

    let mock = server
        .mock("GET", "/contractors.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(2)
        .create_async()
        .await;

    let client = ListingsClient::new(format!("{}/contractors.json", server.url()));

    let all = client.fetch_all().await.unwrap();
    assert_eq!(all.len(), 2);

    let found = client.get("c-2").await.unwrap();
    assert_eq!(found.name, "River City Plumbing");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_listings_missing_contractor_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/contractors.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = ListingsClient::new(format!("{}/contractors.json", server.url()));

    let err = client.get("ghost").await.unwrap_err();
    assert!(matches!(err, ListingsError::NotFound));
    assert_eq!(err.to_string(), "Contractor not found.");
}

#[tokio::test]
async fn test_listings_fetch_failure_message() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/contractors.json")
        .with_status(502)
        .create_async()
        .await;

    let client = ListingsClient::new(format!("{}/contractors.json", server.url()));

    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch contractor data.");
}

fn mailgun_client(api_base: String) -> MailgunClient {
    MailgunClient::from_settings(&MailgunSettings {
        api_base,
        api_key: Some("test-key".to_string()),
        domain: Some("mg.nemohomepros.test".to_string()),
        notification_email: Some("admin@nemohomepros.test".to_string()),
    })
}

#[tokio::test]
async fn test_mailgun_send_success_returns_upstream_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/mg.nemohomepros.test/messages")
        .match_header(
            "content-type",
            mockito::Matcher::Regex("application/x-www-form-urlencoded.*".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "<msg@mg>", "message": "Queued. Thank you."}"#)
        .create_async()
        .await;

    let client = mailgun_client(server.url());

    let response = client.send_new_application(&create_record()).await.unwrap();
    assert_eq!(response["message"], "Queued. Thank you.");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_mailgun_failure_echoes_upstream_status() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/mg.nemohomepros.test/messages")
        .with_status(401)
        .with_body("Forbidden")
        .create_async()
        .await;

    let client = mailgun_client(server.url());

    let err = client.send_new_application(&create_record()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to send email via Mailgun. Status: 401"
    );
}

#[tokio::test]
async fn test_mailgun_missing_credentials_never_calls_upstream() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = MailgunClient::from_settings(&MailgunSettings {
        api_base: server.url(),
        api_key: None,
        domain: None,
        notification_email: None,
    });

    let err = client.send_new_application(&create_record()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Server configuration error: Missing Mailgun credentials."
    );

    mock.assert_async().await;
}

fn supabase_client(base_url: String) -> SupabaseClient {
    SupabaseClient::new(
        base_url,
        "service-key".to_string(),
        "contractor-images".to_string(),
    )
}

fn create_application() -> ContractorApplication {
    ContractorApplication {
        name: "Acme Roofing".to_string(),
        contact_name: "Jane Doe".to_string(),
        services: vec!["roofers".to_string()],
        phone: "(660) 555-0123".to_string(),
        email: "jane@acmeroofing.com".to_string(),
        website: None,
        service_areas: vec!["Moberly".to_string()],
        description: "Roof repair and replacement.".to_string(),
        specialties: vec!["Shingle Roofing".to_string()],
        years_experience: 12,
        completed_projects: 250,
        licensed: true,
        insured: true,
        specialized_training: vec![],
        image_urls: None,
        status: ApplicationStatus::Pending,
        nemo_certified: false,
    }
}

fn create_image(file_name: &str) -> ImageUpload {
    ImageUpload {
        file_name: file_name.to_string(),
        content_type: "image/jpeg".to_string(),
        data: "aGVsbG8=".to_string(),
    }
}

#[tokio::test]
async fn test_application_insert() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/rest/v1/contractor_applications")
        .match_header("apikey", "service-key")
        .match_header("prefer", "return=minimal")
        .with_status(201)
        .create_async()
        .await;

    let client = supabase_client(server.url());

    client.insert_application(&create_application()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_image_batch_upload_returns_public_urls() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock(
            "POST",
            mockito::Matcher::Regex(
                "^/storage/v1/object/contractor-images/contractor-images/.*".to_string(),
            ),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Key": "contractor-images/uploaded"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = supabase_client(server.url());

    let urls = client
        .upload_images(&[create_image("deck.jpg"), create_image("roof.png")])
        .await
        .unwrap();

    assert_eq!(urls.len(), 2);
    assert!(urls[0].contains("/storage/v1/object/public/contractor-images/"));
    assert!(urls[0].ends_with(".jpg"));
    assert!(urls[1].ends_with(".png"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_upload_aborts_batch() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock(
            "POST",
            mockito::Matcher::Regex("^/storage/v1/object/".to_string()),
        )
        .with_status(500)
        .create_async()
        .await;

    let client = supabase_client(server.url());

    let result = client
        .upload_images(&[create_image("deck.jpg"), create_image("roof.png")])
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_invalid_base64_image_is_rejected_locally() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = supabase_client(server.url());

    let image = ImageUpload {
        file_name: "deck.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        data: "not base64!!".to_string(),
    };

    let result = client.upload_image(&image).await;
    assert!(result.is_err());

    mock.assert_async().await;
}
