mod common;

use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn edit_search() -> Result<(), Box<dyn std::error::Error>> {
    let server = common::spawn_server().await;

    // Add a contact
    server
        .client
        .post(server.url("/contacts"))
        .json(&json!({"name": "A", "phone": "1", "email": "a@x"}))
        .send()
        .await?
        .error_for_status()?;

    // Search with different casing
    let res = server
        .client
        .get(server.url("/contacts/search/a"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({"name": "A", "phone": "1", "email": "a@x"})
    );

    // Edit the contact (change phone only)
    let res = server
        .client
        .put(server.url("/contacts/A"))
        .json(&json!({"phone": "2"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({"message": "Contact 'A' updated successfully."})
    );

    let res = server
        .client
        .get(server.url("/contacts/search/A"))
        .send()
        .await?;
    assert_eq!(
        res.json::<Value>().await?,
        json!({"name": "A", "phone": "2", "email": "a@x"})
    );

    // Rename, then the old name is gone
    server
        .client
        .put(server.url("/contacts/a"))
        .json(&json!({"name": "Alice", "email": "alice@example.com"}))
        .send()
        .await?
        .error_for_status()?;

    let res = server
        .client
        .get(server.url("/contacts/search/A"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<Value>().await?,
        json!({"message": "Contact 'A' not found."})
    );

    let res = server.client.get(server.url("/contacts")).send().await?;
    assert_eq!(
        res.json::<Value>().await?,
        json!([{"name": "Alice", "phone": "2", "email": "alice@example.com"}])
    );

    Ok(())
}

#[tokio::test]
async fn editing_missing_contact() -> Result<(), Box<dyn std::error::Error>> {
    let server = common::spawn_server().await;

    let res = server
        .client
        .put(server.url("/contacts/Nobody"))
        .json(&json!({"phone": "2"}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<Value>().await?,
        json!({"message": "Contact 'Nobody' not found."})
    );
    assert!(!server.store_path.exists());
    Ok(())
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() -> Result<(), Box<dyn std::error::Error>> {
    let server = common::spawn_server().await;

    let res = server
        .client
        .get(server.url("/contacts"))
        .header("origin", "http://localhost:3000")
        .send()
        .await?;

    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    Ok(())
}
