mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn create_person_then_duplicate_conflicts() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.post(server.url("/pessoa")).form(&[("nome", "Ana")]).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["nome"], "Ana");
    assert_eq!(body["total_eventos"], 0);
    let id = body["id"].as_i64().expect("id");

    let res = server.client.post(server.url("/pessoa")).form(&[("nome", "Ana")]).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert!(body["message"].is_string(), "error body: {}", body);

    let res = server.client.get(server.url("/pessoa")).query(&[("id", id)]).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["nome"], "Ana");
    Ok(())
}

#[tokio::test]
async fn list_people_starts_empty() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/pessoas")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, serde_json::json!({ "pessoas": [] }));

    server.create_person("Ana").await?;
    server.create_person("Bia").await?;
    let body = server.client.get(server.url("/pessoas")).send().await?.json::<Value>().await?;
    assert_eq!(body["pessoas"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn missing_person_is_not_found() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/pessoa")).query(&[("id", 99)]).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = server.client.delete(server.url("/pessoa")).query(&[("id", 99)]).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_person_removes_everything_it_owns() -> Result<()> {
    let server = common::spawn_server().await?;
    let ana = server.create_person("Ana").await?;
    let event = server.create_event(ana, "Correr").await?;

    let res = server
        .client
        .post(server.url("/rotinapadrao"))
        .form(&[
            ("id_pessoa", ana.to_string()),
            ("id_evento", event.to_string()),
            ("diassemana", "seg,qua".to_string()),
            ("hora", "06:30".to_string()),
            ("data_atual", "2024-06-10".to_string()),
        ])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = server.client.delete(server.url("/pessoa")).query(&[("id", ana)]).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], ana);
    assert!(body["message"].is_string());

    let templates = server
        .client
        .get(server.url("/rotinaspadrao"))
        .query(&[("id", ana)])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(templates["rotinaspadrao"].as_array().map(Vec::len), Some(0));

    let routines = server
        .client
        .post(server.url("/rotinasdia-data"))
        .form(&[("id_pessoa", ana.to_string()), ("data_execucao", "2000-01-01".to_string())])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(routines["rotinasdia"].as_array().map(Vec::len), Some(0));

    let res = server.client.delete(server.url("/evento")).query(&[("id", event)]).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
