mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn add_event_returns_person_with_events() -> Result<()> {
    let server = common::spawn_server().await?;
    let ana = server.create_person("Ana").await?;

    server.create_event(ana, "Correr").await?;
    let res = server
        .client
        .post(server.url("/evento"))
        .form(&[("id_pessoa", ana.to_string()), ("nome", "Ler".to_string())])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], ana);
    assert_eq!(body["total_eventos"], 2);
    assert_eq!(body["eventos"][1]["nome"], "Ler");
    Ok(())
}

#[tokio::test]
async fn add_event_to_unknown_person_is_not_found() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/evento"))
        .form(&[("id_pessoa", "41"), ("nome", "Correr")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.json::<Value>().await?["message"].is_string());
    Ok(())
}

#[tokio::test]
async fn delete_event() -> Result<()> {
    let server = common::spawn_server().await?;
    let ana = server.create_person("Ana").await?;
    let event = server.create_event(ana, "Correr").await?;

    let res = server.client.delete(server.url("/evento")).query(&[("id", event)]).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["id"], event);

    let res = server.client.delete(server.url("/evento")).query(&[("id", event)]).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let person = server.client.get(server.url("/pessoa")).query(&[("id", ana)]).send().await?.json::<Value>().await?;
    assert_eq!(person["total_eventos"], 0);
    Ok(())
}
