mod common;

fn ids(json: &serde_json::Value) -> Vec<u64> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_search_without_criteria_returns_everything() {
    let server = common::create_test_server();

    let response = server.get("/api/properties/search").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 10);
    assert!(json["criteria"]["location"].is_null());
}

#[tokio::test]
async fn test_search_by_location() {
    let server = common::create_test_server();

    let response = server
        .get("/api/properties/search")
        .add_query_param("location", "CHENNAI")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 6);
    assert_eq!(ids(&json), vec![1, 2, 4, 6, 8, 10]);
    assert_eq!(json["criteria"]["location"], "chennai");
}

#[tokio::test]
async fn test_search_by_type_and_max_price() {
    let server = common::create_test_server();

    let response = server
        .get("/api/properties/search?type=villa&max_price=70000")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(ids(&json), vec![7]);
    assert_eq!(json["items"][0]["price"], 65000);
}

#[tokio::test]
async fn test_search_unparseable_max_price_is_ignored() {
    let server = common::create_test_server();

    let response = server
        .get("/api/properties/search?location=coimbatore&max_price=abc")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(ids(&json), vec![3, 5, 7, 9]);
    assert!(json["criteria"]["max_price"].is_null());
}

#[tokio::test]
async fn test_search_unknown_city_returns_nothing() {
    let server = common::create_test_server();

    let response = server
        .get("/api/properties/search?location=unknowncity")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_location_with_leading_space_matches_nothing() {
    let server = common::create_test_server();

    let response = server
        .get("/api/properties/search")
        .add_query_param("location", " chennai")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 0);
    assert_eq!(json["criteria"]["location"], " chennai");
}
