mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_landing_page() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Find Your Dream Property"));
    assert!(html.contains("Featured Properties"));
    assert!(html.contains("Pondicherry"));
    assert!(html.contains("Goa"));
    assert!(html.contains("href=\"/rental-ai\""));
}

#[tokio::test]
async fn test_property_page() {
    let server = common::create_test_server();

    let response = server.get("/property/1").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Modern Apartment with City View"));
    assert!(html.contains("₹25,000"));
    assert!(html.contains("John Doe"));
    assert!(html.contains("action=\"/property/1/contact\""));
    assert!(html.contains("href=\"/property/1/document\""));
    assert!(!html.contains("Payment Options"));
}

#[tokio::test]
async fn test_property_page_unknown_id() {
    let server = common::create_test_server();

    let response = server.get("/property/999").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Property not found"));
}

#[tokio::test]
async fn test_property_page_non_numeric_id() {
    let server = common::create_test_server();

    let response = server.get("/property/abc").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Property not found"));
}

#[tokio::test]
async fn test_contact_form_reveals_payment_options() {
    let server = common::create_test_server();

    let response = server
        .post("/property/2/contact")
        .form(&common::valid_contact())
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Payment Options"));
    assert!(html.contains("Credit Card"));
    assert!(html.contains("UPI"));
    assert!(html.contains("Net Banking"));
}

#[tokio::test]
async fn test_contact_form_validation_errors() {
    let server = common::create_test_server();

    let form = vec![
        ("name", "Asha Raman"),
        ("contact", "12"),
        ("email", "asha"),
        ("address", "12 Beach Road"),
    ];

    let response = server.post("/property/2/contact").form(&form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let html = response.text();
    assert!(html.contains("Enter a valid contact number"));
    assert!(html.contains("Enter a valid email address"));
    assert!(html.contains("value=\"Asha Raman\""));
    assert!(!html.contains("Payment Options"));
}

#[tokio::test]
async fn test_contact_form_unknown_property() {
    let server = common::create_test_server();

    let response = server
        .post("/property/999/contact")
        .form(&common::valid_contact())
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_document_download() {
    let server = common::create_test_server();

    let response = server.get("/property/4/document").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/pdf");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"property-details.pdf\""
    );

    let bytes = response.as_bytes();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(String::from_utf8_lossy(bytes).contains("Luxury Villa"));
}

#[tokio::test]
async fn test_document_download_unknown_property() {
    let server = common::create_test_server();

    let response = server.get("/property/999/document").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_rental_search_initial_state() {
    let server = common::create_test_server();

    let response = server.get("/rental-ai").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("AI-Powered Rental Search"));
    assert!(!html.contains("Properties Found"));
    assert!(!html.contains("No properties found"));
}

#[tokio::test]
async fn test_rental_search_by_location() {
    let server = common::create_test_server();

    let response = server.get("/rental-ai?location=chennai").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("6 Properties Found"));
    assert!(html.contains("Spacious Family Home"));
    assert!(!html.contains("Cozy Studio Apartment"));
    assert!(html.contains("value=\"chennai\""));
}

#[tokio::test]
async fn test_rental_search_type_is_preselected() {
    let server = common::create_test_server();

    let response = server
        .get("/rental-ai?location=&type=villa&max_price=70000")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("1 Properties Found"));
    assert!(html.contains("Modern Villa"));
    assert!(html.contains("value=\"villa\" selected"));
}

#[tokio::test]
async fn test_rental_search_no_results() {
    let server = common::create_test_server();

    let response = server.get("/rental-ai?location=unknowncity").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("0 Properties Found"));
    assert!(html.contains("No properties found matching your criteria. Try adjusting your search."));
}
