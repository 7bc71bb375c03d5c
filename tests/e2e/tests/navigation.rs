use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("TranslateAI") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
async fn test_pages_render_headings() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page("/about")).expect("Failed to navigate");
    let heading = page.find_element("h1").expect("About heading");
    assert!(heading.contains("Language Barriers"), "got {heading:?}");

    page.goto(&server.page("/contact")).expect("Failed to navigate");
    assert!(page.find_element("input[name='email']").is_ok());
    assert!(page.find_element("textarea[name='message']").is_ok());
    assert!(page.find_element("button[type='submit']").is_ok());

    page.goto(&server.page("/profile")).expect("Failed to navigate");
    let name = page.find_element("h2").expect("Profile name");
    assert_eq!(name.trim(), "Alex Johnson");
}

#[tokio::test]
async fn test_unknown_route_shows_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page("/no/such/page"))
        .expect("Failed to navigate");
    let text = page.find_element(".not_found").expect("not found view");
    assert!(text.contains("404"));
    assert!(text.contains("/no/such/page"));
}

#[tokio::test]
async fn test_navbar_links_to_about() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.click(".nav_links a[href='/about']")
        .expect("About link");
    page.find_element(".badge_row").expect("About page content");
    assert!(page.url().expect("url").ends_with("/about"));
}
