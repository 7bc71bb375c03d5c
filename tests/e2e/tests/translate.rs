use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_translate_button_produces_stub_result() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");

    assert!(
        page.is_disabled("#translate_btn").expect("translate button"),
        "Translate should start disabled"
    );
    let placeholder = page.find_element("#translated_text").expect("output");
    assert!(placeholder.contains("Translation will appear here..."));

    page.type_text("#source_text", "Hello").expect("type source");
    page.click("#translate_btn").expect("click translate");

    let result = page
        .find_element("#translated_text .result")
        .expect("translation result");
    assert_eq!(result.trim(), "[Translated from en to es] Hello");
}

#[tokio::test]
async fn test_swap_exchanges_languages() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.click(".swap_btn").expect("swap");

    let source = page
        .evaluate("document.querySelector('#source_lang').value")
        .expect("source lang");
    let target = page
        .evaluate("document.querySelector('#target_lang').value")
        .expect("target lang");
    assert_eq!(source, "es");
    assert_eq!(target, "en");
}
