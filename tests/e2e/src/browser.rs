use anyhow::{anyhow, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|err| anyhow!("launch options: {err}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        tab.set_default_timeout(Duration::from_secs(30));
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Evaluates `expression` in the page and returns its JSON value.
    pub fn evaluate(&self, expression: &str) -> Result<serde_json::Value> {
        let object = self.tab.evaluate(expression, false)?;
        Ok(object.value.unwrap_or(serde_json::Value::Null))
    }

    pub fn is_disabled(&self, selector: &str) -> Result<bool> {
        self.tab.wait_for_element(selector)?;
        let value = self.evaluate(&format!(
            "document.querySelector({}).disabled",
            serde_json::to_string(selector)?
        ))?;
        Ok(value.as_bool().unwrap_or(false))
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
