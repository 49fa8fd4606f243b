use reqwest::{Client, Response};

/// Mock browser client for integration testing
///
/// Simulates a web browser by maintaining a cookie jar across requests and
/// providing helpers for the form-based auth endpoints. With `use_cookies`
/// false it behaves like a cookie-less API client instead.
pub struct MockBrowser {
    client: Client,
    base_url: String,
}

impl MockBrowser {
    /// Create a new mock browser instance
    pub fn new(base_url: &str, use_cookies: bool) -> Self {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .cookie_store(use_cookies)
            .build()
            .unwrap();

        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Make a GET request to the specified path
    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url).send().await
    }

    /// Make a POST request with form data
    pub async fn post_form(
        &self,
        path: &str,
        form_data: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.client.post(&url).form(form_data).send().await
    }

    /// Make a POST request with form data and custom headers
    pub async fn post_form_with_headers(
        &self,
        path: &str,
        form_data: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).form(form_data);

        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        request.send().await
    }
}
