#[derive(Clone)]
pub struct AppConfig {
    pub stackexchange_key: String,
    pub alchemy_key: String,
    pub stackexchange_base_url: String,
    pub alchemy_base_url: String,
    pub site: String,
    pub http_timeout_secs: u64,
    pub enrich_concurrency: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("stackexchange_key", &"[redacted]")
            .field("alchemy_key", &"[redacted]")
            .field("stackexchange_base_url", &self.stackexchange_base_url)
            .field("alchemy_base_url", &self.alchemy_base_url)
            .field("site", &self.site)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("enrich_concurrency", &self.enrich_concurrency)
            .finish()
    }
}
