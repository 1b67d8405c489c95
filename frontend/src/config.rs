pub const DEFAULT_API_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api/";
pub const DEFAULT_COHORT: &str = "2302-ACC-PT-WEB-PT-C";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the roster API, with a trailing slash
    pub api_base_url: String,
    /// Cohort segment the API partitions its data by
    pub cohort: String,
    /// Reload the list after a successful create. Off by default: the
    /// form has always left the list untouched.
    pub refresh_after_create: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
            refresh_after_create: false,
        }
    }
}

impl Config {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = cohort.into();
        self
    }

    pub fn with_refresh_after_create(mut self, refresh: bool) -> Self {
        self.refresh_after_create = refresh;
        self
    }

    /// `{base}{cohort}/`
    pub fn cohort_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        format!("{}/{}/", base, urlencoding::encode(&self.cohort))
    }

    pub fn players_url(&self) -> String {
        format!("{}players/", self.cohort_url())
    }

    pub fn player_url(&self, id: i64) -> String {
        format!("{}players/{}", self.cohort_url(), id)
    }
}
