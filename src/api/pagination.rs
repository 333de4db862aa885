use serde::Deserialize;

/// First page number of every listing.
pub const FIRST_PAGE: u32 = 1;

/// One page of descriptors plus the cursor of the page after it.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `None` when the provider reports this as the last page.
    pub next_page: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_page: Option<u32>) -> Self {
        Self { items, next_page }
    }

    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

/// `links` block of a listing response.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct Links {
    #[serde(default)]
    pub pages: Option<PageLinks>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

impl Links {
    /// Page number carried by the `next` link, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        let next = self.pages.as_ref()?.next.as_deref()?;
        page_from_url(next)
    }
}

fn page_from_url(raw: &str) -> Option<u32> {
    let url = reqwest::Url::parse(raw).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse::<u32>().ok())
}
