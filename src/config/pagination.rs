use std::env;

/// Defaults applied when a listing request omits paging parameters.
///
/// These are deployment configuration, not engine constants; the
/// pagination engine itself only ever sees fully resolved values.
#[derive(Clone, Debug)]
pub struct PageDefaults {
    pub page_no: i64,
    pub page_size: i64,
    pub sort_by: String,
    pub sort_dir: String,
}

impl PageDefaults {
    pub fn from_env() -> Self {
        Self {
            page_no: env::var("DEFAULT_PAGE_NO")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            sort_by: env::var("DEFAULT_SORT_BY").unwrap_or_else(|_| "id".to_string()),
            sort_dir: env::var("DEFAULT_SORT_DIR").unwrap_or_else(|_| "asc".to_string()),
        }
    }
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            page_no: 0,
            page_size: 10,
            sort_by: "id".to_string(),
            sort_dir: "asc".to_string(),
        }
    }
}
