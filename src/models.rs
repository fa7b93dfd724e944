use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Marketing,
    Branding,
    Content,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Marketing, Category::Branding, Category::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Marketing => "marketing",
            Category::Branding => "branding",
            Category::Content => "content",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub kit_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    pub id: Category,
    pub label: String,
    pub sublabel: String,
    pub color: String,
    pub bg_color: String,
}
