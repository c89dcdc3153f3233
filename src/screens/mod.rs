pub mod insights;
pub mod search;

#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Page {
    Search,
    Insights,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Search => "Search",
            Page::Insights => "Insights",
        }
    }
}
