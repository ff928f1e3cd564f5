use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Pull request information normalized from the forge.
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
    /// Browser link, when the forge reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl PullRequest {
    /// True when the pull request carries a label with exactly this name.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A published release; only the tag is of interest.
pub struct Release {
    pub tag_name: String,
}

#[derive(Debug, Clone)]
/// Request to create a new pull request.
pub struct CreatePrRequest {
    pub head_branch: String,
    pub base_branch: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone)]
/// Request to add labels to a pull request.
pub struct PrLabelsRequest {
    pub pr_number: u64,
    pub labels: Vec<String>,
}
