use serde::Serialize;

use crate::responses::IssueBean;
use crate::types::Document;

/// Flat display model for a single issue. The description has already been
/// flattened from the provider's rich-text document.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub status: String,
    pub issue_type: String,
    pub description: String,
}

impl From<IssueBean> for Issue {
    fn from(bean: IssueBean) -> Self {
        Self {
            key: bean.key,
            summary: bean.fields.summary,
            status: bean.fields.status.name,
            issue_type: bean.fields.issuetype.name,
            description: Document::plain_text(bean.fields.description.as_ref()),
        }
    }
}
