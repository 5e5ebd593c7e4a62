/// 화면 모델
/// 템플릿 렌더링은 외부에서 담당하고, 여기서는 각 화면에 넘길 데이터만 만든다.
// region:    --- Imports
use crate::tender::lifecycle::{Lifecycle, TenderStanding};
use crate::tender::model::Tender;
use serde::Serialize;

// endregion: --- Imports

// region:    --- Views
#[derive(Debug, Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: &'static str,
}

/// 메인 화면
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub links: Vec<Link>,
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            title: "Home Page",
            links: vec![
                Link {
                    rel: "current_tenders",
                    href: "/tenders",
                },
                Link {
                    rel: "past_tenders",
                    href: "/tenders/past",
                },
                Link {
                    rel: "add_tender",
                    href: "/tender/add",
                },
            ],
        }
    }
}

/// 공고 목록 화면
#[derive(Debug, Serialize)]
pub struct TenderListView {
    pub title: &'static str,
    pub tenders: Vec<Tender>,
}

#[derive(Debug, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub input: &'static str,
    pub required: bool,
}

/// 공고 등록 폼 화면
#[derive(Debug, Serialize)]
pub struct TenderFormView {
    pub title: &'static str,
    pub action: &'static str,
    pub fields: Vec<FormField>,
}

impl Default for TenderFormView {
    fn default() -> Self {
        let field = |name: &'static str, input: &'static str, required: bool| FormField {
            name,
            input,
            required,
        };
        Self {
            title: "Add New Tender",
            action: "/tender/add",
            fields: vec![
                field("name", "text", true),
                field("description", "textarea", false),
                field("institution", "number", true),
                field("start_datetime", "datetime-local", true),
                field("end_datetime", "datetime-local", true),
                field("maximum_budget", "number", true),
            ],
        }
    }
}

/// 공고 상세 화면
#[derive(Debug, Serialize)]
pub struct TenderDetailView {
    pub title: String,
    pub tender: Tender,
    pub lifecycle: Lifecycle,
    pub summary: String,
    pub standing: TenderStanding,
}

impl TenderDetailView {
    pub fn new(tender: Tender, standing: TenderStanding) -> Self {
        Self {
            title: tender.name.clone(),
            lifecycle: standing.lifecycle(),
            summary: standing.summary(),
            tender,
            standing,
        }
    }
}

// endregion: --- Views
